//! Example and category registry.
//!
//! The built-in table is keyed by [`BuiltinExample`] and [`BuiltinCategory`],
//! so a category that names a non-existent example does not compile. Tests and
//! alternative repositories can build their own [`Registry`] from descriptors.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::utils::suggest;

/// One demonstration contract plus its test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Repository-relative contract source.
    pub contract: PathBuf,
    /// Repository-relative test source.
    pub test: PathBuf,
}

impl ExampleDescriptor {
    pub fn new(
        id: impl Into<String>,
        contract: impl Into<PathBuf>,
        test: impl Into<PathBuf>,
        description: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            title: heck::ToTitleCase::to_title_case(id.as_str()),
            id,
            description: description.into(),
            category: String::new(),
            contract: contract.into(),
            test: test.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Contract name as deployed: the contract file stem.
    pub fn contract_name(&self) -> String {
        self.contract
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.id.clone())
    }
}

/// A named, ordered bundle of examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}

impl CategoryDescriptor {
    pub fn new<I, S>(id: impl Into<String>, description: impl Into<String>, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into();
        Self {
            title: heck::ToTitleCase::to_title_case(id.as_str()),
            id,
            description: description.into(),
            examples: examples.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    examples: Vec<ExampleDescriptor>,
    categories: Vec<CategoryDescriptor>,
}

impl Registry {
    /// Build a registry, rejecting duplicate ids.
    ///
    /// Category members are not checked here: an unresolvable member is a
    /// soft skip at generation time.
    pub fn new(
        examples: Vec<ExampleDescriptor>,
        categories: Vec<CategoryDescriptor>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for example in &examples {
            if !seen.insert(example.id.as_str()) {
                return Err(Error::config_id_collision(&example.id, "example"));
            }
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(Error::config_id_collision(&category.id, "category"));
            }
        }

        Ok(Self {
            examples,
            categories,
        })
    }

    /// The compiled-in registry.
    pub fn builtin() -> Self {
        Self {
            examples: BuiltinExample::ALL.iter().map(|e| e.descriptor()).collect(),
            categories: BuiltinCategory::ALL.iter().map(|c| c.descriptor()).collect(),
        }
    }

    /// Examples in registration order.
    pub fn examples(&self) -> &[ExampleDescriptor] {
        &self.examples
    }

    /// Categories in registration order.
    pub fn categories(&self) -> &[CategoryDescriptor] {
        &self.categories
    }

    pub fn example_ids(&self) -> Vec<String> {
        self.examples.iter().map(|e| e.id.clone()).collect()
    }

    pub fn category_ids(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.id.clone()).collect()
    }

    pub fn find_example(&self, id: &str) -> Option<&ExampleDescriptor> {
        self.examples.iter().find(|e| e.id == id)
    }

    pub fn find_category(&self, id: &str) -> Option<&CategoryDescriptor> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn resolve_example(&self, id: &str) -> Result<&ExampleDescriptor> {
        self.find_example(id).ok_or_else(|| {
            let err = Error::example_not_found(id, self.example_ids());
            match suggest::did_you_mean(id, self.examples.iter().map(|e| e.id.as_str())) {
                Some(hint) => err.with_hint(hint),
                None => err,
            }
        })
    }

    pub fn resolve_category(&self, id: &str) -> Result<&CategoryDescriptor> {
        self.find_category(id).ok_or_else(|| {
            let err = Error::category_not_found(id, self.category_ids());
            match suggest::did_you_mean(id, self.categories.iter().map(|c| c.id.as_str())) {
                Some(hint) => err.with_hint(hint),
                None => err,
            }
        })
    }
}

// ============================================================================
// Built-in table
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinExample {
    FheCounter,
    EncryptSingleValue,
    EncryptMultipleValues,
    UserDecryptSingleValue,
    UserDecryptMultipleValues,
    PublicDecryptSingleValue,
    PublicDecryptMultipleValues,
    FheAdd,
    FheIfThenElse,
    AccessControl,
    MissingAllowThis,
    InputProof,
    EncryptedSum,
    BlindAuction,
    ConfidentialToken,
}

struct BuiltinEntry {
    id: &'static str,
    title: &'static str,
    category: &'static str,
    contract: &'static str,
    test: &'static str,
    description: &'static str,
}

impl BuiltinExample {
    pub const ALL: &'static [BuiltinExample] = &[
        BuiltinExample::FheCounter,
        BuiltinExample::EncryptSingleValue,
        BuiltinExample::EncryptMultipleValues,
        BuiltinExample::UserDecryptSingleValue,
        BuiltinExample::UserDecryptMultipleValues,
        BuiltinExample::PublicDecryptSingleValue,
        BuiltinExample::PublicDecryptMultipleValues,
        BuiltinExample::FheAdd,
        BuiltinExample::FheIfThenElse,
        BuiltinExample::AccessControl,
        BuiltinExample::MissingAllowThis,
        BuiltinExample::InputProof,
        BuiltinExample::EncryptedSum,
        BuiltinExample::BlindAuction,
        BuiltinExample::ConfidentialToken,
    ];

    pub fn id(self) -> &'static str {
        self.entry().id
    }

    fn entry(self) -> BuiltinEntry {
        match self {
            BuiltinExample::FheCounter => BuiltinEntry {
                id: "fhe-counter",
                title: "FHE Counter",
                category: "Basic",
                contract: "contracts/basic/FHECounter.sol",
                test: "test/basic/FHECounter.ts",
                description: "A confidential counter that increments and decrements an encrypted euint32 using encrypted inputs.",
            },
            BuiltinExample::EncryptSingleValue => BuiltinEntry {
                id: "encrypt-single-value",
                title: "Encrypt Single Value",
                category: "Encryption",
                contract: "contracts/basic/encrypt/EncryptSingleValue.sol",
                test: "test/basic/encrypt/EncryptSingleValue.ts",
                description: "Submits one encrypted value from the client and stores it as an encrypted state variable.",
            },
            BuiltinExample::EncryptMultipleValues => BuiltinEntry {
                id: "encrypt-multiple-values",
                title: "Encrypt Multiple Values",
                category: "Encryption",
                contract: "contracts/basic/encrypt/EncryptMultipleValues.sol",
                test: "test/basic/encrypt/EncryptMultipleValues.ts",
                description: "Packs several encrypted values of different types behind a single input proof.",
            },
            BuiltinExample::UserDecryptSingleValue => BuiltinEntry {
                id: "user-decrypt-single-value",
                title: "User Decrypt Single Value",
                category: "Decryption",
                contract: "contracts/basic/decrypt/UserDecryptSingleValue.sol",
                test: "test/basic/decrypt/UserDecryptSingleValue.ts",
                description: "Grants a user permission to decrypt one encrypted value off-chain.",
            },
            BuiltinExample::UserDecryptMultipleValues => BuiltinEntry {
                id: "user-decrypt-multiple-values",
                title: "User Decrypt Multiple Values",
                category: "Decryption",
                contract: "contracts/basic/decrypt/UserDecryptMultipleValues.sol",
                test: "test/basic/decrypt/UserDecryptMultipleValues.ts",
                description: "Grants a user permission to decrypt several encrypted values in one request.",
            },
            BuiltinExample::PublicDecryptSingleValue => BuiltinEntry {
                id: "public-decrypt-single-value",
                title: "Public Decrypt Single Value",
                category: "Decryption",
                contract: "contracts/basic/decrypt/PublicDecryptSingleValue.sol",
                test: "test/basic/decrypt/PublicDecryptSingleValue.ts",
                description: "Marks an encrypted value as publicly decryptable and verifies the revealed clear value.",
            },
            BuiltinExample::PublicDecryptMultipleValues => BuiltinEntry {
                id: "public-decrypt-multiple-values",
                title: "Public Decrypt Multiple Values",
                category: "Decryption",
                contract: "contracts/basic/decrypt/PublicDecryptMultipleValues.sol",
                test: "test/basic/decrypt/PublicDecryptMultipleValues.ts",
                description: "Publicly decrypts several encrypted values and checks the decryption proof on-chain.",
            },
            BuiltinExample::FheAdd => BuiltinEntry {
                id: "fhe-add",
                title: "FHE Add",
                category: "Operations",
                contract: "contracts/basic/fhe-operations/FHEAdd.sol",
                test: "test/basic/fhe-operations/FHEAdd.ts",
                description: "Adds two encrypted integers homomorphically and exposes the encrypted result.",
            },
            BuiltinExample::FheIfThenElse => BuiltinEntry {
                id: "fhe-if-then-else",
                title: "FHE If-Then-Else",
                category: "Operations",
                contract: "contracts/basic/fhe-operations/FHEIfThenElse.sol",
                test: "test/basic/fhe-operations/FHEIfThenElse.ts",
                description: "Branches on an encrypted condition with FHE.select instead of a cleartext if.",
            },
            BuiltinExample::AccessControl => BuiltinEntry {
                id: "access-control",
                title: "Access Control",
                category: "Access Control",
                contract: "contracts/access-control/AccessControl.sol",
                test: "test/access-control/AccessControl.ts",
                description: "Uses FHE.allow, FHE.allowThis and FHE.allowTransient to manage who may use a ciphertext.",
            },
            BuiltinExample::MissingAllowThis => BuiltinEntry {
                id: "missing-allow-this",
                title: "Anti-pattern: Missing allowThis",
                category: "Anti-patterns",
                contract: "contracts/anti-patterns/MissingAllowThis.sol",
                test: "test/anti-patterns/MissingAllowThis.ts",
                description: "Shows the failure that follows storing a ciphertext without granting the contract itself access.",
            },
            BuiltinExample::InputProof => BuiltinEntry {
                id: "input-proof",
                title: "Input Proof",
                category: "Input Proofs",
                contract: "contracts/input-proof/InputProof.sol",
                test: "test/input-proof/InputProof.ts",
                description: "Validates externally encrypted inputs with FHE.fromExternal and explains what the proof binds.",
            },
            BuiltinExample::EncryptedSum => BuiltinEntry {
                id: "encrypted-sum",
                title: "Encrypted Sum",
                category: "Advanced",
                contract: "contracts/advanced/EncryptedSum.sol",
                test: "test/advanced/EncryptedSum.ts",
                description: "Aggregates encrypted contributions from many users into a single encrypted total.",
            },
            BuiltinExample::BlindAuction => BuiltinEntry {
                id: "blind-auction",
                title: "Blind Auction",
                category: "Advanced",
                contract: "contracts/advanced/BlindAuction.sol",
                test: "test/advanced/BlindAuction.ts",
                description: "A sealed-bid auction where bids stay encrypted until the winner is revealed.",
            },
            BuiltinExample::ConfidentialToken => BuiltinEntry {
                id: "confidential-token",
                title: "Confidential Token",
                category: "Advanced",
                contract: "contracts/advanced/ConfidentialToken.sol",
                test: "test/advanced/ConfidentialToken.ts",
                description: "A fungible token with encrypted balances and transfer amounts.",
            },
        }
    }

    pub fn descriptor(self) -> ExampleDescriptor {
        let entry = self.entry();
        ExampleDescriptor::new(entry.id, entry.contract, entry.test, entry.description)
            .with_title(entry.title)
            .with_category(entry.category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinCategory {
    Basic,
    Operations,
    AccessControl,
    InputProofs,
    Advanced,
}

impl BuiltinCategory {
    pub const ALL: &'static [BuiltinCategory] = &[
        BuiltinCategory::Basic,
        BuiltinCategory::Operations,
        BuiltinCategory::AccessControl,
        BuiltinCategory::InputProofs,
        BuiltinCategory::Advanced,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BuiltinCategory::Basic => "basic",
            BuiltinCategory::Operations => "operations",
            BuiltinCategory::AccessControl => "access-control",
            BuiltinCategory::InputProofs => "input-proofs",
            BuiltinCategory::Advanced => "advanced",
        }
    }

    fn title(self) -> &'static str {
        match self {
            BuiltinCategory::Basic => "Basic Examples",
            BuiltinCategory::Operations => "FHE Operations",
            BuiltinCategory::AccessControl => "Access Control",
            BuiltinCategory::InputProofs => "Input Proofs",
            BuiltinCategory::Advanced => "Advanced Examples",
        }
    }

    fn description(self) -> &'static str {
        match self {
            BuiltinCategory::Basic => {
                "Encrypted state, client-side encryption and the decryption flows."
            }
            BuiltinCategory::Operations => "Homomorphic arithmetic and encrypted branching.",
            BuiltinCategory::AccessControl => {
                "Permission grants on ciphertexts and the mistakes that break them."
            }
            BuiltinCategory::InputProofs => "Ingesting externally encrypted inputs safely.",
            BuiltinCategory::Advanced => {
                "Larger applications: aggregation, auctions and confidential tokens."
            }
        }
    }

    /// Members in inclusion order.
    pub fn members(self) -> &'static [BuiltinExample] {
        use BuiltinExample::*;
        match self {
            BuiltinCategory::Basic => &[
                FheCounter,
                EncryptSingleValue,
                EncryptMultipleValues,
                UserDecryptSingleValue,
                UserDecryptMultipleValues,
                PublicDecryptSingleValue,
                PublicDecryptMultipleValues,
            ],
            BuiltinCategory::Operations => &[FheAdd, FheIfThenElse],
            BuiltinCategory::AccessControl => &[AccessControl, MissingAllowThis],
            BuiltinCategory::InputProofs => &[InputProof],
            BuiltinCategory::Advanced => &[EncryptedSum, BlindAuction, ConfidentialToken],
        }
    }

    pub fn descriptor(self) -> CategoryDescriptor {
        CategoryDescriptor::new(
            self.id(),
            self.description(),
            self.members().iter().map(|m| m.id()),
        )
        .with_title(self.title())
    }
}
