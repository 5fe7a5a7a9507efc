//! Public output types shared by the generators.

use serde::{Deserialize, Serialize};

/// Summary of a multi-item run (category members, docs pages).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub succeeded: u32,
    pub skipped: u32,
    pub failed: u32,
    pub items: Vec<BatchResultItem>,
}

/// Individual item result within a batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchResultItem {
    pub id: String,
    pub status: ItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Ok,
    Skipped,
    Failed,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_ok(&mut self, id: impl Into<String>) {
        self.succeeded += 1;
        self.items.push(BatchResultItem {
            id: id.into(),
            status: ItemStatus::Ok,
            error: None,
        });
    }

    pub fn record_skipped(&mut self, id: impl Into<String>, reason: impl Into<String>) {
        self.skipped += 1;
        self.items.push(BatchResultItem {
            id: id.into(),
            status: ItemStatus::Skipped,
            error: Some(reason.into()),
        });
    }

    pub fn record_failed(&mut self, id: impl Into<String>, error: impl Into<String>) {
        self.failed += 1;
        self.items.push(BatchResultItem {
            id: id.into(),
            status: ItemStatus::Failed,
            error: Some(error.into()),
        });
    }

    pub fn ids_with(&self, status: ItemStatus) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.status == status)
            .map(|item| item.id.clone())
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
