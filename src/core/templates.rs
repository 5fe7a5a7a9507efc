//! Text templates for generated READMEs, deploy scripts and docs pages.
//!
//! Placeholders use `{{name}}` syntax, see `utils::template`.

pub const EXAMPLE_README: &str = r#"# {{title}}

{{description}}

Category: {{category}}

## Contents

- `contracts/{{contractFile}}` - the example contract
- `test/{{testFile}}` - the Hardhat test suite
- `deploy/deploy.ts` - deploys `{{contractName}}`

## Quick Start

### Prerequisites

- Node.js 20 or newer
- npm

### Install

```bash
npm install
```

### Set up the mnemonic and RPC key

```bash
npx hardhat vars set MNEMONIC
npx hardhat vars set INFURA_API_KEY
```

### Compile and test

```bash
npm run compile
npm run test
```

### Deploy

```bash
npx hardhat node
npx hardhat deploy --network localhost
```

## Notes

Encrypted values are only usable by addresses that were granted access. If a
test fails with an ACL error, check that the contract calls `FHE.allowThis`
and `FHE.allow` after every state update.

Generated from example `{{exampleId}}`.
"#;

pub const CATEGORY_README: &str = r#"# {{title}}

{{description}}

## Included Examples

{{contractList}}
{{skippedList}}
## Quick Start

```bash
npm install
npm run compile
npm run test
```

Run a single test file:

```bash
npx hardhat test test/<ContractName>.ts
```

### Deploy every contract

```bash
npx hardhat node
npx hardhat deploy --network localhost
```

Generated from category `{{categoryId}}`.
"#;

pub const DEPLOY_SCRIPT: &str = r#"import { DeployFunction } from "hardhat-deploy/types";
import { HardhatRuntimeEnvironment } from "hardhat/types";

const func: DeployFunction = async function (hre: HardhatRuntimeEnvironment) {
  const { deployer } = await hre.getNamedAccounts();
  const { deploy } = hre.deployments;
{{deployments}}};

export default func;
func.id = "deploy_{{exampleId}}";
func.tags = ["{{exampleId}}"];
"#;

pub const DEPLOY_ENTRY: &str = r#"
  const deployed{{contractName}} = await deploy("{{contractName}}", {
    from: deployer,
    log: true,
  });
  console.log(`{{contractName}} contract: `, deployed{{contractName}}.address);
"#;

pub const DOC_PAGE: &str = r#"# {{title}}

{{description}}

**Category:** {{category}}

{% hint style="info" %}
To run this example correctly, make sure the files are placed in the following directories:

- `.sol` file → `<your-project-root-dir>/contracts/`
- `.ts` file → `<your-project-root-dir>/test/`

This ensures Hardhat can compile and test your contracts as expected.
{% endhint %}

{% tabs %}

{% tab title="{{contractFile}}" %}

{{contractCode}}

{% endtab %}

{% tab title="{{testFile}}" %}

{{testCode}}

{% endtab %}

{% endtabs %}
"#;
