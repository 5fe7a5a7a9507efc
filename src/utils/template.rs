//! `{{placeholder}}` string rendering for generated READMEs, docs pages and
//! deploy scripts.

pub struct TemplateVars;

impl TemplateVars {
    pub const TITLE: &'static str = "title";
    pub const DESCRIPTION: &'static str = "description";
    pub const CATEGORY: &'static str = "category";
    pub const EXAMPLE_ID: &'static str = "exampleId";
    pub const CATEGORY_ID: &'static str = "categoryId";
    pub const CONTRACT_NAME: &'static str = "contractName";
    pub const CONTRACT_FILE: &'static str = "contractFile";
    pub const TEST_FILE: &'static str = "testFile";
    pub const CONTRACT_LIST: &'static str = "contractList";
    pub const SKIPPED_LIST: &'static str = "skippedList";
    pub const DEPLOYMENTS: &'static str = "deployments";
    pub const CONTRACT_CODE: &'static str = "contractCode";
    pub const TEST_CODE: &'static str = "testCode";
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}
