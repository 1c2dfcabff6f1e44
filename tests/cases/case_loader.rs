/// Case file loader
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum TestCase {
    /// Canonicalize `input`, or resolve it against `base` when one is given
    UrlTest {
        input: String,
        #[serde(default)]
        base: Option<String>,
        /// Expected `possibly_invalid_spec()`
        #[serde(default)]
        spec: Option<String>,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub case_num: usize,
    pub input: String,
    pub base: Option<String>,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

impl CaseResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_summary(&self) {
        println!("Passed: {}, Failed: {}", self.passed, self.failed);
        for failure in &self.failures {
            println!(
                "  #{} input={:?} base={:?}: {} expected {:?}, got {:?}",
                failure.case_num,
                failure.input,
                failure.base,
                failure.field,
                failure.expected,
                failure.actual
            );
        }
    }
}

pub fn load_cases(json: &str) -> Vec<TestCase> {
    serde_json::from_str(json).expect("case file should be valid JSON")
}

pub fn canonicalization_cases() -> Vec<TestCase> {
    load_cases(include_str!("./canonicalization.json"))
}

pub fn resolution_cases() -> Vec<TestCase> {
    load_cases(include_str!("./resolution.json"))
}
