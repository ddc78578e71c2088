//! The test-results summary document produced by
//! `xcrun xcresulttool get test-results summary`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::IoError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSummary {
    pub title: String,
    pub environment_description: String,
    pub expected_failures: usize,
    pub failed_tests: usize,
    pub passed_tests: usize,
    pub skipped_tests: usize,
    pub total_test_count: usize,
    pub result: TestResult,
    #[serde(default)]
    pub test_failures: Vec<TestFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestFailure {
    pub failure_text: String,
    /// Module that contains the failing test.
    pub target_name: String,
    pub test_identifier_string: String,
    #[serde(default, rename = "testIdentifierURL", skip_serializing_if = "Option::is_none")]
    pub test_identifier_url: Option<String>,
    pub test_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestResult {
    Passed,
    Failed,
    Skipped,
    #[serde(rename = "Expected Failure")]
    ExpectedFailure,
    #[serde(rename = "unknown")]
    #[serde(other)]
    Unknown,
}

impl TestSummary {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse test results summary")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid test results summary: {}", path.display()))
    }
}
