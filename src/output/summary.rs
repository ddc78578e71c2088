use serde::Serialize;

use crate::joiner::OwnedFailure;
use crate::results::{TestResult, TestSummary};

const NOT_FOUND: &str = "<not-found>";

/// The original test summary together with the joined failures.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub summary: TestSummary,
    pub failures: Vec<OwnedFailure>,
}

impl Summary {
    pub fn new(summary: TestSummary, failures: Vec<OwnedFailure>) -> Self {
        Self { summary, failures }
    }

    /// Failures missing a location or owners. Owners are only looked up once
    /// a location is known.
    pub fn unresolved_failures(&self) -> Vec<&OwnedFailure> {
        self.failures.iter().filter(|f| !f.is_resolved()).collect()
    }

    /// One line per unresolved failure, as shown under the report's warnings.
    pub fn warnings(&self) -> Vec<String> {
        self.unresolved_failures()
            .into_iter()
            .map(|failure| match failure.path() {
                None => format!(
                    "Unable to locate: {}",
                    failure.failure.test_identifier_string
                ),
                Some(path) => format!("Unable to find owner: {path}"),
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_markdown(&self) -> String {
        let counts = &self.summary;
        let mut markdown = format!("\n# {}\n\n", title(counts.result));

        markdown.push_str(&format!("| Total Tests | {} |\n", counts.total_test_count));
        markdown.push_str("| :-- | :-- |\n");
        markdown.push_str(&format!("| 🚨 Failed | {} |\n", counts.failed_tests));
        markdown.push_str(&format!("| ⏩ Skipped | {} |\n", counts.skipped_tests));
        markdown.push_str(&format!(
            "| 🤷 Expected Failures | {} |\n",
            counts.expected_failures
        ));
        markdown.push_str(&format!("| ✅ Passed | {} |\n\n", counts.passed_tests));

        if !self.failures.is_empty() {
            markdown.push_str("## Failures\n");
            for failure in &self.failures {
                markdown.push_str(&failure_block(failure));
            }
        }

        let warnings = self.warnings();
        if !warnings.is_empty() {
            markdown.push_str("\n## ⚠️ Warnings\n\n");
            for warning in warnings {
                markdown.push_str(&format!("- {warning}\n"));
            }
        }

        markdown
    }
}

fn title(result: TestResult) -> &'static str {
    match result {
        TestResult::Passed => "✅ Tests Passed",
        TestResult::Failed => "🚨 Tests Failed",
        TestResult::Skipped => "⏩ Tests Skipped",
        TestResult::ExpectedFailure => "🤷 Expected Failures",
        TestResult::Unknown => "⚠️ Unknown",
    }
}

fn failure_block(failure: &OwnedFailure) -> String {
    let owners = failure
        .owners
        .as_ref()
        .map(|owners| owners.join(", "))
        .unwrap_or_else(|| NOT_FOUND.to_string());
    let path = failure.path().unwrap_or(NOT_FOUND);
    let line = failure.line().unwrap_or(0);
    let test = &failure.failure;

    format!(
        "\n<pre>\n\
         Test Case:      <b>{}</b>\n\
         Identifier:     {}\n\
         Owner:          <b>{owners}</b>\n\
         Module:         {}\n\
         Location:       {path}#{line}\n\
         \n\
         <b>{}</b>\n\
         </pre>\n",
        test.test_name, test.test_identifier_string, test.target_name, test.failure_text,
    )
}
