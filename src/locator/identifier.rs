/// A test identifier as reported by the test runner: scope names joined by
/// `/`, outermost first, ending with the test-case name.
///
/// `SampleTests/NestedTests/foo()` has leaf `foo()` and scopes
/// `["SampleTests", "NestedTests"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestIdentifier {
    raw: String,
    components: Vec<String>,
}

impl TestIdentifier {
    pub fn parse(raw: &str) -> Self {
        let components = raw
            .split('/')
            .filter(|component| !component.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            raw: raw.to_string(),
            components,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The test-case name, or `None` for an empty identifier.
    pub fn leaf(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// Enclosing scope names, outermost first.
    pub fn scopes(&self) -> &[String] {
        match self.components.split_last() {
            Some((_, scopes)) => scopes,
            None => &[],
        }
    }
}
