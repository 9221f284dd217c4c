use serde::{Deserialize, Serialize};

/// Output of one principle demonstration: the lines that would be printed
/// while walking through its anti-pattern and refactored versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoReport {
    pub principle: String,
    pub summary: String,
    pub lines: Vec<String>,
}

impl DemoReport {
    pub fn new(principle: &str, summary: &str) -> Self {
        Self {
            principle: principle.to_string(),
            summary: summary.to_string(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}
