//! Difference report types and their text renderings.

use std::fmt;

/// A primary subject found in only one of the compared graphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectListing {
    /// Subject IRI (or skolem name of an anonymous root).
    pub subject: String,
    /// The subject's complete definition, sorted N-Triples statements.
    pub statements: Vec<String>,
}

/// A primary subject present in both graphs with differing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDifference {
    /// Subject IRI (or skolem name of an anonymous root).
    pub subject: String,
    /// Skolemized statements only the expected graph has.
    pub expected: Vec<String>,
    /// Skolemized statements only the actual graph has.
    pub actual: Vec<String>,
}

/// Outcome of [`crate::rdf_compare`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareReport {
    /// Subjects only the expected graph has.
    pub only_in_expected: Vec<SubjectListing>,
    /// Subjects only the actual graph has.
    pub only_in_actual: Vec<SubjectListing>,
    /// Shared subjects whose definitions differ.
    pub differences: Vec<SubjectDifference>,
}

impl CompareReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the graphs matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.only_in_expected.is_empty()
            && self.only_in_actual.is_empty()
            && self.differences.is_empty()
    }

    /// Number of subjects with any difference.
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.only_in_expected.len() + self.only_in_actual.len() + self.differences.len()
    }

    /// Human-readable report; empty when the graphs matched.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for listing in &self.only_in_expected {
            out.push_str("\n===== Subjects in Graph 1 but not Graph 2: \n");
            out.push_str(&listing.statements.join("\n"));
        }
        for listing in &self.only_in_actual {
            out.push_str("\n===== Subjects in Graph 2 but not Graph 1: \n");
            out.push_str(&listing.statements.join("\n"));
        }
        for diff in &self.differences {
            out.push_str(&format!("\n\nSubject {} DIFFERENCE: {}", diff.subject, "=".repeat(30)));
            if !diff.expected.is_empty() {
                out.push_str("\n\t----> First: \n");
                out.push_str(&diff.expected.join("\n"));
            }
            if !diff.actual.is_empty() {
                out.push_str("\n\t----> Second: \n");
                out.push_str(&diff.actual.join("\n"));
            }
            out.push_str(&"-".repeat(40));
        }
        out
    }

    /// The statements each side has that the other lacks, as two texts
    /// `(expected_only, actual_only)`. Both are empty when the graphs
    /// matched.
    #[must_use]
    pub fn split(&self) -> (String, String) {
        let expected: Vec<&str> = self
            .only_in_expected
            .iter()
            .flat_map(|l| &l.statements)
            .chain(self.differences.iter().flat_map(|d| &d.expected))
            .map(String::as_str)
            .collect();
        let actual: Vec<&str> = self
            .only_in_actual
            .iter()
            .flat_map(|l| &l.statements)
            .chain(self.differences.iter().flat_map(|d| &d.actual))
            .map(String::as_str)
            .collect();
        (expected.join("\n"), actual.join("\n"))
    }
}

impl fmt::Display for CompareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
