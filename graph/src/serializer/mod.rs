//! Serializers for [`crate::Graph`].
//!
//! - [`ntriples`] — sorted N-Triples, one statement per line
//! - [`turtle`] — prefixed Turtle with anonymous nodes nested in place

pub mod ntriples;
pub mod turtle;

/// Output syntax selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Turtle 1.1.
    #[default]
    Turtle,
    /// N-Triples.
    NTriples,
}

impl Format {
    /// Conventional file extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Format::Turtle => "ttl",
            Format::NTriples => "nt",
        }
    }

    /// Serializes `graph` in this format.
    #[must_use]
    pub fn serialize(self, graph: &crate::Graph) -> String {
        match self {
            Format::Turtle => turtle::to_turtle(graph),
            Format::NTriples => ntriples::to_ntriples(graph),
        }
    }
}

pub(crate) fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
