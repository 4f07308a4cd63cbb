//! Blank-node independent comparison of FHIR RDF graphs.
//!
//! Mapped FHIR resources are trees of anonymous nodes, so two mappings of
//! one document never share blank node labels. [`skolemize`] renames every
//! anonymous node after its path from a named subject, and [`rdf_compare`]
//! diffs two graphs subject by subject on that basis, producing a
//! [`CompareReport`].
//!
//! # Entry Point
//!
//! ```
//! use fhirrdf_compare::{rdf_compare, CompareOptions};
//! use fhirrdf_graph::parser::parse_turtle;
//!
//! let expected = parse_turtle(
//!     r#"<http://hl7.org/fhir/Patient/p1> <http://hl7.org/fhir/Patient.gender> _:g .
//!        _:g <http://hl7.org/fhir/value> "male" ."#,
//! )?;
//! let actual = parse_turtle(
//!     r#"<http://hl7.org/fhir/Patient/p1> <http://hl7.org/fhir/Patient.gender> [
//!          <http://hl7.org/fhir/value> "male" ] ."#,
//! )?;
//!
//! let report = rdf_compare(&expected, &actual, CompareOptions::default(), None);
//! assert!(report.is_empty());
//! # Ok::<(), fhirrdf_graph::ParseError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod diff;
pub mod filter;
pub mod report;
pub mod skolem;

pub use diff::{rdf_compare, CompareFilter, CompareOptions};
pub use filter::decimal_filter;
pub use report::{CompareReport, SubjectDifference, SubjectListing};
pub use skolem::{anonymous_root_names, complete_definition, skolem_uri, skolemize};
