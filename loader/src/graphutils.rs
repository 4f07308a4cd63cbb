//! Lookups over mapped graphs.
//!
//! A mapped FHIR field is usually a blank node carrying `fhir:value`, so
//! these helpers look through the value node to the literal.

use std::collections::BTreeSet;
use std::fmt;

use fhirrdf_graph::{iris, Graph, Term};

use crate::error::QueryError;

fn not_unique(subject: &Term, predicate: &str, values: &BTreeSet<&Term>) -> QueryError {
    QueryError::NotUnique {
        subject: subject.to_string(),
        predicate: predicate.to_owned(),
        values: values.iter().map(|v| v.to_string()).collect(),
    }
}

/// The single value of `(subject, predicate)`.
///
/// When every object is a blank node (and `predicate` is not `fhir:value`)
/// the objects' `fhir:value` is returned instead.
///
/// # Errors
///
/// [`QueryError::NotUnique`] when more than one distinct value is found.
pub fn value<'g>(
    graph: &'g Graph,
    subject: &Term,
    predicate: &str,
) -> Result<Option<&'g Term>, QueryError> {
    let objects: BTreeSet<&Term> = graph.objects(subject, predicate).collect();
    if objects.is_empty() {
        return Ok(None);
    }
    let values: BTreeSet<&Term> =
        if predicate != iris::FHIR_VALUE && objects.iter().all(|o| o.is_blank()) {
            objects
                .iter()
                .filter_map(|node| graph.value(node, iris::FHIR_VALUE))
                .collect()
        } else {
            objects
        };
    if values.len() > 1 {
        return Err(not_unique(subject, predicate, &values));
    }
    Ok(values.into_iter().next())
}

/// The value of the extension on `node` whose `Extension.url` is `url`.
///
/// # Errors
///
/// [`QueryError::NotUnique`] when the extension holds several values.
pub fn extension<'g>(
    graph: &'g Graph,
    node: &Term,
    url: &str,
) -> Result<Option<&'g Term>, QueryError> {
    for ext in graph.objects(node, iris::FHIR_ELEMENT_EXTENSION) {
        if value(graph, ext, iris::FHIR_EXTENSION_URL)?.and_then(Term::lexical) != Some(url) {
            continue;
        }
        if let Some(t) = graph
            .about(ext)
            .find(|t| t.predicate.contains("Extension.value"))
        {
            return value(graph, ext, &t.predicate);
        }
    }
    Ok(None)
}

fn codings<'g>(
    graph: &'g Graph,
    subject: &Term,
    predicate: &str,
) -> impl Iterator<Item = &'g Term> + 'g {
    graph
        .value(subject, predicate)
        .into_iter()
        .flat_map(move |concept| graph.objects(concept, iris::FHIR_CODEABLE_CONCEPT_CODING))
}

fn in_system(graph: &Graph, coding: &Term, system: Option<&str>) -> Result<bool, QueryError> {
    Ok(match system {
        None => true,
        Some(system) => {
            value(graph, coding, iris::FHIR_CODING_SYSTEM)?.and_then(Term::lexical) == Some(system)
        }
    })
}

/// The first code of the CodeableConcept at `(subject, predicate)`,
/// optionally restricted to one coding `system`.
///
/// # Errors
///
/// [`QueryError::NotUnique`] from the underlying [`value`] lookups.
pub fn code<'g>(
    graph: &'g Graph,
    subject: &Term,
    predicate: &str,
    system: Option<&str>,
) -> Result<Option<&'g Term>, QueryError> {
    for coding in codings(graph, subject, predicate) {
        if in_system(graph, coding, system)? {
            return value(graph, coding, iris::FHIR_CODING_CODE);
        }
    }
    Ok(None)
}

/// The concept IRI (type arc) of the first matching coding.
///
/// # Errors
///
/// [`QueryError::NotUnique`] when a coding carries several type arcs.
pub fn concept_uri<'g>(
    graph: &'g Graph,
    subject: &Term,
    predicate: &str,
    system: Option<&str>,
) -> Result<Option<&'g Term>, QueryError> {
    for coding in codings(graph, subject, predicate) {
        if in_system(graph, coding, system)? {
            return value(graph, coding, iris::RDF_TYPE);
        }
    }
    Ok(None)
}

/// The `fhir:link` target of the reference at `(subject, predicate)` and
/// the target's type, if known.
#[must_use]
pub fn link<'g>(
    graph: &'g Graph,
    subject: &Term,
    predicate: &str,
) -> Option<(&'g Term, Option<&'g Term>)> {
    let node = graph.value(subject, predicate)?;
    let target = graph.value(node, iris::FHIR_LINK)?;
    Some((target, graph.value(target, iris::RDF_TYPE)))
}

/// One coding of a CodeableConcept.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CodeableConcept {
    /// `Coding.system`
    pub system: String,
    /// `Coding.code`
    pub code: String,
    /// Concept IRI minted for the coding, if any.
    pub uri: Option<String>,
}

impl fmt::Display for CodeableConcept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.uri {
            Some(uri) => write!(f, "({}, {}, {uri})", self.system, self.code),
            None => write!(f, "({}, {}, None)", self.system, self.code),
        }
    }
}

/// All codings of the CodeableConcept at `(subject, predicate)` that have
/// both a system and a code, optionally restricted to one `system`.
///
/// # Errors
///
/// [`QueryError::NotUnique`] from the underlying [`value`] lookups.
pub fn codeable_concept_code(
    graph: &Graph,
    subject: &Term,
    predicate: &str,
    system: Option<&str>,
) -> Result<Vec<CodeableConcept>, QueryError> {
    let mut concepts = Vec::new();
    let Some(concept) = graph.value(subject, predicate) else {
        return Ok(concepts);
    };
    for coding in graph.objects(concept, iris::FHIR_CODEABLE_CONCEPT_CODING) {
        let coding_system = value(graph, coding, iris::FHIR_CODING_SYSTEM)?.and_then(Term::lexical);
        let coding_code = value(graph, coding, iris::FHIR_CODING_CODE)?.and_then(Term::lexical);
        let (Some(coding_system), Some(coding_code)) = (coding_system, coding_code) else {
            continue;
        };
        if system.is_some_and(|s| s != coding_system) {
            continue;
        }
        concepts.push(CodeableConcept {
            system: coding_system.to_owned(),
            code: coding_code.to_owned(),
            uri: graph
                .value(coding, iris::RDF_TYPE)
                .and_then(Term::as_iri)
                .map(str::to_owned),
        });
    }
    Ok(concepts)
}
