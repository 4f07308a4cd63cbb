//! Queries over the FHIR metadata vocabulary.
//!
//! The vocabulary graph is indexed once at construction; every query after
//! that is a map lookup. All type and field arguments are absolute IRIs.

use std::collections::{BTreeMap, BTreeSet};

use fhirrdf_graph::parser::{parse_ntriples, parse_turtle};
use fhirrdf_graph::{iris, Graph, Term};
use tracing::{info, warn};

use crate::cache::VocabularyCache;
use crate::error::VocabError;
use crate::location::read_text;
use crate::signature::signature;

/// Behaviour switches for datatype selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyOptions {
    /// Narrow `xsd:dateTime` values to `gYear`, `gYearMonth` or `date` by
    /// their precision.
    pub fhir_dates: bool,
    /// Drop the `xsd:anyURI` datatype (FHIR oids are untyped strings).
    pub fhir_oids: bool,
}

impl Default for VocabularyOptions {
    fn default() -> Self {
        Self {
            fhir_dates: true,
            fhir_oids: true,
        }
    }
}

/// Serialization of a vocabulary source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaFormat {
    /// Turtle (`fhir.ttl`).
    #[default]
    Turtle,
    /// N-Triples.
    NTriples,
}

impl SchemaFormat {
    /// Picks a format from a file name: `.nt` is N-Triples, anything else Turtle.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        if location.ends_with(".nt") {
            SchemaFormat::NTriples
        } else {
            SchemaFormat::Turtle
        }
    }
}

/// A loaded, indexed FHIR metadata vocabulary.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    graph: Graph,
    options: VocabularyOptions,
    from_cache: bool,
    declared: BTreeSet<String>,
    parents: BTreeMap<String, Vec<String>>,
    fields_by_domain: BTreeMap<String, Vec<String>>,
    ranges: BTreeMap<String, String>,
    datatype_properties: BTreeSet<String>,
    primitives: BTreeSet<String>,
    value_datatypes: BTreeMap<String, String>,
}

impl Vocabulary {
    /// Parses a Turtle vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Parse`] if `text` is not valid Turtle.
    pub fn from_turtle(text: &str, options: VocabularyOptions) -> Result<Self, VocabError> {
        Ok(Self::from_graph(parse_turtle(text)?, options))
    }

    /// Indexes an already parsed vocabulary graph.
    #[must_use]
    pub fn from_graph(graph: Graph, options: VocabularyOptions) -> Self {
        let mut vocab = Self {
            graph: Graph::new(),
            options,
            from_cache: false,
            declared: BTreeSet::new(),
            parents: BTreeMap::new(),
            fields_by_domain: BTreeMap::new(),
            ranges: BTreeMap::new(),
            datatype_properties: BTreeSet::new(),
            primitives: BTreeSet::new(),
            value_datatypes: BTreeMap::new(),
        };
        vocab.index(&graph);
        vocab.graph = graph;
        vocab
    }

    /// Loads the vocabulary at `location` (file name or URL), going through
    /// `cache` when the source has a [`signature`](crate::signature::signature).
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Location`] if the source cannot be read and
    /// [`VocabError::Parse`] if it is not valid RDF. Cache failures are
    /// logged and otherwise ignored.
    pub fn load(
        location: &str,
        format: SchemaFormat,
        cache: &mut dyn VocabularyCache,
        options: VocabularyOptions,
    ) -> Result<Self, VocabError> {
        let sig = signature(location);
        if let Some(sig) = &sig {
            match cache.get(location, sig) {
                Ok(Some(graph)) => {
                    info!(location, triples = graph.len(), "metadata vocabulary loaded from cache");
                    let mut vocab = Self::from_graph(graph, options);
                    vocab.from_cache = true;
                    return Ok(vocab);
                }
                Ok(None) => {}
                Err(e) => warn!(location, error = %e, "vocabulary cache lookup failed"),
            }
        }

        let text = read_text(location)?;
        let graph = match format {
            SchemaFormat::Turtle => parse_turtle(&text)?,
            SchemaFormat::NTriples => parse_ntriples(&text)?,
        };
        info!(location, triples = graph.len(), "metadata vocabulary parsed");
        if let Some(sig) = &sig {
            if let Err(e) = cache.put(location, sig, &graph) {
                warn!(location, error = %e, "vocabulary image not cached");
            }
        }
        Ok(Self::from_graph(graph, options))
    }

    fn index(&mut self, graph: &Graph) {
        for t in graph.iter() {
            let Term::Iri(subject) = &t.subject else {
                continue;
            };
            self.declared.insert(subject.clone());
            match (t.predicate.as_str(), &t.object) {
                (iris::RDFS_SUBCLASS_OF, Term::Iri(parent)) => {
                    if parent == iris::FHIR_PRIMITIVE {
                        self.primitives.insert(subject.clone());
                    }
                    self.parents
                        .entry(subject.clone())
                        .or_default()
                        .push(parent.clone());
                }
                (iris::RDFS_SUBCLASS_OF, restriction @ Term::Blank(_)) => {
                    if let Some(dt) = value_restriction(graph, restriction) {
                        self.value_datatypes.entry(subject.clone()).or_insert(dt);
                    }
                }
                (iris::RDFS_DOMAIN, Term::Iri(domain)) => {
                    self.fields_by_domain
                        .entry(domain.clone())
                        .or_default()
                        .push(subject.clone());
                }
                (iris::RDFS_RANGE, Term::Iri(range)) => {
                    self.ranges
                        .entry(subject.clone())
                        .or_insert_with(|| range.clone());
                }
                (iris::RDF_TYPE, Term::Iri(ty)) if ty == iris::OWL_DATATYPE_PROPERTY => {
                    self.datatype_properties.insert(subject.clone());
                }
                _ => {}
            }
        }
    }

    /// The underlying vocabulary graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> VocabularyOptions {
        self.options
    }

    /// True when [`Vocabulary::load`] was served from the cache.
    #[must_use]
    pub fn from_cache(&self) -> bool {
        self.from_cache
    }

    /// True if `uri` is the subject of any vocabulary statement.
    #[must_use]
    pub fn has_type(&self, uri: &str) -> bool {
        self.declared.contains(uri)
    }

    /// Succeeds only for declared types.
    ///
    /// # Errors
    ///
    /// [`VocabError::UnrecognizedType`] when `type_uri` is undeclared.
    pub fn check_type(&self, type_uri: &str) -> Result<(), VocabError> {
        if self.has_type(type_uri) {
            Ok(())
        } else {
            Err(VocabError::UnrecognizedType(type_uri.to_owned()))
        }
    }

    /// All fields of `type_uri`, own and inherited, keyed by JSON tag.
    ///
    /// Ancestors are visited first so that the nearest declaration of a tag
    /// wins. Superclasses in the W5 classification namespace are skipped.
    ///
    /// # Errors
    ///
    /// [`VocabError::UnrecognizedType`] when `type_uri` is undeclared.
    pub fn fields_of(&self, type_uri: &str) -> Result<BTreeMap<String, String>, VocabError> {
        self.check_type(type_uri)?;
        let mut fields = BTreeMap::new();
        let mut visited = BTreeSet::new();
        self.collect_fields(type_uri, &mut fields, &mut visited);
        Ok(fields)
    }

    fn collect_fields<'a>(
        &'a self,
        type_uri: &'a str,
        fields: &mut BTreeMap<String, String>,
        visited: &mut BTreeSet<&'a str>,
    ) {
        if !visited.insert(type_uri) {
            return;
        }
        for parent in self.parents.get(type_uri).into_iter().flatten() {
            if !parent.starts_with(iris::W5) {
                self.collect_fields(parent, fields, visited);
            }
        }
        for field in self.fields_by_domain.get(type_uri).into_iter().flatten() {
            fields.insert(tag_of(field).to_owned(), field.clone());
        }
    }

    /// Declared range of `field`, or `fhir:Resource` when none is given.
    #[must_use]
    pub fn range_of(&self, field: &str) -> &str {
        self.ranges
            .get(field)
            .map_or(iris::FHIR_RESOURCE, String::as_str)
    }

    /// True if `field` maps straight to a literal (no value node).
    ///
    /// # Errors
    ///
    /// [`VocabError::UnrecognizedPredicate`] for an undeclared field that
    /// is not a synthetic `.value[x]` field.
    pub fn is_atomic(&self, field: &str) -> Result<bool, VocabError> {
        if !self.has_type(field) {
            if field.contains(".value") {
                return Ok(false);
            }
            return Err(VocabError::UnrecognizedPredicate(field.to_owned()));
        }
        Ok(field == iris::FHIR_NODE_ROLE || self.datatype_properties.contains(field))
    }

    /// True if `type_uri` is a direct subclass of `fhir:Primitive`.
    #[must_use]
    pub fn is_primitive(&self, type_uri: &str) -> bool {
        self.primitives.contains(type_uri)
    }

    /// The `owl:allValuesFrom` datatype restricting `fhir:value` on a
    /// primitive type.
    #[must_use]
    pub fn primitive_datatype(&self, type_uri: &str) -> Option<&str> {
        self.value_datatypes.get(type_uri).map(String::as_str)
    }

    /// Datatype to put on a literal of `type_uri`.
    ///
    /// Unlike [`Vocabulary::primitive_datatype`], strings come back untyped,
    /// `xsd:anyURI` is dropped when `fhir_oids` is set, and with
    /// `fhir_dates` set an `xsd:dateTime` is narrowed by the precision of
    /// `literal`.
    #[must_use]
    pub fn primitive_datatype_nostring(
        &self,
        type_uri: &str,
        literal: Option<&str>,
    ) -> Option<&str> {
        let datatype = self.primitive_datatype(type_uri)?;
        if self.options.fhir_dates && datatype == iris::XSD_DATE_TIME {
            if let Some(text) = literal.filter(|v| !v.is_empty()) {
                return Some(date_precision(text));
            }
        }
        if self.options.fhir_oids && datatype == iris::XSD_ANY_URI {
            return None;
        }
        (datatype != iris::XSD_STRING).then_some(datatype)
    }

    /// Resolves a polymorphic tag such as `valueQuantity` or `valueString`
    /// to the type that governs it.
    ///
    /// # Errors
    ///
    /// [`VocabError::UnrecognizedType`] when neither the suffix nor the tag
    /// itself names a declared type.
    pub fn value_field_for(&self, tag: &str) -> Result<String, VocabError> {
        if let Some(suffix) = tag.strip_prefix("value").filter(|s| !s.is_empty()) {
            let exact = iris::fhir(suffix);
            if self.has_type(&exact) {
                return Ok(exact);
            }
            let mut chars = suffix.chars();
            if let Some(first) = chars.next() {
                let lowered = iris::fhir(&format!("{}{}", first.to_lowercase(), chars.as_str()));
                if self.has_type(&lowered) {
                    return Ok(lowered);
                }
            }
        }
        let fallback = iris::fhir(tag);
        self.check_type(&fallback)?;
        Ok(fallback)
    }
}

/// JSON tag of a field IRI: the last dotted segment of its local name.
///
/// `http://hl7.org/fhir/Provenance.agent.whoReference` gives `whoReference`.
#[must_use]
pub fn tag_of(field: &str) -> &str {
    let local = field
        .strip_prefix(iris::FHIR)
        .unwrap_or_else(|| field.rsplit(['#', '/']).next().unwrap_or(field));
    local.rsplit('.').next().unwrap_or(local)
}

fn value_restriction(graph: &Graph, node: &Term) -> Option<String> {
    let is_restriction = graph
        .objects(node, iris::RDF_TYPE)
        .any(|t| t.as_iri() == Some(iris::OWL_RESTRICTION));
    let on_value = graph
        .objects(node, iris::OWL_ON_PROPERTY)
        .any(|t| t.as_iri() == Some(iris::FHIR_VALUE));
    if !(is_restriction && on_value) {
        return None;
    }
    graph
        .value(node, iris::OWL_ALL_VALUES_FROM)
        .and_then(Term::as_iri)
        .map(str::to_owned)
}

fn date_precision(text: &str) -> &'static str {
    match text.chars().count() {
        4 => iris::XSD_G_YEAR,
        7 => iris::XSD_G_YEAR_MONTH,
        10 => iris::XSD_DATE,
        n if n > 10 && matches!(text.chars().nth(10), Some('+' | '-')) => iris::XSD_DATE,
        _ => iris::XSD_DATE_TIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_last_dotted_segment() {
        assert_eq!(
            tag_of("http://hl7.org/fhir/Provenance.agent.whoReference"),
            "whoReference"
        );
        assert_eq!(tag_of("http://hl7.org/fhir/nodeRole"), "nodeRole");
        assert_eq!(tag_of("http://hl7.org/fhir/w5#administrative.individual.flag"), "flag");
    }

    #[test]
    fn date_precision_by_length() {
        assert_eq!(date_precision("2016"), iris::XSD_G_YEAR);
        assert_eq!(date_precision("2016-03"), iris::XSD_G_YEAR_MONTH);
        assert_eq!(date_precision("2016-03-28"), iris::XSD_DATE);
        assert_eq!(date_precision("2016-03-28+05:00"), iris::XSD_DATE);
        assert_eq!(date_precision("2016-03-28T10:00:00Z"), iris::XSD_DATE_TIME);
    }

    #[test]
    fn schema_format_from_extension() {
        assert_eq!(SchemaFormat::from_location("fhir.nt"), SchemaFormat::NTriples);
        assert_eq!(SchemaFormat::from_location("fhir.ttl"), SchemaFormat::Turtle);
    }
}
