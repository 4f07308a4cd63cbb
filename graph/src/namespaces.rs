//! Well-known IRIs and the per-graph prefix table.

use std::collections::BTreeMap;

/// Well-known namespace and term IRIs.
///
/// FHIR field IRIs are dotted paths below the FHIR base
/// (`fhir:Patient.identifier`); use [`iris::fhir`] and [`iris::dotted`] to
/// build them.
pub mod iris {
    /// FHIR base namespace.
    pub const FHIR: &str = "http://hl7.org/fhir/";
    /// FHIR W5 classification namespace (never traversed for fields).
    pub const W5: &str = "http://hl7.org/fhir/w5#";
    /// LOINC concept namespace.
    pub const LOINC: &str = "http://loinc.org/owl#";
    /// SNOMED CT concept namespace.
    pub const SNOMEDCT: &str = "http://snomed.info/id/";
    /// SNOMED CT code system IRI.
    pub const SCT: &str = "http://snomed.info/sct";
    /// LOINC code system IRI.
    pub const LOINC_SYSTEM: &str = "http://loinc.org";
    /// HL7 v2 tables.
    pub const V2: &str = "http://hl7.org/fhir/v2/";
    /// HL7 v3 code systems.
    pub const V3: &str = "http://hl7.org/fhir/v3/";

    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// XML Schema datatypes namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `rdf:type`
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdfs:subClassOf`
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:domain`
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `owl:Ontology`
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:imports`
    pub const OWL_IMPORTS: &str = "http://www.w3.org/2002/07/owl#imports";
    /// `owl:versionIRI`
    pub const OWL_VERSION_IRI: &str = "http://www.w3.org/2002/07/owl#versionIRI";
    /// `owl:DatatypeProperty`
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:Restriction`
    pub const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    /// `owl:onProperty`
    pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    /// `owl:allValuesFrom`
    pub const OWL_ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";

    /// `xsd:string`
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:decimal`
    pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// `xsd:anyURI`
    pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
    /// `xsd:dateTime`
    pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// `xsd:date`
    pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    /// `xsd:gYear`
    pub const XSD_G_YEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";
    /// `xsd:gYearMonth`
    pub const XSD_G_YEAR_MONTH: &str = "http://www.w3.org/2001/XMLSchema#gYearMonth";
    /// `rdf:langString`
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// `fhir:index`
    pub const FHIR_INDEX: &str = "http://hl7.org/fhir/index";
    /// `fhir:value`
    pub const FHIR_VALUE: &str = "http://hl7.org/fhir/value";
    /// `fhir:nodeRole`
    pub const FHIR_NODE_ROLE: &str = "http://hl7.org/fhir/nodeRole";
    /// `fhir:treeRoot`
    pub const FHIR_TREE_ROOT: &str = "http://hl7.org/fhir/treeRoot";
    /// `fhir:link`
    pub const FHIR_LINK: &str = "http://hl7.org/fhir/link";
    /// `fhir:Primitive`
    pub const FHIR_PRIMITIVE: &str = "http://hl7.org/fhir/Primitive";
    /// `fhir:Resource`
    pub const FHIR_RESOURCE: &str = "http://hl7.org/fhir/Resource";
    /// `fhir:Element`
    pub const FHIR_ELEMENT: &str = "http://hl7.org/fhir/Element";
    /// `fhir:Element.extension`
    pub const FHIR_ELEMENT_EXTENSION: &str = "http://hl7.org/fhir/Element.extension";
    /// `fhir:Extension.url`
    pub const FHIR_EXTENSION_URL: &str = "http://hl7.org/fhir/Extension.url";
    /// `fhir:Reference.reference`
    pub const FHIR_REFERENCE_REFERENCE: &str = "http://hl7.org/fhir/Reference.reference";
    /// `fhir:CodeableConcept.coding`
    pub const FHIR_CODEABLE_CONCEPT_CODING: &str = "http://hl7.org/fhir/CodeableConcept.coding";
    /// `fhir:Coding.system`
    pub const FHIR_CODING_SYSTEM: &str = "http://hl7.org/fhir/Coding.system";
    /// `fhir:Coding.code`
    pub const FHIR_CODING_CODE: &str = "http://hl7.org/fhir/Coding.code";
    /// `fhir:Bundle.entry`
    pub const FHIR_BUNDLE_ENTRY: &str = "http://hl7.org/fhir/Bundle.entry";
    /// `fhir:Bundle.entry.fullUrl`
    pub const FHIR_BUNDLE_ENTRY_FULL_URL: &str = "http://hl7.org/fhir/Bundle.entry.fullUrl";
    /// `fhir:Bundle.entry.resource`
    pub const FHIR_BUNDLE_ENTRY_RESOURCE: &str = "http://hl7.org/fhir/Bundle.entry.resource";
    /// `fhir:Narrative.div`
    pub const FHIR_NARRATIVE_DIV: &str = "http://hl7.org/fhir/Narrative.div";

    /// Builds `fhir:<local>`.
    #[must_use]
    pub fn fhir(local: &str) -> String {
        format!("{FHIR}{local}")
    }

    /// Appends a dotted path segment: `dotted("…/Patient", "identifier")`
    /// yields `…/Patient.identifier`.
    #[must_use]
    pub fn dotted(base: &str, segment: &str) -> String {
        format!("{base}.{segment}")
    }

    /// Builds a numeric concept IRI such as `sct:74400008`.
    #[must_use]
    pub fn numeric(namespace: &str, id: impl std::fmt::Display) -> String {
        format!("{namespace}{id}")
    }
}

const DEFAULT_PREFIXES: &[(&str, &str)] = &[
    ("fhir", iris::FHIR),
    ("owl", iris::OWL),
    ("rdf", iris::RDF),
    ("rdfs", iris::RDFS),
    ("xsd", iris::XSD),
    ("w5", iris::W5),
    ("v2", iris::V2),
    ("v3", iris::V3),
    ("sct", iris::SNOMEDCT),
];

/// Prefix to namespace table, append-only.
///
/// Used for output prettification only; the graph itself always stores
/// absolute IRIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    by_prefix: BTreeMap<String, String>,
    next_anonymous: usize,
}

impl Namespaces {
    /// Creates a table holding the standard FHIR prefixes.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self::empty();
        for (prefix, ns) in DEFAULT_PREFIXES {
            table.bind(prefix, ns);
        }
        table
    }

    /// Creates a table with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            by_prefix: BTreeMap::new(),
            next_anonymous: 1,
        }
    }

    /// Binds `prefix` to `namespace` unless either is already bound.
    ///
    /// Returns true when a new binding was recorded.
    pub fn bind(&mut self, prefix: &str, namespace: &str) -> bool {
        if self.by_prefix.contains_key(prefix) || self.prefix_of(namespace).is_some() {
            return false;
        }
        self.by_prefix.insert(prefix.to_owned(), namespace.to_owned());
        true
    }

    /// Returns the prefix bound to `namespace`, assigning `ns1`, `ns2`, ...
    /// when the namespace has not been seen before.
    pub fn prefix_for(&mut self, namespace: &str) -> String {
        if let Some(prefix) = self.prefix_of(namespace) {
            return prefix.to_owned();
        }
        loop {
            let candidate = format!("ns{}", self.next_anonymous);
            self.next_anonymous += 1;
            if self.bind(&candidate, namespace) {
                return candidate;
            }
        }
    }

    /// Looks up the prefix already bound to `namespace`.
    #[must_use]
    pub fn prefix_of(&self, namespace: &str) -> Option<&str> {
        self.by_prefix
            .iter()
            .find(|(_, ns)| ns.as_str() == namespace)
            .map(|(prefix, _)| prefix.as_str())
    }

    /// Expands `prefix:local` to an absolute IRI.
    #[must_use]
    pub fn resolve(&self, prefix: &str, local: &str) -> Option<String> {
        self.by_prefix.get(prefix).map(|ns| format!("{ns}{local}"))
    }

    /// Compacts an IRI to `prefix:local` using the longest matching
    /// namespace whose remainder is a valid Turtle local name.
    #[must_use]
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.by_prefix
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .and_then(|(prefix, ns)| {
                let local = &iri[ns.len()..];
                is_local_name(local).then(|| format!("{prefix}:{local}"))
            })
    }

    /// Iterates bindings in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_prefix.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_prefix.len()
    }

    /// True when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_prefix.is_empty()
    }
}

impl Default for Namespaces {
    fn default() -> Self {
        Self::new()
    }
}

/// Conservative PN_LOCAL check: no escapes, no trailing dot.
fn is_local_name(local: &str) -> bool {
    if local.ends_with('.') || local.starts_with('.') || local.starts_with('-') {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_bound() {
        let ns = Namespaces::new();
        assert_eq!(ns.resolve("fhir", "Patient"), Some(iris::fhir("Patient")));
        assert_eq!(ns.prefix_of(iris::XSD), Some("xsd"));
    }

    #[test]
    fn bind_is_set_if_absent() {
        let mut ns = Namespaces::new();
        assert!(!ns.bind("fhir", "http://example.org/"));
        assert!(!ns.bind("other", iris::FHIR));
        assert!(ns.bind("loinc", iris::LOINC));
        assert_eq!(ns.resolve("loinc", "1234-5"), Some("http://loinc.org/owl#1234-5".into()));
    }

    #[test]
    fn anonymous_prefixes_are_numbered() {
        let mut ns = Namespaces::empty();
        assert_eq!(ns.prefix_for("http://a.example/"), "ns1");
        assert_eq!(ns.prefix_for("http://b.example/"), "ns2");
        assert_eq!(ns.prefix_for("http://a.example/"), "ns1");
    }

    #[test]
    fn compact_uses_longest_namespace() {
        let ns = Namespaces::new();
        assert_eq!(
            ns.compact("http://hl7.org/fhir/Patient.identifier").as_deref(),
            Some("fhir:Patient.identifier")
        );
        assert_eq!(ns.compact("http://hl7.org/fhir/v2/0203").as_deref(), Some("v2:0203"));
        assert_eq!(ns.compact("http://hl7.org/fhir/Patient/p1"), None);
        assert_eq!(ns.compact("http://example.org/x"), None);
    }

    #[test]
    fn dotted_and_numeric() {
        assert_eq!(
            iris::dotted(&iris::fhir("Patient"), "identifier"),
            iris::fhir("Patient.identifier")
        );
        assert_eq!(iris::numeric(iris::SNOMEDCT, 74400008), "http://snomed.info/id/74400008");
    }
}
