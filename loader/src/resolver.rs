//! Reference and code-system classification.
//!
//! References such as `Patient/p1` become `fhir:link` targets with an
//! inferred resource type. Codings whose system is recognized get a minted
//! concept IRI used as an extra type arc.

use std::sync::OnceLock;

use fhirrdf_graph::{iris, Namespaces};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// Resource type names accepted in a resource reference (FHIR STU3).
pub const RESOURCE_TYPES: &[&str] = &[
    "Account", "ActivityDefinition", "AdverseEvent", "AllergyIntolerance", "Appointment",
    "AppointmentResponse", "AuditEvent", "Basic", "Binary", "BodyStructure", "Bundle",
    "CapabilityStatement", "CarePlan", "CareTeam", "ChargeItem", "Claim", "ClaimResponse",
    "ClinicalImpression", "CodeSystem", "Communication", "CommunicationRequest",
    "CompartmentDefinition", "Composition", "ConceptMap", "Condition", "Consent", "Contract",
    "Coverage", "DetectedIssue", "Device", "DeviceComponent", "DeviceMetric", "DeviceRequest",
    "DeviceUseStatement", "DiagnosticReport", "DocumentManifest", "DocumentReference",
    "EligibilityRequest", "EligibilityResponse", "Encounter", "Endpoint", "EnrollmentRequest",
    "EnrollmentResponse", "EpisodeOfCare", "EventDefinition", "ExpansionProfile",
    "ExplanationOfBenefit", "FamilyMemberHistory", "Flag", "Goal", "GraphDefinition", "Group",
    "GuidanceResponse", "HealthcareService", "ImagingManifest", "ImagingStudy", "Immunization",
    "ImmunizationRecommendation", "ImplementationGuide", "Library", "Linkage", "List",
    "Location", "Measure", "MeasureReport", "Media", "Medication", "MedicationAdministration",
    "MedicationDispense", "MedicationRequest", "MedicationStatement", "MessageDefinition",
    "MessageHeader", "NamingSystem", "NutritionOrder", "Observation", "OperationDefinition",
    "OperationOutcome", "Organization", "Patient", "PaymentNotice", "PaymentReconciliation",
    "Person", "PlanDefinition", "Practitioner", "PractitionerRole", "Procedure",
    "ProcedureRequest", "ProcessRequest", "ProcessResponse", "Provenance", "Questionnaire",
    "QuestionnaireResponse", "RelatedPerson", "RequestGroup", "ResearchStudy",
    "ResearchSubject", "RiskAssessment", "Schedule", "SearchParameter", "Sequence",
    "ServiceDefinition", "Slot", "Specimen", "StructureDefinition", "StructureMap",
    "Subscription", "Substance", "SupplyDelivery", "SupplyRequest", "Task", "TestReport",
    "TestScript", "ValueSet", "VisionPrescription",
];

/// Replacement for narrative `div`s dropped by `replace_narrative_text`.
pub const REPLACED_NARRATIVE_TEXT: &str =
    r#"<div xmlns="http://www.w3.org/1999/xhtml">(removed)</div>"#;

const GROUP_BASE: usize = 1;
const GROUP_TYPE: usize = 4;
const GROUP_ID: usize = 5;
const GROUP_VERSION: usize = 7;

/// Bytes left unescaped by [`quote`]: alphanumerics and `_ . - ~ /`.
const QUOTE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

fn compiled(
    cell: &'static OnceLock<Option<Regex>>,
    pattern: impl FnOnce() -> String,
) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(&pattern()).ok()).as_ref()
}

fn resource_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&RE, || {
        format!(
            r"^((http|https)://([A-Za-z0-9.:%$]*/)*)?({})/([A-Za-z0-9.-]{{1,64}})(/_history/([A-Za-z0-9.-]{{1,64}}))?$",
            RESOURCE_TYPES.join("|")
        )
    })
}

/// The parts of a `[base]Type/id[/_history/version]` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference<'a> {
    /// `http(s)://...` prefix up to and including the last `/`, if present.
    pub base: Option<&'a str>,
    /// Resource type name.
    pub resource_type: &'a str,
    /// Logical id.
    pub id: &'a str,
    /// `_history` version, if present.
    pub version: Option<&'a str>,
}

/// Matches `text` against the resource reference pattern.
#[must_use]
pub fn parse_resource_reference(text: &str) -> Option<ResourceReference<'_>> {
    let caps = resource_re()?.captures(text)?;
    Some(ResourceReference {
        base: caps.get(GROUP_BASE).map(|m| m.as_str()),
        resource_type: caps.get(GROUP_TYPE)?.as_str(),
        id: caps.get(GROUP_ID)?.as_str(),
        version: caps.get(GROUP_VERSION).map(|m| m.as_str()),
    })
}

/// Target of a resolved reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    /// Absolute IRI of the referenced resource.
    pub uri: String,
    /// Resource type tag (`Resource` when it cannot be inferred).
    pub resource_type: String,
}

/// Resolves a `Reference.reference` value against `base_uri`.
///
/// Local anchors (`#...`), absolute paths and anything else that is not a
/// recognizable reference give `None`.
#[must_use]
pub fn classify_reference(text: &str, base_uri: &str) -> Option<ResolvedReference> {
    if let Some(reference) = parse_resource_reference(text) {
        let uri = if reference.base.is_some() {
            text.to_owned()
        } else {
            format!("{base_uri}{}", quote(text))
        };
        return Some(ResolvedReference {
            uri,
            resource_type: reference.resource_type.to_owned(),
        });
    }
    if text.contains("://") {
        return Some(ResolvedReference {
            uri: text.to_owned(),
            resource_type: "Resource".to_owned(),
        });
    }
    if !base_uri.is_empty() && !text.is_empty() && !text.starts_with(['#', '/']) {
        let resource_type = match text.split_once('/') {
            Some((head, _)) => head,
            None => "Resource",
        };
        return Some(ResolvedReference {
            uri: format!("{base_uri}{}", quote(text)),
            resource_type: resource_type.to_owned(),
        });
    }
    None
}

/// Percent-encodes everything but alphanumerics and `_ . - ~ /`.
#[must_use]
pub fn quote(text: &str) -> String {
    utf8_percent_encode(text, QUOTE_SET).to_string()
}

#[derive(Debug, Clone, Copy)]
enum SystemPattern {
    Exact(&'static str),
    Family(&'static str),
}

#[derive(Debug, Clone, Copy)]
enum Minter {
    Loinc,
    Snomed,
    Hl7V3,
    Hl7V2,
    Hl7Fhir,
}

const CODE_SYSTEMS: [(SystemPattern, Minter); 5] = [
    (SystemPattern::Exact(iris::LOINC_SYSTEM), Minter::Loinc),
    (SystemPattern::Exact(iris::SCT), Minter::Snomed),
    (SystemPattern::Family(r"^http://hl7\.org/fhir/v3"), Minter::Hl7V3),
    (SystemPattern::Family(r"^http://hl7\.org/fhir/v2"), Minter::Hl7V2),
    (SystemPattern::Family(r"^http://hl7\.org/fhir/[a-z-]+"), Minter::Hl7Fhir),
];

fn family_re(index: usize, pattern: &'static str) -> Option<&'static Regex> {
    static RES: [OnceLock<Option<Regex>>; CODE_SYSTEMS.len()] =
        [OnceLock::new(), OnceLock::new(), OnceLock::new(), OnceLock::new(), OnceLock::new()];
    compiled(RES.get(index)?, || pattern.to_owned())
}

impl SystemPattern {
    fn matches(self, index: usize, system: &str) -> bool {
        match self {
            SystemPattern::Exact(s) => s == system,
            SystemPattern::Family(p) => family_re(index, p).is_some_and(|re| re.is_match(system)),
        }
    }
}

impl Minter {
    fn mint(self, system: &str, code: &str, namespaces: &mut Namespaces) -> Option<String> {
        match self {
            Minter::Loinc => {
                register(namespaces, "loinc", iris::LOINC);
                Some(format!("{}{code}", iris::LOINC))
            }
            Minter::Snomed => {
                register(namespaces, "sct", iris::SNOMEDCT);
                (!code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()))
                    .then(|| iris::numeric(iris::SNOMEDCT, code))
            }
            Minter::Hl7V3 => {
                let name = system.trim_start_matches(iris::V3);
                register(namespaces, &format!("v3-{name}"), &format!("{system}/"));
                Some(format!("{system}/{code}"))
            }
            Minter::Hl7V2 => {
                let name = system.trim_start_matches(iris::V2);
                register(namespaces, &format!("v2-{name}"), &format!("{system}/"));
                Some(format!("{system}/{code}"))
            }
            Minter::Hl7Fhir => {
                let name = system.trim_start_matches(iris::FHIR).replace('/', "_");
                register(namespaces, &name, &format!("{system}/"));
                Some(format!("{system}/{code}"))
            }
        }
    }
}

/// Binds `prefix` to `namespace`; when the prefix is taken by another
/// namespace, the namespace gets the next `nsN` prefix instead.
fn register(namespaces: &mut Namespaces, prefix: &str, namespace: &str) {
    if !namespaces.bind(prefix, namespace) {
        namespaces.prefix_for(namespace);
    }
}

/// Mints a concept IRI for `code` in a recognized coding `system`.
///
/// The first table entry whose system matches decides the outcome, even
/// when it declines the code (SNOMED CT codes must be numeric). A prefix
/// for the system is bound in `namespaces` if not already present.
pub fn classify_code(system: &str, code: &str, namespaces: &mut Namespaces) -> Option<String> {
    let (_, minter) = CODE_SYSTEMS
        .iter()
        .enumerate()
        .find(|(i, (pattern, _))| pattern.matches(*i, system))
        .map(|(_, entry)| *entry)?;
    minter.mint(system, &quote(code), namespaces)
}

/// Splits a resource IRI into `(id, id_source)`.
///
/// A FHIR reference gives its id (prefixed with `Type/` when
/// `include_resource` is set) and its base; anything else is split at the
/// last `#` or `/`, and a string with neither has source `UNKNOWN`.
#[must_use]
pub fn uri_to_id_and_source(uri: &str, include_resource: bool) -> (String, String) {
    if let Some(reference) = parse_resource_reference(uri) {
        let id = if include_resource {
            format!("{}/{}", reference.resource_type, reference.id)
        } else {
            reference.id.to_owned()
        };
        return (id, reference.base.unwrap_or_default().to_owned());
    }
    match uri.rsplit_once('#').or_else(|| uri.rsplit_once('/')) {
        Some((source, id)) => (id.to_owned(), source.to_owned()),
        None => (uri.to_owned(), "UNKNOWN".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://hl7.org/fhir/";

    #[test]
    fn reference_pattern_groups() {
        let r = parse_resource_reference("http://hl7.org/fhir/Patient/p1/_history/3")
            .expect("reference");
        assert_eq!(r.base, Some("http://hl7.org/fhir/"));
        assert_eq!(r.resource_type, "Patient");
        assert_eq!(r.id, "p1");
        assert_eq!(r.version, Some("3"));

        let r = parse_resource_reference("Observation/obs.1").expect("relative reference");
        assert_eq!(r.base, None);
        assert_eq!(r.version, None);
    }

    #[test]
    fn reference_pattern_rejects() {
        assert!(parse_resource_reference("http://fhir.org/hl7/Patient/sample_12345").is_none());
        assert!(parse_resource_reference("Account").is_none());
        assert!(parse_resource_reference("Spaceship/1").is_none());
        let long = format!("Patient/{}", "a".repeat(65));
        assert!(parse_resource_reference(&long).is_none());
        let max = format!("Patient/{}", "a".repeat(64));
        assert!(parse_resource_reference(&max).is_some());
    }

    #[test]
    fn relative_reference_resolves_against_base() {
        let r = classify_reference("Patient/p1", BASE).expect("resolved");
        assert_eq!(r.uri, "http://hl7.org/fhir/Patient/p1");
        assert_eq!(r.resource_type, "Patient");
    }

    #[test]
    fn absolute_reference_is_kept() {
        let r = classify_reference("http://other.org/Patient/p1", BASE).expect("resolved");
        assert_eq!(r.uri, "http://other.org/Patient/p1");
        assert_eq!(r.resource_type, "Patient");

        let r = classify_reference("https://example.org/fhir/thing", BASE).expect("resolved");
        assert_eq!(r.resource_type, "Resource");
    }

    #[test]
    fn other_relative_shapes() {
        let r = classify_reference("Widget/a b", BASE).expect("resolved");
        assert_eq!(r.uri, "http://hl7.org/fhir/Widget/a%20b");
        assert_eq!(r.resource_type, "Widget");

        let r = classify_reference("thing", BASE).expect("resolved");
        assert_eq!(r.resource_type, "Resource");

        assert_eq!(classify_reference("#contained", BASE), None);
        assert_eq!(classify_reference("/absolute", BASE), None);
        assert_eq!(classify_reference("thing", ""), None);
    }

    #[test]
    fn quote_keeps_path_characters() {
        assert_eq!(quote("a/b_c.d-e~f"), "a/b_c.d-e~f");
        assert_eq!(quote("H M"), "H%20M");
        assert_eq!(quote("x#y"), "x%23y");
    }

    #[test]
    fn known_code_systems() {
        let mut ns = Namespaces::new();
        assert_eq!(
            classify_code("http://loinc.org", "29463-7", &mut ns).as_deref(),
            Some("http://loinc.org/owl#29463-7")
        );
        assert_eq!(ns.prefix_of(iris::LOINC), Some("loinc"));
        assert_eq!(
            classify_code("http://snomed.info/sct", "27113001", &mut ns).as_deref(),
            Some("http://snomed.info/id/27113001")
        );
        assert_eq!(classify_code("http://snomed.info/sct", "27113001x", &mut ns), None);
        assert_eq!(
            classify_code("http://hl7.org/fhir/v3/MaritalStatus", "M", &mut ns).as_deref(),
            Some("http://hl7.org/fhir/v3/MaritalStatus/M")
        );
        assert_eq!(
            ns.prefix_of("http://hl7.org/fhir/v3/MaritalStatus/"),
            Some("v3-MaritalStatus")
        );
        assert_eq!(
            classify_code("http://hl7.org/fhir/v2/0203", "MR", &mut ns).as_deref(),
            Some("http://hl7.org/fhir/v2/0203/MR")
        );
        assert_eq!(
            classify_code("http://hl7.org/fhir/observation-category", "vital-signs", &mut ns)
                .as_deref(),
            Some("http://hl7.org/fhir/observation-category/vital-signs")
        );
        assert_eq!(
            ns.prefix_of("http://hl7.org/fhir/observation-category/"),
            Some("observation-category")
        );
    }

    #[test]
    fn taken_prefixes_fall_back_to_numbered_ones() {
        let mut ns = Namespaces::new();
        assert!(ns.bind("v3-MaritalStatus", "http://example.org/marital/"));
        assert_eq!(
            classify_code("http://hl7.org/fhir/v3/MaritalStatus", "M", &mut ns).as_deref(),
            Some("http://hl7.org/fhir/v3/MaritalStatus/M")
        );
        assert_eq!(ns.prefix_of("http://hl7.org/fhir/v3/MaritalStatus/"), Some("ns1"));
        assert_eq!(
            ns.prefix_of("http://example.org/marital/"),
            Some("v3-MaritalStatus")
        );
    }

    #[test]
    fn unknown_code_systems() {
        let mut ns = Namespaces::new();
        let before = ns.len();
        assert_eq!(classify_code("http://example.org/local", "w", &mut ns), None);
        assert_eq!(classify_code("urn:oid:1.2.3", "w", &mut ns), None);
        assert_eq!(ns.len(), before);
    }

    #[test]
    fn uri_splitting() {
        assert_eq!(
            uri_to_id_and_source("http://hl7.org/fhir/Patient/p1", false),
            ("p1".to_owned(), "http://hl7.org/fhir/".to_owned())
        );
        assert_eq!(
            uri_to_id_and_source("http://hl7.org/fhir/Patient/p1", true),
            ("Patient/p1".to_owned(), "http://hl7.org/fhir/".to_owned())
        );
        assert_eq!(
            uri_to_id_and_source("http://example.org/ids#123", false),
            ("123".to_owned(), "http://example.org/ids".to_owned())
        );
        assert_eq!(
            uri_to_id_and_source("plain", false),
            ("plain".to_owned(), "UNKNOWN".to_owned())
        );
    }
}
