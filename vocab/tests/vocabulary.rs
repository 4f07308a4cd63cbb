//! Vocabulary queries against the compact FHIR schema fixture.

use fhirrdf_graph::iris;
use fhirrdf_test_helpers::{fixtures, vocabulary};
use fhirrdf_vocab::{ImageCache, NoCache, SchemaFormat, VocabError, Vocabulary, VocabularyOptions};

fn fhir(local: &str) -> String {
    iris::fhir(local)
}

#[test]
fn patient_fields_include_inherited_and_skip_w5() {
    let fields = vocabulary().fields_of(&fhir("Patient")).expect("Patient");
    assert_eq!(fields["identifier"], fhir("Patient.identifier"));
    assert_eq!(fields["id"], fhir("Resource.id"));
    assert_eq!(fields["text"], fhir("DomainResource.text"));
    assert_eq!(fields["extension"], fhir("DomainResource.extension"));
    assert!(!fields.contains_key("flag"));
}

#[test]
fn nearest_declaration_wins() {
    let fields = vocabulary().fields_of(&fhir("Organization")).expect("Organization");
    assert_eq!(fields["language"], fhir("Organization.language"));
    let patient = vocabulary().fields_of(&fhir("Patient")).expect("Patient");
    assert_eq!(patient["language"], fhir("Resource.language"));
}

#[test]
fn fields_of_is_repeatable() {
    let first = vocabulary().fields_of(&fhir("Observation")).expect("Observation");
    let second = vocabulary().fields_of(&fhir("Observation")).expect("Observation");
    assert_eq!(first, second);
}

#[test]
fn unknown_type_is_rejected() {
    let err = vocabulary().fields_of(&fhir("Spaceship")).err();
    assert!(matches!(err, Some(VocabError::UnrecognizedType(t)) if t.ends_with("Spaceship")));
    assert!(vocabulary().check_type(&fhir("Patient")).is_ok());
    assert!(!vocabulary().has_type(&fhir("Spaceship")));
}

#[test]
fn ranges_default_to_resource() {
    let vocab = vocabulary();
    assert_eq!(vocab.range_of(&fhir("Patient.birthDate")), fhir("date"));
    assert_eq!(vocab.range_of(&fhir("Bundle.entry")), fhir("Bundle.Entry"));
    assert_eq!(vocab.range_of(&fhir("nodeRole")), iris::FHIR_RESOURCE);
}

#[test]
fn atomic_fields() {
    let vocab = vocabulary();
    assert!(vocab.is_atomic(&fhir("Narrative.div")).expect("div"));
    assert!(vocab.is_atomic(iris::FHIR_NODE_ROLE).expect("nodeRole"));
    assert!(vocab.is_atomic(iris::FHIR_INDEX).expect("index"));
    assert!(!vocab.is_atomic(&fhir("Patient.gender")).expect("gender"));
    assert!(!vocab.is_atomic(&fhir("Extension.valueString")).expect("synthetic value"));
    assert!(matches!(
        vocab.is_atomic(&fhir("Patient.bogus")),
        Err(VocabError::UnrecognizedPredicate(_))
    ));
}

#[test]
fn primitives_and_their_datatypes() {
    let vocab = vocabulary();
    assert!(vocab.is_primitive(&fhir("string")));
    assert!(vocab.is_primitive(&fhir("unsignedInt")));
    assert!(!vocab.is_primitive(&fhir("xhtml")));
    assert!(!vocab.is_primitive(&fhir("HumanName")));
    assert_eq!(vocab.primitive_datatype(&fhir("string")), Some(iris::XSD_STRING));
    assert_eq!(vocab.primitive_datatype(&fhir("decimal")), Some(iris::XSD_DECIMAL));
    assert_eq!(vocab.primitive_datatype(&fhir("HumanName")), None);
}

#[test]
fn nostring_datatypes() {
    let vocab = vocabulary();
    assert_eq!(vocab.primitive_datatype_nostring(&fhir("string"), Some("x")), None);
    assert_eq!(vocab.primitive_datatype_nostring(&fhir("uri"), Some("urn:x")), None);
    assert_eq!(
        vocab.primitive_datatype_nostring(&fhir("integer"), Some("1")),
        Some("http://www.w3.org/2001/XMLSchema#integer")
    );
    assert_eq!(
        vocab.primitive_datatype_nostring(&fhir("date"), Some("1974")),
        Some(iris::XSD_G_YEAR)
    );
    assert_eq!(
        vocab.primitive_datatype_nostring(&fhir("date"), Some("1974-12")),
        Some(iris::XSD_G_YEAR_MONTH)
    );
    assert_eq!(
        vocab.primitive_datatype_nostring(&fhir("dateTime"), Some("2016-03-28")),
        Some(iris::XSD_DATE)
    );
    assert_eq!(
        vocab.primitive_datatype_nostring(&fhir("instant"), Some("2016-03-28T09:30:00Z")),
        Some(iris::XSD_DATE_TIME)
    );
    assert_eq!(
        vocab.primitive_datatype_nostring(&fhir("dateTime"), Some("")),
        Some(iris::XSD_DATE_TIME)
    );
    assert_eq!(
        vocab.primitive_datatype_nostring(&fhir("dateTime"), None),
        Some(iris::XSD_DATE_TIME)
    );
}

#[test]
fn options_turn_off_narrowing() {
    let vocab = Vocabulary::from_turtle(
        fixtures::MINI_FHIR_TTL,
        VocabularyOptions {
            fhir_dates: false,
            fhir_oids: false,
        },
    )
    .expect("fixture parses");
    assert_eq!(
        vocab.primitive_datatype_nostring(&fhir("date"), Some("1974")),
        Some(iris::XSD_DATE_TIME)
    );
    assert_eq!(
        vocab.primitive_datatype_nostring(&fhir("uri"), Some("urn:x")),
        Some(iris::XSD_ANY_URI)
    );
}

#[test]
fn polymorphic_value_tags() {
    let vocab = vocabulary();
    assert_eq!(vocab.value_field_for("valueDateTime").expect("dateTime"), fhir("dateTime"));
    assert_eq!(vocab.value_field_for("valueQuantity").expect("Quantity"), fhir("Quantity"));
    assert_eq!(vocab.value_field_for("valueBoolean").expect("boolean"), fhir("boolean"));
    assert!(matches!(
        vocab.value_field_for("valueWidget"),
        Err(VocabError::UnrecognizedType(_))
    ));
}

#[test]
fn load_reads_a_file_and_caches_its_image() {
    let dir = tempfile::tempdir().expect("temp dir");
    let schema = dir.path().join("fhir.ttl");
    std::fs::write(&schema, fixtures::MINI_FHIR_TTL).expect("write schema");
    let location = schema.to_str().expect("utf-8 path");
    let mut cache = ImageCache::open(dir.path().join("cache")).expect("open cache");

    let first = Vocabulary::load(
        location,
        SchemaFormat::Turtle,
        &mut cache,
        VocabularyOptions::default(),
    )
    .expect("first load");
    assert!(!first.from_cache());
    assert_eq!(cache.len(), 1);

    let second = Vocabulary::load(
        location,
        SchemaFormat::Turtle,
        &mut cache,
        VocabularyOptions::default(),
    )
    .expect("second load");
    assert!(second.from_cache());
    assert_eq!(first.graph(), second.graph());
    assert_eq!(
        second.fields_of(&fhir("Patient")).expect("Patient"),
        first.fields_of(&fhir("Patient")).expect("Patient")
    );
}

#[test]
fn load_without_cache_and_missing_file() {
    let mut cache = NoCache;
    let err = Vocabulary::load(
        "/nonexistent/fhir.ttl",
        SchemaFormat::Turtle,
        &mut cache,
        VocabularyOptions::default(),
    )
    .err();
    assert!(matches!(err, Some(VocabError::Location(_))));
}
