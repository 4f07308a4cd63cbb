//! Patient sample: identifiers, names, a dated extension and a reference.

/// A Patient with list fields, a `_birthDate` extension and an organization
/// reference.
pub const PATIENT_JSON: &str = r#"{
  "resourceType": "Patient",
  "id": "pat1",
  "meta": {
    "versionId": "2",
    "lastUpdated": "2017-04-03T15:12:02+00:00"
  },
  "text": {
    "status": "generated",
    "div": "<div xmlns=\"http://www.w3.org/1999/xhtml\">Patient Donald Duck</div>"
  },
  "identifier": [
    {
      "use": "usual",
      "system": "urn:oid:0.1.2.3.4.5.6.7",
      "value": "654321"
    }
  ],
  "active": true,
  "name": [
    {
      "use": "official",
      "family": "Donald",
      "given": ["Duck", "D"]
    }
  ],
  "gender": "male",
  "birthDate": "1974-12",
  "_birthDate": {
    "extension": [
      {
        "url": "http://hl7.org/fhir/StructureDefinition/patient-birthTime",
        "valueDateTime": "1974-12-25T14:35:45-05:00"
      }
    ]
  },
  "managingOrganization": {
    "reference": "Organization/1",
    "display": "ACME Healthcare, Inc"
  }
}"#;

/// Expected mapping of [`PATIENT_JSON`] with the ontology header and the
/// default base `http://hl7.org/fhir/`.
pub const PATIENT_TTL: &str = r#"
@prefix fhir: <http://hl7.org/fhir/> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .

<http://hl7.org/fhir/Patient/pat1.ttl>
    a owl:Ontology ;
    owl:imports fhir:fhir.ttl ;
    owl:versionIRI <http://hl7.org/fhir/Patient/pat1.ttl/_history/2> .

<http://hl7.org/fhir/Patient/pat1>
    a fhir:Patient ;
    fhir:nodeRole fhir:treeRoot ;
    fhir:Resource.id [ fhir:value "pat1" ] ;
    fhir:Resource.meta [
        fhir:Meta.versionId [ fhir:value "2" ] ;
        fhir:Meta.lastUpdated [ fhir:value "2017-04-03T15:12:02+00:00"^^xsd:dateTime ]
    ] ;
    fhir:DomainResource.text [
        fhir:Narrative.status [ fhir:value "generated" ] ;
        fhir:Narrative.div "<div xmlns=\"http://www.w3.org/1999/xhtml\">Patient Donald Duck</div>"
    ] ;
    fhir:Patient.identifier [
        fhir:index 0 ;
        fhir:Identifier.use [ fhir:value "usual" ] ;
        fhir:Identifier.system [ fhir:value "urn:oid:0.1.2.3.4.5.6.7" ] ;
        fhir:Identifier.value [ fhir:value "654321" ]
    ] ;
    fhir:Patient.active [ fhir:value true ] ;
    fhir:Patient.name [
        fhir:index 0 ;
        fhir:HumanName.use [ fhir:value "official" ] ;
        fhir:HumanName.family [ fhir:value "Donald" ] ;
        fhir:HumanName.given [ fhir:index 0 ; fhir:value "Duck" ] , [ fhir:index 1 ; fhir:value "D" ]
    ] ;
    fhir:Patient.gender [ fhir:value "male" ] ;
    fhir:Patient.birthDate [
        fhir:value "1974-12"^^xsd:gYearMonth ;
        fhir:Element.extension [
            fhir:index 0 ;
            fhir:Extension.url [ fhir:value "http://hl7.org/fhir/StructureDefinition/patient-birthTime" ] ;
            fhir:Extension.valueDateTime [ fhir:value "1974-12-25T14:35:45-05:00"^^xsd:dateTime ]
        ]
    ] ;
    fhir:Patient.managingOrganization [
        fhir:Reference.reference [ fhir:value "Organization/1" ] ;
        fhir:link <http://hl7.org/fhir/Organization/1> ;
        fhir:Reference.display [ fhir:value "ACME Healthcare, Inc" ]
    ] .

<http://hl7.org/fhir/Organization/1> a fhir:Organization .
"#;

/// A Patient whose list entries carry aligned `_given` extensions and whose
/// `gender` is known only through an extension.
pub const PATIENT_EXTENSIONS_JSON: &str = r#"{
  "resourceType": "Patient",
  "id": "pat2",
  "name": [
    {
      "given": ["Alice", "B"],
      "_given": [
        null,
        {
          "extension": [
            { "url": "http://example.org/initial", "valueBoolean": true }
          ]
        }
      ]
    }
  ],
  "_gender": {
    "extension": [
      { "url": "http://example.org/data-absent-reason", "valueCode": "asked" }
    ]
  },
  "_active": {
    "fhir_comments": ["no value recorded"]
  }
}"#;

/// A Patient without an `id`; the mapper mints one.
pub const PATIENT_NO_ID_JSON: &str = r#"{
  "resourceType": "Patient",
  "gender": "female"
}"#;

/// A document with no `resourceType`.
pub const NOT_A_RESOURCE_JSON: &str = r#"{
  "id": "x1",
  "gender": "female"
}"#;
