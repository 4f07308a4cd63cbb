//! Bundle and collection samples, including a two-page search result.

/// A transaction-style Bundle whose entries carry `fullUrl` subjects.
pub const BUNDLE_JSON: &str = r#"{
  "resourceType": "Bundle",
  "id": "b1",
  "type": "collection",
  "entry": [
    {
      "fullUrl": "http://example.org/fhir/Patient/a",
      "resource": { "resourceType": "Patient", "id": "a", "gender": "female" },
      "search": { "mode": "match" }
    },
    {
      "fullUrl": "http://example.org/fhir/Organization/o",
      "resource": { "resourceType": "Organization", "id": "o", "name": "Acme" }
    }
  ]
}"#;

/// Expected mapping of [`BUNDLE_JSON`] without the ontology header.
pub const BUNDLE_TTL: &str = r#"
@prefix fhir: <http://hl7.org/fhir/> .

<http://hl7.org/fhir/Bundle/b1>
    a fhir:Bundle ;
    fhir:nodeRole fhir:treeRoot ;
    fhir:Resource.id [ fhir:value "b1" ] ;
    fhir:Bundle.type [ fhir:value "collection" ] ;
    fhir:Bundle.entry [
        fhir:index 0 ;
        fhir:Bundle.entry.fullUrl [ fhir:value "http://example.org/fhir/Patient/a" ] ;
        fhir:Bundle.entry.resource <http://example.org/fhir/Patient/a> ;
        fhir:Bundle.entry.search [ fhir:Bundle.entry.search.mode [ fhir:value "match" ] ]
    ] , [
        fhir:index 1 ;
        fhir:Bundle.entry.fullUrl [ fhir:value "http://example.org/fhir/Organization/o" ] ;
        fhir:Bundle.entry.resource <http://example.org/fhir/Organization/o>
    ] .

<http://example.org/fhir/Patient/a>
    a fhir:Patient ;
    fhir:Resource.id [ fhir:value "a" ] ;
    fhir:Patient.gender [ fhir:value "female" ] .

<http://example.org/fhir/Organization/o>
    a fhir:Organization ;
    fhir:Resource.id [ fhir:value "o" ] ;
    fhir:Organization.name [ fhir:value "Acme" ] .
"#;

/// A header-less collection: a bare `entry` list of resources.
pub const COLLECTION_JSON: &str = r#"{
  "entry": [
    { "resource": { "resourceType": "Patient", "id": "c1", "gender": "male" } },
    { "resource": { "id": "broken" } },
    { "resource": { "resourceType": "Organization", "id": "c2", "name": "Clinic" } }
  ]
}"#;

/// First page of a paginated search result; links to [`SEARCH_PAGE_2_JSON`].
pub const SEARCH_PAGE_1_JSON: &str = r#"{
  "resourceType": "Bundle",
  "type": "searchset",
  "link": [
    { "relation": "self", "url": "page1.json" },
    { "relation": "next", "url": "page2.json" }
  ],
  "entry": [
    { "resource": { "resourceType": "Patient", "id": "s1", "gender": "male" } }
  ]
}"#;

/// Last page of the search result.
pub const SEARCH_PAGE_2_JSON: &str = r#"{
  "resourceType": "Bundle",
  "type": "searchset",
  "link": [
    { "relation": "self", "url": "page2.json" }
  ],
  "entry": [
    { "resource": { "resourceType": "Patient", "id": "s2", "gender": "female" } }
  ]
}"#;

/// An `entry` list whose first element holds no resource.
pub const NOT_A_COLLECTION_JSON: &str = r#"{
  "entry": [ { "fullUrl": "http://example.org/x" } ]
}"#;
