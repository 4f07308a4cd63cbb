//! Observation sample: coded concepts, a decimal quantity and a subject link.

/// Body weight observation with LOINC and SNOMED CT codings.
pub const OBSERVATION_JSON: &str = r#"{
  "resourceType": "Observation",
  "id": "obs1",
  "status": "final",
  "category": [
    {
      "coding": [
        {
          "system": "http://hl7.org/fhir/observation-category",
          "code": "vital-signs"
        }
      ]
    }
  ],
  "code": {
    "coding": [
      { "system": "http://loinc.org", "code": "29463-7", "display": "Body Weight" },
      { "system": "http://snomed.info/sct", "code": "27113001" },
      { "system": "http://hl7.org/fhir/v3/ObservationValue", "code": "H M" },
      { "system": "http://example.org/local", "code": "w" }
    ],
    "text": "Body weight"
  },
  "subject": { "reference": "Patient/pat1" },
  "effectiveDateTime": "2016-03-28",
  "valueQuantity": {
    "value": 67.50,
    "unit": "kg",
    "system": "http://unitsofmeasure.org",
    "code": "kg"
  }
}"#;

/// Expected mapping of [`OBSERVATION_JSON`] without the ontology header.
pub const OBSERVATION_TTL: &str = r#"
@prefix fhir: <http://hl7.org/fhir/> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .

<http://hl7.org/fhir/Observation/obs1>
    a fhir:Observation ;
    fhir:nodeRole fhir:treeRoot ;
    fhir:Resource.id [ fhir:value "obs1" ] ;
    fhir:Observation.status [ fhir:value "final" ] ;
    fhir:Observation.category [
        fhir:index 0 ;
        fhir:CodeableConcept.coding [
            fhir:index 0 ;
            a <http://hl7.org/fhir/observation-category/vital-signs> ;
            fhir:Coding.system [ fhir:value "http://hl7.org/fhir/observation-category" ] ;
            fhir:Coding.code [ fhir:value "vital-signs" ]
        ]
    ] ;
    fhir:Observation.code [
        fhir:CodeableConcept.coding [
            fhir:index 0 ;
            a <http://loinc.org/owl#29463-7> ;
            fhir:Coding.system [ fhir:value "http://loinc.org" ] ;
            fhir:Coding.code [ fhir:value "29463-7" ] ;
            fhir:Coding.display [ fhir:value "Body Weight" ]
        ] , [
            fhir:index 1 ;
            a <http://snomed.info/id/27113001> ;
            fhir:Coding.system [ fhir:value "http://snomed.info/sct" ] ;
            fhir:Coding.code [ fhir:value "27113001" ]
        ] , [
            fhir:index 2 ;
            a <http://hl7.org/fhir/v3/ObservationValue/H%20M> ;
            fhir:Coding.system [ fhir:value "http://hl7.org/fhir/v3/ObservationValue" ] ;
            fhir:Coding.code [ fhir:value "H M" ]
        ] , [
            fhir:index 3 ;
            fhir:Coding.system [ fhir:value "http://example.org/local" ] ;
            fhir:Coding.code [ fhir:value "w" ]
        ] ;
        fhir:CodeableConcept.text [ fhir:value "Body weight" ]
    ] ;
    fhir:Observation.subject [
        fhir:Reference.reference [ fhir:value "Patient/pat1" ] ;
        fhir:link <http://hl7.org/fhir/Patient/pat1>
    ] ;
    fhir:Observation.effectiveDateTime [ fhir:value "2016-03-28"^^xsd:date ] ;
    fhir:Observation.valueQuantity [
        fhir:Quantity.value [ fhir:value "67.50"^^xsd:decimal ] ;
        fhir:Quantity.unit [ fhir:value "kg" ] ;
        fhir:Quantity.system [ fhir:value "http://unitsofmeasure.org" ] ;
        fhir:Quantity.code [ fhir:value "kg" ]
    ] .

<http://hl7.org/fhir/Patient/pat1> a fhir:Patient .
"#;
