//! A compact FHIR metadata vocabulary.
//!
//! Mirrors the shape of the published `fhir.ttl`: classes with
//! `rdfs:subClassOf` chains, fields as properties with `rdfs:domain` and
//! `rdfs:range`, primitives carrying an `owl:Restriction` on `fhir:value`.
//! `date`, `dateTime` and `instant` all restrict to `xsd:dateTime`, which is
//! what the date-precision narrowing keys on.

/// Metadata vocabulary covering the resources used by the sample documents.
pub const MINI_FHIR_TTL: &str = r#"
@prefix fhir: <http://hl7.org/fhir/> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix w5:   <http://hl7.org/fhir/w5#> .

# Node-level properties
fhir:nodeRole a owl:ObjectProperty .
fhir:treeRoot a owl:NamedIndividual .
fhir:index a owl:DatatypeProperty ; rdfs:range xsd:integer .
fhir:value a owl:DatatypeProperty .
fhir:link a owl:ObjectProperty .

# Classification hierarchy (never traversed for fields)
w5:administrative.individual a owl:Class ; rdfs:subClassOf w5:administrative .
w5:administrative a owl:Class .
w5:administrative.individual.flag a owl:ObjectProperty ;
    rdfs:domain w5:administrative.individual ;
    rdfs:range fhir:string .

# Base types
fhir:Element a owl:Class .
fhir:Element.id a owl:ObjectProperty ; rdfs:domain fhir:Element ; rdfs:range fhir:string .
fhir:Element.extension a owl:ObjectProperty ; rdfs:domain fhir:Element ; rdfs:range fhir:Extension .

fhir:BackboneElement a owl:Class ; rdfs:subClassOf fhir:Element .
fhir:BackboneElement.modifierExtension a owl:ObjectProperty ;
    rdfs:domain fhir:BackboneElement ; rdfs:range fhir:Extension .

fhir:Primitive a owl:Class ; rdfs:subClassOf fhir:Element .

fhir:Resource a owl:Class .
fhir:Resource.id a owl:ObjectProperty ; rdfs:domain fhir:Resource ; rdfs:range fhir:id .
fhir:Resource.meta a owl:ObjectProperty ; rdfs:domain fhir:Resource ; rdfs:range fhir:Meta .
fhir:Resource.implicitRules a owl:ObjectProperty ; rdfs:domain fhir:Resource ; rdfs:range fhir:uri .
fhir:Resource.language a owl:ObjectProperty ; rdfs:domain fhir:Resource ; rdfs:range fhir:code .

fhir:DomainResource a owl:Class ; rdfs:subClassOf fhir:Resource .
fhir:DomainResource.text a owl:ObjectProperty ; rdfs:domain fhir:DomainResource ; rdfs:range fhir:Narrative .
fhir:DomainResource.contained a owl:ObjectProperty ; rdfs:domain fhir:DomainResource ; rdfs:range fhir:Resource .
fhir:DomainResource.extension a owl:ObjectProperty ; rdfs:domain fhir:DomainResource ; rdfs:range fhir:Extension .

# Primitive types
fhir:string a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:string ] .
fhir:code a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:string ] .
fhir:id a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:string ] .
fhir:markdown a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:string ] .
fhir:uri a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:anyURI ] .
fhir:oid a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:anyURI ] .
fhir:boolean a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:boolean ] .
fhir:decimal a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:decimal ] .
fhir:integer a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:integer ] .
fhir:unsignedInt a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:nonNegativeInteger ] .
fhir:positiveInt a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:positiveInteger ] .
fhir:date a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:dateTime ] .
fhir:dateTime a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:dateTime ] .
fhir:instant a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:dateTime ] .
fhir:time a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:time ] .
fhir:base64Binary a owl:Class ; rdfs:subClassOf fhir:Primitive ,
    [ a owl:Restriction ; owl:onProperty fhir:value ; owl:allValuesFrom xsd:base64Binary ] .
fhir:xhtml a owl:Class ; rdfs:subClassOf fhir:Element .

# Data types
fhir:Extension a owl:Class ; rdfs:subClassOf fhir:Element .
fhir:Extension.url a owl:ObjectProperty ; rdfs:domain fhir:Extension ; rdfs:range fhir:uri .
fhir:Extension.value a owl:ObjectProperty ; rdfs:domain fhir:Extension ; rdfs:range fhir:Element .

fhir:Narrative a owl:Class ; rdfs:subClassOf fhir:Element .
fhir:Narrative.status a owl:ObjectProperty ; rdfs:domain fhir:Narrative ; rdfs:range fhir:code .
fhir:Narrative.div a owl:DatatypeProperty ; rdfs:domain fhir:Narrative ; rdfs:range fhir:xhtml .

fhir:Meta a owl:Class ; rdfs:subClassOf fhir:Element .
fhir:Meta.versionId a owl:ObjectProperty ; rdfs:domain fhir:Meta ; rdfs:range fhir:id .
fhir:Meta.lastUpdated a owl:ObjectProperty ; rdfs:domain fhir:Meta ; rdfs:range fhir:instant .
fhir:Meta.profile a owl:ObjectProperty ; rdfs:domain fhir:Meta ; rdfs:range fhir:uri .
fhir:Meta.tag a owl:ObjectProperty ; rdfs:domain fhir:Meta ; rdfs:range fhir:Coding .

fhir:Identifier a owl:Class ; rdfs:subClassOf fhir:Element .
fhir:Identifier.use a owl:ObjectProperty ; rdfs:domain fhir:Identifier ; rdfs:range fhir:code .
fhir:Identifier.type a owl:ObjectProperty ; rdfs:domain fhir:Identifier ; rdfs:range fhir:CodeableConcept .
fhir:Identifier.system a owl:ObjectProperty ; rdfs:domain fhir:Identifier ; rdfs:range fhir:uri .
fhir:Identifier.value a owl:ObjectProperty ; rdfs:domain fhir:Identifier ; rdfs:range fhir:string .
fhir:Identifier.period a owl:ObjectProperty ; rdfs:domain fhir:Identifier ; rdfs:range fhir:Period .
fhir:Identifier.assigner a owl:ObjectProperty ; rdfs:domain fhir:Identifier ; rdfs:range fhir:Reference .

fhir:Period a owl:Class ; rdfs:subClassOf fhir:Element .
fhir:Period.start a owl:ObjectProperty ; rdfs:domain fhir:Period ; rdfs:range fhir:dateTime .
fhir:Period.end a owl:ObjectProperty ; rdfs:domain fhir:Period ; rdfs:range fhir:dateTime .

fhir:Reference a owl:Class ; rdfs:subClassOf fhir:Element .
fhir:Reference.reference a owl:ObjectProperty ; rdfs:domain fhir:Reference ; rdfs:range fhir:string .
fhir:Reference.identifier a owl:ObjectProperty ; rdfs:domain fhir:Reference ; rdfs:range fhir:Identifier .
fhir:Reference.display a owl:ObjectProperty ; rdfs:domain fhir:Reference ; rdfs:range fhir:string .

fhir:Coding a owl:Class ; rdfs:subClassOf fhir:Element .
fhir:Coding.system a owl:ObjectProperty ; rdfs:domain fhir:Coding ; rdfs:range fhir:uri .
fhir:Coding.version a owl:ObjectProperty ; rdfs:domain fhir:Coding ; rdfs:range fhir:string .
fhir:Coding.code a owl:ObjectProperty ; rdfs:domain fhir:Coding ; rdfs:range fhir:code .
fhir:Coding.display a owl:ObjectProperty ; rdfs:domain fhir:Coding ; rdfs:range fhir:string .
fhir:Coding.userSelected a owl:ObjectProperty ; rdfs:domain fhir:Coding ; rdfs:range fhir:boolean .

fhir:CodeableConcept a owl:Class ; rdfs:subClassOf fhir:Element .
fhir:CodeableConcept.coding a owl:ObjectProperty ; rdfs:domain fhir:CodeableConcept ; rdfs:range fhir:Coding .
fhir:CodeableConcept.text a owl:ObjectProperty ; rdfs:domain fhir:CodeableConcept ; rdfs:range fhir:string .

fhir:Quantity a owl:Class ; rdfs:subClassOf fhir:Element .
fhir:Quantity.value a owl:ObjectProperty ; rdfs:domain fhir:Quantity ; rdfs:range fhir:decimal .
fhir:Quantity.comparator a owl:ObjectProperty ; rdfs:domain fhir:Quantity ; rdfs:range fhir:code .
fhir:Quantity.unit a owl:ObjectProperty ; rdfs:domain fhir:Quantity ; rdfs:range fhir:string .
fhir:Quantity.system a owl:ObjectProperty ; rdfs:domain fhir:Quantity ; rdfs:range fhir:uri .
fhir:Quantity.code a owl:ObjectProperty ; rdfs:domain fhir:Quantity ; rdfs:range fhir:code .

fhir:HumanName a owl:Class ; rdfs:subClassOf fhir:Element .
fhir:HumanName.use a owl:ObjectProperty ; rdfs:domain fhir:HumanName ; rdfs:range fhir:code .
fhir:HumanName.text a owl:ObjectProperty ; rdfs:domain fhir:HumanName ; rdfs:range fhir:string .
fhir:HumanName.family a owl:ObjectProperty ; rdfs:domain fhir:HumanName ; rdfs:range fhir:string .
fhir:HumanName.given a owl:ObjectProperty ; rdfs:domain fhir:HumanName ; rdfs:range fhir:string .
fhir:HumanName.prefix a owl:ObjectProperty ; rdfs:domain fhir:HumanName ; rdfs:range fhir:string .

# Resources
fhir:Patient a owl:Class ; rdfs:subClassOf fhir:DomainResource , w5:administrative.individual .
fhir:Patient.identifier a owl:ObjectProperty ; rdfs:domain fhir:Patient ; rdfs:range fhir:Identifier .
fhir:Patient.active a owl:ObjectProperty ; rdfs:domain fhir:Patient ; rdfs:range fhir:boolean .
fhir:Patient.name a owl:ObjectProperty ; rdfs:domain fhir:Patient ; rdfs:range fhir:HumanName .
fhir:Patient.gender a owl:ObjectProperty ; rdfs:domain fhir:Patient ; rdfs:range fhir:code .
fhir:Patient.birthDate a owl:ObjectProperty ; rdfs:domain fhir:Patient ; rdfs:range fhir:date .
fhir:Patient.deceasedBoolean a owl:ObjectProperty ; rdfs:domain fhir:Patient ; rdfs:range fhir:boolean .
fhir:Patient.multipleBirthInteger a owl:ObjectProperty ; rdfs:domain fhir:Patient ; rdfs:range fhir:integer .
fhir:Patient.managingOrganization a owl:ObjectProperty ; rdfs:domain fhir:Patient ; rdfs:range fhir:Reference .

fhir:Observation a owl:Class ; rdfs:subClassOf fhir:DomainResource .
fhir:Observation.status a owl:ObjectProperty ; rdfs:domain fhir:Observation ; rdfs:range fhir:code .
fhir:Observation.category a owl:ObjectProperty ; rdfs:domain fhir:Observation ; rdfs:range fhir:CodeableConcept .
fhir:Observation.code a owl:ObjectProperty ; rdfs:domain fhir:Observation ; rdfs:range fhir:CodeableConcept .
fhir:Observation.subject a owl:ObjectProperty ; rdfs:domain fhir:Observation ; rdfs:range fhir:Reference .
fhir:Observation.effectiveDateTime a owl:ObjectProperty ; rdfs:domain fhir:Observation ; rdfs:range fhir:dateTime .
fhir:Observation.issued a owl:ObjectProperty ; rdfs:domain fhir:Observation ; rdfs:range fhir:instant .
fhir:Observation.valueQuantity a owl:ObjectProperty ; rdfs:domain fhir:Observation ; rdfs:range fhir:Quantity .
fhir:Observation.valueString a owl:ObjectProperty ; rdfs:domain fhir:Observation ; rdfs:range fhir:string .

fhir:Organization a owl:Class ; rdfs:subClassOf fhir:DomainResource .
fhir:Organization.identifier a owl:ObjectProperty ; rdfs:domain fhir:Organization ; rdfs:range fhir:Identifier .
fhir:Organization.active a owl:ObjectProperty ; rdfs:domain fhir:Organization ; rdfs:range fhir:boolean .
fhir:Organization.name a owl:ObjectProperty ; rdfs:domain fhir:Organization ; rdfs:range fhir:string .
fhir:Organization.language a owl:ObjectProperty ; rdfs:domain fhir:Organization ; rdfs:range fhir:string .

fhir:Bundle a owl:Class ; rdfs:subClassOf fhir:Resource .
fhir:Bundle.type a owl:ObjectProperty ; rdfs:domain fhir:Bundle ; rdfs:range fhir:code .
fhir:Bundle.total a owl:ObjectProperty ; rdfs:domain fhir:Bundle ; rdfs:range fhir:unsignedInt .
fhir:Bundle.link a owl:ObjectProperty ; rdfs:domain fhir:Bundle ; rdfs:range fhir:Bundle.Link .
fhir:Bundle.entry a owl:ObjectProperty ; rdfs:domain fhir:Bundle ; rdfs:range fhir:Bundle.Entry .

fhir:Bundle.Link a owl:Class ; rdfs:subClassOf fhir:BackboneElement .
fhir:Bundle.link.relation a owl:ObjectProperty ; rdfs:domain fhir:Bundle.Link ; rdfs:range fhir:string .
fhir:Bundle.link.url a owl:ObjectProperty ; rdfs:domain fhir:Bundle.Link ; rdfs:range fhir:uri .

fhir:Bundle.Entry a owl:Class ; rdfs:subClassOf fhir:BackboneElement .
fhir:Bundle.entry.fullUrl a owl:ObjectProperty ; rdfs:domain fhir:Bundle.Entry ; rdfs:range fhir:uri .
fhir:Bundle.entry.resource a owl:ObjectProperty ; rdfs:domain fhir:Bundle.Entry ; rdfs:range fhir:Resource .
fhir:Bundle.entry.search a owl:ObjectProperty ; rdfs:domain fhir:Bundle.Entry ; rdfs:range fhir:Bundle.Search .

fhir:Bundle.Search a owl:Class ; rdfs:subClassOf fhir:BackboneElement .
fhir:Bundle.entry.search.mode a owl:ObjectProperty ; rdfs:domain fhir:Bundle.Search ; rdfs:range fhir:code .
"#;
