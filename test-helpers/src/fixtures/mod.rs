//! Schema and document fixtures shared by the workspace test suites.
//!
//! JSON constants are FHIR documents; Turtle constants are the graphs the
//! mapper is expected to produce from them.

mod bundle;
mod observation;
mod patient;
mod schema;

pub use bundle::{
    BUNDLE_JSON, BUNDLE_TTL, COLLECTION_JSON, NOT_A_COLLECTION_JSON, SEARCH_PAGE_1_JSON,
    SEARCH_PAGE_2_JSON,
};
pub use observation::{OBSERVATION_JSON, OBSERVATION_TTL};
pub use patient::{
    NOT_A_RESOURCE_JSON, PATIENT_EXTENSIONS_JSON, PATIENT_JSON, PATIENT_NO_ID_JSON, PATIENT_TTL,
};
pub use schema::MINI_FHIR_TTL;
