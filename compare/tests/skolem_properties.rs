//! Property-based tests for skolemization.
//!
//! A skolemized mapping must not depend on the order of keys in the source
//! document or on the labels chosen for anonymous nodes.

use std::collections::BTreeMap;

use fhirrdf_compare::{rdf_compare, skolemize, CompareOptions};
use fhirrdf_graph::{Graph, Term, Triple};
use fhirrdf_loader::{MapOptions, ResourceMapper};
use fhirrdf_test_helpers::{fixtures, json, vocabulary};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn map_value(doc: &Value) -> Graph {
    let mut graph = Graph::new();
    ResourceMapper::new(vocabulary(), "http://hl7.org/fhir/", MapOptions::default())
        .map(doc, &mut graph)
        .expect("fixture maps");
    graph
}

fn patient_keys() -> Vec<String> {
    json(fixtures::PATIENT_JSON)
        .as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

fn reordered(doc: &Value, keys: &[String]) -> Value {
    let mut out = Map::new();
    for key in keys {
        if let Some(v) = doc.get(key) {
            out.insert(key.clone(), v.clone());
        }
    }
    Value::Object(out)
}

fn blank_labels(graph: &Graph) -> Vec<String> {
    let mut labels: Vec<String> = graph
        .iter()
        .flat_map(|t| [&t.subject, &t.object])
        .filter_map(|term| match term {
            Term::Blank(label) => Some(label.clone()),
            _ => None,
        })
        .collect();
    labels.sort();
    labels.dedup();
    labels
}

fn relabelled(graph: &Graph, order: &[usize]) -> Graph {
    let labels = blank_labels(graph);
    let renames: BTreeMap<&str, String> = labels
        .iter()
        .zip(order)
        .map(|(label, i)| (label.as_str(), format!("r{i}")))
        .collect();
    let rename = |term: &Term| match term {
        Term::Blank(label) => Term::blank(renames[label.as_str()].clone()),
        other => other.clone(),
    };
    graph
        .iter()
        .map(|t| Triple::new(rename(&t.subject), t.predicate.clone(), rename(&t.object)))
        .collect()
}

fn blank_count() -> usize {
    blank_labels(&map_value(&json(fixtures::PATIENT_JSON))).len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Object key order does not change the skolemized graph.
    #[test]
    fn prop_key_order_invariant(keys in Just(patient_keys()).prop_shuffle()) {
        let doc = json(fixtures::PATIENT_JSON);
        let baseline = skolemize(&map_value(&doc));
        let shuffled = skolemize(&map_value(&reordered(&doc, &keys)));
        prop_assert_eq!(shuffled, baseline);
    }

    /// Renaming anonymous nodes does not change the skolemized graph, and
    /// the comparison reports nothing.
    #[test]
    fn prop_blank_label_invariant(order in Just((0..blank_count()).collect::<Vec<_>>()).prop_shuffle()) {
        let graph = map_value(&json(fixtures::PATIENT_JSON));
        let renamed = relabelled(&graph, &order);
        prop_assert_eq!(renamed.len(), graph.len());
        prop_assert_eq!(skolemize(&renamed), skolemize(&graph));
        prop_assert!(rdf_compare(&graph, &renamed, CompareOptions::default(), None).is_empty());
    }
}
