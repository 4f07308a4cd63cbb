//! Mapping of `entry` collections and paginated document streams.

use std::collections::BTreeSet;

use fhirrdf_graph::Graph;
use fhirrdf_vocab::Vocabulary;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::MapError;
use crate::resource::{MapOptions, MappedResource, ResourceMapper};
use crate::source::DocumentSource;

/// Maps every `entry[].resource` of `collection` into `target` as its own
/// root resource.
///
/// An entry that fails to map is logged and skipped; the rest of the
/// collection is still mapped.
pub fn map_collection(
    mapper: &ResourceMapper<'_>,
    collection: &Value,
    target: &mut Graph,
) -> Vec<MappedResource> {
    let Some(entries) = collection.get("entry").and_then(Value::as_array) else {
        return Vec::new();
    };
    let mut mapped = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(resource) = entry.get("resource") else {
            debug!(index, "collection entry without a resource");
            continue;
        };
        match mapper.map(resource, target) {
            Ok(resource) => mapped.push(resource),
            Err(e) => warn!(index, error = %e, "collection entry skipped"),
        }
    }
    mapped
}

/// What a fetched page turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageKind {
    Resource,
    Collection,
    EmptyCollection,
    Unrecognized,
}

fn classify_page(doc: &Value) -> PageKind {
    if doc
        .get("resourceType")
        .and_then(Value::as_str)
        .is_some_and(|t| t != "Bundle")
    {
        return PageKind::Resource;
    }
    match doc.get("entry").and_then(Value::as_array) {
        Some(entries) if entries.is_empty() => PageKind::EmptyCollection,
        Some(entries) if entries.first().is_some_and(|e| e.get("resource").is_some()) => {
            PageKind::Collection
        }
        _ => PageKind::Unrecognized,
    }
}

/// The `url` of the first `link` whose `relation` is `next`.
#[must_use]
pub fn continuation(doc: &Value) -> Option<&str> {
    doc.get("link")?
        .as_array()?
        .iter()
        .find(|link| link.get("relation").and_then(Value::as_str) == Some("next"))?
        .get("url")?
        .as_str()
}

/// Converts the document at `location`, and any pages it continues to,
/// into RDF.
///
/// A single non-Bundle resource is mapped directly. A document whose
/// `entry` list holds resources is mapped as a collection; it gets the
/// ontology header only when it has a `resourceType` of its own. Pages are
/// fetched one after another through `source` while
/// [`MapOptions::do_continuations`] is set.
///
/// Returns `None` when a page is neither a resource nor a collection.
///
/// # Errors
///
/// [`MapError::Source`] when a page cannot be fetched. A page holding a
/// resource that fails to map is logged and skipped.
pub fn fhir_json_to_rdf(
    vocab: &Vocabulary,
    source: &dyn DocumentSource,
    location: &str,
    base_uri: &str,
    target: Option<Graph>,
    options: MapOptions,
) -> Result<Option<Graph>, MapError> {
    let mut graph = target.unwrap_or_default();
    let recognized = load_into(vocab, source, location, base_uri, &mut graph, options)?;
    Ok(recognized.then_some(graph))
}

/// Like [`fhir_json_to_rdf`], but maps into a borrowed graph.
///
/// Returns `false` when a page is neither a resource nor a collection;
/// pages mapped before it stay in `graph`.
///
/// # Errors
///
/// Same as [`fhir_json_to_rdf`].
pub fn load_into(
    vocab: &Vocabulary,
    source: &dyn DocumentSource,
    location: &str,
    base_uri: &str,
    graph: &mut Graph,
    options: MapOptions,
) -> Result<bool, MapError> {
    let mapper = ResourceMapper::new(vocab, base_uri, options);
    let mut seen = BTreeSet::new();
    let mut page = Some(location.to_owned());

    while let Some(location) = page.take() {
        if !seen.insert(location.clone()) {
            warn!(%location, "continuation loops back to an earlier page, stopping");
            break;
        }
        let doc = source.fetch(&location)?;
        match classify_page(&doc) {
            PageKind::Resource => {
                if let Err(e) = mapper.map(&doc, graph) {
                    warn!(%location, error = %e, "resource page skipped");
                }
            }
            PageKind::Collection => {
                let header = options.add_ontology_header && doc.get("resourceType").is_some();
                let collection_mapper = mapper.with_options(MapOptions {
                    add_ontology_header: header,
                    ..options
                });
                let mapped = map_collection(&collection_mapper, &doc, graph);
                debug!(%location, resources = mapped.len(), "collection page mapped");
            }
            PageKind::EmptyCollection => debug!(%location, "empty collection page"),
            PageKind::Unrecognized => {
                warn!(%location, "neither a FHIR resource nor a collection");
                return Ok(false);
            }
        }
        if options.do_continuations {
            page = continuation(&doc).map(str::to_owned);
            if let Some(next) = &page {
                debug!(from = %location, to = %next, "following continuation");
            }
        }
    }
    Ok(true)
}
