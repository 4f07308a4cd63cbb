//! Schema-driven mapping of one FHIR JSON resource to RDF.
//!
//! Every field decision comes from the [`Vocabulary`]: whether a field is
//! atomic, what its range is, and whether that range is a primitive. The
//! JSON tree is walked once, emitting blank value nodes for everything that
//! is not atomic.

use std::borrow::Cow;

use fhirrdf_graph::{iris, Graph, Literal, Term};
use fhirrdf_vocab::Vocabulary;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::MapError;
use crate::resolver::{classify_code, classify_reference, REPLACED_NARRATIVE_TEXT};

/// Narrative `div`s longer than this are replaced when
/// [`MapOptions::replace_narrative_text`] is set.
const NARRATIVE_LIMIT: usize = 120;

/// Mapping switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOptions {
    /// Emit the `owl:Ontology` header for root resources.
    pub add_ontology_header: bool,
    /// Replace long narrative `div`s with a fixed placeholder.
    pub replace_narrative_text: bool,
    /// Follow `next` links of paginated results.
    pub do_continuations: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            add_ontology_header: true,
            replace_narrative_text: false,
            do_continuations: true,
        }
    }
}

/// What was mapped for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedResource {
    /// Subject IRI of the resource.
    pub uri: String,
    /// `resourceType` of the document.
    pub resource_type: String,
    /// `id` of the document, as given or as minted.
    pub id: Option<String>,
}

/// Maps FHIR JSON resources into a target [`Graph`].
#[derive(Debug, Clone)]
pub struct ResourceMapper<'v> {
    vocab: &'v Vocabulary,
    base_uri: String,
    options: MapOptions,
}

impl<'v> ResourceMapper<'v> {
    /// Creates a mapper. `base_uri` gets a trailing `/` unless it already
    /// ends in `/` or `#`.
    #[must_use]
    pub fn new(vocab: &'v Vocabulary, base_uri: &str, options: MapOptions) -> Self {
        let base_uri = if base_uri.is_empty() || base_uri.ends_with(['/', '#']) {
            base_uri.to_owned()
        } else {
            format!("{base_uri}/")
        };
        Self {
            vocab,
            base_uri,
            options,
        }
    }

    /// Normalized base IRI.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> MapOptions {
        self.options
    }

    /// The same mapper with different options.
    #[must_use]
    pub fn with_options(&self, options: MapOptions) -> Self {
        Self {
            options,
            ..self.clone()
        }
    }

    /// Maps `doc` as a root resource into `graph`.
    ///
    /// # Errors
    ///
    /// [`MapError::NotAResource`] if `doc` has no `resourceType`;
    /// [`MapError::Vocabulary`] if it uses a type the vocabulary lacks.
    pub fn map(&self, doc: &Value, graph: &mut Graph) -> Result<MappedResource, MapError> {
        self.map_document(doc, graph, None, true)
    }

    /// Maps `doc` into `graph` under `subject` (or `base/Type/id`).
    ///
    /// Only root resources get `fhir:nodeRole fhir:treeRoot` and the
    /// optional ontology header.
    ///
    /// # Errors
    ///
    /// Same as [`ResourceMapper::map`].
    pub fn map_document(
        &self,
        doc: &Value,
        graph: &mut Graph,
        subject: Option<&str>,
        is_root: bool,
    ) -> Result<MappedResource, MapError> {
        Emitter {
            mapper: self,
            graph,
        }
        .emit_document(doc, subject, is_root)
    }
}

struct Emitter<'m, 'v> {
    mapper: &'m ResourceMapper<'v>,
    graph: &'m mut Graph,
}

impl<'v> Emitter<'_, 'v> {
    fn vocab(&self) -> &'v Vocabulary {
        self.mapper.vocab
    }

    fn value_type(&self, field: &str, explicit: Option<&str>) -> String {
        explicit.unwrap_or_else(|| self.vocab().range_of(field)).to_owned()
    }

    fn add(&mut self, subject: &Term, predicate: &str, object: Term) {
        self.graph.insert(subject.clone(), predicate, object);
    }

    fn emit_document(
        &mut self,
        doc: &Value,
        subject: Option<&str>,
        is_root: bool,
    ) -> Result<MappedResource, MapError> {
        let obj = doc
            .as_object()
            .ok_or_else(|| MapError::NotAResource(describe(doc)))?;
        let resource_type = obj
            .get("resourceType")
            .and_then(Value::as_str)
            .ok_or_else(|| MapError::NotAResource(describe(doc)))?
            .to_owned();

        let mut obj = Cow::Borrowed(obj);
        let mut id = obj.get("id").and_then(Value::as_str).map(str::to_owned);
        let uri = match subject {
            Some(uri) => uri.to_owned(),
            None => {
                let id = id.get_or_insert_with(|| {
                    let minted = uuid::Uuid::new_v4().to_string();
                    debug!(%resource_type, id = %minted, "resource has no id, minted one");
                    obj.to_mut().insert("id".to_owned(), Value::String(minted.clone()));
                    minted
                });
                format!("{}{resource_type}/{id}", self.mapper.base_uri)
            }
        };
        let subject = Term::iri(uri.clone());

        if is_root {
            if self.mapper.options.add_ontology_header {
                self.emit_ontology_header(&uri, &obj);
            }
            self.add(&subject, iris::FHIR_NODE_ROLE, Term::iri(iris::FHIR_TREE_ROOT));
        }
        self.emit_resource(&subject, &obj, &iris::fhir(&resource_type))?;
        Ok(MappedResource {
            uri,
            resource_type,
            id,
        })
    }

    fn emit_ontology_header(&mut self, uri: &str, obj: &Map<String, Value>) {
        let ontology = format!("{uri}.ttl");
        let node = Term::iri(ontology.clone());
        self.add(&node, iris::RDF_TYPE, Term::iri(iris::OWL_ONTOLOGY));
        self.add(&node, iris::OWL_IMPORTS, Term::iri(iris::fhir("fhir.ttl")));
        let version = obj
            .get("meta")
            .and_then(|m| m.get("versionId"))
            .and_then(Value::as_str);
        if let Some(version) = version {
            self.add(
                &node,
                iris::OWL_VERSION_IRI,
                Term::iri(format!("{ontology}/_history/{version}")),
            );
        }
    }

    fn emit_resource(
        &mut self,
        subject: &Term,
        obj: &Map<String, Value>,
        type_uri: &str,
    ) -> Result<(), MapError> {
        self.add(subject, iris::RDF_TYPE, Term::iri(type_uri));
        for (tag, field) in self.vocab().fields_of(type_uri)? {
            if obj.contains_key(&tag) {
                self.emit_field(subject, &field, obj, &tag, None)?;
            } else {
                self.emit_extension_only(subject, &field, obj, &tag)?;
            }
        }
        Ok(())
    }

    /// Expands a JSON object under `node`, typed by `value_type` or the
    /// range of `field`.
    fn emit_value_node(
        &mut self,
        node: &Term,
        field: &str,
        val: &Value,
        value_type: Option<&str>,
    ) -> Result<(), MapError> {
        let Some(obj) = val.as_object() else {
            warn!(field, "expected a JSON object, value skipped");
            return Ok(());
        };
        let mut type_uri = self.value_type(field, value_type);
        if type_uri == iris::FHIR_RESOURCE {
            if let Some(resource_type) = obj.get("resourceType").and_then(Value::as_str) {
                type_uri = iris::fhir(resource_type);
            }
        }

        let mut typed = false;
        for (tag, sub_field) in self.vocab().fields_of(&type_uri)? {
            if obj.contains_key(&tag) {
                self.emit_field(node, &sub_field, obj, &tag, None)?;
                if field == iris::FHIR_CODEABLE_CONCEPT_CODING && !typed {
                    self.add_type_arc(node, obj);
                    typed = true;
                }
            } else if tag == "value" && self.vocab().range_of(&sub_field) == iris::FHIR_ELEMENT {
                let base = sub_field.strip_suffix(".value").unwrap_or(&sub_field);
                for key in obj.keys().filter(|k| k.starts_with("value")) {
                    let polymorphic = self.vocab().value_field_for(key)?;
                    self.emit_field(node, &iris::dotted(base, key), obj, key, Some(&polymorphic))?;
                }
                let extension_only = obj
                    .keys()
                    .filter_map(|k| k.strip_prefix('_'))
                    .filter(|k| k.starts_with("value") && !obj.contains_key(*k));
                for key in extension_only {
                    self.emit_extension_only(node, &iris::dotted(base, key), obj, key)?;
                }
            } else {
                self.emit_extension_only(node, &sub_field, obj, &tag)?;
            }
        }
        Ok(())
    }

    fn emit_field(
        &mut self,
        subject: &Term,
        field: &str,
        container: &Map<String, Value>,
        key: &str,
        value_type: Option<&str>,
    ) -> Result<(), MapError> {
        match container.get(key) {
            None => {
                warn!(key, field, "expected field missing from document, skipped");
                Ok(())
            }
            Some(Value::Null) => Ok(()),
            Some(Value::Array(items)) if field == iris::FHIR_BUNDLE_ENTRY => {
                self.emit_bundle_entries(subject, items)
            }
            Some(Value::Array(items)) => {
                self.emit_list(subject, field, container, key, items, value_type)
            }
            Some(val) => self.emit_single(subject, field, container, key, val, value_type),
        }
    }

    fn emit_single(
        &mut self,
        subject: &Term,
        field: &str,
        container: &Map<String, Value>,
        key: &str,
        val: &Value,
        value_type: Option<&str>,
    ) -> Result<(), MapError> {
        if self.vocab().is_atomic(field)? {
            let mut text = literal_text(val);
            if self.mapper.options.replace_narrative_text
                && field == iris::FHIR_NARRATIVE_DIV
                && text.chars().count() > NARRATIVE_LIMIT
            {
                text = REPLACED_NARRATIVE_TEXT.to_owned();
            }
            self.add(subject, field, Term::literal(text));
            return Ok(());
        }

        let type_uri = self.value_type(field, value_type);
        let node = self.graph.fresh_blank();
        if self.vocab().is_primitive(&type_uri) {
            let literal = self.primitive_literal(&type_uri, val);
            self.add(&node, iris::FHIR_VALUE, literal);
        } else {
            self.emit_value_node(&node, field, val, value_type)?;
        }
        self.add(subject, field, node.clone());
        if field == iris::FHIR_REFERENCE_REFERENCE {
            if let Some(text) = val.as_str() {
                self.add_reference(subject, text);
            }
        }
        self.emit_extensions(&node, container, key)
    }

    fn emit_list(
        &mut self,
        subject: &Term,
        field: &str,
        container: &Map<String, Value>,
        key: &str,
        items: &[Value],
        value_type: Option<&str>,
    ) -> Result<(), MapError> {
        let type_uri = self.value_type(field, value_type);
        let side_channel = match container.get(&format!("_{key}")) {
            Some(Value::Array(extensions)) => Some(extensions),
            Some(Value::Object(_)) => {
                warn!(key, "single extension object on a list value, skipped");
                None
            }
            _ => None,
        };
        for (i, item) in items.iter().enumerate() {
            let entry = self.graph.fresh_blank();
            self.add(&entry, iris::FHIR_INDEX, index_literal(i));
            match item {
                Value::Object(_) => self.emit_value_node(&entry, field, item, value_type)?,
                Value::Null => {}
                scalar => {
                    let literal = self.primitive_literal(&type_uri, scalar);
                    self.add(&entry, iris::FHIR_VALUE, literal);
                }
            }
            if let Some(ext) = side_channel.and_then(|s| s.get(i)).and_then(Value::as_object) {
                self.emit_extension_object(&entry, ext)?;
            }
            self.add(subject, field, entry);
        }
        Ok(())
    }

    /// `Bundle.entry`: each entry node points at its `fullUrl`, under which
    /// the entry's resource is mapped as a non-root resource.
    fn emit_bundle_entries(&mut self, subject: &Term, items: &[Value]) -> Result<(), MapError> {
        let entry_type = self.vocab().range_of(iris::FHIR_BUNDLE_ENTRY).to_owned();
        let entry_fields = self.vocab().fields_of(&entry_type)?;
        for (i, item) in items.iter().enumerate() {
            let Some(entry_obj) = item.as_object() else {
                warn!(index = i, "bundle entry is not an object, skipped");
                continue;
            };
            let node = self.graph.fresh_blank();
            self.add(&node, iris::FHIR_INDEX, index_literal(i));
            for (tag, field) in &entry_fields {
                if tag != "resource" && entry_obj.contains_key(tag) {
                    self.emit_field(&node, field, entry_obj, tag, None)?;
                }
            }
            let full_url = entry_obj.get("fullUrl").and_then(Value::as_str);
            if let Some(resource) = entry_obj.get("resource") {
                let mapped = self.emit_document(resource, full_url, false)?;
                self.add(&node, iris::FHIR_BUNDLE_ENTRY_RESOURCE, Term::iri(mapped.uri));
            } else if let Some(url) = full_url {
                self.add(&node, iris::FHIR_BUNDLE_ENTRY_RESOURCE, Term::iri(url));
            }
            self.add(subject, iris::FHIR_BUNDLE_ENTRY, node);
        }
        Ok(())
    }

    /// Applies the `_key` side-channel of a singular value to its node.
    fn emit_extensions(
        &mut self,
        node: &Term,
        container: &Map<String, Value>,
        key: &str,
    ) -> Result<(), MapError> {
        let Some(side_channel) = container.get(&format!("_{key}")) else {
            return Ok(());
        };
        if !node.is_blank() {
            return Err(MapError::ExtensionTarget(node.to_string()));
        }
        match side_channel {
            Value::Object(ext) => self.emit_extension_object(node, ext),
            Value::Array(_) => {
                warn!(key, "list of extensions on a singular value, skipped");
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// `_key` present without `key`: the extensions get a node of their own.
    fn emit_extension_only(
        &mut self,
        subject: &Term,
        field: &str,
        container: &Map<String, Value>,
        key: &str,
    ) -> Result<(), MapError> {
        match container.get(&format!("_{key}")) {
            Some(Value::Object(ext)) => {
                if comments_only(ext) {
                    debug!(key, "fhir_comments dropped");
                    return Ok(());
                }
                let node = self.graph.fresh_blank();
                self.emit_extension_object(&node, ext)?;
                self.add(subject, field, node);
            }
            Some(Value::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    let entry = self.graph.fresh_blank();
                    self.add(&entry, iris::FHIR_INDEX, index_literal(i));
                    if let Some(ext) = item.as_object() {
                        self.emit_extension_object(&entry, ext)?;
                    }
                    self.add(subject, field, entry);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Emits the `Element` fields (`id`, `extension`) of a side-channel
    /// object on `node`.
    fn emit_extension_object(
        &mut self,
        node: &Term,
        ext: &Map<String, Value>,
    ) -> Result<(), MapError> {
        if !node.is_blank() {
            return Err(MapError::ExtensionTarget(node.to_string()));
        }
        if comments_only(ext) {
            debug!("fhir_comments dropped");
            return Ok(());
        }
        for (tag, field) in self.vocab().fields_of(iris::FHIR_ELEMENT)? {
            if ext.contains_key(&tag) {
                self.emit_field(node, &field, ext, &tag, None)?;
            }
        }
        Ok(())
    }

    fn add_reference(&mut self, subject: &Term, text: &str) {
        if let Some(target) = classify_reference(text, &self.mapper.base_uri) {
            let uri = Term::iri(target.uri);
            self.add(subject, iris::FHIR_LINK, uri.clone());
            self.add(&uri, iris::RDF_TYPE, Term::iri(iris::fhir(&target.resource_type)));
        }
    }

    fn add_type_arc(&mut self, node: &Term, coding: &Map<String, Value>) {
        let system = coding.get("system").and_then(Value::as_str);
        let code = coding.get("code").and_then(Value::as_str);
        if let (Some(system), Some(code)) = (system, code) {
            if let Some(concept) = classify_code(system, code, self.graph.namespaces_mut()) {
                self.add(node, iris::RDF_TYPE, Term::iri(concept));
            }
        }
    }

    fn primitive_literal(&self, type_uri: &str, val: &Value) -> Term {
        let text = literal_text(val);
        let datatype = self
            .vocab()
            .primitive_datatype_nostring(type_uri, Some(&text))
            .map(str::to_owned);
        Term::Literal(Literal::typed(text, datatype))
    }
}

fn index_literal(i: usize) -> Term {
    Term::typed_literal(i.to_string(), iris::XSD_INTEGER)
}

fn comments_only(ext: &Map<String, Value>) -> bool {
    ext.len() == 1 && ext.contains_key("fhir_comments")
}

/// Lexical form of a JSON scalar: strings verbatim, numbers in their JSON
/// spelling, booleans lower case.
fn literal_text(val: &Value) -> String {
    match val {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn describe(doc: &Value) -> String {
    match doc.get("id").and_then(Value::as_str) {
        Some(id) => format!("document with id {id:?}"),
        None => "document".to_owned(),
    }
}
