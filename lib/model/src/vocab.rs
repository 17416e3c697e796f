use crate::error::ValidationError;
use oxrdf::NamedNode;

/// Namespace of the tourism ontology the backend was built against.
pub const DEFAULT_NAMESPACE: &str =
    "http://www.semanticweb.org/user/ontologies/2025/9/novagrptourisme#";

/// The ontology namespace under which every entity, class and property lives.
///
/// Entities are identified by `<namespace><id>`; the namespace therefore has
/// to end with `#` so that identifiers land in the fragment.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    namespace: String,
}

impl Vocabulary {
    pub fn new(namespace: impl Into<String>) -> Result<Self, ValidationError> {
        let namespace = namespace.into();
        let invalid = |reason: &str| ValidationError::InvalidNamespace {
            namespace: namespace.clone(),
            reason: reason.to_owned(),
        };
        if !namespace.ends_with('#') {
            return Err(invalid("must end with '#'"));
        }
        if let Err(e) = NamedNode::new(&namespace) {
            return Err(invalid(&e.to_string()));
        }
        Ok(Self { namespace })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Full IRI of an entity. The identifier must have passed
    /// [`crate::validate_id`], which keeps the result a valid IRI.
    pub fn entity_uri(&self, id: &str) -> String {
        debug_assert!(crate::is_valid_id(id));
        format!("{}{}", self.namespace, id)
    }

    pub fn entity_iri(&self, id: &str) -> NamedNode {
        NamedNode::new_unchecked(self.entity_uri(id))
    }

    /// The part of an IRI after the final `#`, used as the public entity id.
    pub fn fragment<'a>(&self, iri: &'a str) -> &'a str {
        iri.rsplit('#').next().unwrap_or(iri)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
        }
    }
}
