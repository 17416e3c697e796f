/// An error raised while validating request data against an entity schema.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("request body must be a JSON object")]
    ExpectedObject,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid value for field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("invalid identifier '{0}': only letters, digits, '_' and '-' are allowed")]
    InvalidId(String),
    #[error("invalid ontology namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },
}
