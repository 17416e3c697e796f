mod error;
mod ident;
mod record;
pub mod schema;
mod value;
mod vocab;

pub use error::ValidationError;
pub use ident::{derive_id, is_valid_id, validate_id};
pub use record::Record;
pub use schema::{EntitySchema, FieldSpec};
pub use value::{FieldKind, FieldValue};
pub use vocab::{Vocabulary, DEFAULT_NAMESPACE};
