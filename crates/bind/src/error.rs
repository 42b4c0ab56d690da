use crate::shape::ShapeKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("expected a record with named fields, got {type_name} ({kind})")]
    Shape { type_name: &'static str, kind: ShapeKind },

    #[error("field {field} has no value for {location} key {key}")]
    MissingField { field: &'static str, key: String, location: String },
}

impl BindError {
    pub fn shape(type_name: &'static str, kind: ShapeKind) -> Self {
        Self::Shape { type_name, kind }
    }

    pub fn missing_field<K: ToString, L: ToString>(field: &'static str, key: K, location: L) -> Self {
        Self::MissingField { field, key: key.to_string(), location: location.to_string() }
    }

    /// Whether the error was caused by the client request rather than by the target type.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("handler must be set")]
    MissingHandler,

    #[error("bind target error: {source}")]
    Bind {
        #[from]
        source: BindError,
    },
}
