use thiserror::Error;

/// Defects in a field table. These are programming errors in the table
/// definition, never a property of the text being parsed.
#[derive(Error, Debug)]
pub enum FieldTableError {
    #[error("Field {0} is declared more than once")]
    DuplicateField(String),

    #[error("Invalid matcher for field {field}: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Derived field {derived} reads from unknown field {source_field}")]
    UnknownSource {
        derived: String,
        source_field: String,
    },

    #[error("Derived field {derived} reads from {source_field}, which is exposed")]
    ExposedSource {
        derived: String,
        source_field: String,
    },

    #[error("Fallback declared for unknown field {0}")]
    UnknownFallback(String),
}

pub type Result<T> = std::result::Result<T, FieldTableError>;
