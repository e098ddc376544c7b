//! Error types for the neuron model layer

use crate::descriptor::NeuronKind;
use thiserror::Error;

/// Result type for model-layer operations
pub type Result<T> = core::result::Result<T, ModelError>;

/// Errors that can occur when working with neuron model schemas
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A named parameter lookup matched nothing on the type's schema
    #[error("neuron type {kind} has no parameter named `{name}`")]
    UnknownParameter {
        /// Neuron type the lookup ran against
        kind: NeuronKind,
        /// Name that failed to resolve
        name: String,
    },

    /// A named signal lookup matched nothing on the type's schema
    #[error("neuron type {kind} has no signal named `{name}`")]
    UnknownSignal {
        /// Neuron type the lookup ran against
        kind: NeuronKind,
        /// Name that failed to resolve
        name: String,
    },

    /// Positional access past the end of a vector
    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Declared vector length
        len: usize,
    },

    /// External data does not match the declared schema length
    #[error("neuron type {kind} declares {expected} entries, got {actual}")]
    SchemaMismatch {
        /// Neuron type the data claimed to be for
        kind: NeuronKind,
        /// Length declared by the type's schema
        expected: usize,
        /// Length of the supplied data
        actual: usize,
    },
}

impl ModelError {
    /// Create an unknown-parameter error
    pub fn unknown_parameter(kind: NeuronKind, name: impl Into<String>) -> Self {
        Self::UnknownParameter {
            kind,
            name: name.into(),
        }
    }

    /// Create an unknown-signal error
    pub fn unknown_signal(kind: NeuronKind, name: impl Into<String>) -> Self {
        Self::UnknownSignal {
            kind,
            name: name.into(),
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a schema-mismatch error
    pub fn schema_mismatch(kind: NeuronKind, expected: usize, actual: usize) -> Self {
        Self::SchemaMismatch {
            kind,
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ModelError::unknown_parameter(NeuronKind::IfCondExp, "tau_q");
        assert!(matches!(err, ModelError::UnknownParameter { .. }));

        let err = ModelError::out_of_range(11, 11);
        assert!(matches!(err, ModelError::IndexOutOfRange { index: 11, len: 11 }));
    }

    #[test]
    fn test_error_display() {
        let err = ModelError::unknown_signal(NeuronKind::Null, "v");
        let msg = format!("{}", err);
        assert!(msg.contains("no signal named `v`"));

        let err = ModelError::schema_mismatch(NeuronKind::IfCondExp, 11, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("declares 11 entries, got 3"));
    }
}
