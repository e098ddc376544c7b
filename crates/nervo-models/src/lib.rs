//! Neuron model descriptors and flat parameter storage
//!
//! This crate lets a simulation-description frontend represent many
//! distinct neuron models uniformly. Every model declares a fixed, named
//! schema of scalar parameters and recordable signals exactly once, in a
//! shared immutable [`NeuronTypeDescriptor`]; instances store nothing but
//! a flat [`ParameterVector`] and [`SignalVector`]. Typed callers get
//! zero-cost named accessors compiled to fixed offsets, while
//! serialization and backend-dispatch code stays fully type-agnostic over
//! the base vectors and the [`NeuronKind`] registry.

#![deny(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod bridge;
pub mod descriptor;
pub mod error;
pub mod models;
pub mod vector;

// Re-export essential types
pub use bridge::{parameters_from_slice, signals_from_slice, InstanceRecord};
pub use descriptor::{NeuronKind, NeuronTypeDescriptor, NeuronTypeId};
pub use error::{ModelError, Result};
pub use models::{
    EifCondExpIsfaIsta, EifCondExpIsfaIstaParameters, EifCondExpIsfaIstaSignals, IfCondExp,
    IfCondExpParameters, IfCondExpSignals, NeuronType, NullNeuron, NullParameters, NullSignals,
    SpikeSourceArray, SpikeSourceArraySignals, SpikeTimes,
};
pub use vector::{ParameterVector, Real, SignalVector};

/// Model-layer crate version for compatibility checking
pub const MODELS_VERSION: u32 = 1;
