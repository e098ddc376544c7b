//! Shared neuron type descriptors and the closed model registry
//!
//! One [`NeuronTypeDescriptor`] exists per neuron model, built entirely at
//! compile time as a `static` item and shared read-only by every instance
//! of that model. [`NeuronKind`] enumerates the registry and is the single
//! dispatch point through which type-agnostic code resolves names, units,
//! defaults and classification flags.

use crate::error::{ModelError, Result};
use crate::vector::{ParameterVector, Real, SignalVector};
use core::fmt;

/// Stable integer identifier of a neuron type
///
/// These values are a cross-process compatibility surface: external
/// serializers and simulator bridges key parameter blocks by them, so a
/// registered id is never reused or renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NeuronTypeId(pub i32);

impl NeuronTypeId {
    /// Create a new type id
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw id value
    pub const fn raw(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for NeuronTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable schema metadata describing one neuron type
///
/// All sequences are index-aligned with the corresponding per-instance
/// vectors: `parameter_names[i]`, `parameter_units[i]` and
/// `parameter_defaults[i]` all describe position `i` of a
/// [`ParameterVector`], and likewise for the signal fields. Declaration
/// order is part of the external compatibility contract and never changes
/// for a registered type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeuronTypeDescriptor {
    /// Stable type id used by external serializers
    pub type_id: NeuronTypeId,
    /// Human-readable type name, unique within the registry
    pub name: &'static str,
    /// Declared parameter names, in storage order
    pub parameter_names: &'static [&'static str],
    /// Units of the declared parameters, index-aligned with the names
    pub parameter_units: &'static [&'static str],
    /// Default parameter values, index-aligned with the names
    pub parameter_defaults: &'static [Real],
    /// Declared recordable signal names, in storage order
    pub signal_names: &'static [&'static str],
    /// Units of the declared signals, index-aligned with the names
    pub signal_units: &'static [&'static str],
    /// True if synaptic input is modeled as a conductance change
    pub conductance_based: bool,
    /// True if the type emits spikes from an external schedule
    pub spike_source: bool,
}

impl NeuronTypeDescriptor {
    /// Number of declared parameters
    pub const fn parameter_count(&self) -> usize {
        self.parameter_names.len()
    }

    /// Number of declared recordable signals
    pub const fn signal_count(&self) -> usize {
        self.signal_names.len()
    }

    /// Position of the first parameter with the given name, if any
    pub fn parameter_position(&self, name: &str) -> Option<usize> {
        self.parameter_names.iter().position(|n| *n == name)
    }

    /// Position of the first signal with the given name, if any
    pub fn signal_position(&self, name: &str) -> Option<usize> {
        self.signal_names.iter().position(|n| *n == name)
    }

    /// Unit of the named parameter, if declared
    pub fn parameter_unit(&self, name: &str) -> Option<&'static str> {
        self.parameter_position(name).map(|i| self.parameter_units[i])
    }

    /// Unit of the named signal, if declared
    pub fn signal_unit(&self, name: &str) -> Option<&'static str> {
        self.signal_position(name).map(|i| self.signal_units[i])
    }

    /// Fresh parameter vector seeded with this type's default values
    pub fn default_parameters(&self) -> ParameterVector {
        ParameterVector::from_values(self.parameter_defaults.iter().copied())
    }

    /// Fresh signal vector sized to this type's schema, recording nothing
    pub fn default_signals(&self) -> SignalVector {
        SignalVector::new(self.signal_count())
    }

    /// Check the structural invariants of this descriptor
    ///
    /// Parameter names, units and defaults must be index-aligned, as must
    /// signal names and units. Violations are design-time errors; this
    /// check exists so the test suite can audit the whole registry.
    pub fn is_well_formed(&self) -> bool {
        self.parameter_names.len() == self.parameter_units.len()
            && self.parameter_names.len() == self.parameter_defaults.len()
            && self.signal_names.len() == self.signal_units.len()
    }
}

/// The closed set of registered neuron types
///
/// New kinds may be appended, but a registered kind keeps its id, name and
/// declared schema order for the lifetime of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeuronKind {
    /// Placeholder for contexts with no neuron model assigned
    Null,
    /// Spike source replaying an externally supplied spike schedule
    SpikeSourceArray,
    /// Leaky integrate-and-fire with conductance-based synapses
    IfCondExp,
    /// Adaptive exponential integrate-and-fire with spike-frequency
    /// adaptation
    EifCondExpIsfaIsta,
}

impl NeuronKind {
    /// Every registered kind, in registration order
    pub const ALL: [NeuronKind; 4] = [
        NeuronKind::Null,
        NeuronKind::SpikeSourceArray,
        NeuronKind::IfCondExp,
        NeuronKind::EifCondExpIsfaIsta,
    ];

    /// The shared descriptor for this kind
    ///
    /// Always returns the same `static` instance; descriptors are built at
    /// compile time and live for the whole process.
    #[inline]
    pub fn descriptor(self) -> &'static NeuronTypeDescriptor {
        match self {
            NeuronKind::Null => &crate::models::NULL_DESCRIPTOR,
            NeuronKind::SpikeSourceArray => &crate::models::spike_source::DESCRIPTOR,
            NeuronKind::IfCondExp => &crate::models::if_cond_exp::DESCRIPTOR,
            NeuronKind::EifCondExpIsfaIsta => &crate::models::eif_cond_exp::DESCRIPTOR,
        }
    }

    /// Stable type id of this kind
    #[inline]
    pub fn type_id(self) -> NeuronTypeId {
        self.descriptor().type_id
    }

    /// Registered name of this kind
    #[inline]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// True if this kind models synaptic input as conductance changes
    #[inline]
    pub fn conductance_based(self) -> bool {
        self.descriptor().conductance_based
    }

    /// True if this kind replays an external spike schedule
    #[inline]
    pub fn spike_source(self) -> bool {
        self.descriptor().spike_source
    }

    /// Resolve a declared parameter name to its storage position
    ///
    /// Resolution is deterministic and reflects declaration order exactly;
    /// the same name maps to the same index for the process lifetime.
    pub fn parameter_index(self, name: &str) -> Result<usize> {
        self.descriptor()
            .parameter_position(name)
            .ok_or_else(|| ModelError::unknown_parameter(self, name))
    }

    /// Resolve a declared signal name to its storage position
    pub fn signal_index(self, name: &str) -> Result<usize> {
        self.descriptor()
            .signal_position(name)
            .ok_or_else(|| ModelError::unknown_signal(self, name))
    }

    /// Look up a registered kind by its stable type id
    pub fn from_type_id(id: NeuronTypeId) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_id() == id)
    }

    /// Look up a registered kind by its registered name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for NeuronKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    impl Serialize for NeuronTypeId {
        fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            self.0.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for NeuronTypeId {
        fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let id = i32::deserialize(deserializer)?;
            Ok(NeuronTypeId::new(id))
        }
    }
}
