//! Concrete neuron types and their named accessors
//!
//! Each model pairs one parameter holder and one signal holder with one
//! shared [`NeuronTypeDescriptor`]. Holders own exactly one base vector
//! and add behavior only, never state, so generic code can treat every
//! model uniformly through the base types while typed callers get
//! zero-cost named getters and setters compiled to fixed offsets.

use crate::descriptor::{NeuronKind, NeuronTypeDescriptor, NeuronTypeId};
use crate::vector::{ParameterVector, SignalVector};
use core::fmt;

pub mod eif_cond_exp;
pub mod if_cond_exp;
pub mod spike_source;

pub use eif_cond_exp::{EifCondExpIsfaIsta, EifCondExpIsfaIstaParameters, EifCondExpIsfaIstaSignals};
pub use if_cond_exp::{IfCondExp, IfCondExpParameters, IfCondExpSignals};
pub use spike_source::{SpikeSourceArray, SpikeSourceArraySignals, SpikeTimes};

/// Compile-time binding between a neuron model and its storage types
///
/// Implemented by a zero-sized marker per registered model. The
/// association is resolved entirely at compile time; there is no runtime
/// inheritance anywhere in the model layer.
pub trait NeuronType {
    /// Registry entry this model binds to
    const KIND: NeuronKind;

    /// Per-instance parameter storage for this model
    type Parameters: Default + Clone + fmt::Debug;

    /// Per-instance signal-recording flags for this model
    type Signals: Default + Clone + fmt::Debug;

    /// The shared descriptor for this model
    fn descriptor() -> &'static NeuronTypeDescriptor {
        Self::KIND.descriptor()
    }
}

/// Generate named accessors over fixed parameter positions
///
/// For every `index => name` row this emits an `IDX_NAME` position
/// constant, a getter and a chainable setter on the holder type. The
/// holder must store its base vector in a field called `values` whose
/// length covers every declared index.
macro_rules! named_parameters {
    ($holder:ty { $($idx:literal => $name:ident),+ $(,)? }) => {
        paste::paste! {
            impl $holder {
                $(
                    #[doc = "Position of `" $name "` in the parameter vector."]
                    pub const [<IDX_ $name:upper>]: usize = $idx;

                    #[doc = "Current value of `" $name "`."]
                    // Parameter names are schema-canonical (tau_syn_E, delta_T)
                    #[allow(non_snake_case)]
                    #[inline]
                    pub fn $name(&self) -> crate::vector::Real {
                        self.values.values()[$idx]
                    }

                    #[doc = "Set `" $name "`, returning `self` for chaining."]
                    #[allow(non_snake_case)]
                    #[inline]
                    pub fn [<set_ $name>](&mut self, value: crate::vector::Real) -> &mut Self {
                        self.values.values_mut()[$idx] = value;
                        self
                    }
                )+
            }
        }
    };
}

/// Generate named accessors over fixed signal positions
///
/// For every `index => name` row this emits an `IDX_NAME` position
/// constant, a flag getter, a chainable `record_*` enabler and a
/// chainable `set_*` toggle on the holder type. The holder must store its
/// base vector in a field called `flags`.
macro_rules! named_signals {
    ($holder:ty { $($idx:literal => $name:ident),+ $(,)? }) => {
        paste::paste! {
            impl $holder {
                $(
                    #[doc = "Position of `" $name "` in the signal vector."]
                    pub const [<IDX_ $name:upper>]: usize = $idx;

                    #[doc = "Whether `" $name "` is being recorded."]
                    #[inline]
                    pub fn $name(&self) -> bool {
                        self.flags.flags()[$idx]
                    }

                    #[doc = "Enable recording of `" $name "`, returning `self` for chaining."]
                    #[inline]
                    pub fn [<record_ $name>](&mut self) -> &mut Self {
                        self.flags.flags_mut()[$idx] = true;
                        self
                    }

                    #[doc = "Toggle recording of `" $name "`, returning `self` for chaining."]
                    #[inline]
                    pub fn [<set_ $name>](&mut self, on: bool) -> &mut Self {
                        self.flags.flags_mut()[$idx] = on;
                        self
                    }
                )+
            }
        }
    };
}

pub(crate) use named_parameters;
pub(crate) use named_signals;

/// Descriptor for the null neuron type
pub(crate) static NULL_DESCRIPTOR: NeuronTypeDescriptor = NeuronTypeDescriptor {
    type_id: NeuronTypeId::new(-1),
    name: "Null",
    parameter_names: &[],
    parameter_units: &[],
    parameter_defaults: &[],
    signal_names: &[],
    signal_units: &[],
    conductance_based: false,
    spike_source: false,
};

/// Placeholder neuron type for contexts with no model assigned
///
/// Declares no parameters and no signals; every named lookup fails.
/// Generic population containers use it until a real model is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullNeuron;

impl NeuronType for NullNeuron {
    const KIND: NeuronKind = NeuronKind::Null;
    type Parameters = NullParameters;
    type Signals = NullSignals;
}

/// Empty parameter holder of the null neuron type
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NullParameters {
    values: ParameterVector,
}

impl NullParameters {
    /// Create the (empty) null parameter set
    pub fn new() -> Self {
        Self::default()
    }
}

impl core::ops::Deref for NullParameters {
    type Target = ParameterVector;

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl core::ops::DerefMut for NullParameters {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.values
    }
}

/// Empty signal holder of the null neuron type
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NullSignals {
    flags: SignalVector,
}

impl NullSignals {
    /// Create the (empty) null signal set
    pub fn new() -> Self {
        Self::default()
    }
}

impl core::ops::Deref for NullSignals {
    type Target = SignalVector;

    fn deref(&self) -> &Self::Target {
        &self.flags
    }
}

impl core::ops::DerefMut for NullSignals {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_type_is_empty() {
        let params = NullParameters::new();
        assert_eq!(params.len(), 0);

        let signals = NullSignals::new();
        assert_eq!(signals.len(), 0);

        let desc = NullNeuron::descriptor();
        assert_eq!(desc.parameter_count(), 0);
        assert_eq!(desc.signal_count(), 0);
        assert!(!desc.conductance_based);
        assert!(!desc.spike_source);
    }

    #[test]
    fn test_null_lookups_fail() {
        assert!(NeuronKind::Null.parameter_index("cm").is_err());
        assert!(NeuronKind::Null.signal_index("spikes").is_err());
    }
}
