//! Leaky integrate-and-fire neuron with conductance-based synapses

use crate::bridge;
use crate::descriptor::{NeuronKind, NeuronTypeDescriptor, NeuronTypeId};
use crate::error::Result;
use crate::models::{named_parameters, named_signals, NeuronType};
use crate::vector::{ParameterVector, Real, SignalVector};

/// Descriptor for the IF_cond_exp neuron type
///
/// Defaults follow the PyNN reference values so that a backend seeing an
/// omitted parameter fills in the same number the reference simulators
/// would.
pub(crate) static DESCRIPTOR: NeuronTypeDescriptor = NeuronTypeDescriptor {
    type_id: NeuronTypeId::new(1),
    name: "IF_cond_exp",
    parameter_names: &[
        "cm",
        "tau_m",
        "tau_syn_E",
        "tau_syn_I",
        "tau_refrac",
        "v_rest",
        "v_thresh",
        "v_reset",
        "e_rev_E",
        "e_rev_I",
        "i_offset",
    ],
    parameter_units: &[
        "nF", "ms", "ms", "ms", "ms", "mV", "mV", "mV", "mV", "mV", "nA",
    ],
    parameter_defaults: &[
        1.0, 20.0, 5.0, 5.0, 0.1, -65.0, -50.0, -65.0, 0.0, -70.0, 0.0,
    ],
    signal_names: &["spikes", "v", "gsyn_exc", "gsyn_inh"],
    signal_units: &["ms", "mV", "uS", "uS"],
    conductance_based: true,
    spike_source: false,
};

/// Marker for the leaky integrate-and-fire conductance-based model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfCondExp;

impl NeuronType for IfCondExp {
    const KIND: NeuronKind = NeuronKind::IfCondExp;
    type Parameters = IfCondExpParameters;
    type Signals = IfCondExpSignals;
}

/// Parameter set of an IF_cond_exp instance
///
/// Eleven values in declared order; constructs with the type defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct IfCondExpParameters {
    values: ParameterVector,
}

impl IfCondExpParameters {
    /// Create a parameter set seeded with the type defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parameter set from an explicit ordered value sequence
    ///
    /// The sequence must match the declared schema length exactly.
    pub fn from_values(values: &[Real]) -> Result<Self> {
        Ok(Self {
            values: bridge::parameters_from_slice(NeuronKind::IfCondExp, values)?,
        })
    }
}

impl Default for IfCondExpParameters {
    fn default() -> Self {
        Self {
            values: DESCRIPTOR.default_parameters(),
        }
    }
}

impl core::ops::Deref for IfCondExpParameters {
    type Target = ParameterVector;

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl core::ops::DerefMut for IfCondExpParameters {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.values
    }
}

named_parameters!(IfCondExpParameters {
    0 => cm,
    1 => tau_m,
    2 => tau_syn_E,
    3 => tau_syn_I,
    4 => tau_refrac,
    5 => v_rest,
    6 => v_thresh,
    7 => v_reset,
    8 => e_rev_E,
    9 => e_rev_I,
    10 => i_offset,
});

/// Signal-recording flags of an IF_cond_exp instance
#[derive(Debug, Clone, PartialEq)]
pub struct IfCondExpSignals {
    flags: SignalVector,
}

impl IfCondExpSignals {
    /// Create a signal set recording nothing
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for IfCondExpSignals {
    fn default() -> Self {
        Self {
            flags: DESCRIPTOR.default_signals(),
        }
    }
}

impl core::ops::Deref for IfCondExpSignals {
    type Target = SignalVector;

    fn deref(&self) -> &Self::Target {
        &self.flags
    }
}

impl core::ops::DerefMut for IfCondExpSignals {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.flags
    }
}

named_signals!(IfCondExpSignals {
    0 => spikes,
    1 => v,
    2 => gsyn_exc,
    3 => gsyn_inh,
});
