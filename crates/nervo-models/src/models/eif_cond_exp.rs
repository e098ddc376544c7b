//! Adaptive exponential integrate-and-fire neuron (isfa/ista variant)

use crate::bridge;
use crate::descriptor::{NeuronKind, NeuronTypeDescriptor, NeuronTypeId};
use crate::error::Result;
use crate::models::{named_parameters, named_signals, NeuronType};
use crate::vector::{ParameterVector, Real, SignalVector};

/// Descriptor for the EIF_cond_exp_isfa_ista neuron type
///
/// The IF_cond_exp parameter set extended with the adaptation time
/// constant `tau_w`, the subthreshold/spike-triggered adaptation
/// parameters `a` and `b`, and the exponential threshold slope factor
/// `delta_T`. Defaults follow the PyNN reference values.
pub(crate) static DESCRIPTOR: NeuronTypeDescriptor = NeuronTypeDescriptor {
    type_id: NeuronTypeId::new(2),
    name: "EIF_cond_exp_isfa_ista",
    parameter_names: &[
        "cm",
        "tau_m",
        "tau_syn_E",
        "tau_syn_I",
        "tau_refrac",
        "tau_w",
        "v_rest",
        "v_thresh",
        "v_reset",
        "e_rev_E",
        "e_rev_I",
        "i_offset",
        "a",
        "b",
        "delta_T",
    ],
    parameter_units: &[
        "nF", "ms", "ms", "ms", "ms", "ms", "mV", "mV", "mV", "mV", "mV", "nA", "nS", "nA", "mV",
    ],
    parameter_defaults: &[
        0.281, 9.3667, 5.0, 5.0, 0.1, 144.0, -70.6, -50.4, -70.6, 0.0, -80.0, 0.0, 4.0, 0.0805,
        2.0,
    ],
    signal_names: &["spikes", "v", "gsyn_exc", "gsyn_inh"],
    signal_units: &["ms", "mV", "uS", "uS"],
    conductance_based: true,
    spike_source: false,
};

/// Marker for the adaptive exponential integrate-and-fire model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EifCondExpIsfaIsta;

impl NeuronType for EifCondExpIsfaIsta {
    const KIND: NeuronKind = NeuronKind::EifCondExpIsfaIsta;
    type Parameters = EifCondExpIsfaIstaParameters;
    type Signals = EifCondExpIsfaIstaSignals;
}

/// Parameter set of an EIF_cond_exp_isfa_ista instance
///
/// Fifteen values in declared order; constructs with the type defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct EifCondExpIsfaIstaParameters {
    values: ParameterVector,
}

impl EifCondExpIsfaIstaParameters {
    /// Create a parameter set seeded with the type defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parameter set from an explicit ordered value sequence
    ///
    /// The sequence must match the declared schema length exactly.
    pub fn from_values(values: &[Real]) -> Result<Self> {
        Ok(Self {
            values: bridge::parameters_from_slice(NeuronKind::EifCondExpIsfaIsta, values)?,
        })
    }
}

impl Default for EifCondExpIsfaIstaParameters {
    fn default() -> Self {
        Self {
            values: DESCRIPTOR.default_parameters(),
        }
    }
}

impl core::ops::Deref for EifCondExpIsfaIstaParameters {
    type Target = ParameterVector;

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl core::ops::DerefMut for EifCondExpIsfaIstaParameters {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.values
    }
}

named_parameters!(EifCondExpIsfaIstaParameters {
    0 => cm,
    1 => tau_m,
    2 => tau_syn_E,
    3 => tau_syn_I,
    4 => tau_refrac,
    5 => tau_w,
    6 => v_rest,
    7 => v_thresh,
    8 => v_reset,
    9 => e_rev_E,
    10 => e_rev_I,
    11 => i_offset,
    12 => a,
    13 => b,
    14 => delta_T,
});

/// Signal-recording flags of an EIF_cond_exp_isfa_ista instance
#[derive(Debug, Clone, PartialEq)]
pub struct EifCondExpIsfaIstaSignals {
    flags: SignalVector,
}

impl EifCondExpIsfaIstaSignals {
    /// Create a signal set recording nothing
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for EifCondExpIsfaIstaSignals {
    fn default() -> Self {
        Self {
            flags: DESCRIPTOR.default_signals(),
        }
    }
}

impl core::ops::Deref for EifCondExpIsfaIstaSignals {
    type Target = SignalVector;

    fn deref(&self) -> &Self::Target {
        &self.flags
    }
}

impl core::ops::DerefMut for EifCondExpIsfaIstaSignals {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.flags
    }
}

named_signals!(EifCondExpIsfaIstaSignals {
    0 => spikes,
    1 => v,
    2 => gsyn_exc,
    3 => gsyn_inh,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::if_cond_exp;

    #[test]
    fn test_schema_shape() {
        assert_eq!(DESCRIPTOR.parameter_count(), 15);
        assert_eq!(DESCRIPTOR.signal_count(), 4);
        assert!(DESCRIPTOR.conductance_based);
        assert!(!DESCRIPTOR.spike_source);
    }

    #[test]
    fn test_signal_schema_matches_if_cond_exp() {
        assert_eq!(DESCRIPTOR.signal_names, if_cond_exp::DESCRIPTOR.signal_names);
        assert_eq!(DESCRIPTOR.signal_units, if_cond_exp::DESCRIPTOR.signal_units);
    }

    #[test]
    fn test_defaults_match_descriptor() {
        let params = EifCondExpIsfaIstaParameters::new();
        assert_eq!(params.len(), 15);
        assert_eq!(params.values(), DESCRIPTOR.parameter_defaults);
        assert_eq!(params.cm(), 0.281);
        assert_eq!(params.tau_w(), 144.0);
        assert_eq!(params.b(), 0.0805);
    }

    #[test]
    fn test_adaptation_accessors() {
        let mut params = EifCondExpIsfaIstaParameters::new();
        params.set_a(2.0).set_delta_T(0.5);
        assert_eq!(params.get(12).unwrap(), 2.0);
        assert_eq!(params.get(14).unwrap(), 0.5);
        assert_eq!(EifCondExpIsfaIstaParameters::IDX_TAU_W, 5);
        assert_eq!(
            NeuronKind::EifCondExpIsfaIsta.parameter_index("delta_T").unwrap(),
            EifCondExpIsfaIstaParameters::IDX_DELTA_T
        );
    }

    #[test]
    fn test_from_values_checks_length() {
        assert!(EifCondExpIsfaIstaParameters::from_values(&[0.0; 11]).is_err());
        assert!(EifCondExpIsfaIstaParameters::from_values(&[0.0; 15]).is_ok());
    }

    #[test]
    fn test_signal_recording() {
        let mut signals = EifCondExpIsfaIstaSignals::new();
        signals.record_gsyn_exc();
        assert!(signals.gsyn_exc());
        assert!(!signals.gsyn_inh());
        assert_eq!(signals.recorded_count(), 1);
    }
}
