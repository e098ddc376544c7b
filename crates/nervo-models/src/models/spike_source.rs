//! Spike source replaying an externally supplied spike schedule

use crate::descriptor::{NeuronKind, NeuronTypeDescriptor, NeuronTypeId};
use crate::models::{named_signals, NeuronType};
use crate::vector::{ParameterVector, Real, SignalVector};

/// Descriptor for the SpikeSourceArray neuron type
///
/// Declares no named parameters: the per-instance value storage is an
/// ordered list of spike times rather than a positional schema. The
/// single recordable signal is the emitted spike train itself.
pub(crate) static DESCRIPTOR: NeuronTypeDescriptor = NeuronTypeDescriptor {
    type_id: NeuronTypeId::new(0),
    name: "SpikeSourceArray",
    parameter_names: &[],
    parameter_units: &[],
    parameter_defaults: &[],
    signal_names: &["spikes"],
    signal_units: &["ms"],
    conductance_based: false,
    spike_source: true,
};

/// Marker for the spike source array model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpikeSourceArray;

impl NeuronType for SpikeSourceArray {
    const KIND: NeuronKind = NeuronKind::SpikeSourceArray;
    type Parameters = SpikeTimes;
    type Signals = SpikeSourceArraySignals;
}

/// Ordered list of spike times (ms) for one spike source instance
///
/// This is an arbitrary-length list, not a schema'd parameter block, but
/// it exports through the same flat value storage as every other model so
/// serializers and backends handle it uniformly. Times are not required
/// to be sorted; [`SpikeTimes::is_sorted`] lets callers check before
/// handing the list to a backend that assumes ordering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpikeTimes {
    values: ParameterVector,
}

impl SpikeTimes {
    /// Create an empty spike schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a spike schedule from an explicit ordered time sequence
    pub fn from_times(times: impl IntoIterator<Item = Real>) -> Self {
        Self {
            values: ParameterVector::from_values(times),
        }
    }

    /// Append a spike time, returning `self` for chaining
    pub fn push(&mut self, time: Real) -> &mut Self {
        self.values.push(time);
        self
    }

    /// The spike times in insertion order
    #[inline]
    pub fn times(&self) -> &[Real] {
        self.values.values()
    }

    /// Check whether the spike times are in non-decreasing order
    pub fn is_sorted(&self) -> bool {
        self.values.values().windows(2).all(|w| w[0] <= w[1])
    }
}

impl FromIterator<Real> for SpikeTimes {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        Self::from_times(iter)
    }
}

impl core::ops::Deref for SpikeTimes {
    type Target = ParameterVector;

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl core::ops::DerefMut for SpikeTimes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.values
    }
}

/// Signal-recording flags of a spike source instance
#[derive(Debug, Clone, PartialEq)]
pub struct SpikeSourceArraySignals {
    flags: SignalVector,
}

impl SpikeSourceArraySignals {
    /// Create a signal set recording nothing
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SpikeSourceArraySignals {
    fn default() -> Self {
        Self {
            flags: DESCRIPTOR.default_signals(),
        }
    }
}

impl core::ops::Deref for SpikeSourceArraySignals {
    type Target = SignalVector;

    fn deref(&self) -> &Self::Target {
        &self.flags
    }
}

impl core::ops::DerefMut for SpikeSourceArraySignals {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.flags
    }
}

named_signals!(SpikeSourceArraySignals {
    0 => spikes,
});
