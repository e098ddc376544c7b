//! Validation boundary between external data and typed model storage
//!
//! Serializer and backend bridges exchange flat blocks: a stable type id,
//! the ordered parameter values and the ordered signal-enabled flags.
//! Inside the crate a vector's length always matches its type's schema by
//! construction; data arriving from outside (deserialized, versioned,
//! untrusted) has to be checked against the descriptor here before it
//! becomes a [`ParameterVector`] or [`SignalVector`].

use crate::descriptor::{NeuronKind, NeuronTypeId};
use crate::error::{ModelError, Result};
use crate::vector::{ParameterVector, Real, SignalVector};
use log::debug;

/// Build a parameter vector for `kind` from externally supplied values
///
/// The value count must match the descriptor's declared parameter count.
/// Spike-source kinds are exempt: their value storage is an ordered spike
/// schedule of arbitrary length, not a positional schema.
pub fn parameters_from_slice(kind: NeuronKind, values: &[Real]) -> Result<ParameterVector> {
    let desc = kind.descriptor();
    if !desc.spike_source && values.len() != desc.parameter_count() {
        debug!(
            "rejected parameter block for {}: expected {} values, got {}",
            kind,
            desc.parameter_count(),
            values.len()
        );
        return Err(ModelError::schema_mismatch(
            kind,
            desc.parameter_count(),
            values.len(),
        ));
    }
    Ok(ParameterVector::from(values))
}

/// Build a signal vector for `kind` from externally supplied flags
///
/// The flag count must match the descriptor's declared signal count for
/// every kind, spike sources included.
pub fn signals_from_slice(kind: NeuronKind, flags: &[bool]) -> Result<SignalVector> {
    let desc = kind.descriptor();
    if flags.len() != desc.signal_count() {
        debug!(
            "rejected signal block for {}: expected {} flags, got {}",
            kind,
            desc.signal_count(),
            flags.len()
        );
        return Err(ModelError::schema_mismatch(
            kind,
            desc.signal_count(),
            flags.len(),
        ));
    }
    Ok(SignalVector::from_flags(flags.iter().copied()))
}

/// Flat per-instance view consumed by serializer and backend bridges
///
/// Field order and sequence order mirror the declared schema exactly;
/// consumers address entries positionally or by the descriptor's names.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InstanceRecord<'a> {
    /// Stable id of the instance's neuron type
    pub type_id: NeuronTypeId,
    /// Ordered parameter values (or spike times for spike sources)
    pub parameters: &'a [Real],
    /// Ordered signal-enabled flags
    pub recorded: &'a [bool],
}

impl<'a> InstanceRecord<'a> {
    /// Assemble the record for one instance, validating both vectors
    /// against the kind's schema first
    pub fn new(
        kind: NeuronKind,
        parameters: &'a ParameterVector,
        signals: &'a SignalVector,
    ) -> Result<Self> {
        let desc = kind.descriptor();
        if !desc.spike_source && parameters.len() != desc.parameter_count() {
            return Err(ModelError::schema_mismatch(
                kind,
                desc.parameter_count(),
                parameters.len(),
            ));
        }
        if signals.len() != desc.signal_count() {
            return Err(ModelError::schema_mismatch(
                kind,
                desc.signal_count(),
                signals.len(),
            ));
        }
        Ok(Self {
            type_id: desc.type_id,
            parameters: parameters.values(),
            recorded: signals.flags(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_length_is_enforced() {
        let err = parameters_from_slice(NeuronKind::IfCondExp, &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            ModelError::SchemaMismatch {
                kind: NeuronKind::IfCondExp,
                expected: 11,
                actual: 2,
            }
        );

        assert!(signals_from_slice(NeuronKind::IfCondExp, &[true]).is_err());
    }

    #[test]
    fn test_matching_data_is_accepted_verbatim() {
        let values: Vec<Real> = (0..11).map(|i| i as Real * 0.5).collect();
        let params = parameters_from_slice(NeuronKind::IfCondExp, &values).unwrap();
        assert_eq!(params.values(), values.as_slice());

        let signals =
            signals_from_slice(NeuronKind::IfCondExp, &[true, false, true, false]).unwrap();
        assert_eq!(signals.flags(), &[true, false, true, false]);
    }

    #[test]
    fn test_spike_source_accepts_any_parameter_length() {
        let params = parameters_from_slice(NeuronKind::SpikeSourceArray, &[1.0, 5.5, 9.25]).unwrap();
        assert_eq!(params.len(), 3);

        let empty = parameters_from_slice(NeuronKind::SpikeSourceArray, &[]).unwrap();
        assert!(empty.is_empty());

        // Signal schema stays fixed even for spike sources
        assert!(signals_from_slice(NeuronKind::SpikeSourceArray, &[true, true]).is_err());
    }

    #[test]
    fn test_record_preserves_order_and_id() {
        let params = ParameterVector::from_values((0..11).map(|i| i as Real));
        let mut signals = SignalVector::new(4);
        signals.record(1).unwrap();

        let record = InstanceRecord::new(NeuronKind::IfCondExp, &params, &signals).unwrap();
        assert_eq!(record.type_id.raw(), 1);
        assert_eq!(record.parameters, params.values());
        assert_eq!(record.recorded, &[false, true, false, false]);
    }

    #[test]
    fn test_record_rejects_wrong_lengths() {
        let params = ParameterVector::from_values([1.0]);
        let signals = SignalVector::new(4);
        assert!(InstanceRecord::new(NeuronKind::IfCondExp, &params, &signals).is_err());
    }
}
