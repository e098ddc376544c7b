//! End-to-end schema properties across the whole model registry

use nervo_models::{
    parameters_from_slice, EifCondExpIsfaIsta, EifCondExpIsfaIstaParameters, IfCondExp,
    IfCondExpParameters, IfCondExpSignals, ModelError, NeuronKind, NeuronType, NullNeuron,
    ParameterVector, Real, SpikeSourceArray, SpikeSourceArraySignals, SpikeTimes,
};

#[test]
fn every_descriptor_is_index_aligned() {
    for kind in NeuronKind::ALL {
        let desc = kind.descriptor();
        assert_eq!(desc.parameter_names.len(), desc.parameter_units.len());
        assert_eq!(desc.parameter_names.len(), desc.parameter_defaults.len());
        assert_eq!(desc.signal_names.len(), desc.signal_units.len());
    }
}

#[test]
fn every_declared_name_resolves_to_its_position() {
    for kind in NeuronKind::ALL {
        let desc = kind.descriptor();
        for (i, name) in desc.parameter_names.iter().enumerate() {
            assert_eq!(kind.parameter_index(name).unwrap(), i, "{kind}::{name}");
        }
        for (i, name) in desc.signal_names.iter().enumerate() {
            assert_eq!(kind.signal_index(name).unwrap(), i, "{kind}::{name}");
        }
    }
}

#[test]
fn unknown_names_fail_on_every_type() {
    for kind in NeuronKind::ALL {
        assert!(matches!(
            kind.parameter_index("nonexistent"),
            Err(ModelError::UnknownParameter { .. })
        ));
    }
}

#[test]
fn fresh_instances_carry_descriptor_defaults() {
    let if_params = IfCondExpParameters::new();
    let desc = IfCondExp::descriptor();
    for i in 0..desc.parameter_count() {
        assert_eq!(if_params.get(i).unwrap(), desc.parameter_defaults[i]);
    }

    let eif_params = EifCondExpIsfaIstaParameters::new();
    let desc = EifCondExpIsfaIsta::descriptor();
    for i in 0..desc.parameter_count() {
        assert_eq!(eif_params.get(i).unwrap(), desc.parameter_defaults[i]);
    }
}

#[test]
fn explicit_construction_round_trips() {
    let values = [3.0, 1.0, 4.0, 1.0, 5.0];
    let vector = ParameterVector::from_values(values);
    for (i, expected) in values.iter().enumerate() {
        assert_eq!(vector.get(i).unwrap(), *expected);
    }
}

#[test]
fn if_cond_exp_named_position_contract() {
    let mut params = IfCondExpParameters::new();
    assert_eq!(params.len(), 11);
    assert!(NeuronKind::IfCondExp.conductance_based());
    assert!(!NeuronKind::IfCondExp.spike_source());

    params.set_v_thresh(-48.5);
    assert_eq!(params.get(6).unwrap(), -48.5);
    assert_eq!(NeuronKind::IfCondExp.parameter_index("v_thresh").unwrap(), 6);
}

#[test]
fn eif_shares_the_if_signal_schema() {
    let eif = EifCondExpIsfaIsta::descriptor();
    assert_eq!(EifCondExpIsfaIstaParameters::new().len(), 15);
    assert_eq!(eif.signal_names, &["spikes", "v", "gsyn_exc", "gsyn_inh"]);
    assert_eq!(eif.signal_names, IfCondExp::descriptor().signal_names);
}

#[test]
fn spike_source_schedule_and_signal_are_independent() {
    let times = SpikeTimes::from_times([1.0, 5.5, 9.25]);
    assert_eq!(times.len(), 3);

    let collected: Vec<Real> = times.iter().copied().collect();
    assert_eq!(collected, vec![1.0, 5.5, 9.25]);

    let mut signals = SpikeSourceArraySignals::new();
    signals.record_spikes();
    assert!(signals.spikes());
    assert_eq!(times.len(), 3);

    assert!(SpikeSourceArray::descriptor().spike_source);
}

#[test]
fn null_type_declares_nothing() {
    let desc = NullNeuron::descriptor();
    assert_eq!(desc.parameter_count(), 0);
    assert_eq!(desc.signal_count(), 0);
    assert!(NeuronKind::Null.parameter_index("anything").is_err());
    assert!(NeuronKind::Null.signal_index("anything").is_err());
}

#[test]
fn name_resolution_is_stable_across_calls() {
    let first = NeuronKind::IfCondExp.parameter_index("cm").unwrap();
    for _ in 0..100 {
        assert_eq!(NeuronKind::IfCondExp.parameter_index("cm").unwrap(), first);
    }
}

#[test]
fn external_data_is_validated_before_acceptance() {
    let err = parameters_from_slice(NeuronKind::EifCondExpIsfaIsta, &[0.0; 3]).unwrap_err();
    match err {
        ModelError::SchemaMismatch { expected, actual, .. } => {
            assert_eq!(expected, 15);
            assert_eq!(actual, 3);
        }
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }

    let accepted = parameters_from_slice(NeuronKind::Null, &[]).unwrap();
    assert!(accepted.is_empty());
}

#[test]
fn generic_code_sees_uniform_storage() {
    // Type-agnostic length check through the base vector only
    fn schema_len(values: &ParameterVector) -> usize {
        values.len()
    }

    let if_params = IfCondExpParameters::new();
    let eif_params = EifCondExpIsfaIstaParameters::new();
    let times = SpikeTimes::from_times([2.0]);

    assert_eq!(schema_len(&if_params), 11);
    assert_eq!(schema_len(&eif_params), 15);
    assert_eq!(schema_len(&times), 1);
}

#[test]
fn recording_choices_follow_declared_signal_order() {
    let mut signals = IfCondExpSignals::new();
    signals.record_v().record_gsyn_inh();

    let v_idx = NeuronKind::IfCondExp.signal_index("v").unwrap();
    let gsyn_inh_idx = NeuronKind::IfCondExp.signal_index("gsyn_inh").unwrap();
    assert!(signals.is_recorded(v_idx).unwrap());
    assert!(signals.is_recorded(gsyn_inh_idx).unwrap());
    assert_eq!(signals.recorded_count(), 2);
}
