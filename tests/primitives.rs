use std::any::Any;
use std::collections::HashSet;

use subprim::error::{Error, Result};
use subprim::params::{self, NoParams, ParamType, Params};
use subprim::primitive::catalog::*;
use subprim::primitive::{Primitive, PrimitiveKind};
use subprim::signal::{Port, Visibility};

#[test]
fn test_mos_call_ports() {
    let call = MOS.call(MosParams::new(1, 1)).expect("failed to call Mos");
    let ports = call.ports();
    let names: HashSet<&str> = ports.keys().map(|k| k.as_str()).collect();
    assert_eq!(names, HashSet::from(["d", "g", "s", "b"]));
}

#[test]
fn test_call_ports_delegate_to_primitive() {
    let call = MOS.call(MosParams::new(2, 1)).expect("failed to call Mos");
    assert_eq!(call.ports(), call.primitive().ports());

    let call = V
        .call(DcVoltageSourceParams::default())
        .expect("failed to call DcVoltageSource");
    assert_eq!(call.ports(), call.primitive().ports());
}

#[test]
fn test_mos_invalid_width() {
    let res = MOS.call(MosParams::new(0, 1));
    assert!(matches!(res, Err(Error::ParameterValue(_))));
}

#[test]
fn test_mos_invalid_length() {
    let res = MOS.call(MosParams::new(1, -2));
    assert!(matches!(res, Err(Error::ParameterValue(_))));
}

#[test]
fn test_mos_invalid_npar() {
    let params = MosParams {
        npar: 0,
        ..MosParams::new(1, 1)
    };
    let res = MOS.call(params);
    assert!(matches!(res, Err(Error::ParameterValue(_))));
}

#[test]
fn test_bipolar_invalid_geometry() {
    assert!(matches!(
        BIPOLAR.call(BipolarParams::new(0, 1)),
        Err(Error::ParameterValue(_))
    ));
    assert!(matches!(
        BIPOLAR.call(BipolarParams::new(1, 0)),
        Err(Error::ParameterValue(_))
    ));
    assert!(BIPOLAR.call(BipolarParams::new(1, 1)).is_ok());
}

#[test]
fn test_wrong_schema_rejected() {
    let res = MOS.call(ResistorParams::new(100.0));
    match res {
        Err(Error::ParameterType { expected, .. }) => assert_eq!(expected, "MosParams"),
        other => panic!("expected ParameterType error, got {other:?}"),
    }
}

#[test]
fn test_noparams_call_rejected_on_parameterized_primitive() {
    let res = MOS.call_noparams();
    assert!(matches!(res, Err(Error::ParameterType { .. })));
}

#[test]
fn test_nmos_forces_device_type() {
    let input = MosParams::new(3, 2).with_tp(MosType::Pmos).with_vth(MosVth::Low);
    let call = nmos(input.clone()).expect("failed to create NMOS call");
    let bound = call
        .params_as::<MosParams>()
        .expect("bound parameters should be MosParams");
    assert_eq!(bound.tp, MosType::Nmos);
    assert_eq!(bound.w, input.w);
    assert_eq!(bound.l, input.l);
    assert_eq!(bound.npar, input.npar);
    assert_eq!(bound.vth, input.vth);
    assert_eq!(bound.model, input.model);
    // The input itself is never mutated.
    assert_eq!(input.tp, MosType::Pmos);
}

#[test]
fn test_pmos_npn_pnp_force_device_type() {
    let call = pmos(MosParams::new(1, 1)).expect("failed to create PMOS call");
    assert_eq!(call.params_as::<MosParams>().unwrap().tp, MosType::Pmos);

    let call = npn(BipolarParams::new(1, 1).with_tp(BipolarType::Pnp))
        .expect("failed to create NPN call");
    assert_eq!(call.params_as::<BipolarParams>().unwrap().tp, BipolarType::Npn);

    let call = pnp(BipolarParams::new(1, 1)).expect("failed to create PNP call");
    assert_eq!(call.params_as::<BipolarParams>().unwrap().tp, BipolarType::Pnp);
}

#[test]
fn test_unnamed_port_rejected() {
    let res = Primitive::builder()
        .name("BadPorts")
        .desc("unnamed port")
        .port_list(vec![Port::new("")])
        .param_type(ParamType::of::<NoParams>())
        .kind(PrimitiveKind::Ideal)
        .build();
    assert!(matches!(res, Err(Error::PortDefinition { .. })));
}

#[test]
fn test_internal_visibility_rejected() {
    let res = Primitive::builder()
        .name("BadVis")
        .desc("internal port")
        .port_list(vec![
            Port::new("p"),
            Port::with_visibility("x", Visibility::Internal),
        ])
        .param_type(ParamType::of::<NoParams>())
        .kind(PrimitiveKind::Ideal)
        .build();
    match res {
        Err(Error::PortDefinition { port, .. }) => assert_eq!(port.as_str(), "x"),
        other => panic!("expected PortDefinition error, got {other:?}"),
    }
}

#[test]
fn test_duplicate_port_name_rejected() {
    let res = Primitive::builder()
        .name("BadDup")
        .desc("duplicate port name")
        .port_list(vec![Port::new("p"), Port::new("n"), Port::new("p")])
        .param_type(ParamType::of::<NoParams>())
        .kind(PrimitiveKind::Ideal)
        .build();
    assert!(matches!(res, Err(Error::PortDefinition { .. })));
}

#[derive(Clone, Default, Debug)]
struct UnrecognizedParams;

impl Params for UnrecognizedParams {
    fn type_name(&self) -> &'static str {
        "UnrecognizedParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn test_unrecognized_schema_rejected() {
    let res = Primitive::builder()
        .name("BadSchema")
        .desc("unrecognized schema")
        .port_list(vec![Port::new("p"), Port::new("n")])
        .param_type(ParamType::of::<UnrecognizedParams>())
        .kind(PrimitiveKind::Ideal)
        .build();
    match res {
        Err(Error::Configuration {
            param_type,
            primitive,
        }) => {
            assert_eq!(param_type, "UnrecognizedParams");
            assert_eq!(primitive.as_str(), "BadSchema");
        }
        other => panic!("expected Configuration error, got {other:?}"),
    }
}

#[derive(Clone, Default, Debug)]
struct ExternalParams;

impl Params for ExternalParams {
    fn type_name(&self) -> &'static str {
        "ExternalParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn test_registered_schema_accepted() -> Result<()> {
    params::register::<ExternalParams>();
    let prim = Primitive::builder()
        .name("External")
        .desc("externally registered schema")
        .port_list(vec![Port::new("p"), Port::new("n")])
        .param_type(ParamType::of::<ExternalParams>())
        .kind(PrimitiveKind::Ideal)
        .build()?;
    let call = prim.call(ExternalParams)?;
    assert!(call.params_as::<ExternalParams>().is_some());
    Ok(())
}

#[test]
fn test_noparams_primitive() -> Result<()> {
    let prim = Primitive::builder()
        .name("Stub")
        .desc("parameter-less primitive")
        .port_list(vec![Port::new("p"), Port::new("n")])
        .param_type(ParamType::of::<NoParams>())
        .kind(PrimitiveKind::Ideal)
        .build()?;
    let call = prim.call_noparams()?;
    assert_eq!(call.ports().len(), 2);
    Ok(())
}

#[test]
fn test_catalog_kinds() {
    assert_eq!(MOS.kind(), PrimitiveKind::Physical);
    assert_eq!(BIPOLAR.kind(), PrimitiveKind::Physical);
    assert_eq!(DIODE.kind(), PrimitiveKind::Physical);
    assert_eq!(PHYSICAL_SHORT.kind(), PrimitiveKind::Physical);
    assert_eq!(PHYSICAL_RESISTOR.kind(), PrimitiveKind::Physical);
    assert_eq!(IDEAL_RESISTOR.kind(), PrimitiveKind::Ideal);
    assert_eq!(IDEAL_CAPACITOR.kind(), PrimitiveKind::Ideal);
    assert_eq!(IDEAL_INDUCTOR.kind(), PrimitiveKind::Ideal);
    assert_eq!(DC_VOLTAGE_SOURCE.kind(), PrimitiveKind::Ideal);
    assert_eq!(PULSE_VOLTAGE_SOURCE.kind(), PrimitiveKind::Ideal);
    assert_eq!(CURRENT_SOURCE.kind(), PrimitiveKind::Ideal);
}

#[test]
fn test_catalog_schemas() {
    assert_eq!(MOS.params(), ParamType::of::<MosParams>());
    assert_eq!(IDEAL_RESISTOR.params(), ParamType::of::<ResistorParams>());
    assert_eq!(PHYSICAL_RESISTOR.params(), ParamType::of::<ResistorParams>());
    assert_eq!(
        DC_VOLTAGE_SOURCE.params(),
        ParamType::of::<DcVoltageSourceParams>()
    );
}

#[test]
fn test_aliases_share_definitions() {
    assert!(std::ptr::eq(*R, &*IDEAL_RESISTOR));
    assert!(std::ptr::eq(*RES, &*IDEAL_RESISTOR));
    assert!(std::ptr::eq(*C, &*IDEAL_CAPACITOR));
    assert!(std::ptr::eq(*L, &*IDEAL_INDUCTOR));
    assert!(std::ptr::eq(*D, &*DIODE));
    assert!(std::ptr::eq(*SHORT, &*PHYSICAL_SHORT));
    assert!(std::ptr::eq(*V, &*DC_VOLTAGE_SOURCE));
    assert!(std::ptr::eq(*VPULSE, &*PULSE_VOLTAGE_SOURCE));
    assert!(std::ptr::eq(*I, &*CURRENT_SOURCE));
    assert!(std::ptr::eq(*BJT, &*BIPOLAR));
}

#[test]
fn test_passive_calls() {
    assert!(R.call(ResistorParams::new(1e3)).is_ok());
    assert!(C.call(CapacitorParams::new(1e-12)).is_ok());
    assert!(L.call(InductorParams::new(1e-9)).is_ok());
    assert!(SHORT.call(PhysicalShortParams::default()).is_ok());
    assert!(VPU.call(PulseVoltageSourceParams::default()).is_ok());
    assert!(ISRC
        .call(CurrentSourceParams {
            dc: SourceValue::from(1e-6),
        })
        .is_ok());
    assert!(DIODE.call(DiodeParams::default()).is_ok());
}
