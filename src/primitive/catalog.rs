//! The fixed catalog of primitive devices and their parameter schemas.
//!
//! Primitive definitions are built once, at first access, and are read-only
//! for the remainder of the process.
//!
//! | Ideal              | Alias(es)   | Physical           | Alias(es)    |
//! | ------------------ | ----------- | ------------------ | ------------ |
//! | IdealResistor      | R, RES      | PhysicalResistor   |              |
//! | IdealCapacitor     | C, CAP      | PhysicalCapacitor  |              |
//! | IdealInductor      | L, IND      | PhysicalInductor   |              |
//! | DcVoltageSource    | V, VDC, VSRC|                    |              |
//! | PulseVoltageSource | VPU, VPULSE |                    |              |
//! | CurrentSource      | I, IDC, ISRC|                    |              |
//! |                    |             | Mos                | nmos, pmos   |
//! |                    |             | Bipolar            | BJT, npn, pnp|
//! |                    |             | Diode              | D            |
//! |                    |             | PhysicalShort      | SHORT        |

use std::any::Any;
use std::fmt::Display;

use arcstr::ArcStr;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{Primitive, PrimitiveCall, PrimitiveKind};
use crate::error::{Error, Result};
use crate::params::{ParamType, Params};
use crate::signal::Port;

/// A scalar source parameter value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SourceValue {
    Int(i64),
    Float(f64),
    /// An expression evaluated by the simulator.
    Expr(ArcStr),
}

impl Default for SourceValue {
    #[inline]
    fn default() -> Self {
        Self::Int(0)
    }
}

impl From<i64> for SourceValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for SourceValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// An enumeration of MOS device types.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default, Debug, Serialize, Deserialize)]
pub enum MosType {
    #[default]
    Nmos,
    Pmos,
}

/// An enumeration of MOS threshold variants.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default, Debug, Serialize, Deserialize)]
pub enum MosVth {
    #[default]
    Std,
    Low,
    High,
}

/// MOS transistor parameters.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct MosParams {
    /// Width in resolution units.
    pub w: i64,
    /// Length in resolution units.
    pub l: i64,
    /// Number of parallel fingers.
    pub npar: u64,
    /// NMOS/PMOS device type.
    pub tp: MosType,
    /// Threshold voltage specifier.
    pub vth: MosVth,
    /// Model name override.
    pub model: Option<ArcStr>,
}

impl Default for MosParams {
    fn default() -> Self {
        Self {
            w: 0,
            l: 0,
            npar: 1,
            tp: MosType::Nmos,
            vth: MosVth::Std,
            model: None,
        }
    }
}

impl MosParams {
    /// Creates parameters with the given width and length, defaulting
    /// everything else.
    pub fn new(w: i64, l: i64) -> Self {
        Self {
            w,
            l,
            ..Default::default()
        }
    }

    /// Returns a copy with the device type replaced.
    #[inline]
    pub fn with_tp(mut self, tp: MosType) -> Self {
        self.tp = tp;
        self
    }

    /// Returns a copy with the threshold variant replaced.
    #[inline]
    pub fn with_vth(mut self, vth: MosVth) -> Self {
        self.vth = vth;
        self
    }

    /// Returns a copy with the model name replaced.
    #[inline]
    pub fn with_model(mut self, model: impl Into<ArcStr>) -> Self {
        self.model = Some(model.into());
        self
    }
}

impl Display for MosParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "w{}_l{}_npar{}", self.w, self.l, self.npar)
    }
}

impl Params for MosParams {
    fn type_name(&self) -> &'static str {
        "MosParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn validate(&self) -> Result<()> {
        if self.w <= 0 {
            return Err(Error::ParameterValue(format!("invalid MOS width {}", self.w)));
        }
        if self.l <= 0 {
            return Err(Error::ParameterValue(format!(
                "invalid MOS length {}",
                self.l
            )));
        }
        if self.npar == 0 {
            return Err(Error::ParameterValue(format!(
                "invalid MOS parallel-finger count {}",
                self.npar
            )));
        }
        Ok(())
    }
}

/// An enumeration of bipolar junction transistor types.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default, Debug, Serialize, Deserialize)]
pub enum BipolarType {
    #[default]
    Npn,
    Pnp,
}

/// Bipolar transistor parameters.
#[derive(Clone, Eq, PartialEq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct BipolarParams {
    /// Width in resolution units.
    pub w: i64,
    /// Length in resolution units.
    pub l: i64,
    /// NPN/PNP device type.
    pub tp: BipolarType,
}

impl BipolarParams {
    /// Creates parameters with the given width and length, defaulting
    /// everything else.
    pub fn new(w: i64, l: i64) -> Self {
        Self {
            w,
            l,
            ..Default::default()
        }
    }

    /// Returns a copy with the device type replaced.
    #[inline]
    pub fn with_tp(mut self, tp: BipolarType) -> Self {
        self.tp = tp;
        self
    }
}

impl Params for BipolarParams {
    fn type_name(&self) -> &'static str {
        "BipolarParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn validate(&self) -> Result<()> {
        if self.w <= 0 {
            return Err(Error::ParameterValue(format!(
                "invalid bipolar width {}",
                self.w
            )));
        }
        if self.l <= 0 {
            return Err(Error::ParameterValue(format!(
                "invalid bipolar length {}",
                self.l
            )));
        }
        Ok(())
    }
}

/// Diode parameters.
#[derive(Clone, Eq, PartialEq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct DiodeParams {
    /// Width in resolution units.
    pub w: Option<i64>,
    /// Length in resolution units.
    pub l: Option<i64>,
    /// Model name override.
    pub model: Option<ArcStr>,
}

impl Params for DiodeParams {
    fn type_name(&self) -> &'static str {
        "DiodeParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Resistor parameters, shared by the ideal and physical flavors.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct ResistorParams {
    /// Resistance, in ohms.
    pub r: f64,
}

impl ResistorParams {
    /// Creates parameters with the given resistance.
    #[inline]
    pub fn new(r: f64) -> Self {
        Self { r }
    }
}

impl Params for ResistorParams {
    fn type_name(&self) -> &'static str {
        "ResistorParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Capacitor parameters, shared by the ideal and physical flavors.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct CapacitorParams {
    /// Capacitance, in farads.
    pub c: f64,
}

impl CapacitorParams {
    /// Creates parameters with the given capacitance.
    #[inline]
    pub fn new(c: f64) -> Self {
        Self { c }
    }
}

impl Params for CapacitorParams {
    fn type_name(&self) -> &'static str {
        "CapacitorParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Inductor parameters, shared by the ideal and physical flavors.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct InductorParams {
    /// Inductance, in henries.
    pub l: f64,
}

impl InductorParams {
    /// Creates parameters with the given inductance.
    #[inline]
    pub fn new(l: f64) -> Self {
        Self { l }
    }
}

impl Params for InductorParams {
    fn type_name(&self) -> &'static str {
        "InductorParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Short-circuit/net-tie parameters.
#[derive(Clone, Eq, PartialEq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct PhysicalShortParams {
    /// Metal layer.
    pub layer: Option<i64>,
    /// Width in resolution units.
    pub w: Option<i64>,
    /// Length in resolution units.
    pub l: Option<i64>,
}

impl Params for PhysicalShortParams {
    fn type_name(&self) -> &'static str {
        "PhysicalShortParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// DC voltage source parameters.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct DcVoltageSourceParams {
    /// DC value, in volts.
    pub dc: SourceValue,
    /// AC amplitude, in volts.
    pub ac: Option<SourceValue>,
}

impl Params for DcVoltageSourceParams {
    fn type_name(&self) -> &'static str {
        "DcVoltageSourceParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Pulse voltage source parameters.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct PulseVoltageSourceParams {
    /// Time delay, in seconds.
    pub delay: Option<SourceValue>,
    /// One value, in volts.
    pub v1: Option<SourceValue>,
    /// Zero value, in volts.
    pub v2: Option<SourceValue>,
    /// Period, in seconds.
    pub period: Option<SourceValue>,
    /// Rise time, in seconds.
    pub rise: Option<SourceValue>,
    /// Fall time, in seconds.
    pub fall: Option<SourceValue>,
    /// Pulse width, in seconds.
    pub width: Option<SourceValue>,
}

impl Params for PulseVoltageSourceParams {
    fn type_name(&self) -> &'static str {
        "PulseVoltageSourceParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// DC current source parameters.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct CurrentSourceParams {
    /// DC value, in amperes.
    pub dc: SourceValue,
}

impl Params for CurrentSourceParams {
    fn type_name(&self) -> &'static str {
        "CurrentSourceParams"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn two_terminal() -> Vec<Port> {
    vec![Port::new("p"), Port::new("n")]
}

lazy_static! {
    /// MOS transistor. Ports: d, g, s, b.
    pub static ref MOS: Primitive = Primitive::builder()
        .name("Mos")
        .desc("MOS transistor")
        .port_list(vec![
            Port::new("d"),
            Port::new("g"),
            Port::new("s"),
            Port::new("b"),
        ])
        .param_type(ParamType::of::<MosParams>())
        .kind(PrimitiveKind::Physical)
        .build()
        .expect("invalid Mos definition");

    /// Bipolar transistor. Ports: c, b, e.
    pub static ref BIPOLAR: Primitive = Primitive::builder()
        .name("Bipolar")
        .desc("Bipolar transistor")
        .port_list(vec![Port::new("c"), Port::new("b"), Port::new("e")])
        .param_type(ParamType::of::<BipolarParams>())
        .kind(PrimitiveKind::Physical)
        .build()
        .expect("invalid Bipolar definition");

    /// Diode. Ports: p, n.
    pub static ref DIODE: Primitive = Primitive::builder()
        .name("Diode")
        .desc("Diode")
        .port_list(two_terminal())
        .param_type(ParamType::of::<DiodeParams>())
        .kind(PrimitiveKind::Physical)
        .build()
        .expect("invalid Diode definition");

    /// Ideal resistor. Ports: p, n.
    pub static ref IDEAL_RESISTOR: Primitive = Primitive::builder()
        .name("IdealResistor")
        .desc("Ideal resistor")
        .port_list(two_terminal())
        .param_type(ParamType::of::<ResistorParams>())
        .kind(PrimitiveKind::Ideal)
        .build()
        .expect("invalid IdealResistor definition");

    /// Physical resistor. Ports: p, n.
    pub static ref PHYSICAL_RESISTOR: Primitive = Primitive::builder()
        .name("PhysicalResistor")
        .desc("Physical resistor")
        .port_list(two_terminal())
        .param_type(ParamType::of::<ResistorParams>())
        .kind(PrimitiveKind::Physical)
        .build()
        .expect("invalid PhysicalResistor definition");

    /// Ideal capacitor. Ports: p, n.
    pub static ref IDEAL_CAPACITOR: Primitive = Primitive::builder()
        .name("IdealCapacitor")
        .desc("Ideal capacitor")
        .port_list(two_terminal())
        .param_type(ParamType::of::<CapacitorParams>())
        .kind(PrimitiveKind::Ideal)
        .build()
        .expect("invalid IdealCapacitor definition");

    /// Physical capacitor. Ports: p, n.
    pub static ref PHYSICAL_CAPACITOR: Primitive = Primitive::builder()
        .name("PhysicalCapacitor")
        .desc("Physical capacitor")
        .port_list(two_terminal())
        .param_type(ParamType::of::<CapacitorParams>())
        .kind(PrimitiveKind::Physical)
        .build()
        .expect("invalid PhysicalCapacitor definition");

    /// Ideal inductor. Ports: p, n.
    pub static ref IDEAL_INDUCTOR: Primitive = Primitive::builder()
        .name("IdealInductor")
        .desc("Ideal inductor")
        .port_list(two_terminal())
        .param_type(ParamType::of::<InductorParams>())
        .kind(PrimitiveKind::Ideal)
        .build()
        .expect("invalid IdealInductor definition");

    /// Physical inductor. Ports: p, n.
    pub static ref PHYSICAL_INDUCTOR: Primitive = Primitive::builder()
        .name("PhysicalInductor")
        .desc("Physical inductor")
        .port_list(two_terminal())
        .param_type(ParamType::of::<InductorParams>())
        .kind(PrimitiveKind::Physical)
        .build()
        .expect("invalid PhysicalInductor definition");

    /// Short-circuit/net-tie. Ports: p, n.
    pub static ref PHYSICAL_SHORT: Primitive = Primitive::builder()
        .name("PhysicalShort")
        .desc("Short-circuit/net-tie")
        .port_list(two_terminal())
        .param_type(ParamType::of::<PhysicalShortParams>())
        .kind(PrimitiveKind::Physical)
        .build()
        .expect("invalid PhysicalShort definition");

    /// Ideal DC voltage source. Ports: p, n.
    pub static ref DC_VOLTAGE_SOURCE: Primitive = Primitive::builder()
        .name("DcVoltageSource")
        .desc("Ideal DC voltage source")
        .port_list(two_terminal())
        .param_type(ParamType::of::<DcVoltageSourceParams>())
        .kind(PrimitiveKind::Ideal)
        .build()
        .expect("invalid DcVoltageSource definition");

    /// Pulse voltage source. Ports: p, n.
    pub static ref PULSE_VOLTAGE_SOURCE: Primitive = Primitive::builder()
        .name("PulseVoltageSource")
        .desc("Pulse voltage source")
        .port_list(two_terminal())
        .param_type(ParamType::of::<PulseVoltageSourceParams>())
        .kind(PrimitiveKind::Ideal)
        .build()
        .expect("invalid PulseVoltageSource definition");

    /// Ideal DC current source. Ports: p, n.
    pub static ref CURRENT_SOURCE: Primitive = Primitive::builder()
        .name("CurrentSource")
        .desc("Ideal DC current source")
        .port_list(two_terminal())
        .param_type(ParamType::of::<CurrentSourceParams>())
        .kind(PrimitiveKind::Ideal)
        .build()
        .expect("invalid CurrentSource definition");
}

lazy_static! {
    /// Alias for `IDEAL_RESISTOR`.
    pub static ref R: &'static Primitive = &IDEAL_RESISTOR;
    /// Alias for `IDEAL_RESISTOR`.
    pub static ref RES: &'static Primitive = &IDEAL_RESISTOR;
    /// Alias for `IDEAL_CAPACITOR`.
    pub static ref C: &'static Primitive = &IDEAL_CAPACITOR;
    /// Alias for `IDEAL_CAPACITOR`.
    pub static ref CAP: &'static Primitive = &IDEAL_CAPACITOR;
    /// Alias for `IDEAL_INDUCTOR`.
    pub static ref L: &'static Primitive = &IDEAL_INDUCTOR;
    /// Alias for `IDEAL_INDUCTOR`.
    pub static ref IND: &'static Primitive = &IDEAL_INDUCTOR;
    /// Alias for `DIODE`.
    pub static ref D: &'static Primitive = &DIODE;
    /// Alias for `PHYSICAL_SHORT`.
    pub static ref SHORT: &'static Primitive = &PHYSICAL_SHORT;
    /// Alias for `DC_VOLTAGE_SOURCE`.
    pub static ref V: &'static Primitive = &DC_VOLTAGE_SOURCE;
    /// Alias for `DC_VOLTAGE_SOURCE`.
    pub static ref VDC: &'static Primitive = &DC_VOLTAGE_SOURCE;
    /// Alias for `DC_VOLTAGE_SOURCE`.
    pub static ref VSRC: &'static Primitive = &DC_VOLTAGE_SOURCE;
    /// Alias for `PULSE_VOLTAGE_SOURCE`.
    pub static ref VPU: &'static Primitive = &PULSE_VOLTAGE_SOURCE;
    /// Alias for `PULSE_VOLTAGE_SOURCE`.
    pub static ref VPULSE: &'static Primitive = &PULSE_VOLTAGE_SOURCE;
    /// Alias for `CURRENT_SOURCE`.
    pub static ref I: &'static Primitive = &CURRENT_SOURCE;
    /// Alias for `CURRENT_SOURCE`.
    pub static ref IDC: &'static Primitive = &CURRENT_SOURCE;
    /// Alias for `CURRENT_SOURCE`.
    pub static ref ISRC: &'static Primitive = &CURRENT_SOURCE;
    /// Alias for `BIPOLAR`.
    pub static ref BJT: &'static Primitive = &BIPOLAR;
}

/// Creates an NMOS call. A thin wrapper around the `Mos` primitive that
/// forces the device type to [`MosType::Nmos`], leaving all other fields
/// unchanged.
pub fn nmos(params: MosParams) -> Result<PrimitiveCall> {
    MOS.call(params.with_tp(MosType::Nmos))
}

/// Creates a PMOS call. A thin wrapper around the `Mos` primitive that
/// forces the device type to [`MosType::Pmos`].
pub fn pmos(params: MosParams) -> Result<PrimitiveCall> {
    MOS.call(params.with_tp(MosType::Pmos))
}

/// Creates an NPN call. A thin wrapper around the `Bipolar` primitive that
/// forces the device type to [`BipolarType::Npn`].
pub fn npn(params: BipolarParams) -> Result<PrimitiveCall> {
    BIPOLAR.call(params.with_tp(BipolarType::Npn))
}

/// Creates a PNP call. A thin wrapper around the `Bipolar` primitive that
/// forces the device type to [`BipolarType::Pnp`].
pub fn pnp(params: BipolarParams) -> Result<PrimitiveCall> {
    BIPOLAR.call(params.with_tp(BipolarType::Pnp))
}
