
//! The SI units which the CGS table is built from.

use crate::error::Error;
use crate::units::definition::DefOptions;
use crate::units::dimension::BaseDimension;
use crate::units::registry::UnitRegistry;
use crate::units::scale::Scale;

use num::pow::Pow;

pub const NAMESPACE: &str = "si";

/// Defines the SI units in namespace [`NAMESPACE`].
pub fn define(registry: &mut UnitRegistry) -> Result<(), Error> {
  use BaseDimension::*;
  let mut si = registry.scope(NAMESPACE);
  let prefixed = DefOptions::new().registered().with_prefixes(true);

  // Irreducible units
  let m = si.def_unit(["m", "meter"], None, &prefixed.clone().with_dimension(Length).with_doc("meter: base unit of length in SI"))?;
  let s = si.def_unit(["s", "second"], None, &prefixed.clone().with_dimension(Time).with_doc("second: base unit of time in SI."))?;
  let kg = si.def_unit(
    ["kg", "kilogram"],
    None,
    &DefOptions::new().registered().with_dimension(Mass).with_doc("kilogram: base unit of mass in SI."),
  )?;
  let a = si.def_unit(["A", "ampere", "amp"], None, &prefixed.clone().with_dimension(Current).with_doc("ampere: base unit of electric current in SI"))?;
  si.def_unit(["K", "Kelvin"], None, &prefixed.clone().with_dimension(Temperature).with_doc("Kelvin: temperature with a null point at absolute zero."))?;
  si.def_unit(["mol", "mole"], None, &prefixed.clone().with_dimension(AmountOfSubstance).with_doc("mole: amount of a chemical substance in SI."))?;
  si.def_unit(["cd", "candela"], None, &prefixed.clone().with_dimension(LuminousIntensity).with_doc("candela: base unit of luminous intensity in SI"))?;
  let rad = si.def_unit(["rad", "radian"], None, &prefixed.clone().with_dimension(Angle).with_doc("radian: angular measurement of the ratio between the length on an arc and its radius"))?;

  // Mass is defined in kilograms, so grams must not expand to a
  // second kilogram.
  si.def_unit(
    ["g", "gram"],
    Some(Scale::ratio(1, 1000) * kg.to_expr()),
    &prefixed.clone().excluding_prefixes(["k", "kilo"]),
  )?;

  // Derived units
  si.def_unit(["sr", "steradian"], Some(rad.expr().pow(2)), &prefixed.clone().with_doc("steradian: unit of solid angle in SI"))?;
  si.def_unit(["Hz", "Hertz", "hertz"], Some(s.expr().pow(-1)), &prefixed.clone().with_doc("Frequency"))?;
  let n = si.def_unit(
    ["N", "Newton", "newton"],
    Some(kg.to_expr() * m.to_expr() / s.expr().pow(2)),
    &prefixed.clone().with_doc("Newton: force"),
  )?;
  let j = si.def_unit(["J", "Joule", "joule"], Some(n.to_expr() * m.to_expr()), &prefixed.clone().with_doc("Joule: energy"))?;
  si.def_unit(["W", "Watt", "watt"], Some(j.to_expr() / s.to_expr()), &prefixed.clone().with_doc("Watt: power"))?;
  si.def_unit(["Pa", "Pascal", "pascal"], Some(j.to_expr() / m.expr().pow(3)), &prefixed.clone().with_doc("Pascal: pressure"))?;
  let c = si.def_unit(["C", "coulomb"], Some(a.to_expr() * s.to_expr()), &prefixed.clone().with_doc("coulomb: electric charge"))?;
  let v = si.def_unit(["V", "Volt", "volt"], Some(j.to_expr() / c.to_expr()), &prefixed.clone().with_doc("Volt: electric potential or electromotive force"))?;
  si.def_unit(
    ["T", "Tesla", "tesla"],
    Some(v.to_expr() * s.to_expr() / m.expr().pow(2)),
    &prefixed.with_doc("Tesla: magnetic flux density"),
  )?;
  Ok(())
}
