
//! Units of the centimeter-gram-second system, built from the SI
//! catalog.

use super::si;
use crate::error::Error;
use crate::units::definition::DefOptions;
use crate::units::registry::{UnitRegistry, NotFoundError};
use crate::units::scale::Scale;
use crate::units::system::UnitSystem;
use crate::units::exponent::ratio;
use crate::util::TryPow;

use num::pow::Pow;

use std::sync::Arc;

pub const NAMESPACE: &str = "cgs";

/// The units imported unchanged from the SI catalog.
pub const SI_IMPORTS: [&str; 8] = ["g", "s", "C", "rad", "sr", "cd", "K", "mol"];

/// The preferred unit of each base dimension, used to express any
/// unit in CGS terms.
pub const BASES: [&str; 8] = ["cm", "g", "s", "C", "rad", "cd", "K", "mol"];

/// Defines the CGS units in namespace [`NAMESPACE`]. The SI units
/// must already be defined.
pub fn define(registry: &mut UnitRegistry) -> Result<(), Error> {
  let mut cgs = registry.scope(NAMESPACE);
  let prefixed = DefOptions::new().registered().with_prefixes(true);
  let plain = DefOptions::new().registered();

  let si_cm = cgs.expr_of(si::NAMESPACE, "cm")?;
  let cm = cgs.def_unit(["cm", "centimeter"], Some(si_cm), &plain)?.to_expr();
  for name in SI_IMPORTS {
    cgs.import(si::NAMESPACE, name)?;
  }
  let g = cgs.lookup("g")?.to_expr();
  let s = cgs.lookup("s")?.to_expr();
  let cm2 = (&cm).pow(2);
  let s2 = (&s).pow(2);

  // Acceleration
  cgs.def_unit(["Gal", "gal"], Some(&cm / &s2), &prefixed.clone().with_doc("Gal: CGS unit of acceleration"))?;

  // Energy
  cgs.def_unit(["erg"], Some(&g * &(&cm2 / &s2)), &prefixed.clone().with_doc("erg: CGS unit of energy"))?;

  // Force
  cgs.def_unit(["dyn", "dyne"], Some(&g * &(&cm / &s2)), &prefixed.clone().with_doc("dyne: CGS unit of force"))?;

  // Pressure
  cgs.def_unit(
    ["Ba", "Barye", "barye"],
    Some(&g / &(&cm * &s2)),
    &prefixed.clone().with_doc("Barye: CGS unit of pressure"),
  )?;

  // Dynamic viscosity
  cgs.def_unit(["P", "poise"], Some(&g / &(&cm * &s)), &prefixed.clone().with_doc("poise: CGS unit of dynamic viscosity"))?;

  // Kinematic viscosity
  cgs.def_unit(["St", "stokes"], Some(&cm2 / &s), &prefixed.clone().with_doc("stokes: CGS unit of kinematic viscosity"))?;

  // Wavenumber
  cgs.def_unit(["k", "Kayser", "kayser"], Some((&cm).pow(-1)), &prefixed.clone().with_doc("kayser: CGS unit of wavenumber"))?;

  // Electrical
  let debye = Scale::ratio(1, 3) * Scale::power_of_ten(-29)
    * (cgs.expr_of(si::NAMESPACE, "C")? * cgs.expr_of(si::NAMESPACE, "m")?);
  cgs.def_unit(
    ["D", "Debye", "debye"],
    Some(debye),
    &plain.clone().with_doc("Debye: CGS unit of electric dipole moment"),
  )?;
  let franklin = g.try_pow(ratio(1, 2))? * cm.try_pow(ratio(3, 2))? * s.pow(-1);
  cgs.def_unit(["Fr", "Franklin", "statcoulomb", "statC", "esu"], Some(franklin), &plain)?;

  // Magnetic
  let gauss = Scale::power_of_ten(-4) * cgs.expr_of(si::NAMESPACE, "T")?;
  cgs.def_unit(["G", "Gauss", "gauss"], Some(gauss), &prefixed.with_doc("Gauss: CGS unit for magnetic field"))?;
  Ok(())
}

/// The CGS base units, in the order of [`BASES`].
pub fn bases(registry: &UnitRegistry) -> Result<UnitSystem, NotFoundError> {
  let bases = BASES.iter()
    .map(|name| registry.lookup(NAMESPACE, name).map(Arc::clone))
    .collect::<Result<Vec<_>, _>>()?;
  Ok(UnitSystem::new(bases))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::dimension::BaseDimension;
  use crate::units::expr::UnitExpr;
  use crate::units::exponent::integer;

  use approx::assert_relative_eq;

  fn registry() -> UnitRegistry {
    let mut registry = UnitRegistry::new();
    si::define(&mut registry).unwrap();
    define(&mut registry).unwrap();
    registry
  }

  fn cgs_expr(registry: &UnitRegistry, name: &str) -> UnitExpr {
    registry.lookup(NAMESPACE, name).unwrap().to_expr()
  }

  fn si_expr(registry: &UnitRegistry, name: &str) -> UnitExpr {
    registry.lookup(si::NAMESPACE, name).unwrap().to_expr()
  }

  #[test]
  fn test_mechanical_units() {
    let registry = registry();
    let s = si_expr(&registry, "s");
    let m = si_expr(&registry, "m");
    let s2 = (&s).pow(2);
    assert_eq!(cgs_expr(&registry, "Gal").scale_factor_to(&(&m / &s2)).unwrap(), Scale::ratio(1, 100));
    assert_eq!(cgs_expr(&registry, "erg").scale_factor_to(&si_expr(&registry, "J")).unwrap(), Scale::power_of_ten(-7));
    assert_eq!(cgs_expr(&registry, "dyne").scale_factor_to(&si_expr(&registry, "N")).unwrap(), Scale::power_of_ten(-5));
    assert_eq!(cgs_expr(&registry, "Ba").scale_factor_to(&si_expr(&registry, "Pa")).unwrap(), Scale::ratio(1, 10));
    let pa_s = si_expr(&registry, "Pa") * s.clone();
    assert_eq!(cgs_expr(&registry, "poise").scale_factor_to(&pa_s).unwrap(), Scale::ratio(1, 10));
    assert_eq!(cgs_expr(&registry, "St").scale_factor_to(&(&(&m).pow(2) / &s)).unwrap(), Scale::power_of_ten(-4));
    assert_eq!(cgs_expr(&registry, "kayser").scale_factor_to(&(&m).pow(-1)).unwrap(), Scale::from(100));
  }

  #[test]
  fn test_prefixed_cgs_units() {
    let registry = registry();
    let m_per_s2 = si_expr(&registry, "m") / si_expr(&registry, "s").pow(2);
    assert_eq!(cgs_expr(&registry, "kGal").scale_factor_to(&m_per_s2).unwrap(), Scale::from(10));
    assert_eq!(cgs_expr(&registry, "kilogal"), cgs_expr(&registry, "kGal"));
    assert_eq!(cgs_expr(&registry, "cP").scale_factor_to(&cgs_expr(&registry, "P")).unwrap(), Scale::ratio(1, 100));
    // Units defined without prefixes have no prefixed variants.
    assert!(registry.lookup(NAMESPACE, "kD").is_err());
    assert!(registry.lookup(NAMESPACE, "mFr").is_err());
    assert!(registry.lookup(NAMESPACE, "mm").is_err());
  }

  #[test]
  fn test_electromagnetic_units() {
    let registry = registry();
    let c_m = si_expr(&registry, "C") * si_expr(&registry, "m");
    let debye = cgs_expr(&registry, "Debye").scale_factor_to(&c_m).unwrap();
    assert_relative_eq!(debye.to_f64(), 1.0 / 3.0 * 1e-29);
    assert_relative_eq!(cgs_expr(&registry, "gauss").scale_factor_to(&si_expr(&registry, "T")).unwrap().to_f64(), 1e-4);

    let fr = cgs_expr(&registry, "statcoulomb");
    assert_eq!(fr.dimension().get(BaseDimension::Mass), ratio(1, 2));
    assert_eq!(fr.dimension().get(BaseDimension::Length), ratio(3, 2));
    assert_eq!(fr.dimension().get(BaseDimension::Time), integer(-1));
    let reference = si_expr(&registry, "kg").try_pow(ratio(1, 2)).unwrap()
      * si_expr(&registry, "m").try_pow(ratio(3, 2)).unwrap()
      / si_expr(&registry, "s");
    assert_relative_eq!(fr.scale_factor_to(&reference).unwrap().to_f64(), 1e-3_f64.sqrt() * 1e-3);
  }

  #[test]
  fn test_docs() {
    let registry = registry();
    let gal = registry.lookup(NAMESPACE, "gal").unwrap();
    assert_eq!(gal.doc(), Some("Gal: CGS unit of acceleration"));
    assert_eq!(registry.lookup(NAMESPACE, "Fr").unwrap().doc(), None);
    assert_eq!(registry.lookup(NAMESPACE, "cm").unwrap().doc(), None);
  }

  #[test]
  fn test_imports_share_units() {
    let registry = registry();
    for name in SI_IMPORTS {
      let imported = registry.lookup(NAMESPACE, name).unwrap();
      assert!(Arc::ptr_eq(imported, registry.lookup(si::NAMESPACE, name).unwrap()));
    }
    assert_eq!(cgs_expr(&registry, "cm"), si_expr(&registry, "cm"));
    assert!(registry.lookup(NAMESPACE, "centimeter").is_ok());
    assert!(registry.lookup(NAMESPACE, "gram").is_err());
  }

  #[test]
  fn test_bases() {
    let registry = registry();
    let system = bases(&registry).unwrap();
    let names: Vec<_> = system.bases().iter().map(|b| b.name()).collect();
    assert_eq!(names, BASES.to_vec());

    let joule = system.decompose(&si_expr(&registry, "J")).unwrap();
    assert_eq!(joule.scale, Scale::power_of_ten(7));
    assert_eq!(joule.to_string(), "10000000 cm^2 g s^-2");

    let tesla = system.decompose(&si_expr(&registry, "T")).unwrap();
    assert_eq!(tesla.exponent_of("g"), integer(1));
    assert_eq!(tesla.exponent_of("s"), integer(-1));
    assert_eq!(tesla.exponent_of("C"), integer(-1));
    assert_eq!(tesla.scale, Scale::from(1000));
  }

  #[test]
  fn test_bases_missing() {
    let mut registry = UnitRegistry::new();
    si::define(&mut registry).unwrap();
    let err = bases(&registry).unwrap_err();
    assert_eq!(err, NotFoundError::new(NAMESPACE, "cm"));
  }
}
