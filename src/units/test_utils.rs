
//! Base units and expressions shared by the unit tests in this
//! module.

use super::base::BaseUnit;
use super::dimension::BaseDimension;
use super::expr::UnitExpr;
use super::scale::Scale;

pub fn meters() -> BaseUnit {
  BaseUnit::new("m", BaseDimension::Length)
}

pub fn seconds() -> BaseUnit {
  BaseUnit::new("s", BaseDimension::Time)
}

pub fn kilograms() -> BaseUnit {
  BaseUnit::new("kg", BaseDimension::Mass)
}

/// A gram which is its own irreducible unit, rather than a scaled
/// kilogram.
pub fn grams() -> BaseUnit {
  BaseUnit::with_amount_of_base("g", BaseDimension::Mass, Scale::ratio(1, 1000))
}

pub fn amperes() -> BaseUnit {
  BaseUnit::new("A", BaseDimension::Current)
}

/// `0.01 m`
pub fn centimeters() -> UnitExpr {
  Scale::ratio(1, 100) * UnitExpr::from(meters())
}

/// `60 s`
pub fn minutes() -> UnitExpr {
  Scale::from(60) * UnitExpr::from(seconds())
}
