
use super::base::BaseUnit;
use super::dimension::Dimension;
use super::exponent::{Exponent, InvalidExponentError, checked_power};
use super::expr::UnitExpr;
use super::scale::Scale;

use num::One;
use num::pow::Pow;

use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// A base unit raised to a rational power.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitWithPower {
  pub unit: BaseUnit,
  pub exponent: Exponent,
}

impl UnitWithPower {
  pub fn new(unit: BaseUnit, exponent: impl Into<Exponent>) -> Self {
    Self { unit, exponent: exponent.into() }
  }

  pub fn dimension(&self) -> Dimension {
    self.unit.dimension().pow(self.exponent)
  }

  /// The intrinsic scale of this power, relative to the reference
  /// units of its dimension.
  pub fn amount_of_base(&self) -> Scale {
    self.unit.amount_of_base().pow(self.exponent)
  }

  /// Raises `self` to a rational power, failing if the exponent
  /// overflows.
  pub fn checked_pow(self, power: Exponent) -> Result<UnitWithPower, InvalidExponentError> {
    let exponent = checked_power(self.exponent, power)?;
    Ok(UnitWithPower { unit: self.unit, exponent })
  }
}

impl Display for UnitWithPower {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.exponent.is_one() {
      write!(f, "{}", self.unit)
    } else if self.exponent.is_integer() {
      write!(f, "{}^{}", self.unit, self.exponent)
    } else {
      write!(f, "{}^({})", self.unit, self.exponent)
    }
  }
}

impl<S> Mul<S> for UnitWithPower
where S: Into<UnitExpr> {
  type Output = UnitExpr;

  fn mul(self, rhs: S) -> Self::Output {
    UnitExpr::from(self) * rhs
  }
}

impl<S> Div<S> for UnitWithPower
where S: Into<UnitExpr> {
  type Output = UnitExpr;

  fn div(self, rhs: S) -> Self::Output {
    UnitExpr::from(self) / rhs
  }
}

impl Pow<Exponent> for UnitWithPower {
  type Output = UnitWithPower;

  fn pow(self, rhs: Exponent) -> Self::Output {
    UnitWithPower { unit: self.unit, exponent: self.exponent * rhs }
  }
}
