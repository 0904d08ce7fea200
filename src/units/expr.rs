
use super::base::{BaseUnit, BaseUnitByName};
use super::dimension::Dimension;
use super::exponent::{Exponent, InvalidExponentError, DEFAULT_MAX_DENOMINATOR, check_exponent};
use super::scale::{Scale, InvalidScaleError};
use super::unit_with_power::UnitWithPower;
use crate::util::TryPow;

use itertools::Itertools;
use thiserror::Error;
use num::{One, Zero};
use num::pow::Pow;

use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// A unit expression is a scale factor times a formal product and
/// quotient of base units, each raised to a rational power.
///
/// Unit expressions are plain values. An expression built out of
/// other expressions copies them, so nothing done to a registry after
/// the fact can change an expression that already exists.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitExpr {
  scale: Scale,
  // Internally, we store the base units as a vector, sorted
  // alphabetically by unit name. A given unit name shall only appear
  // at most once in this vector, and any unit which appears in this
  // vector shall have a nonzero exponent.
  elements: Vec<UnitWithPower>,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Cannot convert from {source_dimension} to {target_dimension}")]
pub struct IncompatibleUnitsError {
  pub source_dimension: Dimension,
  pub target_dimension: Dimension,
  _priv: (),
}

impl UnitExpr {
  /// Constructs a new unit expression as the given scale times the
  /// product of all of the inputs.
  pub fn new(scale: Scale, inputs: impl IntoIterator<Item = UnitWithPower>) -> Self {
    let mut elements: Vec<_> = inputs.into_iter()
      .map(|u| (BaseUnitByName(u.unit), u.exponent))
      .into_grouping_map()
      .sum()
      .into_iter()
      .map(|(unit_by_name, exponent)| UnitWithPower { unit: unit_by_name.0, exponent })
      .filter(|u| !u.exponent.is_zero())
      .collect();
    elements.sort_by(|a, b| a.unit.name().cmp(b.unit.name()));
    Self { scale, elements }
  }

  /// The dimensionless unit with scale 1. This serves as the "one"
  /// value for multiplication and division of unit expressions.
  pub fn dimensionless() -> Self {
    Self::new(Scale::one(), [])
  }

  /// A dimensionless unit with the given scale.
  pub fn scalar(scale: Scale) -> Self {
    Self::new(scale, [])
  }

  pub fn scale(&self) -> &Scale {
    &self.scale
  }

  /// The distinct base units in this expression, sorted by name and
  /// tagged with their exponent. All exponents shall be non-zero.
  pub fn units(&self) -> &[UnitWithPower] {
    &self.elements
  }

  pub fn iter(&self) -> impl Iterator<Item = &UnitWithPower> {
    self.elements.iter()
  }

  /// Whether `self` has no base units at all. Note that a
  /// dimensionless expression may still have a scale other than 1.
  pub fn is_dimensionless(&self) -> bool {
    self.elements.is_empty()
  }

  /// The dimension of the unit expression.
  pub fn dimension(&self) -> Dimension {
    self.elements.iter()
      .map(UnitWithPower::dimension)
      .fold(Dimension::one(), |acc, dim| acc * dim)
  }

  /// The total scale of `self` relative to the reference units of its
  /// dimension. This is the expression's own scale, together with the
  /// intrinsic scale of each of its base units.
  pub fn base_scale(&self) -> Scale {
    self.elements.iter()
      .map(UnitWithPower::amount_of_base)
      .fold(self.scale.clone(), |acc, amount| acc * amount)
  }

  /// The reciprocal of `self`.
  pub fn recip(mut self) -> Self {
    for elem in &mut self.elements {
      elem.exponent = - elem.exponent;
    }
    self.scale = self.scale.recip();
    self
  }

  /// Raises `self` to a rational power, failing if any resulting
  /// exponent overflows or has a denominator larger than
  /// `max_denominator`.
  pub fn pow_bounded(&self, exponent: Exponent, max_denominator: i64) -> Result<UnitExpr, InvalidExponentError> {
    let elements = self.elements.iter()
      .cloned()
      .map(|u| u.checked_pow(exponent))
      .collect::<Result<Vec<_>, _>>()?;
    let result = UnitExpr::new(self.scale.pow(exponent), elements);
    result.check_exponents(max_denominator)?;
    Ok(result)
  }

  /// Fails if any exponent in `self`, or in its dimension, has a
  /// denominator larger than `max_denominator`.
  pub fn check_exponents(&self, max_denominator: i64) -> Result<(), InvalidExponentError> {
    for elem in &self.elements {
      check_exponent(elem.exponent, max_denominator)?;
    }
    self.dimension().check_denominators(max_denominator)
  }

  /// Fails unless the total scale of `self`, as given by
  /// [`UnitExpr::base_scale`], is finite and nonzero.
  pub fn check_scale(&self) -> Result<(), InvalidScaleError> {
    self.base_scale().check_unit_scale()
  }

  /// Whether the two expressions have the same dimension, and hence
  /// can be converted into one another.
  pub fn is_convertible_to(&self, other: &UnitExpr) -> bool {
    self.dimension() == other.dimension()
  }

  /// The factor by which a quantity in `self` must be multiplied to
  /// express it in `other`.
  pub fn scale_factor_to(&self, other: &UnitExpr) -> Result<Scale, IncompatibleUnitsError> {
    let source_dimension = self.dimension();
    let target_dimension = other.dimension();
    if source_dimension != target_dimension {
      return Err(IncompatibleUnitsError { source_dimension, target_dimension, _priv: () });
    }
    Ok(self.base_scale() / other.base_scale())
  }

  /// Converts a scalar quantity from `self` into `other`.
  pub fn convert(&self, value: f64, other: &UnitExpr) -> Result<f64, IncompatibleUnitsError> {
    let factor = self.scale_factor_to(other)?;
    Ok(value * factor.to_f64())
  }
}

impl From<BaseUnit> for UnitExpr {
  fn from(unit: BaseUnit) -> Self {
    UnitExpr::new(Scale::one(), [UnitWithPower { unit, exponent: Exponent::one() }])
  }
}

impl From<UnitWithPower> for UnitExpr {
  fn from(unit: UnitWithPower) -> Self {
    UnitExpr::new(Scale::one(), [unit])
  }
}

impl From<Scale> for UnitExpr {
  fn from(scale: Scale) -> Self {
    UnitExpr::scalar(scale)
  }
}

impl From<&UnitExpr> for UnitExpr {
  fn from(expr: &UnitExpr) -> Self {
    expr.clone()
  }
}

impl Display for UnitExpr {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.elements.is_empty() {
      return write!(f, "{}", self.scale);
    }
    let product = self.elements.iter().join(" ");
    if self.scale.is_one() {
      write!(f, "{}", product)
    } else {
      write!(f, "{} {}", self.scale, product)
    }
  }
}

impl<S> Mul<S> for UnitExpr
where S: Into<UnitExpr> {
  type Output = UnitExpr;

  fn mul(self, rhs: S) -> Self::Output {
    let rhs = rhs.into();
    let mut elements = self.elements;
    elements.extend(rhs.elements);
    UnitExpr::new(self.scale * rhs.scale, elements)
  }
}

impl Mul<&UnitExpr> for &UnitExpr {
  type Output = UnitExpr;

  fn mul(self, rhs: &UnitExpr) -> Self::Output {
    self.clone() * rhs
  }
}

impl<S> Div<S> for UnitExpr
where S: Into<UnitExpr> {
  type Output = UnitExpr;

  #[allow(clippy::suspicious_arithmetic_impl)] // Multiply by reciprocal is correct
  fn div(self, rhs: S) -> Self::Output {
    self * rhs.into().recip()
  }
}

impl Div<&UnitExpr> for &UnitExpr {
  type Output = UnitExpr;

  fn div(self, rhs: &UnitExpr) -> Self::Output {
    self.clone() / rhs
  }
}

impl Mul<UnitExpr> for Scale {
  type Output = UnitExpr;

  fn mul(self, rhs: UnitExpr) -> Self::Output {
    UnitExpr::scalar(self) * rhs
  }
}

/// Integer powers never introduce a new denominator, so they cannot
/// fail. Panics if an exponent overflows; use
/// [`UnitExpr::pow_bounded`] to catch that instead.
impl Pow<i64> for &UnitExpr {
  type Output = UnitExpr;

  fn pow(self, rhs: i64) -> Self::Output {
    let exponent = Exponent::from_integer(rhs);
    UnitExpr::new(
      self.scale.powi(rhs),
      self.elements.iter().cloned().map(|u| u.pow(exponent)),
    )
  }
}

impl Pow<i64> for UnitExpr {
  type Output = UnitExpr;

  fn pow(self, rhs: i64) -> Self::Output {
    (&self).pow(rhs)
  }
}

impl TryPow<Exponent> for &UnitExpr {
  type Output = UnitExpr;
  type Error = InvalidExponentError;

  fn try_pow(self, rhs: Exponent) -> Result<UnitExpr, InvalidExponentError> {
    self.pow_bounded(rhs, DEFAULT_MAX_DENOMINATOR)
  }
}

impl One for UnitExpr {
  fn one() -> Self {
    UnitExpr::dimensionless()
  }

  fn is_one(&self) -> bool {
    self.elements.is_empty() && self.scale.is_one()
  }
}
