
//! Scale factors of unit expressions.

use super::exponent::Exponent;

use num::{BigInt, BigRational, Zero, One, ToPrimitive};
use num::integer::Roots;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::ops::{Mul, Div};

/// The multiplicative scale of a unit expression, relative to the
/// product of its base units.
///
/// A scale is either exact (an arbitrary-precision rational) or
/// inexact (an IEEE 754 float). Arithmetic stays exact for as long as
/// both operands are exact, and fractional powers of exact scales
/// stay exact whenever the root is itself rational. Scales of
/// registered units are always finite and nonzero; see
/// [`Scale::check_unit_scale`].
#[derive(Debug, Clone)]
pub struct Scale {
  inner: ScaleImpl,
}

#[derive(Debug, Clone)]
enum ScaleImpl {
  Exact(BigRational),
  Inexact(f64),
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unit scale {scale} is not a finite nonzero number")]
pub struct InvalidScaleError {
  pub scale: Scale,
  _priv: (),
}

/// Two scales, promoted to a common representation.
enum ScalePair {
  Exact(BigRational, BigRational),
  Inexact(f64, f64),
}

impl Scale {
  /// Produces the exact scale `numer / denom`.
  ///
  /// Panics if `denom == 0`.
  pub fn ratio(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Scale {
    Scale::from(BigRational::new(numer.into(), denom.into()))
  }

  /// The exact scale `10^exponent`.
  pub fn power_of_ten(exponent: i32) -> Scale {
    let ten = BigRational::from_integer(BigInt::from(10));
    Scale::from(ten.pow(exponent))
  }

  pub fn is_exact(&self) -> bool {
    matches!(self.inner, ScaleImpl::Exact(_))
  }

  /// Converts `self` to an `f64` on a best-effort basis.
  pub fn to_f64(&self) -> f64 {
    match &self.inner {
      ScaleImpl::Exact(r) => rational_to_float(r),
      ScaleImpl::Inexact(f) => *f,
    }
  }

  /// The exact rational value of `self`, if it has one.
  pub fn to_rational(&self) -> Option<&BigRational> {
    match &self.inner {
      ScaleImpl::Exact(r) => Some(r),
      ScaleImpl::Inexact(_) => None,
    }
  }

  /// Fails unless `self` is fit to be the scale of a unit: nonzero,
  /// and finite if inexact.
  pub fn check_unit_scale(&self) -> Result<(), InvalidScaleError> {
    let valid = match &self.inner {
      ScaleImpl::Exact(r) => !r.is_zero(),
      ScaleImpl::Inexact(f) => f.is_finite() && *f != 0.0,
    };
    if valid {
      Ok(())
    } else {
      Err(InvalidScaleError { scale: self.clone(), _priv: () })
    }
  }

  pub fn recip(&self) -> Scale {
    &Scale::one() / self
  }

  /// Raises the scale to an integer power.
  pub fn powi(&self, exp: i64) -> Scale {
    if exp == 0 {
      return Scale::one();
    }
    match (&self.inner, i32::try_from(exp)) {
      (ScaleImpl::Exact(r), Ok(exp)) => Scale::from(r.pow(exp)),
      _ => Scale::from(self.to_f64().powf(exp as f64)),
    }
  }

  /// Raises the scale to a rational power. The result is exact if
  /// `self` is exact and the appropriate root of it is rational.
  ///
  /// `x^0` is the exact value 1 for every `x`.
  pub fn pow(&self, exp: Exponent) -> Scale {
    if exp.is_zero() {
      return Scale::one();
    }
    let raised = self.powi(*exp.numer());
    let root = *exp.denom();
    if root == 1 {
      return raised;
    }
    if let Some(exact) = raised.to_rational().and_then(|r| exact_root(r, root)) {
      return Scale::from(exact);
    }
    Scale::from(self.to_f64().powf(exponent_to_float(exp)))
  }
}

/// The `n`th root of `value`, if it is rational. Negative values have
/// no exact root here.
fn exact_root(value: &BigRational, n: i64) -> Option<BigRational> {
  let n = u32::try_from(n).ok()?;
  let numer = exact_integer_root(value.numer(), n)?;
  let denom = exact_integer_root(value.denom(), n)?;
  Some(BigRational::new(numer, denom))
}

fn exact_integer_root(value: &BigInt, n: u32) -> Option<BigInt> {
  if value < &BigInt::zero() {
    return None;
  }
  let root = value.nth_root(n);
  if &num::pow(root.clone(), n as usize) == value {
    Some(root)
  } else {
    None
  }
}

fn rational_to_float(r: &BigRational) -> f64 {
  r.to_f64().unwrap_or(f64::NAN)
}

fn exponent_to_float(exp: Exponent) -> f64 {
  *exp.numer() as f64 / *exp.denom() as f64
}

impl ScalePair {
  fn promote(left: &Scale, right: &Scale) -> ScalePair {
    match (&left.inner, &right.inner) {
      (ScaleImpl::Exact(left), ScaleImpl::Exact(right)) => ScalePair::Exact(left.clone(), right.clone()),
      _ => ScalePair::Inexact(left.to_f64(), right.to_f64()),
    }
  }
}

impl From<BigRational> for Scale {
  fn from(r: BigRational) -> Scale {
    Scale { inner: ScaleImpl::Exact(r) }
  }
}

impl From<i32> for Scale {
  fn from(i: i32) -> Scale {
    Scale::from(BigRational::from_integer(BigInt::from(i)))
  }
}

impl From<i64> for Scale {
  fn from(i: i64) -> Scale {
    Scale::from(BigRational::from_integer(BigInt::from(i)))
  }
}

/// Constructs an inexact scale.
impl From<f64> for Scale {
  fn from(f: f64) -> Scale {
    Scale { inner: ScaleImpl::Inexact(f) }
  }
}

impl One for Scale {
  fn one() -> Scale {
    Scale::from(1)
  }

  fn is_one(&self) -> bool {
    match &self.inner {
      ScaleImpl::Exact(r) => r.is_one(),
      ScaleImpl::Inexact(f) => *f == 1.0,
    }
  }
}

impl Mul<&Scale> for &Scale {
  type Output = Scale;

  fn mul(self, rhs: &Scale) -> Scale {
    match ScalePair::promote(self, rhs) {
      ScalePair::Exact(left, right) => Scale::from(left * right),
      ScalePair::Inexact(left, right) => Scale::from(left * right),
    }
  }
}

impl Mul for Scale {
  type Output = Scale;

  fn mul(self, rhs: Scale) -> Scale {
    &self * &rhs
  }
}

impl Div<&Scale> for &Scale {
  type Output = Scale;

  fn div(self, rhs: &Scale) -> Scale {
    match ScalePair::promote(self, rhs) {
      ScalePair::Exact(left, right) => Scale::from(left / right),
      ScalePair::Inexact(left, right) => Scale::from(left / right),
    }
  }
}

impl Div for Scale {
  type Output = Scale;

  fn div(self, rhs: Scale) -> Scale {
    &self / &rhs
  }
}

/// Scales compare exactly if both are exact. Otherwise, both sides
/// are compared as floats.
impl PartialEq for Scale {
  fn eq(&self, other: &Scale) -> bool {
    match ScalePair::promote(self, other) {
      ScalePair::Exact(left, right) => left == right,
      ScalePair::Inexact(left, right) => left == right,
    }
  }
}

impl Display for Scale {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.inner {
      ScaleImpl::Exact(r) if r.is_integer() => write!(f, "{}", r.numer()),
      ScaleImpl::Exact(r) => write!(f, "{}/{}", r.numer(), r.denom()),
      ScaleImpl::Inexact(d) => write!(f, "{:e}", d),
    }
  }
}

impl AbsDiffEq for Scale {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Scale, epsilon: f64) -> bool {
    self.to_f64().abs_diff_eq(&other.to_f64(), epsilon)
  }
}

impl RelativeEq for Scale {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Scale, epsilon: f64, max_relative: f64) -> bool {
    self.to_f64().relative_eq(&other.to_f64(), epsilon, max_relative)
  }
}

impl UlpsEq for Scale {
  fn default_max_ulps() -> u32 {
    <f64 as UlpsEq>::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Scale, epsilon: f64, max_ulps: u32) -> bool {
    self.to_f64().ulps_eq(&other.to_f64(), epsilon, max_ulps)
  }
}
