
use super::exponent::{Exponent, InvalidExponentError, DEFAULT_MAX_DENOMINATOR, check_exponent, checked_power};
use crate::util::{zip_with, TryPow};

use num::{One, Zero};
use num::pow::Pow;

use std::ops::{Mul, Div};
use std::fmt::{self, Formatter, Display};

/// A dimension is a formal product and quotient of zero or more
/// [`BaseDimension`] values, each raised to an exact rational power.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dimension {
  dims: [Exponent; NDIMS],
}

/// Dimensions available for units to represent. Every unit represents
/// a formal product or quotient of zero or more dimensions.
///
/// These are the seven base SI dimensions, together with plane angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
  Length,
  Mass,
  Time,
  Current,
  Temperature,
  AmountOfSubstance,
  LuminousIntensity,
  Angle,
}

pub const NDIMS: usize = 8;

impl Dimension {
  pub fn singleton(base: BaseDimension) -> Self {
    let mut dims = [Exponent::zero(); NDIMS];
    dims[base.dimension_index()] = Exponent::one();
    Self { dims }
  }

  pub fn get(&self, base: BaseDimension) -> Exponent {
    self.dims[base.dimension_index()]
  }

  pub fn get_mut(&mut self, base: BaseDimension) -> &mut Exponent {
    &mut self.dims[base.dimension_index()]
  }

  /// A simple dimension is one which can be represented as
  /// `Dimension::from(x)` for some `x: BaseDimension`.
  pub fn is_simple(&self) -> bool {
    let mut nonzero = self.components();
    matches!((nonzero.next(), nonzero.next()), (Some((_, exp)), None) if exp.is_one())
  }

  /// The nonzero components of this dimension, in the canonical order
  /// of [`BaseDimension::ALL`].
  pub fn components(&self) -> impl Iterator<Item = (BaseDimension, Exponent)> + '_ {
    BaseDimension::ALL.iter()
      .copied()
      .zip(self.dims.iter().copied())
      .filter(|(_, x)| !x.is_zero())
  }

  /// Raises the dimension to a rational power, failing if any
  /// resulting exponent overflows or has a denominator larger than
  /// `max_denominator`.
  pub fn pow_bounded(&self, power: Exponent, max_denominator: i64) -> Result<Dimension, InvalidExponentError> {
    let mut dims = self.dims;
    for exp in &mut dims {
      *exp = checked_power(*exp, power)?;
    }
    let result = Dimension { dims };
    result.check_denominators(max_denominator)?;
    Ok(result)
  }

  /// Fails if any exponent of this dimension has a denominator larger
  /// than `max_denominator`.
  pub fn check_denominators(&self, max_denominator: i64) -> Result<(), InvalidExponentError> {
    for exp in self.dims {
      check_exponent(exp, max_denominator)?;
    }
    Ok(())
  }
}

impl BaseDimension {
  pub const ALL: [BaseDimension; NDIMS] = [
    BaseDimension::Length,
    BaseDimension::Mass,
    BaseDimension::Time,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::AmountOfSubstance,
    BaseDimension::LuminousIntensity,
    BaseDimension::Angle,
  ];

  fn dimension_index(self) -> usize {
    match self {
      BaseDimension::Length => 0,
      BaseDimension::Mass => 1,
      BaseDimension::Time => 2,
      BaseDimension::Current => 3,
      BaseDimension::Temperature => 4,
      BaseDimension::AmountOfSubstance => 5,
      BaseDimension::LuminousIntensity => 6,
      BaseDimension::Angle => 7,
    }
  }
}

impl From<BaseDimension> for Dimension {
  fn from(base: BaseDimension) -> Self {
    Dimension::singleton(base)
  }
}

impl Pow<Exponent> for &Dimension {
  type Output = Dimension;

  fn pow(self, power: Exponent) -> Dimension {
    Dimension {
      dims: self.dims.map(|x| x * power),
    }
  }
}

impl Pow<Exponent> for Dimension {
  type Output = Dimension;

  fn pow(self, power: Exponent) -> Dimension {
    (&self).pow(power)
  }
}

impl Pow<i64> for Dimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    self.pow(Exponent::from_integer(power))
  }
}

impl Pow<i64> for BaseDimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    Dimension::singleton(self).pow(power)
  }
}

impl TryPow<Exponent> for Dimension {
  type Output = Dimension;
  type Error = InvalidExponentError;

  fn try_pow(self, power: Exponent) -> Result<Dimension, InvalidExponentError> {
    self.pow_bounded(power, DEFAULT_MAX_DENOMINATOR)
  }
}

impl Mul for Dimension {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    Dimension {
      dims: zip_with(self.dims, rhs.dims, |a, b| a + b),
    }
  }
}

impl Mul<BaseDimension> for Dimension {
  type Output = Self;

  fn mul(self, rhs: BaseDimension) -> Self {
    self * Dimension::singleton(rhs)
  }
}

impl Div for Dimension {
  type Output = Self;

  fn div(self, rhs: Self) -> Self {
    Dimension {
      dims: zip_with(self.dims, rhs.dims, |a, b| a - b),
    }
  }
}

impl Div<BaseDimension> for Dimension {
  type Output = Self;

  fn div(self, rhs: BaseDimension) -> Self {
    self / Dimension::singleton(rhs)
  }
}

impl Mul for BaseDimension {
  type Output = Dimension;

  fn mul(self, rhs: Self) -> Dimension {
    Dimension::singleton(self) * Dimension::singleton(rhs)
  }
}

impl Mul<Dimension> for BaseDimension {
  type Output = Dimension;

  fn mul(self, rhs: Dimension) -> Dimension {
    Dimension::singleton(self) * rhs
  }
}

impl Div for BaseDimension {
  type Output = Dimension;

  fn div(self, rhs: Self) -> Dimension {
    Dimension::singleton(self) / Dimension::singleton(rhs)
  }
}

impl Div<Dimension> for BaseDimension {
  type Output = Dimension;

  fn div(self, rhs: Dimension) -> Dimension {
    Dimension::singleton(self) / rhs
  }
}

impl One for Dimension {
  fn one() -> Self {
    Self { dims: [Exponent::zero(); NDIMS] }
  }

  fn is_one(&self) -> bool {
    self.dims.iter().all(|x| x.is_zero())
  }
}

impl Display for BaseDimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      BaseDimension::Length => write!(f, "length"),
      BaseDimension::Mass => write!(f, "mass"),
      BaseDimension::Time => write!(f, "time"),
      BaseDimension::Current => write!(f, "current"),
      BaseDimension::Temperature => write!(f, "temperature"),
      BaseDimension::AmountOfSubstance => write!(f, "amount"),
      BaseDimension::LuminousIntensity => write!(f, "intensity"),
      BaseDimension::Angle => write!(f, "angle"),
    }
  }
}

fn fmt_power(base: impl Display, power: Exponent) -> String {
  if power.is_one() {
    base.to_string()
  } else if power.is_integer() {
    format!("{}^{}", base, power)
  } else {
    format!("{}^({})", base, power)
  }
}

impl Display for Dimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let mut numerator: Vec<String> = Vec::new();
    let mut denominator: Vec<String> = Vec::new();
    for (dim, power) in self.components() {
      if power > Exponent::zero() {
        numerator.push(fmt_power(dim, power));
      } else {
        denominator.push(fmt_power(dim, -power));
      }
    }
    if numerator.is_empty() {
      write!(f, "1")?;
    } else {
      write!(f, "{}", numerator.join(" "))?;
    }
    if !denominator.is_empty() {
      write!(f, " / {}", denominator.join(" "))?;
    }
    Ok(())
  }
}
