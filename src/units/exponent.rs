
//! Exact rational exponents for units and dimensions.

use num::CheckedMul;
use num::rational::Rational64;
use thiserror::Error;

/// The exponent type used throughout the unit algebra. Exponents are
/// always exact, and `Ratio` keeps them in lowest terms, so two
/// exponents are equal iff their numerators and denominators are.
pub type Exponent = Rational64;

/// The largest denominator permitted on an exponent when no other
/// bound has been configured.
pub const DEFAULT_MAX_DENOMINATOR: i64 = 10;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Exponent {exponent} {reason}")]
pub struct InvalidExponentError {
  pub exponent: Exponent,
  pub reason: InvalidExponentReason,
  _priv: (),
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidExponentReason {
  #[error("has denominator exceeding {0}")]
  DenominatorTooLarge(i64),
  /// The exponent could not be raised to the given power without
  /// overflowing.
  #[error("overflows when raised to the power {0}")]
  Overflow(Exponent),
}

/// Constructs the exponent `numer / denom`. Panics if `denom == 0`.
pub fn ratio(numer: i64, denom: i64) -> Exponent {
  Exponent::new(numer, denom)
}

/// Constructs an integer exponent.
pub fn integer(n: i64) -> Exponent {
  Exponent::from_integer(n)
}

/// Checks that the exponent's (reduced) denominator does not exceed
/// `max_denominator`.
pub fn check_exponent(exponent: Exponent, max_denominator: i64) -> Result<Exponent, InvalidExponentError> {
  if *exponent.denom() > max_denominator {
    let reason = InvalidExponentReason::DenominatorTooLarge(max_denominator);
    Err(InvalidExponentError { exponent, reason, _priv: () })
  } else {
    Ok(exponent)
  }
}

/// The product `exponent * power`, failing if it does not fit in an
/// [`Exponent`].
pub fn checked_power(exponent: Exponent, power: Exponent) -> Result<Exponent, InvalidExponentError> {
  exponent.checked_mul(&power).ok_or_else(|| {
    InvalidExponentError { exponent, reason: InvalidExponentReason::Overflow(power), _priv: () }
  })
}
