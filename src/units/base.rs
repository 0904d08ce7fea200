
use super::dimension::Dimension;
use super::scale::Scale;

use num::One;

use std::fmt::{self, Formatter, Display};
use std::hash::{Hash, Hasher};

/// An irreducible unit: a unit which is not defined in terms of any
/// other unit. Every [`UnitExpr`](super::expr::UnitExpr) is a scale
/// times a product of powers of base units.
///
/// A base unit is identified by its name. Two base units with the
/// same name are assumed to be the same unit, so namespaces that
/// share a base unit (such as `si` and `cgs` sharing the second)
/// share its identity. [`def_unit`](super::definition::def_unit)
/// refuses a base unit whose name is already taken by a different
/// one.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseUnit {
  name: String,
  dimension: Dimension,
  /// The amount of the reference unit for `dimension` that is equal
  /// to one of this unit. This is 1 for every base unit defined
  /// through [`def_unit`](super::definition::def_unit).
  amount_of_base: Scale,
}

/// Helper newtype struct which implements `Eq`, `Hash`, and `Ord` to
/// compare base unit names alone.
#[derive(Debug)]
pub(super) struct BaseUnitByName(pub BaseUnit);

impl BaseUnit {
  /// A base unit which is its own reference unit.
  pub fn new(name: impl Into<String>, dimension: impl Into<Dimension>) -> Self {
    Self::with_amount_of_base(name, dimension, Scale::one())
  }

  /// Constructs a new base unit, given the unit's name, dimension,
  /// and intrinsic scale relative to the reference unit for the
  /// dimension.
  pub fn with_amount_of_base(name: impl Into<String>, dimension: impl Into<Dimension>, amount_of_base: Scale) -> Self {
    Self {
      name: name.into(),
      dimension: dimension.into(),
      amount_of_base,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn dimension(&self) -> &Dimension {
    &self.dimension
  }

  pub fn amount_of_base(&self) -> &Scale {
    &self.amount_of_base
  }
}

impl Display for BaseUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}

impl PartialEq for BaseUnitByName {
  fn eq(&self, other: &Self) -> bool {
    self.0.name == other.0.name
  }
}

impl Eq for BaseUnitByName {}

impl PartialOrd for BaseUnitByName {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for BaseUnitByName {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.0.name.cmp(&other.0.name)
  }
}

impl Hash for BaseUnitByName {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.0.name.hash(state);
  }
}
