
//! Systems of base units, such as the CGS bases, into which any
//! unit of a compatible dimension can be decomposed.

use super::dimension::{Dimension, BaseDimension, NDIMS};
use super::exponent::Exponent;
use super::expr::UnitExpr;
use super::named::NamedUnit;
use super::scale::Scale;

use itertools::Itertools;
use thiserror::Error;
use num::{One, Zero};

use std::fmt::{self, Formatter, Display};
use std::sync::Arc;

/// An ordered collection of named units which serve as the bases of
/// a unit system.
#[derive(Debug, Clone, Default)]
pub struct UnitSystem {
  bases: Vec<Arc<NamedUnit>>,
}

/// A unit expression rewritten as a scale times a product of powers
/// of the bases of a [`UnitSystem`].
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
  pub scale: Scale,
  /// Powers of each base, in the order of the system's bases. Bases
  /// with exponent zero are omitted.
  pub powers: Vec<(Arc<NamedUnit>, Exponent)>,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Dimension {dimension} cannot be expressed in the bases [{bases}]")]
pub struct NoDecompositionError {
  pub dimension: Dimension,
  pub bases: String,
  _priv: (),
}

impl UnitSystem {
  pub fn new(bases: impl IntoIterator<Item = Arc<NamedUnit>>) -> Self {
    Self { bases: bases.into_iter().collect() }
  }

  pub fn bases(&self) -> &[Arc<NamedUnit>] {
    &self.bases
  }

  pub fn len(&self) -> usize {
    self.bases.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bases.is_empty()
  }

  /// Whether one of the bases goes by `name`.
  pub fn contains(&self, name: &str) -> bool {
    self.bases.iter().any(|base| base.names().iter().any(|n| n == name))
  }

  /// Rewrites `expr` in terms of the bases of this system.
  ///
  /// If the bases are not independent, bases which are not needed are
  /// given exponent zero.
  pub fn decompose(&self, expr: &UnitExpr) -> Result<Decomposition, NoDecompositionError> {
    let dimension = expr.dimension();
    let Some(exponents) = self.solve(&dimension) else {
      return Err(NoDecompositionError {
        dimension,
        bases: self.bases.iter().map(|b| b.name()).join(", "),
        _priv: (),
      });
    };
    let mut scale = expr.base_scale();
    let mut powers = Vec::new();
    for (base, exponent) in self.bases.iter().zip(exponents) {
      if exponent.is_zero() {
        continue;
      }
      scale = scale / base.expr().base_scale().pow(exponent);
      powers.push((Arc::clone(base), exponent));
    }
    Ok(Decomposition { scale, powers })
  }

  /// Finds exponents `p` with `sum(p[i] * dim(base[i])) == target`, by
  /// Gauss-Jordan elimination on the augmented matrix whose columns
  /// are the base dimensions.
  fn solve(&self, target: &Dimension) -> Option<Vec<Exponent>> {
    let ncols = self.bases.len();
    let base_dims: Vec<Dimension> = self.bases.iter().map(|b| b.expr().dimension()).collect();
    // Row r is the equation for base dimension r. The last column is
    // the right-hand side.
    let mut matrix: Vec<Vec<Exponent>> = BaseDimension::ALL.iter()
      .map(|&dim| {
        let mut row: Vec<Exponent> = base_dims.iter().map(|d| d.get(dim)).collect();
        row.push(target.get(dim));
        row
      })
      .collect();

    let mut pivot_cols = Vec::new();
    let mut row = 0;
    for col in 0..ncols {
      if row == NDIMS {
        break;
      }
      let Some(pivot) = (row..NDIMS).find(|&r| !matrix[r][col].is_zero()) else {
        continue;
      };
      matrix.swap(row, pivot);
      let leading = matrix[row][col];
      for entry in &mut matrix[row] {
        *entry /= leading;
      }
      for other in 0..NDIMS {
        if other == row || matrix[other][col].is_zero() {
          continue;
        }
        let factor = matrix[other][col];
        for c in 0..=ncols {
          let delta = factor * matrix[row][c];
          matrix[other][c] -= delta;
        }
      }
      pivot_cols.push(col);
      row += 1;
    }

    // Any remaining row is all zeroes on the left; it must be zero on
    // the right as well.
    if matrix[row..].iter().any(|r| !r[ncols].is_zero()) {
      return None;
    }
    let mut solution = vec![Exponent::zero(); ncols];
    for (r, col) in pivot_cols.into_iter().enumerate() {
      solution[col] = matrix[r][ncols];
    }
    Some(solution)
  }
}

impl Decomposition {
  /// The exponent of the base named `name`, or zero if it does not
  /// appear.
  pub fn exponent_of(&self, name: &str) -> Exponent {
    self.powers.iter()
      .find(|(base, _)| base.name() == name)
      .map(|(_, exp)| *exp)
      .unwrap_or_else(Exponent::zero)
  }
}

impl Display for Decomposition {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.powers.is_empty() {
      return write!(f, "{}", self.scale);
    }
    let product = self.powers.iter()
      .map(|(base, exp)| {
        if exp.is_one() {
          base.name().to_owned()
        } else if exp.is_integer() {
          format!("{}^{}", base.name(), exp)
        } else {
          format!("{}^({})", base.name(), exp)
        }
      })
      .join(" ");
    if self.scale.is_one() {
      write!(f, "{}", product)
    } else {
      write!(f, "{} {}", self.scale, product)
    }
  }
}
