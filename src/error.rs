
use crate::units::exponent::InvalidExponentError;
use crate::units::expr::IncompatibleUnitsError;
use crate::units::registry::{ConflictingDefinitionError, NotFoundError};
use crate::units::definition::InvalidNameError;
use crate::units::scale::InvalidScaleError;
use crate::units::system::NoDecompositionError;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  InvalidExponent(#[from] InvalidExponentError),
  #[error("{0}")]
  IncompatibleUnits(#[from] IncompatibleUnitsError),
  #[error("{0}")]
  ConflictingDefinition(#[from] ConflictingDefinitionError),
  #[error("{0}")]
  NotFound(#[from] NotFoundError),
  #[error("{0}")]
  InvalidName(#[from] InvalidNameError),
  #[error("{0}")]
  InvalidScale(#[from] InvalidScaleError),
  #[error("{0}")]
  NoDecomposition(#[from] NoDecompositionError),
}
