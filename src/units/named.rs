
use super::expr::UnitExpr;

use std::fmt::{self, Formatter, Display};

/// A unit expression registered under one or more names.
///
/// The first name is the unit's canonical short name (`"dyn"`); the
/// rest are long names and aliases (`"dyne"`). Named units are never
/// modified once built.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedUnit {
  names: Vec<String>,
  expr: UnitExpr,
  namespace: String,
  doc: Option<String>,
}

impl NamedUnit {
  /// Constructs a named unit. `names` should be non-empty; see
  /// [`def_unit`](super::definition::def_unit) for the validated
  /// entry point.
  pub fn new<S: Into<String>>(
    names: impl IntoIterator<Item = S>,
    expr: UnitExpr,
    namespace: impl Into<String>,
    doc: Option<String>,
  ) -> Self {
    Self {
      names: names.into_iter().map(Into::into).collect(),
      expr,
      namespace: namespace.into(),
      doc,
    }
  }

  /// The canonical (short) name of the unit.
  pub fn name(&self) -> &str {
    self.names.first().map(String::as_str).unwrap_or_default()
  }

  /// All names of the unit, canonical name first.
  pub fn names(&self) -> &[String] {
    &self.names
  }

  /// Every name except the canonical one.
  pub fn long_names(&self) -> &[String] {
    self.names.get(1..).unwrap_or_default()
  }

  pub fn expr(&self) -> &UnitExpr {
    &self.expr
  }

  /// A copy of this unit's expression, for building further units out
  /// of it.
  pub fn to_expr(&self) -> UnitExpr {
    self.expr.clone()
  }

  pub fn namespace(&self) -> &str {
    &self.namespace
  }

  pub fn doc(&self) -> Option<&str> {
    self.doc.as_deref()
  }
}

impl From<&NamedUnit> for UnitExpr {
  fn from(unit: &NamedUnit) -> Self {
    unit.to_expr()
  }
}

impl Display for NamedUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
