
//! Module containing generally useful regular expressions.

use regex::Regex;
use once_cell::sync::Lazy;

/// A valid unit name: one or more characters, none of which is
/// whitespace or an operator that unit expressions are written with.
pub static UNIT_NAME_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[^\s*/^()\[\]{},]+$").unwrap());

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_unit_name_re() {
    assert!(UNIT_NAME_RE.is_match("cm"));
    assert!(UNIT_NAME_RE.is_match("statC"));
    assert!(UNIT_NAME_RE.is_match("μm"));
    assert!(UNIT_NAME_RE.is_match("Å"));
    assert!(!UNIT_NAME_RE.is_match(""));
    assert!(!UNIT_NAME_RE.is_match("two words"));
    assert!(!UNIT_NAME_RE.is_match("m/s"));
    assert!(!UNIT_NAME_RE.is_match("s^2"));
    assert!(!UNIT_NAME_RE.is_match("cm\n"));
  }
}
