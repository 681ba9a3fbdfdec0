use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Style used to draw lines in animations.
///
/// Each style is identified by an integer code in the closed range
/// [`MIN_CODE`](Self::MIN_CODE)..=[`MAX_CODE`](Self::MAX_CODE). Use [`LineStyle::lookup`] to
/// decode a code, and [`LineStyle::code`] to encode one.
///
/// # Example
///
/// ```
/// # use facsim::LineStyle;
/// assert_eq!(LineStyle::lookup(2).unwrap(), LineStyle::Dotted);
/// assert_eq!(LineStyle::Dotted.code(), 2);
/// assert!(!LineStyle::is_valid(4));
/// assert_eq!(LineStyle::default(), LineStyle::Solid);
/// ```
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// Continuous line.
    Solid,
    /// Line made of dashes.
    Dashed,
    /// Line made of dots.
    Dotted,
    /// Line drawn with a halftone pattern.
    Halftone,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::Solid
    }
}

impl LineStyle {
    /// Smallest valid line style code.
    pub const MIN_CODE: i32 = 0;

    /// Largest valid line style code.
    pub const MAX_CODE: i32 = 3;

    /// Returns the line style identified by `code`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCode`] if `code` is outside of the valid range.
    pub fn lookup(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::Solid),
            1 => Ok(Self::Dashed),
            2 => Ok(Self::Dotted),
            3 => Ok(Self::Halftone),
            _ => Err(Error::InvalidCode {
                code,
                min: Self::MIN_CODE,
                max: Self::MAX_CODE,
            }),
        }
    }

    /// Checks if [`LineStyle::lookup`] would succeed for `code`.
    pub fn is_valid(code: i32) -> bool {
        (Self::MIN_CODE..=Self::MAX_CODE).contains(&code)
    }

    /// Returns the code identifying this line style.
    pub fn code(self) -> i32 {
        match self {
            Self::Solid => 0,
            Self::Dashed => 1,
            Self::Dotted => 2,
            Self::Halftone => 3,
        }
    }
}

impl TryFrom<i32> for LineStyle {
    type Error = Error;
    fn try_from(code: i32) -> Result<Self> {
        Self::lookup(code)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest(
        code,
        expected,
        case(0, LineStyle::Solid),
        case(1, LineStyle::Dashed),
        case(2, LineStyle::Dotted),
        case(3, LineStyle::Halftone)
    )]
    fn test_valid_codes(code: i32, expected: LineStyle) {
        assert!(LineStyle::is_valid(code));
        assert_eq!(LineStyle::lookup(code).unwrap(), expected);
        assert_eq!(LineStyle::try_from(code).unwrap(), expected);
        assert_eq!(expected.code(), code);
    }

    #[rstest(
        code,
        case(i32::MIN),
        case(LineStyle::MIN_CODE - 1),
        case(LineStyle::MAX_CODE + 1),
        case(i32::MAX)
    )]
    fn test_invalid_codes(code: i32) {
        assert!(!LineStyle::is_valid(code));
        match LineStyle::lookup(code) {
            Err(Error::InvalidCode { code: c, min, max }) => {
                assert_eq!(c, code);
                assert_eq!(min, LineStyle::MIN_CODE);
                assert_eq!(max, LineStyle::MAX_CODE);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_range_is_covered() {
        let codes: Vec<_> = LineStyle::iter().map(LineStyle::code).collect();
        let expected: Vec<_> = (LineStyle::MIN_CODE..=LineStyle::MAX_CODE).collect();
        assert_eq!(codes, expected);
        for code in LineStyle::MIN_CODE - 2..=LineStyle::MAX_CODE + 2 {
            assert_eq!(LineStyle::is_valid(code), LineStyle::lookup(code).is_ok());
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(LineStyle::default(), LineStyle::Solid);
        let _ = LineStyle::lookup(3);
        let _ = LineStyle::lookup(42);
        assert_eq!(LineStyle::default(), LineStyle::Solid);
    }

    #[test]
    fn test_names() {
        assert_eq!(LineStyle::Halftone.to_string(), "halftone");
        assert_eq!("dashed".parse::<LineStyle>().unwrap(), LineStyle::Dashed);
        assert!("Dashed".parse::<LineStyle>().is_err());
        assert_eq!(
            serde_json::to_string(&LineStyle::Dotted).unwrap(),
            r#""dotted""#
        );
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            LineStyle::lookup(7).unwrap_err().to_string(),
            "Invalid code 7: expected a value between 0 and 3."
        );
    }
}
