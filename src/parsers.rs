//! Parsers for basic attribute value types.
//!
//! The XML front end and the CSS cascade live outside this crate; what
//! remains here is parsing the attribute strings that filter primitive
//! descriptors carry: identifiers, numbers, and number lists.

use std::borrow::Borrow;
use std::fmt;

/// Error from parsing an attribute value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    msg: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> ParseError {
        ParseError { msg: msg.into() }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

/// Trait for parsing a value out of an attribute string.
pub trait Parse: Sized {
    fn parse_str(s: &str) -> Result<Self, ParseError>;
}

/// Matches an attribute value against a fixed set of identifiers.
#[macro_export]
macro_rules! parse_identifiers {
    ($str:expr, $($name:expr => $value:expr,)+) => {
        match $str {
            $($name => Ok($value),)+

            _ => Err($crate::parsers::ParseError::new(format!(
                "expected one of {}",
                [$($name),+].join(", "),
            ))),
        }
    };
}

impl Parse for f64 {
    fn parse_str(s: &str) -> Result<f64, ParseError> {
        let v = s
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::new(format!("invalid number \"{}\"", s)))?;

        if v.is_finite() {
            Ok(v)
        } else {
            Err(ParseError::new("expected finite number"))
        }
    }
}

fn number_fields(s: &str) -> impl Iterator<Item = &str> + '_ {
    s.split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|f| !f.is_empty())
}

/// A `<number-optional-number>` pair.
///
/// <https://www.w3.org/TR/SVG/types.html#DataTypeNumberOptionalNumber>
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberOptionalNumber<T>(pub T, pub T);

impl<T: Parse + Copy> Parse for NumberOptionalNumber<T> {
    fn parse_str(s: &str) -> Result<Self, ParseError> {
        let mut fields = number_fields(s);

        let first = fields.next().ok_or_else(|| ParseError::new("expected number"))?;
        let x = T::parse_str(first)?;

        let y = match fields.next() {
            Some(second) => T::parse_str(second)?,
            None => x,
        };

        if fields.next().is_some() {
            return Err(ParseError::new("expected at most two numbers"));
        }

        Ok(NumberOptionalNumber(x, y))
    }
}

/// A comma- or whitespace-separated list of numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberList(pub Vec<f64>);

impl Parse for NumberList {
    fn parse_str(s: &str) -> Result<Self, ParseError> {
        let values = number_fields(s)
            .map(f64::parse_str)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NumberList(values))
    }
}

/// A custom identifier, as used for primitive result names.
///
/// Names are matched exactly and case-sensitively; whitespace is never
/// stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomIdent(String);

impl CustomIdent {
    pub fn new(s: &str) -> CustomIdent {
        CustomIdent(s.to_string())
    }
}

impl Parse for CustomIdent {
    fn parse_str(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::new("expected identifier"));
        }

        Ok(CustomIdent(s.to_string()))
    }
}

impl Borrow<str> for CustomIdent {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_optional_number() {
        assert_eq!(
            NumberOptionalNumber::parse_str("1, 2").unwrap(),
            NumberOptionalNumber(1.0, 2.0)
        );
        assert_eq!(
            NumberOptionalNumber::parse_str("1 2").unwrap(),
            NumberOptionalNumber(1.0, 2.0)
        );
        assert_eq!(
            NumberOptionalNumber::parse_str("1").unwrap(),
            NumberOptionalNumber(1.0, 1.0)
        );
        assert_eq!(
            NumberOptionalNumber::parse_str("-1, -2").unwrap(),
            NumberOptionalNumber(-1.0, -2.0)
        );
    }

    #[test]
    fn invalid_number_optional_number() {
        assert!(NumberOptionalNumber::<f64>::parse_str("").is_err());
        assert!(NumberOptionalNumber::<f64>::parse_str("1 2 3").is_err());
        assert!(NumberOptionalNumber::<f64>::parse_str("1 foo").is_err());
        assert!(NumberOptionalNumber::<f64>::parse_str("NaN").is_err());
    }

    #[test]
    fn parses_number_list() {
        assert_eq!(
            NumberList::parse_str("1 2, 3").unwrap(),
            NumberList(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(NumberList::parse_str("").unwrap(), NumberList(vec![]));
    }

    #[test]
    fn custom_ident_is_exact() {
        assert_eq!(CustomIdent::parse_str("foo").unwrap(), CustomIdent::new("foo"));
        assert_eq!(
            CustomIdent::parse_str(" foo ").unwrap(),
            CustomIdent::new(" foo ")
        );
        assert!(CustomIdent::parse_str("").is_err());
    }
}
