//! Length values for the filter region.
//!
//! Only pixels and percentages survive this far down the pipeline; the
//! style cascade resolves font-relative and physical units before a filter
//! descriptor is built.

use crate::parsers::{Parse, ParseError};

/// Units for length values.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum LengthUnit {
    /// `1.0` means one pixel, or one user-space unit.
    Px,
    /// Percentage, stored as a fraction (`1.0` means 100%).
    Percent,
}

/// A length value with a unit.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Length {
    /// Numeric part of the length.
    pub length: f64,
    /// Unit part of the length.
    pub unit: LengthUnit,
}

impl Length {
    #[inline]
    pub fn new(length: f64, unit: LengthUnit) -> Length {
        Length { length, unit }
    }

    /// Resolves the length against a reference dimension.
    pub fn to_user(&self, reference: f64) -> f64 {
        match self.unit {
            LengthUnit::Px => self.length,
            LengthUnit::Percent => self.length * reference,
        }
    }
}

impl Parse for Length {
    fn parse_str(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();

        if let Some(number) = s.strip_suffix('%') {
            Ok(Length::new(f64::parse_str(number)? / 100.0, LengthUnit::Percent))
        } else if let Some(number) = s.strip_suffix("px") {
            Ok(Length::new(f64::parse_str(number)?, LengthUnit::Px))
        } else {
            Ok(Length::new(f64::parse_str(s)?, LengthUnit::Px))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lengths() {
        assert_eq!(
            Length::parse_str("-10%").unwrap(),
            Length::new(-0.1, LengthUnit::Percent)
        );
        assert_eq!(
            Length::parse_str("120%").unwrap(),
            Length::new(1.2, LengthUnit::Percent)
        );
        assert_eq!(Length::parse_str("5px").unwrap(), Length::new(5.0, LengthUnit::Px));
        assert_eq!(Length::parse_str("5").unwrap(), Length::new(5.0, LengthUnit::Px));
        assert!(Length::parse_str("5em").is_err());
    }

    #[test]
    fn resolves_against_reference() {
        assert_eq!(Length::new(0.5, LengthUnit::Percent).to_user(200.0), 100.0);
        assert_eq!(Length::new(7.0, LengthUnit::Px).to_user(200.0), 7.0);
    }
}
