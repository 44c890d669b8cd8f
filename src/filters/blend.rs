use crate::parse_identifiers;
use crate::parsers::{Parse, ParseError};
use crate::surface_utils::shared_surface::{Operator, SharedFilterImage};

use super::context::FilterContext;
use super::{FilterError, Input};

/// Enumeration of the possible blending modes.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Mode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Darken,
    Lighten,
}

/// Resolved `feBlend` primitive for rendering.
#[derive(Clone, Default)]
pub struct Blend {
    pub in1: Input,
    pub in2: Input,
    pub mode: Mode,
}

impl Blend {
    pub fn render(&self, ctx: &FilterContext) -> Result<SharedFilterImage, FilterError> {
        let input_1 = ctx.get_input(&self.in1)?;
        let input_2 = ctx.get_input(&self.in2)?;

        Ok(input_1.compose(&input_2, self.mode.into()))
    }
}

impl Parse for Mode {
    fn parse_str(s: &str) -> Result<Self, ParseError> {
        parse_identifiers!(
            s,
            "normal" => Mode::Normal,
            "multiply" => Mode::Multiply,
            "screen" => Mode::Screen,
            "darken" => Mode::Darken,
            "lighten" => Mode::Lighten,
        )
    }
}

impl From<Mode> for Operator {
    #[inline]
    fn from(x: Mode) -> Self {
        use Mode::*;

        match x {
            Normal => Operator::Over,
            Multiply => Operator::Multiply,
            Screen => Operator::Screen,
            Darken => Operator::Darken,
            Lighten => Operator::Lighten,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes() {
        assert_eq!(Mode::parse_str("normal").unwrap(), Mode::Normal);
        assert_eq!(Mode::parse_str("multiply").unwrap(), Mode::Multiply);
        assert_eq!(Mode::parse_str("screen").unwrap(), Mode::Screen);
        assert_eq!(Mode::parse_str("darken").unwrap(), Mode::Darken);
        assert_eq!(Mode::parse_str("lighten").unwrap(), Mode::Lighten);
        assert!(Mode::parse_str("overlay").is_err());
    }
}
