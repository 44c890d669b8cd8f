//! `userSpaceOnUse` and `objectBoundingBox` values.

use crate::parse_identifiers;
use crate::parsers::{Parse, ParseError};

/// Defines the units to be used for things that can consider a
/// coordinate system in terms of the current user space, or in terms of
/// the current object's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordUnits {
    UserSpaceOnUse,
    ObjectBoundingBox,
}

impl Parse for CoordUnits {
    fn parse_str(s: &str) -> Result<Self, ParseError> {
        parse_identifiers!(
            s,
            "userSpaceOnUse" => CoordUnits::UserSpaceOnUse,
            "objectBoundingBox" => CoordUnits::ObjectBoundingBox,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coord_units() {
        assert_eq!(
            CoordUnits::parse_str("userSpaceOnUse").unwrap(),
            CoordUnits::UserSpaceOnUse
        );
        assert_eq!(
            CoordUnits::parse_str("objectBoundingBox").unwrap(),
            CoordUnits::ObjectBoundingBox
        );
        assert!(CoordUnits::parse_str("objectboundingbox").is_err());
    }
}
