//! The filter region descriptor.

use crate::coord_units::CoordUnits;
use crate::length::Length;
use crate::parsers::Parse;
use crate::rect::Rect;

/// The region and units of a `filter` element.
pub struct Filter {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
    pub filter_units: CoordUnits,
    pub primitive_units: CoordUnits,
}

impl Default for Filter {
    /// Constructs a new `Filter` with default properties.
    fn default() -> Self {
        Self {
            x: Length::parse_str("-10%").unwrap(),
            y: Length::parse_str("-10%").unwrap(),
            width: Length::parse_str("120%").unwrap(),
            height: Length::parse_str("120%").unwrap(),
            filter_units: CoordUnits::ObjectBoundingBox,
            primitive_units: CoordUnits::UserSpaceOnUse,
        }
    }
}

impl Filter {
    /// Resolves the filter region against the filtered object's extents.
    ///
    /// With `filterUnits == objectBoundingBox` the lengths are fractions of
    /// the extents; with `userSpaceOnUse` they are user-space values, except
    /// that percentages still resolve against the extents.
    pub fn to_user_space(&self, extents: &Rect) -> UserSpaceFilter {
        let (w_ref, h_ref) = extents.size();

        let rect = match self.filter_units {
            CoordUnits::ObjectBoundingBox => {
                let x = extents.x0 + self.x.length * w_ref;
                let y = extents.y0 + self.y.length * h_ref;
                let w = self.width.length * w_ref;
                let h = self.height.length * h_ref;
                Rect::new(x, y, x + w, y + h)
            }

            CoordUnits::UserSpaceOnUse => {
                let x = self.x.to_user(w_ref);
                let y = self.y.to_user(h_ref);
                let w = self.width.to_user(w_ref);
                let h = self.height.to_user(h_ref);
                Rect::new(x, y, x + w, y + h)
            }
        };

        UserSpaceFilter {
            rect,
            filter_units: self.filter_units,
            primitive_units: self.primitive_units,
        }
    }
}

/// A `Filter` with the region resolved to user-space coordinates.
pub struct UserSpaceFilter {
    pub rect: Rect,
    pub filter_units: CoordUnits,
    pub primitive_units: CoordUnits,
}
