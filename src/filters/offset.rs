use crate::surface_utils::shared_surface::SharedFilterImage;

use super::context::FilterContext;
use super::{FilterError, Input};

/// Resolved `feOffset` primitive for rendering.
#[derive(Clone, Default)]
pub struct Offset {
    pub in1: Input,
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub fn render(&self, ctx: &FilterContext) -> Result<SharedFilterImage, FilterError> {
        let input_1 = ctx.get_input(&self.in1)?;

        // Offsets are whole pixels; round to nearest.
        let dx = self.dx.round() as i32;
        let dy = self.dy.round() as i32;

        Ok(input_1.offset(dx, dy))
    }
}
