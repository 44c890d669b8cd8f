use crate::color::{resolve_color, Color};
use crate::surface_utils::shared_surface::SharedFilterImage;

use super::context::FilterContext;
use super::FilterError;

/// Resolved `feFlood` primitive for rendering.
#[derive(Clone)]
pub struct Flood {
    pub color: Color,
    pub opacity: f64,
}

impl Default for Flood {
    fn default() -> Flood {
        Flood {
            color: Color::default(),
            opacity: 1.0,
        }
    }
}

impl Flood {
    pub fn render(&self, ctx: &FilterContext) -> Result<SharedFilterImage, FilterError> {
        let pixel = resolve_color(&self.color, self.opacity);

        Ok(ctx.source_graphic().flood(pixel))
    }
}
