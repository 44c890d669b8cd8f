use crate::color::{resolve_color, Color};
use crate::parsers::NumberOptionalNumber;
use crate::surface_utils::iterators::Pixels;
use crate::surface_utils::shared_surface::{ExclusiveFilterImage, Operator, SharedFilterImage};
use crate::surface_utils::{FilterPixel, ImageDataExt};

use super::context::FilterContext;
use super::gaussian_blur;
use super::{FilterError, Input};

/// Resolved `feDropShadow` primitive for rendering.
#[derive(Clone)]
pub struct DropShadow {
    pub in1: Input,
    pub dx: f64,
    pub dy: f64,
    pub std_deviation: NumberOptionalNumber<f64>,
    pub color: Color,
    pub opacity: f64,
}

impl Default for DropShadow {
    /// Defaults come from <https://www.w3.org/TR/filter-effects/#feDropShadowElement>
    fn default() -> Self {
        Self {
            in1: Default::default(),
            dx: 2.0,
            dy: 2.0,
            std_deviation: NumberOptionalNumber(2.0, 2.0),
            color: Color::default(),
            opacity: 1.0,
        }
    }
}

impl DropShadow {
    pub fn render(&self, ctx: &FilterContext) -> Result<SharedFilterImage, FilterError> {
        let input_1 = ctx.get_input(&self.in1)?;

        let flood = resolve_color(&self.color, self.opacity);

        // The shadow takes its color from the flood color and its coverage
        // from the input's alpha channel.
        let mut shadow = ExclusiveFilterImage::new(input_1.width(), input_1.height());
        shadow.modify(&mut |data, stride| {
            for (x, y, pixel) in Pixels::new(&input_1) {
                let shadow_pixel = FilterPixel {
                    r: flood.r,
                    g: flood.g,
                    b: flood.b,
                    a: pixel.a * flood.a,
                };
                data.set_pixel(stride, shadow_pixel, x, y);
            }
        });

        let NumberOptionalNumber(std_x, std_y) = self.std_deviation;
        let shadow = gaussian_blur::three_box_blurs(&shadow.share(), std_x.max(0.0), std_y.max(0.0));

        let shadow = shadow.offset(self.dx.round() as i32, self.dy.round() as i32);

        Ok(input_1.compose(&shadow, Operator::Over))
    }
}
