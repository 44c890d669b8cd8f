//! Entry point for the filter-effects infrastructure.

use std::time::Instant;

use crate::fe_log;
use crate::filter::UserSpaceFilter;
use crate::parse_identifiers;
use crate::parsers::{CustomIdent, Parse, ParseError};
use crate::session::Session;
use crate::surface_utils::canvas::Canvas;
use crate::surface_utils::shared_surface::SharedFilterImage;

pub mod context;
use self::context::{FilterContext, FilterResult};

mod error;
pub use self::error::FilterError;

pub mod blend;
pub mod color_matrix;
pub mod composite;
pub mod drop_shadow;
pub mod flood;
pub mod gaussian_blur;
pub mod merge;
pub mod offset;

/// Parameters to apply a list of filter primitives onto a canvas.
pub struct FilterSpec {
    /// Human-readable identifier for the filter, for logging/debugging purposes.
    pub name: String,

    /// Coordinates and bounds.
    pub user_space_filter: UserSpaceFilter,

    /// List of filter primitives to apply to the canvas, in document order.
    pub primitives: Vec<Primitive>,
}

/// A filter primitive: an optional result name plus per-type parameters.
pub struct Primitive {
    /// Name under which the result is published, from the `result` attribute.
    pub result: Option<CustomIdent>,

    /// The primitive's parameters.
    pub params: PrimitiveParams,
}

/// Resolved parameters for each filter primitive.
pub enum PrimitiveParams {
    Blend(blend::Blend),
    ColorMatrix(color_matrix::ColorMatrix),
    Composite(composite::Composite),
    DropShadow(drop_shadow::DropShadow),
    Flood(flood::Flood),
    GaussianBlur(gaussian_blur::GaussianBlur),
    Merge(merge::Merge),
    Offset(offset::Offset),
}

impl PrimitiveParams {
    /// Returns a human-readable name for a primitive.
    #[rustfmt::skip]
    fn name(&self) -> &'static str {
        use PrimitiveParams::*;
        match self {
            Blend(..)        => "feBlend",
            ColorMatrix(..)  => "feColorMatrix",
            Composite(..)    => "feComposite",
            DropShadow(..)   => "feDropShadow",
            Flood(..)        => "feFlood",
            GaussianBlur(..) => "feGaussianBlur",
            Merge(..)        => "feMerge",
            Offset(..)       => "feOffset",
        }
    }
}

/// An enumeration of possible inputs for a filter primitive.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub enum Input {
    #[default]
    Unspecified,
    SourceGraphic,
    SourceAlpha,
    FilterOutput(CustomIdent),
}

impl Parse for Input {
    fn parse_str(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Ok(Input::Unspecified);
        }

        parse_identifiers!(
            s,
            "SourceGraphic" => Input::SourceGraphic,
            "SourceAlpha" => Input::SourceAlpha,
        )
        .or_else(|_| CustomIdent::parse_str(s).map(Input::FilterOutput))
    }
}

/// Applies a filter and returns the resulting canvas.
///
/// The primitives run in document order.  A primitive that fails (for
/// example because its `in` references a result that was never published)
/// is skipped without touching the context.  The final canvas has the
/// source's dimensions and extents.
pub fn render(
    filter: &FilterSpec,
    source: &Canvas,
    session: &Session,
) -> Result<Canvas, FilterError> {
    if source.width() <= 0 || source.height() <= 0 {
        return Ok(Canvas::new(
            source.width().max(0),
            source.height().max(0),
            source.extents(),
        ));
    }

    let mut filter_ctx = FilterContext::new(&filter.user_space_filter, source);

    // the message has an unclosed parenthesis; we close it below.
    fe_log!(
        session,
        "(filter \"{}\" with effects_region={:?}",
        filter.name,
        filter_ctx.effects_region()
    );

    for primitive in &filter.primitives {
        let start = Instant::now();

        match render_primitive(&primitive.params, &filter_ctx) {
            Ok(surface) => {
                let elapsed = start.elapsed();
                fe_log!(
                    session,
                    "(rendered filter primitive {} in {} seconds)",
                    primitive.params.name(),
                    elapsed.as_secs() as f64 + f64::from(elapsed.subsec_nanos()) / 1e9
                );

                filter_ctx.store_result(FilterResult {
                    name: primitive.result.clone(),
                    surface,
                });
            }

            Err(err) => {
                fe_log!(
                    session,
                    "(filter primitive {} returned an error: {})",
                    primitive.params.name(),
                    err
                );
            }
        }
    }

    // close the opening parenthesis from the message at the start of this function
    fe_log!(session, ")");

    Ok(filter_ctx.into_output(source.extents()))
}

#[rustfmt::skip]
fn render_primitive(
    params: &PrimitiveParams,
    ctx: &FilterContext,
) -> Result<SharedFilterImage, FilterError> {
    use PrimitiveParams::*;

    match *params {
        Blend(ref p)        => p.render(ctx),
        ColorMatrix(ref p)  => p.render(ctx),
        Composite(ref p)    => p.render(ctx),
        DropShadow(ref p)   => p.render(ctx),
        Flood(ref p)        => p.render(ctx),
        GaussianBlur(ref p) => p.render(ctx),
        Merge(ref p)        => p.render(ctx),
        Offset(ref p)       => p.render(ctx),
    }
}
