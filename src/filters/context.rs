use std::collections::HashMap;

use crate::coord_units::CoordUnits;
use crate::filter::UserSpaceFilter;
use crate::parsers::CustomIdent;
use crate::rect::Rect;
use crate::surface_utils::canvas::Canvas;
use crate::surface_utils::shared_surface::SharedFilterImage;

use super::error::FilterError;
use super::Input;

/// A filter primitive result.
#[derive(Debug, Clone)]
pub struct FilterResult {
    /// The name of this result: the value of the `result` attribute.
    pub name: Option<CustomIdent>,

    /// The surface the primitive produced.
    pub surface: SharedFilterImage,
}

/// The filter rendering context.
///
/// Rendering a [`FilterSpec`](super::FilterSpec) involves keeping track of
/// possibly-named results for each filter primitive.  This struct maintains
/// that information, plus the extra data used during filtering.
pub struct FilterContext {
    /// The source graphic surface.
    source_surface: SharedFilterImage,

    /// Output of the last filter primitive, seeded with the source graphic.
    last_result: SharedFilterImage,

    /// Surfaces of the previous filter primitives by name.
    ///
    /// Pre-seeded with the `SourceGraphic` and `SourceAlpha` built-ins;
    /// those names can be overwritten like any other result name.
    previous_results: HashMap<CustomIdent, SharedFilterImage>,

    /// Primitive units.
    primitive_units: CoordUnits,

    /// The filter effects region.
    effects_region: Rect,
}

impl FilterContext {
    /// Creates a new `FilterContext` seeded with the standard inputs.
    ///
    /// # Panics
    /// Panics if the source canvas has a non-positive dimension; callers
    /// are expected to detect degenerate sources before building a context.
    pub fn new(filter: &UserSpaceFilter, source: &Canvas) -> Self {
        let source_surface = SharedFilterImage::from_canvas(source);
        let source_alpha = source_surface.extract_alpha();

        let mut previous_results = HashMap::new();
        previous_results.insert(CustomIdent::new("SourceGraphic"), source_surface.clone());
        previous_results.insert(CustomIdent::new("SourceAlpha"), source_alpha);

        Self {
            last_result: source_surface.clone(),
            source_surface,
            previous_results,
            primitive_units: filter.primitive_units,
            effects_region: filter.rect,
        }
    }

    /// Returns the surface corresponding to the source graphic.
    #[inline]
    pub fn source_graphic(&self) -> &SharedFilterImage {
        &self.source_surface
    }

    /// Returns the primitive units.
    #[inline]
    pub fn primitive_units(&self) -> CoordUnits {
        self.primitive_units
    }

    /// Returns the filter effects region.
    #[inline]
    pub fn effects_region(&self) -> Rect {
        self.effects_region
    }

    /// Stores a filter primitive result into the context.
    ///
    /// This always updates the last result.  If the result is named, the
    /// name is also inserted into the table of named results, replacing any
    /// previous surface stored under it.
    pub fn store_result(&mut self, result: FilterResult) {
        if let Some(name) = result.name {
            self.previous_results.insert(name, result.surface.clone());
        }

        self.last_result = result.surface;
    }

    /// Converts this `FilterContext` into the canvas corresponding to the
    /// output of the filter chain, placed at the given extents.
    ///
    /// The returned canvas is in the sRGB color space.
    #[inline]
    pub fn into_output(self, extents: Rect) -> Canvas {
        self.last_result.to_canvas(extents)
    }

    /// Retrieves the filter input surface according to the SVG rules.
    ///
    /// An unspecified input resolves to the result of the previous
    /// primitive, or to the source graphic at the start of the chain.  A
    /// reference to a name that was never published is an error; the caller
    /// is expected to skip the primitive without touching the context.
    pub fn get_input(&self, in_: &Input) -> Result<SharedFilterImage, FilterError> {
        match *in_ {
            Input::Unspecified => Ok(self.last_result.clone()),

            Input::SourceGraphic => self.lookup("SourceGraphic"),

            Input::SourceAlpha => self.lookup("SourceAlpha"),

            Input::FilterOutput(ref name) => self.lookup_ident(name),
        }
    }

    fn lookup(&self, name: &str) -> Result<SharedFilterImage, FilterError> {
        self.previous_results
            .get(name)
            .cloned()
            .ok_or(FilterError::InvalidInput)
    }

    fn lookup_ident(&self, name: &CustomIdent) -> Result<SharedFilterImage, FilterError> {
        self.previous_results
            .get(name)
            .cloned()
            .ok_or(FilterError::InvalidInput)
    }
}
