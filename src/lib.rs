//! Render SVG filter effects on raster images.
//!
//! This crate implements the raster pipeline behind SVG's `<filter>`
//! element: given a rasterized source graphic and an ordered list of filter
//! primitives, it evaluates the filter graph in linear-light premultiplied
//! RGBA floats and produces a new canvas for the renderer to blend.
//!
//! The supported primitives are `feGaussianBlur`, `feOffset`,
//! `feDropShadow`, `feMerge`/`feMergeNode`, `feFlood`, `feBlend`,
//! `feComposite` and `feColorMatrix`.  Parsing the SVG document, computing
//! styles, and rasterizing the element the filter applies to are the
//! calling renderer's business; this crate starts at the pixels.
//!
//! # Example
//!
//! ```
//! use svg_filters::filters::gaussian_blur::GaussianBlur;
//! use svg_filters::filters::{self, FilterSpec, Primitive, PrimitiveParams};
//! use svg_filters::{Canvas, Filter, NumberOptionalNumber, Rect, Session};
//!
//! let extents = Rect::from_size(4.0, 4.0);
//! let source = Canvas::new(4, 4, extents);
//!
//! let filter = FilterSpec {
//!     name: String::from("blur"),
//!     user_space_filter: Filter::default().to_user_space(&extents),
//!     primitives: vec![Primitive {
//!         result: None,
//!         params: PrimitiveParams::GaussianBlur(GaussianBlur {
//!             std_deviation: NumberOptionalNumber(1.0, 1.0),
//!             ..Default::default()
//!         }),
//!     }],
//! };
//!
//! let output = filters::render(&filter, &source, &Session::new()).unwrap();
//! assert_eq!(output.width(), 4);
//! assert_eq!(output.height(), 4);
//! ```

#![warn(nonstandard_style, rust_2018_idioms, unused)]
// Standalone lints
#![warn(trivial_casts, trivial_numeric_casts)]

pub use crate::color::Color;
pub use crate::coord_units::CoordUnits;
pub use crate::filter::{Filter, UserSpaceFilter};
pub use crate::length::{Length, LengthUnit};
pub use crate::parsers::{CustomIdent, NumberList, NumberOptionalNumber, Parse, ParseError};
pub use crate::rect::Rect;
pub use crate::session::Session;
pub use crate::surface_utils::canvas::Canvas;
pub use crate::surface_utils::shared_surface::SharedFilterImage;

pub mod color;
pub mod coord_units;
pub mod filter;
pub mod filters;
pub mod length;
pub mod log;
pub mod parsers;
pub mod rect;
pub mod session;
pub mod surface_utils;
pub mod util;
