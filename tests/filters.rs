//! End-to-end tests for the filter graph driver.
//!
//! These run whole filter specs on small canvases built from literal byte
//! arrays and compare the output bytes with a per-channel tolerance of 1 to
//! absorb quantization.

use svg_filters::filters::blend::{Blend, Mode};
use svg_filters::filters::color_matrix::{ColorMatrix, OperationType};
use svg_filters::filters::composite::{Composite, Operator};
use svg_filters::filters::drop_shadow::DropShadow;
use svg_filters::filters::flood::Flood;
use svg_filters::filters::gaussian_blur::GaussianBlur;
use svg_filters::filters::merge::{Merge, MergeNode};
use svg_filters::filters::offset::Offset;
use svg_filters::filters::{self, FilterSpec, Input, Primitive, PrimitiveParams};
use svg_filters::{
    Canvas, Color, CustomIdent, Filter, NumberOptionalNumber, Rect, Session,
};

/// Builds a canvas from `B,G,R,A` bytes with a packed stride.
fn canvas_from_bytes(width: i32, height: i32, data: &[u8]) -> Canvas {
    assert_eq!(data.len(), (width * height * 4) as usize);
    Canvas::from_data(
        width,
        height,
        width as usize * 4,
        data.to_vec(),
        Rect::from_size(f64::from(width), f64::from(height)),
    )
}

fn filter_spec(source: &Canvas, primitives: Vec<Primitive>) -> FilterSpec {
    FilterSpec {
        name: String::from("test"),
        user_space_filter: Filter::default().to_user_space(&source.extents()),
        primitives,
    }
}

fn unnamed(params: PrimitiveParams) -> Primitive {
    Primitive {
        result: None,
        params,
    }
}

fn named(result: &str, params: PrimitiveParams) -> Primitive {
    Primitive {
        result: Some(CustomIdent::new(result)),
        params,
    }
}

fn render(source: &Canvas, primitives: Vec<Primitive>) -> Canvas {
    let spec = filter_spec(source, primitives);
    filters::render(&spec, source, &Session::new()).unwrap()
}

#[track_caller]
fn assert_bytes_within(actual: &Canvas, expected: &[u8], tolerance: u8) {
    let data = actual.data();
    assert_eq!(data.len(), expected.len());

    for (i, (&got, &want)) in data.iter().zip(expected.iter()).enumerate() {
        let diff = got.abs_diff(want);
        assert!(
            diff <= tolerance,
            "byte {} differs by {}: got {}, expected {}",
            i,
            diff,
            got,
            want
        );
    }
}

// Scenario: gaussian blur of a solid red square.
//
// A solid area stays solid under the edge-clamped box blur, so every pixel
// remains fully red and fully opaque; in particular there is no dark fringe
// at the borders.
#[test]
fn gaussian_blur_of_solid_red_square() {
    let red = [0u8, 0, 255, 255];
    let source_bytes: Vec<u8> = red.iter().copied().cycle().take(16 * 4).collect();
    let source = canvas_from_bytes(4, 4, &source_bytes);

    let output = render(
        &source,
        vec![unnamed(PrimitiveParams::GaussianBlur(GaussianBlur {
            std_deviation: NumberOptionalNumber(1.0, 1.0),
            ..Default::default()
        }))],
    );

    assert_bytes_within(&output, &source_bytes, 1);
}

// Scenario: offset right by two.
#[test]
fn offset_right_by_two() {
    let mut source_bytes = [0u8; 4 * 4 * 4];
    source_bytes[0..4].copy_from_slice(&[255, 255, 255, 255]);
    let source = canvas_from_bytes(4, 4, &source_bytes);

    let output = render(
        &source,
        vec![unnamed(PrimitiveParams::Offset(Offset {
            dx: 2.0,
            dy: 0.0,
            ..Default::default()
        }))],
    );

    let mut expected = [0u8; 4 * 4 * 4];
    expected[8..12].copy_from_slice(&[255, 255, 255, 255]);
    assert_bytes_within(&output, &expected, 1);
}

// Scenario: drop shadow on a single opaque pixel, no blur.
#[test]
fn drop_shadow_on_single_opaque_pixel() {
    let mut source_bytes = [0u8; 5 * 5 * 4];
    let center = (2 * 5 + 2) * 4;
    source_bytes[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);
    let source = canvas_from_bytes(5, 5, &source_bytes);

    let output = render(
        &source,
        vec![unnamed(PrimitiveParams::DropShadow(DropShadow {
            dx: 1.0,
            dy: 1.0,
            std_deviation: NumberOptionalNumber(0.0, 0.0),
            color: Color::new(0, 0, 0),
            opacity: 0.5,
            ..Default::default()
        }))],
    );

    let mut expected = [0u8; 5 * 5 * 4];
    expected[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);
    let shadow = (3 * 5 + 3) * 4;
    expected[shadow..shadow + 4].copy_from_slice(&[0, 0, 0, 128]);
    assert_bytes_within(&output, &expected, 1);
}

// Scenario: composite atop of a half-transparent blue flood over an opaque
// red source.  fa = d.a and fb = 1 − s.a = 0, so the output is the source
// scaled by the destination's coverage.
#[test]
fn composite_atop() {
    let red = [0u8, 0, 255, 255];
    let source_bytes: Vec<u8> = red.iter().copied().cycle().take(2 * 2 * 4).collect();
    let source = canvas_from_bytes(2, 2, &source_bytes);

    let output = render(
        &source,
        vec![
            named(
                "backdrop",
                PrimitiveParams::Flood(Flood {
                    color: Color::new(0, 0, 255),
                    opacity: 128.0 / 255.0,
                }),
            ),
            unnamed(PrimitiveParams::Composite(Composite {
                in1: Input::SourceGraphic,
                in2: Input::FilterOutput(CustomIdent::new("backdrop")),
                operator: Operator::Atop,
                ..Default::default()
            })),
        ],
    );

    let expected_pixel = [0u8, 0, 128, 128];
    let expected: Vec<u8> = expected_pixel.iter().copied().cycle().take(2 * 2 * 4).collect();
    assert_bytes_within(&output, &expected, 1);
}

// Scenario: luminanceToAlpha of opaque white.
#[test]
fn luminance_to_alpha_of_white() {
    let source = canvas_from_bytes(1, 1, &[255, 255, 255, 255]);

    let output = render(
        &source,
        vec![unnamed(PrimitiveParams::ColorMatrix(ColorMatrix {
            matrix: ColorMatrix::resolve_matrix(OperationType::LuminanceToAlpha, &[]),
            ..Default::default()
        }))],
    );

    // 0.2125 + 0.7154 + 0.0721 = 1.0, so the alpha saturates at 255.
    assert_bytes_within(&output, &[0, 0, 0, 255], 1);
}

// Scenario: merging a half-opaque red with itself composites it over
// itself: alpha goes from 128/255 to about 192/255.
#[test]
fn merge_of_two_translucent_reds() {
    let source = canvas_from_bytes(1, 1, &[0, 0, 128, 128]);

    let output = render(
        &source,
        vec![unnamed(PrimitiveParams::Merge(Merge {
            merge_nodes: vec![
                MergeNode {
                    in1: Input::SourceGraphic,
                },
                MergeNode {
                    in1: Input::SourceGraphic,
                },
            ],
        }))],
    );

    assert_bytes_within(&output, &[0, 0, 192, 192], 1);
}

// Law: a zero standard deviation is the identity, byte for byte.
#[test]
fn identity_blur_round_trips_bytes() {
    let source_bytes = [
        10, 20, 30, 200, //
        0, 0, 0, 0, //
        128, 128, 128, 128, //
        255, 255, 255, 255, //
        5, 5, 5, 10, //
        0, 64, 0, 64, //
        1, 2, 3, 4, //
        90, 80, 70, 100, //
        200, 150, 100, 250, //
    ];
    let source = canvas_from_bytes(3, 3, &source_bytes);

    let output = render(
        &source,
        vec![unnamed(PrimitiveParams::GaussianBlur(GaussianBlur::default()))],
    );

    assert_bytes_within(&output, &source_bytes, 0);
}

// Law: offsetting forward and back reproduces the interior.
#[test]
fn offset_round_trip_preserves_the_interior() {
    let source_bytes: Vec<u8> = (0..4 * 4).flat_map(|i| [i as u8, i as u8, i as u8, 255]).collect();
    let source = canvas_from_bytes(4, 4, &source_bytes);

    let output = render(
        &source,
        vec![
            unnamed(PrimitiveParams::Offset(Offset {
                dx: 1.0,
                dy: 1.0,
                ..Default::default()
            })),
            unnamed(PrimitiveParams::Offset(Offset {
                dx: -1.0,
                dy: -1.0,
                ..Default::default()
            })),
        ],
    );

    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(output.pixel(x, y), source.pixel(x, y), "pixel ({}, {})", x, y);
        }
    }
    for i in 0..4 {
        assert_eq!(output.pixel(3, i).a, 0);
        assert_eq!(output.pixel(i, 3).a, 0);
    }
}

// Law: flooding twice with the same color produces identical images.
#[test]
fn flood_is_idempotent() {
    let source = canvas_from_bytes(2, 2, &[0u8; 2 * 2 * 4]);

    let flood = Flood {
        color: Color::new(10, 200, 50),
        opacity: 0.7,
    };

    let once = render(&source, vec![unnamed(PrimitiveParams::Flood(flood.clone()))]);
    let twice = render(
        &source,
        vec![
            unnamed(PrimitiveParams::Flood(flood.clone())),
            unnamed(PrimitiveParams::Flood(flood)),
        ],
    );

    assert_eq!(once.data(), twice.data());
}

// Law: compositing over a fully transparent backdrop is the identity.
#[test]
fn composite_over_transparent_is_identity() {
    let source_bytes = [
        10, 20, 30, 200, //
        0, 0, 0, 0, //
        128, 0, 64, 128, //
        255, 255, 255, 255, //
    ];
    let source = canvas_from_bytes(2, 2, &source_bytes);

    let output = render(
        &source,
        vec![
            named(
                "zero",
                PrimitiveParams::Flood(Flood {
                    color: Color::new(0, 0, 0),
                    opacity: 0.0,
                }),
            ),
            unnamed(PrimitiveParams::Composite(Composite {
                in1: Input::SourceGraphic,
                in2: Input::FilterOutput(CustomIdent::new("zero")),
                operator: Operator::Over,
                ..Default::default()
            })),
        ],
    );

    assert_bytes_within(&output, &source_bytes, 1);
}

// Laws: identity color matrices are no-ops.
#[test]
fn color_matrix_identities() {
    let source_bytes = [
        10, 20, 30, 200, //
        0, 0, 0, 0, //
        128, 0, 64, 128, //
        255, 255, 255, 255, //
    ];
    let source = canvas_from_bytes(2, 2, &source_bytes);

    let identities = [
        ColorMatrix::default().matrix,
        ColorMatrix::resolve_matrix(OperationType::Saturate, &[1.0]),
        ColorMatrix::resolve_matrix(OperationType::HueRotate, &[0.0]),
    ];

    for matrix in identities {
        let output = render(
            &source,
            vec![unnamed(PrimitiveParams::ColorMatrix(ColorMatrix {
                matrix,
                ..Default::default()
            }))],
        );

        assert_bytes_within(&output, &source_bytes, 1);
    }
}

// A primitive whose `in` names a result that was never published must be a
// no-op: the last result is unchanged and the output is the source.
#[test]
fn missing_input_is_a_no_op() {
    let source_bytes = [200u8, 100, 50, 255];
    let source = canvas_from_bytes(1, 1, &source_bytes);

    let output = render(
        &source,
        vec![unnamed(PrimitiveParams::Offset(Offset {
            in1: Input::FilterOutput(CustomIdent::new("never-published")),
            dx: 1.0,
            dy: 1.0,
        }))],
    );

    assert_bytes_within(&output, &source_bytes, 0);
}

// Republishing a result name replaces the earlier surface.
#[test]
fn republishing_a_name_replaces_it() {
    let source = canvas_from_bytes(1, 1, &[0u8, 0, 0, 0]);

    let output = render(
        &source,
        vec![
            named(
                "fill",
                PrimitiveParams::Flood(Flood {
                    color: Color::new(255, 0, 0),
                    opacity: 1.0,
                }),
            ),
            named(
                "fill",
                PrimitiveParams::Flood(Flood {
                    color: Color::new(0, 255, 0),
                    opacity: 1.0,
                }),
            ),
            unnamed(PrimitiveParams::Offset(Offset {
                in1: Input::FilterOutput(CustomIdent::new("fill")),
                dx: 0.0,
                dy: 0.0,
            })),
        ],
    );

    // Green, not red.
    assert_bytes_within(&output, &[0, 255, 0, 255], 1);
}

// Transparent source pixels survive a blur/offset/color-matrix chain as
// fully transparent pixels.
#[test]
fn alpha_zero_pixels_survive_the_pipeline() {
    let mut source_bytes = [0u8; 3 * 3 * 4];
    // One opaque pixel in the corner so the image is not fully empty.
    source_bytes[0..4].copy_from_slice(&[255, 255, 255, 255]);
    let source = canvas_from_bytes(3, 3, &source_bytes);

    let output = render(
        &source,
        vec![
            unnamed(PrimitiveParams::Offset(Offset {
                dx: 0.0,
                dy: 0.0,
                ..Default::default()
            })),
            unnamed(PrimitiveParams::ColorMatrix(ColorMatrix::default())),
        ],
    );

    // The far corner never received any coverage.
    assert_eq!(output.pixel(2, 2).a, 0);
    assert_eq!(output.pixel(2, 2).r, 0);
}

// A blend in normal mode is plain source-over compositing.
#[test]
fn blend_normal_matches_source_over() {
    let source = canvas_from_bytes(1, 1, &[0, 0, 128, 128]);

    let blended = render(
        &source,
        vec![
            named(
                "backdrop",
                PrimitiveParams::Flood(Flood {
                    color: Color::new(0, 0, 255),
                    opacity: 1.0,
                }),
            ),
            unnamed(PrimitiveParams::Blend(Blend {
                in1: Input::SourceGraphic,
                in2: Input::FilterOutput(CustomIdent::new("backdrop")),
                mode: Mode::Normal,
            })),
        ],
    );

    let composited = render(
        &source,
        vec![
            named(
                "backdrop",
                PrimitiveParams::Flood(Flood {
                    color: Color::new(0, 0, 255),
                    opacity: 1.0,
                }),
            ),
            unnamed(PrimitiveParams::Composite(Composite {
                in1: Input::SourceGraphic,
                in2: Input::FilterOutput(CustomIdent::new("backdrop")),
                operator: Operator::Over,
                ..Default::default()
            })),
        ],
    );

    assert_eq!(blended.data(), composited.data());
}

// An arithmetic composite with k4 > 0 resurrects transparent pixels.
#[test]
fn arithmetic_composite_with_k4_fills_transparent_pixels() {
    let source = canvas_from_bytes(2, 1, &[0u8; 2 * 4]);

    let output = render(
        &source,
        vec![unnamed(PrimitiveParams::Composite(Composite {
            in1: Input::SourceGraphic,
            in2: Input::SourceGraphic,
            operator: Operator::Arithmetic,
            k4: 0.25,
            ..Default::default()
        }))],
    );

    // alpha = k4 = 0.25 and every unpremultiplied channel is k4 too.
    let a = output.pixel(0, 0).a;
    assert_eq!(a, 64);
    assert!(output.pixel(0, 0).r > 0);
}

// Zero-sized sources degrade to an empty canvas.
#[test]
fn zero_sized_source_returns_empty_canvas() {
    let source = Canvas::new(0, 0, Rect::from_size(0.0, 0.0));
    let spec = filter_spec(&source, vec![unnamed(PrimitiveParams::Flood(Flood::default()))]);

    let output = filters::render(&spec, &source, &Session::new()).unwrap();
    assert_eq!(output.width(), 0);
    assert_eq!(output.height(), 0);
    assert!(output.data().is_empty());
}

// A drop shadow with blur spreads the shadow but leaves the graphic on top.
#[test]
fn drop_shadow_with_blur_keeps_the_graphic_on_top() {
    let mut source_bytes = [0u8; 5 * 5 * 4];
    let center = (2 * 5 + 2) * 4;
    source_bytes[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);
    let source = canvas_from_bytes(5, 5, &source_bytes);

    let output = render(
        &source,
        vec![unnamed(PrimitiveParams::DropShadow(DropShadow {
            dx: 0.0,
            dy: 0.0,
            std_deviation: NumberOptionalNumber(1.0, 1.0),
            color: Color::new(0, 0, 0),
            opacity: 1.0,
            ..Default::default()
        }))],
    );

    // The graphic pixel stays white and opaque.
    assert_eq!(output.pixel(2, 2).r, 255);
    assert_eq!(output.pixel(2, 2).a, 255);

    // The blur spread shadow coverage to the neighbors.
    assert!(output.pixel(1, 2).a > 0);
    assert!(output.pixel(2, 1).a > 0);
}
