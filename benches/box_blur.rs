use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use svg_filters::surface_utils::shared_surface::{
    box_blur, ExclusiveFilterImage, Horizontal, Vertical,
};

const SURFACE_SIDE: i32 = 512;
const RADIUS: usize = 4;

fn bench_box_blur(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_blur 9");

    for vertical in [false, true] {
        group.bench_with_input(
            BenchmarkId::from_parameter(if vertical { "vertical" } else { "horizontal" }),
            &vertical,
            |b, &vertical| {
                let input = ExclusiveFilterImage::new(SURFACE_SIDE, SURFACE_SIDE);
                let mut output = ExclusiveFilterImage::new(SURFACE_SIDE, SURFACE_SIDE);

                b.iter(|| {
                    if vertical {
                        box_blur::<Vertical>(&input, &mut output, RADIUS);
                    } else {
                        box_blur::<Horizontal>(&input, &mut output, RADIUS);
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_box_blur);
criterion_main!(benches);
