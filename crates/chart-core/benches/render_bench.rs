use anyhow::Result;
use chart_core::{Chart, FigureSize, Marker, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart_xy(n: usize) -> Chart {
    let mut ch = Chart::new();
    let data = (0..n)
        .map(|i| {
            let x = i as f64;
            (x, (x * 0.01).sin() * 10.0 + x * 0.0001)
        })
        .collect();
    ch.show_grid = true;
    ch.add_series(Series::line(data).with_marker(Marker::circle()));
    ch.autoscale_axes(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &(n, dpi) in &[(1_000usize, 100.0f32), (1_000usize, 300.0f32)] {
        group.bench_function(format!("xy_{n}_dpi{dpi}"), |b| {
            let ch = build_chart_xy(n);
            let mut opts = RenderOptions::default();
            opts.figure = FigureSize::new(8.0, 5.0);
            opts.dpi = dpi;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
