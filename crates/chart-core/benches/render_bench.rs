use anyhow::Result;
use chart_core::{Chart, Figure, LineStyle, MarkerStyle, RenderOptions, Trace};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_figure(n: usize, events: usize) -> Figure {
    let mut fig = Figure::default();
    let data = (0..n).map(|i| (i as f64, (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)));
    fig.add_trace(Trace::line("close", data, LineStyle::default()));
    for e in 0..events {
        let x = (e * n / events.max(1)) as f64;
        let m = MarkerStyle { size: 14.0, ..MarkerStyle::default() };
        fig.add_trace(Trace::markers(format!("event {e}"), vec![(x, 0.0)], m).with_show_legend(false));
        fig.add_trace(Trace::legend_only(format!("event {e}"), m));
    }
    fig
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let chart = Chart::new();
    for &n in &[2_500usize, 10_000usize] {
        group.bench_function(format!("daily_{n}"), |b| {
            let fig = build_figure(n, 15);
            let mut opts = RenderOptions::for_figure(&fig);
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&fig, &opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
