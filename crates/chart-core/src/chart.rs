// File: crates/chart-core/src/chart.rs
// Summary: Headless figure rendering pipeline using Skia CPU raster surfaces (PNG bytes, RGBA8).

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, AxisKind};
use crate::color::Rgba;
use crate::figure::{Figure, Orientation};
use crate::geometry::RectI32;
use crate::hover::Hover;
use crate::marker::{outline, MarkerShape};
use crate::scale::Viewport;
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::ticks::{date_ticks, format_value, linear_ticks};
use crate::trace::{MarkerStyle, Trace, TraceMode};
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

const TITLE_PX: f32 = 20.0;
const LABEL_PX: f32 = 14.0;
const TICK_PX: f32 = 12.0;
const LEGEND_ROW_PX: f32 = 22.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    /// Cursor position in pixels; draws a crosshair when inside the plot.
    pub crosshair: Option<(f32, f32)>,
    pub hover: Option<Hover>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            crosshair: None,
            hover: None,
        }
    }
}

impl RenderOptions {
    /// Defaults sized to the figure's layout.
    pub fn for_figure(fig: &Figure) -> Self {
        Self { width: fig.layout.width, height: fig.layout.height, ..Self::default() }
    }
}

/// Plot rectangle: surface minus insets, minus the legend column when shown.
pub fn plot_rect(fig: &Figure, opts: &RenderOptions) -> RectI32 {
    let legend = &fig.layout.legend;
    let legend_w = if legend.visible && !fig.legend_entries().is_empty() { legend.width as i32 } else { 0 };
    let left = opts.insets.left as i32;
    let top = opts.insets.top as i32;
    let right = (opts.width - opts.insets.right as i32 - legend_w).max(left + 1);
    let bottom = (opts.height - opts.insets.bottom as i32).max(top + 1);
    RectI32::from_ltrb(left, top, right, bottom)
}

pub fn viewport(fig: &Figure, opts: &RenderOptions) -> Viewport {
    Viewport::new(plot_rect(fig, opts), &ViewState::from_figure(fig))
}

/// Skia renderer. Holds the font collection so repeated frames reuse it.
pub struct Chart {
    shaper: TextShaper,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self { Self { shaper: TextShaper::new() } }

    /// Render `fig` and encode it as PNG in memory.
    pub fn render_to_png_bytes(&self, fig: &Figure, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(fig, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render `fig` into an unpremultiplied RGBA8 buffer: (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, fig: &Figure, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(fig, opts)?;
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn raster(&self, fig: &Figure, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), fig, opts);
        Ok(surface)
    }

    /// Paint the whole figure onto any Skia canvas.
    pub fn paint(&self, canvas: &skia::Canvas, fig: &Figure, opts: &RenderOptions) {
        let layout = &fig.layout;
        let theme = &opts.theme;
        canvas.clear(layout.paper_bgcolor.to_skia());

        let vp = viewport(fig, opts);
        let plot = vp.plot;
        let plot_rect = skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
        canvas.draw_rect(plot_rect, &fill(layout.plot_bgcolor));

        let x_ticks = x_tick_marks(&layout.x_axis, &vp);
        let y_ticks = y_tick_marks(&layout.y_axis, &vp);

        // Grid & axes
        draw_grid(canvas, &vp, &layout.x_axis, &layout.y_axis, &x_ticks, &y_ticks, theme);
        draw_axes(canvas, &plot, theme);

        // Traces, clipped to the plot area
        canvas.save();
        canvas.clip_rect(plot_rect, skia::ClipOp::Intersect, true);
        for t in &fig.traces {
            match t.mode {
                TraceMode::Lines => draw_line_trace(canvas, &vp, t),
                TraceMode::Markers => {
                    for p in t.present_points() {
                        let (x, y) = vp.to_px(p);
                        draw_marker(canvas, x, y, &t.marker);
                    }
                }
            }
        }
        if let Some((cx, cy)) = opts.crosshair {
            if plot.contains(cx, cy) {
                let paint = stroke(theme.crosshair.with_opacity(0.6), 1.0);
                canvas.draw_line((cx, plot.top as f32), (cx, plot.bottom as f32), &paint);
                canvas.draw_line((plot.left as f32, cy), (plot.right as f32, cy), &paint);
            }
        }
        canvas.restore();

        if opts.draw_labels {
            self.draw_labels(canvas, fig, &plot, &x_ticks, &y_ticks, theme);
            self.draw_legend(canvas, fig, &plot, theme);
        }
        if let Some(h) = &opts.hover {
            self.draw_tooltip(canvas, h, opts, theme);
        }
    }

    fn draw_labels(
        &self,
        canvas: &skia::Canvas,
        fig: &Figure,
        plot: &RectI32,
        x_ticks: &[(f32, String)],
        y_ticks: &[(f32, String)],
        theme: &Theme,
    ) {
        let layout = &fig.layout;
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
        for (x, label) in x_ticks {
            self.shaper.draw(canvas, label, *x, b + 18.0, TICK_PX, theme.tick, Align::Center, false);
        }
        for (y, label) in y_ticks {
            self.shaper.draw(canvas, label, l - 8.0, y + TICK_PX * 0.35, TICK_PX, theme.tick, Align::Right, false);
        }
        if !layout.x_axis.title.is_empty() {
            self.shaper.draw(canvas, &layout.x_axis.title, (l + r) * 0.5, b + 46.0, LABEL_PX, theme.axis_label, Align::Center, false);
        }
        if !layout.y_axis.title.is_empty() {
            self.shaper.draw_vertical(canvas, &layout.y_axis.title, l - 82.0, (t + b) * 0.5, LABEL_PX, theme.axis_label);
        }
        if !layout.title.is_empty() {
            self.shaper.draw(canvas, &layout.title, l, t - 28.0, TITLE_PX, theme.title, Align::Left, false);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, fig: &Figure, plot: &RectI32, theme: &Theme) {
        let legend = &fig.layout.legend;
        let entries = fig.legend_entries();
        if !legend.visible || entries.is_empty() { return; }
        let x0 = plot.right as f32 + 20.0;
        let x_max = x0 + legend.width as f32 - 24.0;
        let mut y = plot.top as f32 + 6.0;
        if let Some(title) = legend.title.as_deref() {
            self.shaper.draw(canvas, title, x0, y + 10.0, LABEL_PX, theme.legend_text, Align::Left, true);
            y += LEGEND_ROW_PX + 2.0;
        }
        let mut x = x0;
        for t in entries {
            let text_w = self.shaper.measure_width(&t.name, TICK_PX, false);
            let item_w = 40.0 + text_w + 12.0;
            if legend.orientation == Orientation::Horizontal && x > x0 && x + item_w > x_max {
                x = x0;
                y += LEGEND_ROW_PX;
            }
            let cy = y + 6.0;
            draw_swatch(canvas, x + 15.0, cy, t);
            self.shaper.draw(canvas, &t.name, x + 36.0, cy + TICK_PX * 0.35, TICK_PX, theme.legend_text, Align::Left, false);
            match legend.orientation {
                Orientation::Vertical => y += LEGEND_ROW_PX,
                Orientation::Horizontal => x += item_w,
            }
        }
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, hover: &Hover, opts: &RenderOptions, theme: &Theme) {
        let lines: Vec<&str> = hover.text.lines().collect();
        if lines.is_empty() { return; }
        let pad = 6.0;
        let line_h = TICK_PX + 4.0;
        let w = lines.iter().map(|l| self.shaper.measure_width(l, TICK_PX, false)).fold(0.0f32, f32::max) + pad * 2.0;
        let h = line_h * lines.len() as f32 + pad * 2.0;
        let (ax, ay) = hover.anchor;
        let mut left = ax + 12.0;
        let mut top = ay - h - 12.0;
        if left + w > opts.width as f32 { left = ax - 12.0 - w; }
        if top < 0.0 { top = ay + 12.0; }
        let rect = skia::Rect::from_xywh(left, top, w, h);
        let rrect = skia::RRect::new_rect_xy(rect, 4.0, 4.0);
        canvas.draw_rrect(rrect, &fill(theme.tooltip_bg));
        canvas.draw_rrect(rrect, &stroke(hover.color, 1.5));
        for (i, line) in lines.iter().enumerate() {
            let baseline = top + pad + line_h * (i as f32 + 1.0) - 4.0;
            self.shaper.draw(canvas, line, left + pad, baseline, TICK_PX, theme.tooltip_text, Align::Left, false);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn fill(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color.to_skia());
    paint
}

fn stroke(color: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color.to_skia());
    paint
}

fn x_tick_marks(axis: &Axis, vp: &Viewport) -> Vec<(f32, String)> {
    let target = (vp.plot.width() / 110).max(2) as usize;
    match axis.kind {
        AxisKind::Date => date_ticks(vp.x.d0, vp.x.d1, target)
            .into_iter()
            .map(|(x, label)| (vp.x.to_px(x), label))
            .collect(),
        AxisKind::Linear => {
            let ticks = linear_ticks(vp.x.d0, vp.x.d1, target);
            let step = tick_step(&ticks);
            ticks.into_iter().map(|v| (vp.x.to_px(v), format_value(v, axis.tick_format, step))).collect()
        }
    }
}

fn y_tick_marks(axis: &Axis, vp: &Viewport) -> Vec<(f32, String)> {
    let target = (vp.plot.height() / 70).max(2) as usize;
    let ticks = linear_ticks(vp.y.d0, vp.y.d1, target);
    let step = tick_step(&ticks);
    ticks.into_iter().map(|v| (vp.y.to_px(v), format_value(v, axis.tick_format, step))).collect()
}

fn tick_step(ticks: &[f64]) -> f64 {
    if ticks.len() >= 2 { ticks[1] - ticks[0] } else { 1.0 }
}

fn draw_grid(
    canvas: &skia::Canvas,
    vp: &Viewport,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[(f32, String)],
    y_ticks: &[(f32, String)],
    theme: &Theme,
) {
    let p = &vp.plot;
    let (l, t, r, b) = (p.left as f32, p.top as f32, p.right as f32, p.bottom as f32);
    if x_axis.show_grid {
        let paint = stroke(x_axis.grid_color, 1.0);
        for (x, _) in x_ticks {
            canvas.draw_line((*x, t), (*x, b), &paint);
        }
    }
    if y_axis.show_grid {
        let paint = stroke(y_axis.grid_color, 1.0);
        for (y, _) in y_ticks {
            canvas.draw_line((l, *y), (r, *y), &paint);
        }
    }
    let zero = stroke(theme.zero_line, 1.5);
    if x_axis.zero_line && x_axis.kind == AxisKind::Linear && vp.x.d0 < 0.0 && vp.x.d1 > 0.0 {
        let x = vp.x.to_px(0.0);
        canvas.draw_line((x, t), (x, b), &zero);
    }
    if y_axis.zero_line && vp.y.d0 < 0.0 && vp.y.d1 > 0.0 {
        let y = vp.y.to_px(0.0);
        canvas.draw_line((l, y), (r, y), &zero);
    }
}

fn draw_axes(canvas: &skia::Canvas, p: &RectI32, theme: &Theme) {
    let axis_paint = stroke(theme.axis_line, 1.5);
    let (l, t, r, b) = (p.left as f32, p.top as f32, p.right as f32, p.bottom as f32);
    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_line_trace(canvas: &skia::Canvas, vp: &Viewport, trace: &Trace) {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    let mut segments = 0usize;
    for p in &trace.points {
        match p {
            Some(p) => {
                let (x, y) = vp.to_px(*p);
                if pen_down {
                    path.line_to((x, y));
                    segments += 1;
                } else {
                    path.move_to((x, y));
                    pen_down = true;
                }
            }
            // null breaks the line
            None => pen_down = false,
        }
    }
    if segments == 0 { return; }
    canvas.draw_path(&path, &stroke(trace.line.color, trace.line.width));
}

fn marker_path(shape: MarkerShape, cx: f32, cy: f32, size: f32) -> Option<skia::Path> {
    let pts = outline(shape, cx, cy, size)?;
    let mut path = skia::Path::new();
    let (first, rest) = pts.split_first()?;
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close();
    Some(path)
}

fn draw_marker(canvas: &skia::Canvas, cx: f32, cy: f32, m: &MarkerStyle) {
    let color = m.color.with_opacity(m.opacity);
    let path = marker_path(m.symbol.shape, cx, cy, m.size);
    let r = m.size * 0.5;
    if m.symbol.open {
        let paint = stroke(color, m.line.width.max(1.0));
        match &path {
            Some(path) => { canvas.draw_path(path, &paint); }
            None => { canvas.draw_circle((cx, cy), r, &paint); }
        }
        return;
    }
    let body = fill(color);
    match &path {
        Some(path) => { canvas.draw_path(path, &body); }
        None => { canvas.draw_circle((cx, cy), r, &body); }
    }
    if m.line.width > 0.0 {
        let edge = stroke(m.line.color.with_opacity(m.opacity), m.line.width);
        match &path {
            Some(path) => { canvas.draw_path(path, &edge); }
            None => { canvas.draw_circle((cx, cy), r, &edge); }
        }
    }
}

fn draw_swatch(canvas: &skia::Canvas, cx: f32, cy: f32, t: &Trace) {
    match t.mode {
        TraceMode::Lines => {
            canvas.draw_line((cx - 15.0, cy), (cx + 15.0, cy), &stroke(t.line.color, t.line.width.min(4.0)));
        }
        TraceMode::Markers => {
            let mut m = t.marker;
            m.size = m.size.min(14.0);
            draw_marker(canvas, cx, cy, &m);
        }
    }
}
