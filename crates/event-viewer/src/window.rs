// File: crates/event-viewer/src/window.rs
// Summary: Native window showing a Figure via CPU raster + softbuffer blit.
// Controls: hover a marker for its tooltip, drag to pan, wheel to zoom, A to fit Y to the
// visible dates, R to reset, Esc to quit.

use anyhow::{anyhow, Result};
use chart_core::{hit_test, plot_rect, Chart, Figure, RenderOptions, Theme, ViewState};
use std::num::NonZeroU32;
use tracing::{debug, error};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

struct Viewer {
    chart: Chart,
    figure: Figure,
    theme: Theme,
    home: ViewState,
    view: ViewState,
    size: (u32, u32),
    cursor: Option<(f64, f64)>,
    drag_from: Option<(f64, f64)>,
}

impl Viewer {
    fn new(figure: Figure, theme: Theme, size: (u32, u32)) -> Self {
        let home = ViewState::from_figure(&figure);
        Self { chart: Chart::new(), figure, theme, home, view: home, size, cursor: None, drag_from: None }
    }

    /// Figure with the current view applied, plus render options for the window size.
    fn frame(&self) -> (Figure, RenderOptions) {
        let mut fig = self.figure.clone();
        self.view.apply_to_figure(&mut fig);
        let mut opts = RenderOptions::for_figure(&fig);
        opts.width = self.size.0.max(1) as i32;
        opts.height = self.size.1.max(1) as i32;
        opts.theme = self.theme;
        if let Some((cx, cy)) = self.cursor {
            let (cx, cy) = (cx as f32, cy as f32);
            opts.crosshair = Some((cx, cy));
            opts.hover = hit_test(&fig, &opts, cx, cy);
        }
        (fig, opts)
    }

    fn render(&self) -> Result<(Vec<u32>, u32, u32)> {
        let (fig, opts) = self.frame();
        let (rgba, w, h, _) = self.chart.render_to_rgba8(&fig, &opts)?;
        Ok((rgba_to_argb(&rgba), w, h))
    }

    fn pan_to(&mut self, x: f64, y: f64) {
        if let Some((px, py)) = self.drag_from {
            let (fig, opts) = self.frame();
            self.view.pan_by_pixels(x - px, y - py, &plot_rect(&fig, &opts));
            self.drag_from = Some((x, y));
        }
    }

    fn zoom(&mut self, scroll: f64) {
        let Some((cx, cy)) = self.cursor else { return };
        let (fig, opts) = self.frame();
        self.view.zoom_at_pixel(scroll, cx, cy, &plot_rect(&fig, &opts));
    }

    /// Fit Y to the data inside the current X range; no-op when nothing is visible.
    fn autoscale_y(&mut self) -> bool { self.view.autoscale_y_visible(&self.figure) }

    fn reset(&mut self) { self.view = self.home; }
}

/// softbuffer wants 0RGB in a u32 per pixel.
fn rgba_to_argb(rgba: &[u8]) -> Vec<u32> {
    rgba.chunks_exact(4)
        .map(|px| (px[3] as u32) << 24 | (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32)
        .collect()
}

/// Open a window and run the event loop until it is closed.
pub fn show(figure: Figure, theme: Theme) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(figure.layout.title.clone())
        .with_inner_size(LogicalSize::new(figure.layout.width as f64, figure.layout.height as f64))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let size = window.inner_size();
    let mut viewer = Viewer::new(figure, theme, (size.width, size.height));

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                match event {
                    WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                    WindowEvent::Resized(s) => viewer.size = (s.width, s.height),
                    WindowEvent::CursorMoved { position, .. } => {
                        viewer.pan_to(position.x, position.y);
                        viewer.cursor = Some((position.x, position.y));
                    }
                    WindowEvent::CursorLeft { .. } => viewer.cursor = None,
                    WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                        viewer.drag_from = match state {
                            ElementState::Pressed => viewer.cursor,
                            ElementState::Released => None,
                        };
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        let scroll = match delta {
                            MouseScrollDelta::LineDelta(_, y) => y as f64 * 0.1,
                            MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
                        };
                        viewer.zoom(scroll);
                    }
                    WindowEvent::KeyboardInput {
                        input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                        ..
                    } => match key {
                        VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                        VirtualKeyCode::A => {
                            if !viewer.autoscale_y() {
                                debug!("autoscale skipped: no data in view");
                            }
                        }
                        VirtualKeyCode::R => {
                            debug!("view reset");
                            viewer.reset();
                        }
                        _ => return,
                    },
                    _ => return,
                }
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let (Some(w), Some(h)) = (NonZeroU32::new(viewer.size.0), NonZeroU32::new(viewer.size.1)) else { return };
                if let Err(e) = surface.resize(w, h) {
                    error!("surface resize failed: {e}");
                    return;
                }
                let pixels = match viewer.render() {
                    Ok((pixels, _, _)) => pixels,
                    Err(e) => {
                        error!("render failed: {e:#}");
                        *cf = ControlFlow::Exit;
                        return;
                    }
                };
                let mut buffer = match surface.buffer_mut() {
                    Ok(b) => b,
                    Err(e) => {
                        error!("frame buffer unavailable: {e}");
                        return;
                    }
                };
                let n = buffer.len().min(pixels.len());
                buffer[..n].copy_from_slice(&pixels[..n]);
                if let Err(e) = buffer.present() {
                    error!("present failed: {e}");
                }
            }
            _ => {}
        }
    })
}
