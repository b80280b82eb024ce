/*
 * Renderer Module
 *
 * This module draws the particle field and the page overlay. The field is
 * drawn through the small Surface trait so the drawing order and colors can be
 * checked without a window; NannouSurface maps field coordinates (origin
 * top-left, y down) onto the nannou window (origin center, y up).
 */

use nannou::color::{rgba, Rgb, Rgba};
use nannou::prelude::*;

use crate::app::Model;
use crate::field::ParticleField;
use crate::navigation::Navigation;
use crate::page::Page;
use crate::reveal::RevealTracker;
use crate::theme::Palette;
use crate::ui;

pub const EDGE_WEIGHT: f32 = 0.5;
// Low-alpha accent tint for edges (the accent color with alpha 0x20)
pub const EDGE_TINT: f32 = 32.0 / 255.0;
pub const NODE_ALPHA: f32 = 0.8;
// The node gradient reaches transparency at this multiple of the radius
pub const GRADIENT_REACH: f32 = 2.0;
pub const GRADIENT_RINGS: usize = 6;

pub trait Surface {
    fn clear(&mut self);
    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Rgba);
    fn disc(&mut self, center: Vec2, radius: f32, color: Rgba);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldStyle {
    pub accent: Rgb<u8>,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub edges: usize,
    pub nodes: usize,
}

fn with_alpha(color: Rgb<u8>, alpha: f32) -> Rgba {
    rgba(
        color.red as f32 / 255.0,
        color.green as f32 / 255.0,
        color.blue as f32 / 255.0,
        alpha,
    )
}

// Alpha of the radial gradient at `t` radii from the center
pub fn gradient_alpha(t: f32) -> f32 {
    (NODE_ALPHA * (1.0 - t / GRADIENT_REACH)).max(0.0)
}

/// Per-disc alphas for the stacked gradient, outermost disc first. Disc `k`
/// has radius `1 - k / GRADIENT_RINGS`; blending the discs over each other
/// leaves every band at the gradient value of its midpoint.
pub fn ring_alphas(opacity: f32) -> [f32; GRADIENT_RINGS] {
    let mut alphas = [0.0; GRADIENT_RINGS];
    let mut covered = 0.0;
    for (ring, alpha) in alphas.iter_mut().enumerate() {
        let mid = 1.0 - (ring as f32 + 0.5) / GRADIENT_RINGS as f32;
        let target = gradient_alpha(mid) * opacity;
        if covered < 1.0 {
            *alpha = ((target - covered) / (1.0 - covered)).clamp(0.0, 1.0);
        }
        covered += *alpha * (1.0 - covered);
    }
    alphas
}

pub fn render_field<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S, style: FieldStyle) -> FrameStats {
    let mut stats = FrameStats::default();
    surface.clear();

    let points = field.points();
    field.for_each_edge(|edge| {
        let color = with_alpha(style.accent, edge.opacity * EDGE_TINT * style.opacity);
        surface.line(points[edge.a].position, points[edge.b].position, EDGE_WEIGHT, color);
        stats.edges += 1;
    });

    // Radial gradient approximated by stacked discs, outermost first
    let alphas = ring_alphas(style.opacity);
    for point in points {
        for (ring, &alpha) in alphas.iter().enumerate() {
            let t = 1.0 - ring as f32 / GRADIENT_RINGS as f32;
            surface.disc(point.position, point.radius * t, with_alpha(style.accent, alpha));
        }
        stats.nodes += 1;
    }

    stats
}

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    rect: Rect,
    background: Rgb<u8>,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, rect: Rect, background: Rgb<u8>) -> Self {
        Self { draw, rect, background }
    }

    fn to_window(&self, p: Vec2) -> Vec2 {
        vec2(self.rect.left() + p.x, self.rect.top() - p.y)
    }
}

impl Surface for NannouSurface<'_> {
    fn clear(&mut self) {
        self.draw.background().color(self.background);
    }

    fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Rgba) {
        self.draw
            .line()
            .start(self.to_window(from))
            .end(self.to_window(to))
            .weight(weight)
            .color(color);
    }

    fn disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.draw.ellipse().xy(self.to_window(center)).radius(radius).color(color);
    }
}

// Draw sections that intersect the window, faded in by their reveal progress
fn draw_page(
    draw: &Draw,
    window_rect: Rect,
    page: &Page,
    reveal: &RevealTracker,
    headline: &str,
    palette: &Palette,
    now: std::time::Instant,
) {
    let scroll = page.scroll().offset();
    let margin = 60.0;
    let left = window_rect.left() + margin;

    for (i, section) in page.sections().iter().enumerate() {
        let top = window_rect.top() - (section.top - scroll);
        let bottom = top - section.height;
        if bottom > window_rect.top() || top < window_rect.bottom() {
            continue;
        }

        let progress = reveal.progress(i, now);
        // fade-in-up: slide 30 units while fading
        let lift = (1.0 - progress) * 30.0;
        let title_y = top - margin - 20.0 - lift;
        let width = window_rect.w() - margin * 2.0;

        if i == 0 {
            draw.text(headline)
                .x_y(left + width / 2.0, title_y)
                .w(width)
                .left_justify()
                .color(with_alpha(palette.accent, progress))
                .font_size(36);

            // Floating code moves at half the scroll speed
            let code_y = title_y - 200.0 - page.parallax_offset();
            draw.text("model.fit(x_train, y_train, epochs=50)")
                .x_y(left + width / 2.0, code_y)
                .w(width)
                .right_justify()
                .color(with_alpha(palette.muted, 0.6 * progress))
                .font_size(16);
        } else {
            draw.text(&section.title)
                .x_y(left + width / 2.0, title_y)
                .w(width)
                .left_justify()
                .color(with_alpha(palette.text, progress))
                .font_size(28);
        }

        draw.text(&section.blurb)
            .x_y(left + width / 2.0, title_y - 60.0)
            .w(width)
            .left_justify()
            .color(with_alpha(palette.muted, progress))
            .font_size(16);
    }
}

// Top bar with one label per section; the active one in the accent color
fn draw_nav_bar(draw: &Draw, window_rect: Rect, page: &Page, navigation: &Navigation, palette: &Palette) {
    let height = 40.0;
    let scroll = page.scroll().offset();
    let bar_y = window_rect.top() - height / 2.0;

    draw.rect()
        .x_y(window_rect.x(), bar_y)
        .w_h(window_rect.w(), height)
        .color(with_alpha(palette.background, Navigation::background_alpha(scroll)));

    let sections = page.sections();
    if sections.is_empty() {
        return;
    }
    let slot = window_rect.w() / sections.len() as f32;
    for (i, section) in sections.iter().enumerate() {
        let color = if navigation.active() == Some(i) { palette.accent } else { palette.muted };
        draw.text(&section.title)
            .x_y(window_rect.left() + slot * (i as f32 + 0.5), bar_y)
            .color(with_alpha(color, 1.0))
            .font_size(14);
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();
    let palette = model.theme.palette();

    let style = FieldStyle { accent: palette.accent, opacity: model.field_opacity() };
    let mut surface = NannouSurface::new(&draw, window_rect, palette.background);
    let stats = render_field(&model.field, &mut surface, style);
    model.debug_info.record_frame(stats);

    draw_page(
        &draw,
        window_rect,
        &model.page,
        &model.reveal,
        model.typing.visible(),
        &palette,
        std::time::Instant::now(),
    );
    draw_nav_bar(&draw, window_rect, &model.page, &model.navigation, &palette);

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        tracing::warn!(error = ?err, "failed to submit frame");
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        tracing::warn!(error = ?err, "failed to draw control panel");
    }
}
