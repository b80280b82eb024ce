/*
 * Input Module
 *
 * This module handles window events: resizing, focus changes, the mouse wheel
 * and keyboard shortcuts.
 *
 * Features:
 * - Resizing updates the field bounds (points are kept)
 * - Minimising hides the field; focus changes are only recorded
 * - Mouse wheel scrolls the page
 * - T toggles the theme, Space pauses, D toggles debug info
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseScrollDelta, TouchPhase};
use tracing::info;

use crate::app::Model;

// Page units scrolled per wheel line
const LINE_SCROLL: f32 = 60.0;

pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    // A minimised window reports zero size; keep the old bounds so the
    // points are not all clamped into a corner
    if size.x <= 0.0 || size.y <= 0.0 {
        model.set_minimized(true);
        return;
    }
    model.set_minimized(false);

    model.field.resize(size.x, size.y);
    model.page.set_viewport_height(size.y);
    info!(width = size.x, height = size.y, "surface resized");
}

pub fn focused(_app: &App, model: &mut Model) {
    model.set_focused(true);
}

pub fn unfocused(_app: &App, model: &mut Model) {
    model.set_focused(false);
}

// Mouse wheel event handler for scrolling the page
pub fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    // Let egui scroll its own widgets
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let amount = match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * LINE_SCROLL,
        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
    };
    model.page.scroll_mut().scroll_by(amount);
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Keys typed into the contact form belong to egui
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    let viewport = model.page.viewport_height();
    match key {
        Key::T => model.toggle_theme(),
        Key::Space => model.params.pause = !model.params.pause,
        Key::D => model.params.show_debug = !model.params.show_debug,
        Key::Home => model.page.scroll_mut().scroll_to(0.0),
        Key::End => {
            let bottom = model.page.content_height();
            model.page.scroll_mut().scroll_to(bottom);
        }
        Key::PageDown => model.page.scroll_mut().scroll_by(viewport),
        Key::PageUp => model.page.scroll_mut().scroll_by(-viewport),
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
