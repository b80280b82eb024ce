/*
 * UI Module
 *
 * This module contains functions for creating and updating the control panel
 * using nannou_egui: navigation links, theme toggle, skills, the contact form
 * and the field parameters. The panel never mutates the rest of the model
 * directly; it reports what the user asked for through UiActions.
 */

use nannou_egui::{egui, Egui};

use crate::contact::ContactForm;
use crate::debug::DebugInfo;
use crate::page::Section;
use crate::params::FieldParams;
use crate::skills::{SkillHighlight, SKILLS};
use crate::theme::Theme;

/// What the user asked for during this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiActions {
    pub navigate_to: Option<usize>,
    pub toggle_menu: bool,
    pub toggle_theme: bool,
    pub submit_contact: bool,
    pub reset_field: bool,
}

/// Read-only state shown by the panel.
pub struct PanelView<'a> {
    pub sections: &'a [Section],
    pub active_section: Option<usize>,
    pub menu_open: bool,
    pub theme: Theme,
    pub contact_notice: Option<&'a str>,
    pub debug_info: &'a DebugInfo,
}

pub fn update_ui(
    egui: &mut Egui,
    params: &mut FieldParams,
    contact: &mut ContactForm,
    skills: &mut SkillHighlight,
    view: PanelView<'_>,
) -> UiActions {
    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();
    show_panel(&ctx, params, contact, skills, view)
}

fn show_panel(
    ctx: &egui::CtxRef,
    params: &mut FieldParams,
    contact: &mut ContactForm,
    skills: &mut SkillHighlight,
    view: PanelView<'_>,
) -> UiActions {
    let mut actions = UiActions::default();

    egui::Window::new("Portfolio")
        .default_pos([10.0, 60.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let menu_label = if view.menu_open { "Close menu" } else { "Menu" };
                if ui.button(menu_label).clicked() {
                    actions.toggle_menu = true;
                }
                let theme_label = match view.theme {
                    Theme::Dark => "Light mode",
                    Theme::Light => "Dark mode",
                };
                if ui.button(theme_label).clicked() {
                    actions.toggle_theme = true;
                }
            });

            if view.menu_open {
                ui.separator();
                for (i, section) in view.sections.iter().enumerate() {
                    let active = view.active_section == Some(i);
                    if ui.selectable_label(active, section.title.as_str()).clicked() {
                        actions.navigate_to = Some(i);
                    }
                }
            }

            let skills_shown = ui
                .collapsing("Skills", |ui| {
                    let mut hovered = None;
                    ui.horizontal_wrapped(|ui| {
                        for &skill in SKILLS {
                            let response = ui.selectable_label(skills.is_highlighted(skill), skill);
                            if response.hovered() {
                                hovered = Some(skill);
                            }
                        }
                    });
                    skills.hover(hovered);
                })
                .body_returned
                .is_some();
            // A collapsed section cannot be hovered
            if !skills_shown {
                skills.hover(None);
            }

            ui.collapsing("Contact", |ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut contact.name);
                ui.label("Email");
                ui.text_edit_singleline(&mut contact.email);
                ui.label("Message");
                ui.text_edit_multiline(&mut contact.message);

                if ui
                    .add_enabled(contact.is_enabled(), egui::Button::new(contact.button_label()))
                    .clicked()
                {
                    actions.submit_contact = true;
                }
                if let Some(notice) = view.contact_notice {
                    ui.colored_label(egui::Color32::from_rgb(239, 68, 68), notice);
                }
            });

            ui.collapsing("Background", |ui| {
                ui.add(egui::Slider::new(&mut params.node_count, FieldParams::get_node_count_range()).text("Nodes"));
                ui.add(egui::Slider::new(&mut params.max_distance, FieldParams::get_max_distance_range()).text("Connection Distance"));
                ui.add(egui::Slider::new(&mut params.speed, FieldParams::get_speed_range()).text("Speed (new nodes)"));
                ui.add(egui::Slider::new(&mut params.visible_opacity, FieldParams::get_opacity_range()).text("Opacity"));

                if ui.button("Reseed Nodes").clicked() {
                    actions.reset_field = true;
                }

                ui.checkbox(&mut params.animate_when_hidden, "Animate While Hidden");
                ui.checkbox(&mut params.pause, "Pause Animation");
                ui.checkbox(&mut params.show_debug, "Show Debug Info");

                ui.separator();

                // Performance metrics
                for line in view.debug_info.lines() {
                    ui.label(line);
                }
            });
        });

    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let lines = debug_info.lines();

    // Create a background panel in the bottom-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.bottom() + panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.bottom() + panel_height - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
