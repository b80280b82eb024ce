/*
 * Application Module
 *
 * This module defines the application model and the per-frame update. The
 * model owns every piece of page state explicitly: the particle field, the
 * theme, navigation, scroll, reveal, typing and contact form. Window events are
 * handled in the input module and drawing in the renderer module.
 */

use std::sync::OnceLock;
use std::time::Instant;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::contact::ContactForm;
use crate::debug::DebugInfo;
use crate::error::{Error, Result};
use crate::field::ParticleField;
use crate::input;
use crate::navigation::Navigation;
use crate::page::Page;
use crate::params::FieldParams;
use crate::renderer;
use crate::reveal::RevealTracker;
use crate::skills::SkillHighlight;
use crate::theme::{JsonFileStore, MemoryStore, PreferenceStore, ThemeManager};
use crate::typing::TypingAnimation;
use crate::ui::{self, PanelView};

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 800;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Hand the resolved configuration to the model function, which nannou calls
/// without arguments. Only the first call has any effect.
pub fn set_config(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        warn!("configuration already set; ignoring");
    }
}

/// The window counts as hidden only while minimised to zero size. Losing
/// focus leaves it on screen, so the field keeps drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub focused: bool,
    pub minimized: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self { focused: true, minimized: false }
    }
}

impl Visibility {
    pub fn is_hidden(&self) -> bool {
        self.minimized
    }

    pub fn opacity(&self, params: &FieldParams) -> f32 {
        if self.is_hidden() {
            params.hidden_opacity
        } else {
            params.visible_opacity
        }
    }

    // Hidden windows stop stepping the field unless asked to keep animating
    pub fn should_step(&self, params: &FieldParams) -> bool {
        !params.pause && (!self.is_hidden() || params.animate_when_hidden)
    }
}

// Main model for the application
pub struct Model {
    pub field: ParticleField,
    pub params: FieldParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub theme: ThemeManager,
    pub page: Page,
    pub reveal: RevealTracker,
    pub navigation: Navigation,
    pub typing: TypingAnimation,
    pub contact: ContactForm,
    pub contact_notice: Option<String>,
    pub skills: SkillHighlight,
    pub visibility: Visibility,
}

impl Model {
    pub fn field_opacity(&self) -> f32 {
        self.visibility.opacity(&self.params)
    }

    pub fn toggle_theme(&mut self) {
        if let Err(err) = self.theme.toggle() {
            warn!(error = %err, "could not save theme preference");
        }
        self.egui.ctx().set_visuals(self.theme.current().egui_visuals());
    }

    pub fn navigate_to(&mut self, index: usize) {
        if self.navigation.select(index, self.page.sections()) {
            self.page.scroll_to_section(index);
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.visibility.focused = focused;
        debug!(focused, "focus changed");
    }

    pub fn set_minimized(&mut self, minimized: bool) {
        if self.visibility.minimized != minimized {
            self.visibility.minimized = minimized;
            debug!(hidden = self.visibility.is_hidden(), "visibility changed");
        }
    }
}

fn open_store(config: &AppConfig) -> Box<dyn PreferenceStore> {
    match JsonFileStore::open(&config.prefs_path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!(error = %err, "preferences unavailable; theme will not be remembered");
            Box::new(MemoryStore::new())
        }
    }
}

fn build_model(app: &App) -> Result<Model> {
    let config = CONFIG.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title("Neural Field")
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .view(renderer::view)
        .resized(input::resized)
        .focused(input::focused)
        .unfocused(input::unfocused)
        .mouse_wheel(input::mouse_wheel)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .map_err(|err| Error::Window(format!("{:?}", err)))?;

    // The field is never created without a surface to draw on
    let window = app.window(window_id).ok_or(Error::MissingSurface)?;
    let (width, height) = window.inner_size_points();
    let egui = Egui::from_window(&window);

    let theme = ThemeManager::load(open_store(&config));
    egui.ctx().set_visuals(theme.current().egui_visuals());

    let field = ParticleField::new(&config.field, width, height);
    let page = Page::portfolio(height);
    let reveal = RevealTracker::for_page(&page);

    info!(
        nodes = field.len(),
        max_distance = config.field.max_distance,
        width,
        height,
        "neural field initialised"
    );

    Ok(Model {
        field,
        params: config.field.clone(),
        egui,
        debug_info: DebugInfo::default(),
        theme,
        page,
        reveal,
        navigation: Navigation::new(),
        typing: TypingAnimation::new(&config.headline, config.typing_speed),
        contact: ContactForm::new(),
        contact_notice: None,
        skills: SkillHighlight::default(),
        visibility: Visibility::default(),
    })
}

// Initialize the model
pub fn model(app: &App) -> Model {
    match build_model(app) {
        Ok(model) => model,
        Err(err) => {
            error!(error = %err, "failed to start");
            std::process::exit(1);
        }
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    let now = Instant::now();

    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.debug_info.hidden = model.visibility.is_hidden();
    model.debug_info.focused = model.visibility.focused;

    model.egui.set_elapsed_time(update.since_start);
    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &mut model.contact,
        &mut model.skills,
        PanelView {
            sections: model.page.sections(),
            active_section: model.navigation.active(),
            menu_open: model.navigation.is_menu_open(),
            theme: model.theme.current(),
            contact_notice: model.contact_notice.as_deref(),
            debug_info: &model.debug_info,
        },
    );

    let changes = model.params.detect_changes();
    if changes.any_changed {
        debug!(?changes, "field parameters changed");
        model.field.apply_params(&model.params);
    }
    if actions.reset_field {
        model.field = ParticleField::new(&model.params, model.field.width(), model.field.height());
        info!(nodes = model.field.len(), "field reseeded");
    }
    if actions.toggle_theme {
        model.toggle_theme();
    }
    if actions.toggle_menu {
        model.navigation.toggle_menu();
    }
    if let Some(index) = actions.navigate_to {
        model.navigate_to(index);
    }
    if actions.submit_contact {
        model.contact_notice = model.contact.submit(now).err().map(|err| err.to_string());
    }

    model.contact.update(now);
    model.typing.update(now);

    // Scroll easing drives navigation highlight and reveal
    model.page.scroll_mut().step();
    let scroll = model.page.scroll().offset();
    model.navigation.on_scroll(scroll, model.page.sections());
    model.reveal.observe(scroll, model.page.viewport_height(), now);

    if model.visibility.should_step(&model.params) {
        model.field.update();
    } else if !model.params.pause {
        model.debug_info.updates_skipped += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_only_when_minimized() {
        let mut visibility = Visibility::default();
        assert!(!visibility.is_hidden());
        visibility.focused = false;
        assert!(!visibility.is_hidden());
        visibility = Visibility { focused: true, minimized: true };
        assert!(visibility.is_hidden());
    }

    #[test]
    fn unfocused_window_keeps_drawing_and_stepping() {
        let params = FieldParams::default();
        let unfocused = Visibility { focused: false, minimized: false };
        assert_eq!(unfocused.opacity(&params), 0.3);
        assert!(unfocused.should_step(&params));
    }

    #[test]
    fn hidden_window_is_transparent_and_paused() {
        let params = FieldParams::default();
        let hidden = Visibility { focused: true, minimized: true };
        assert_eq!(hidden.opacity(&params), 0.0);
        assert!(!hidden.should_step(&params));

        let shown = Visibility::default();
        assert_eq!(shown.opacity(&params), 0.3);
        assert!(shown.should_step(&params));
    }

    #[test]
    fn animate_when_hidden_keeps_stepping() {
        let mut params = FieldParams::default();
        params.animate_when_hidden = true;
        let hidden = Visibility { focused: false, minimized: true };
        assert!(hidden.should_step(&params));
        assert_eq!(hidden.opacity(&params), 0.0);

        params.pause = true;
        assert!(!hidden.should_step(&params));
    }
}
