/*
 * Neural Field - Module Definitions
 *
 * This file defines the module structure for the animated portfolio
 * background: the particle field and its renderer, plus the page state
 * (theme, navigation, scroll reveal, typing headline, contact form) that the
 * application drives around it.
 */

// Re-export key components for easier access
pub use app::Model;
pub use config::{AppConfig, Cli};
pub use error::{Error, Result};
pub use field::{edge_opacity, Edge, ParticleField, EDGE_DAMPENING};
pub use params::FieldParams;
pub use point::Point;
pub use renderer::{render_field, FieldStyle, FrameStats, Surface};
pub use theme::{Theme, ThemeManager};

// Define modules
pub mod app;
pub mod config;
pub mod contact;
pub mod debug;
pub mod error;
pub mod field;
pub mod input;
pub mod navigation;
pub mod page;
pub mod params;
pub mod point;
pub mod renderer;
pub mod reveal;
pub mod skills;
pub mod theme;
pub mod typing;
pub mod ui;
