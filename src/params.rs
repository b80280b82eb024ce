/*
 * Field Parameters Module
 *
 * This module defines the FieldParams struct that contains the adjustable
 * parameters of the particle field. These parameters can be modified through
 * the UI, a config file or the command line. It also provides methods for
 * parameter change detection.
 */

use crate::error::{Error, Result};

// Parameters for the field that can be adjusted via UI
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub node_count: usize,
    pub max_distance: f32,
    pub speed: f32,          // Full width of the symmetric velocity range
    pub min_radius: f32,
    pub radius_spread: f32,
    pub visible_opacity: f32,
    pub hidden_opacity: f32,
    pub animate_when_hidden: bool,
    pub show_debug: bool,
    pub pause: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Debug, PartialEq)]
struct ParamSnapshot {
    node_count: usize,
    max_distance: f32,
    speed: f32,
    visible_opacity: f32,
    animate_when_hidden: bool,
    show_debug: bool,
    pause: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub node_count_changed: bool,
    pub any_changed: bool,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            node_count: 50,
            max_distance: 150.0,
            speed: 0.5,
            min_radius: 1.0,
            radius_spread: 3.0,
            visible_opacity: 0.3,
            hidden_opacity: 0.0,
            animate_when_hidden: false,
            show_debug: false,
            pause: false,
            previous_values: None,
        }
    }
}

impl FieldParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            node_count: self.node_count,
            max_distance: self.max_distance,
            speed: self.speed,
            visible_opacity: self.visible_opacity,
            animate_when_hidden: self.animate_when_hidden,
            show_debug: self.show_debug,
            pause: self.pause,
        });
    }

    // Check if any parameters have changed since the last snapshot
    pub fn detect_changes(&self) -> ParamChanges {
        let mut changes = ParamChanges::default();

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            if self.node_count != prev.node_count {
                changes.node_count_changed = true;
                changes.any_changed = true;
            }

            if self.max_distance != prev.max_distance
                || self.speed != prev.speed
                || self.visible_opacity != prev.visible_opacity
                || self.animate_when_hidden != prev.animate_when_hidden
                || self.show_debug != prev.show_debug
                || self.pause != prev.pause
            {
                changes.any_changed = true;
            }
        }

        changes
    }

    // Startup values must fit the panel sliders, or the first frame of the
    // Background section would silently snap them into range
    pub fn validate(&self) -> Result<()> {
        if !Self::get_node_count_range().contains(&self.node_count) {
            return Err(Error::invalid("node_count", format!("{} is outside {:?}", self.node_count, Self::get_node_count_range())));
        }
        if !Self::get_max_distance_range().contains(&self.max_distance) {
            return Err(Error::invalid("max_distance", format!("{} is outside {:?}", self.max_distance, Self::get_max_distance_range())));
        }
        if !Self::get_speed_range().contains(&self.speed) {
            return Err(Error::invalid("speed", format!("{} is outside {:?}", self.speed, Self::get_speed_range())));
        }
        if !self.min_radius.is_finite() || self.min_radius < 0.0 || !self.radius_spread.is_finite() || self.radius_spread < 0.0 {
            return Err(Error::invalid("radius", "radius bounds must be non-negative"));
        }
        if !Self::get_opacity_range().contains(&self.visible_opacity) || !Self::get_opacity_range().contains(&self.hidden_opacity) {
            return Err(Error::invalid("opacity", "opacity must lie in 0..=1"));
        }
        Ok(())
    }

    // Get parameter ranges for UI sliders
    pub fn get_node_count_range() -> std::ops::RangeInclusive<usize> {
        0..=400
    }

    pub fn get_max_distance_range() -> std::ops::RangeInclusive<f32> {
        20.0..=400.0
    }

    pub fn get_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=4.0
    }

    pub fn get_opacity_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }
}
