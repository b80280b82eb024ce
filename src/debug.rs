/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and other debug information to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Edges and nodes drawn in the last frame
 * - Whether the window is currently hidden
 */

use std::cell::Cell;
use std::time::Duration;

use crate::renderer::FrameStats;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub hidden: bool,
    pub focused: bool,
    pub updates_skipped: u64,
    // Written from the view function, which only sees the model immutably
    last_frame: Cell<FrameStats>,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            hidden: false,
            focused: true,
            updates_skipped: 0,
            last_frame: Cell::new(FrameStats::default()),
        }
    }
}

impl DebugInfo {
    pub fn record_frame(&self, stats: FrameStats) {
        self.last_frame.set(stats);
    }

    pub fn last_frame(&self) -> FrameStats {
        self.last_frame.get()
    }

    pub fn lines(&self) -> Vec<String> {
        let frame = self.last_frame();
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Nodes: {}", frame.nodes),
            format!("Edges: {}", frame.edges),
            format!("Hidden: {}", if self.hidden { "yes" } else { "no" }),
            format!("Focused: {}", if self.focused { "yes" } else { "no" }),
            format!("Skipped updates: {}", self.updates_skipped),
        ]
    }
}
