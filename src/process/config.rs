// src/process/config.rs

//! Processing parameters passed explicitly into every call.

use crate::image::{BLACK, WHITE};

/// Default duotone split value.
pub const DEFAULT_DUOTONE_SPLIT: u8 = 127;
/// A single run at least this fraction of the box width counts as a long line.
pub const DEFAULT_LONG_LINE_RATIO: f64 = 0.8;

/// Palette and thresholds shared by the processors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessConfig {
    /// Letter (ink) value.
    pub foreground: u8,
    /// Paper value; cleared pixels are set to it.
    pub background: u8,
    /// Value the fill processor grows into holes.
    pub fill_color: u8,
    /// See [`DEFAULT_LONG_LINE_RATIO`].
    pub long_line_ratio: f64,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        ProcessConfig {
            foreground: BLACK,
            background: WHITE,
            fill_color: BLACK,
            long_line_ratio: DEFAULT_LONG_LINE_RATIO,
        }
    }
}

impl ProcessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground value. The fill color follows it.
    pub fn with_foreground(mut self, value: u8) -> Self {
        self.foreground = value;
        self.fill_color = value;
        self
    }

    pub fn with_background(mut self, value: u8) -> Self {
        self.background = value;
        self
    }

    pub fn with_fill_color(mut self, value: u8) -> Self {
        self.fill_color = value;
        self
    }

    pub fn with_long_line_ratio(mut self, ratio: f64) -> Self {
        self.long_line_ratio = ratio.clamp(0.0, 1.0);
        self
    }
}
