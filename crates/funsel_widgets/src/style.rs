//! Selector colors

use funsel_core::Color;

/// Selector color configuration
///
/// Immutable; the builder methods return an updated copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectorStyle {
    /// Rounded panel behind the control
    pub background: Color,
    /// Default text color, also applied to both labels by [`with_foreground`](Self::with_foreground)
    pub foreground: Color,
    /// Fill of the highlighted rectangle
    pub selected: Color,
    /// Fill of the dimmed rectangle
    pub deselected: Color,
    pub upper_label: Color,
    pub lower_label: Color,
}

impl SelectorStyle {
    pub const DEFAULT_BACKGROUND: u32 = 0x0d1117;
    pub const DEFAULT_FOREGROUND: u32 = 0xffffff;
    pub const DEFAULT_SELECTED: u32 = 0x39d353;
    pub const DEFAULT_DESELECTED: u32 = 0x0e4429;

    /// Set the background color
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the foreground color and both label colors
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self.upper_label = color;
        self.lower_label = color;
        self
    }

    /// Set the highlighted rectangle color
    pub fn selected(mut self, color: Color) -> Self {
        self.selected = color;
        self
    }

    /// Set the dimmed rectangle color
    pub fn deselected(mut self, color: Color) -> Self {
        self.deselected = color;
        self
    }

    pub fn upper_label(mut self, color: Color) -> Self {
        self.upper_label = color;
        self
    }

    pub fn lower_label(mut self, color: Color) -> Self {
        self.lower_label = color;
        self
    }
}

impl Default for SelectorStyle {
    fn default() -> Self {
        let foreground = Color::from_hex(Self::DEFAULT_FOREGROUND);
        Self {
            background: Color::from_hex(Self::DEFAULT_BACKGROUND),
            foreground,
            selected: Color::from_hex(Self::DEFAULT_SELECTED),
            deselected: Color::from_hex(Self::DEFAULT_DESELECTED),
            upper_label: foreground,
            lower_label: foreground,
        }
    }
}
