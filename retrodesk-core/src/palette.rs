//! Header icon colours
//!
//! Nav icons are recoloured through their SVG stroke and theme buttons through
//! their fill. High-contrast leaves colouring to the stylesheet.
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub default: String,
    pub hover: String,
    pub active: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palettes {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            light: Palette {
                default: "#7B5B95".to_string(),
                hover: "#4A3B6B".to_string(),
                active: "#CCFF00".to_string(),
            },
            dark: Palette {
                default: "#9B7BB5".to_string(),
                hover: "#D4B8E8".to_string(),
                active: "#CCFF00".to_string(),
            },
        }
    }
}

impl Palettes {
    #[must_use]
    pub const fn for_theme(&self, theme: Theme) -> Option<&Palette> {
        match theme {
            Theme::Light => Some(&self.light),
            Theme::Dark => Some(&self.dark),
            Theme::HighContrast => None,
        }
    }
}

/// Interaction state of one header icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IconVisual {
    pub active: bool,
    pub hovered: bool,
    /// The pointer is somewhere over the header group.
    pub group_hovered: bool,
    pub disabled: bool,
}

/// Which SVG property carries the colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Stroke,
    Fill,
}

impl Paint {
    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Self::Stroke => "stroke",
            Self::Fill => "fill",
        }
    }
}

impl Palette {
    /// Colour for an icon, or `None` when it should keep its stylesheet colour.
    #[must_use]
    pub fn icon_color(&self, visual: IconVisual) -> Option<&str> {
        if visual.disabled {
            return None;
        }
        let color = if visual.active || visual.hovered {
            &self.active
        } else if visual.group_hovered {
            &self.hover
        } else {
            &self.default
        };
        Some(color.as_str())
    }

    /// Inline `style` value for an icon's SVG.
    #[must_use]
    pub fn icon_style(&self, paint: Paint, visual: IconVisual) -> Option<String> {
        self.icon_color(visual)
            .map(|color| format!("{}: {color}", paint.property()))
    }
}
