use crate::layout::LayoutOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutConfig {
    #[serde(default = "default_x_spacing")]
    pub x_spacing: f64,

    #[serde(default = "default_y_spacing")]
    pub y_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            x_spacing: default_x_spacing(),
            y_spacing: default_y_spacing(),
        }
    }
}

impl LayoutConfig {
    pub fn options(&self) -> LayoutOptions {
        LayoutOptions {
            x_spacing: self.x_spacing,
            y_spacing: self.y_spacing,
        }
    }
}

fn default_x_spacing() -> f64 {
    LayoutOptions::default().x_spacing
}

fn default_y_spacing() -> f64 {
    LayoutOptions::default().y_spacing
}
