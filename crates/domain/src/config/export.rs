use super::errors::ConfigError;
use crate::dot::LayerPalette;
use crate::graph::Layer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Dot,
    Json,
    Svg,
    Png,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Dot => "dot",
            ExportFormat::Json => "json",
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dot" | "gv" => Ok(ExportFormat::Dot),
            "json" => Ok(ExportFormat::Json),
            "svg" => Ok(ExportFormat::Svg),
            "png" => Ok(ExportFormat::Png),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_formats")]
    pub formats: Vec<ExportFormat>,

    #[serde(default = "default_color")]
    pub default_color: String,

    /// Layer number (as a TOML key) to fill color.
    #[serde(default = "default_layer_colors")]
    pub layer_colors: BTreeMap<String, String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            output_dir: default_output_dir(),
            formats: default_formats(),
            default_color: default_color(),
            layer_colors: default_layer_colors(),
        }
    }
}

impl ExportConfig {
    pub fn palette(&self) -> Result<LayerPalette, ConfigError> {
        let mut colors = BTreeMap::new();
        for (key, color) in &self.layer_colors {
            let layer: Layer = key.trim().parse().map_err(|_| {
                ConfigError::Validation(format!("Layer color key '{}' is not a layer number", key))
            })?;
            colors.insert(layer, color.clone());
        }
        Ok(LayerPalette::from_map(colors, self.default_color.clone()))
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_formats() -> Vec<ExportFormat> {
    vec![ExportFormat::Dot]
}

fn default_color() -> String {
    LayerPalette::default().default_color().to_string()
}

fn default_layer_colors() -> BTreeMap<String, String> {
    let palette = LayerPalette::default();
    (1..=4)
        .map(|layer: Layer| (layer.to_string(), palette.color_for(layer).to_string()))
        .collect()
}
