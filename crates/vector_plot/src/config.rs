//! Configuration system
//!
//! Plot styling lives in a single serializable struct whose defaults match
//! the library's built-in look. Styles can be loaded from and saved to TOML
//! or RON files, dispatched on the file extension.

use serde::{Deserialize, Serialize};

use crate::style::Color;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Styling parameters shared by every plot operation on a surface.
///
/// The defaults reproduce the library's reference look: generous 1.2x axis
/// headroom around plotted vectors, small arrow heads in data units for 2D,
/// a screen-space head scale for 3D, faint dashed projection guides, and
/// translucent steel-blue polyhedron faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    /// Axis limits are pushed to this multiple of the extreme coordinate
    pub limit_expansion: f32,

    /// 2D arrow head width, in data units
    pub head_width: f32,

    /// 2D arrow head length, in data units (the head is part of the arrow
    /// length, not appended to it)
    pub head_length: f32,

    /// 3D arrow head size, in output pixels
    pub head_scale_3d: f32,

    /// Opacity of the dashed coordinate projection guides
    pub guide_alpha: f32,

    /// Opacity of the faint reference lines through the origin
    pub origin_line_alpha: f32,

    /// Font size for 3D axis labels, in output pixels
    pub label_font_size: f32,

    /// Fill color for 2D polygon patches
    pub polygon_color: Color,

    /// Fill color for polyhedron faces
    pub face_color: Color,

    /// Opacity of polyhedron faces
    pub face_alpha: f32,

    /// Edge stroke width for polyhedron faces
    pub face_edge_width: f32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            limit_expansion: 1.2,
            head_width: 0.05,
            head_length: 0.1,
            head_scale_3d: 20.0,
            guide_alpha: 0.2,
            origin_line_alpha: 0.05,
            label_font_size: 15.0,
            polygon_color: Color::from_rgb8(31, 119, 180),
            face_color: Color::STEEL_BLUE,
            face_alpha: 0.1,
            face_edge_width: 0.5,
        }
    }
}

impl Config for PlotStyle {}
