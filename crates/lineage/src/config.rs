//! Configuration types for Lineage processing and rendering.
//!
//! All types implement [`serde::Deserialize`] with every field optional, so
//! a partial TOML file only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining generation and style settings.
//! - [`GenerationConfig`] - Chooses the anchor person of the generation pass.
//! - [`StyleConfig`] - Colors, font size and title of rendered output.
//!
//! # Example
//!
//! ```
//! # use lineage::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.generation().anchor().is_none());
//! assert_eq!(config.style().root_color().unwrap(), "#ff0000");
//! ```

use std::str::FromStr;

use color::{DynamicColor, Srgb};
use serde::Deserialize;

const DEFAULT_ROOT_COLOR: &str = "red";
const DEFAULT_COUPLE_COLOR: &str = "pink";
const DEFAULT_FONT_SIZE: u32 = 20;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Generation pass section.
    #[serde(default)]
    generation: GenerationConfig,

    /// Style section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(generation: GenerationConfig, style: StyleConfig) -> Self {
        Self { generation, style }
    }

    /// Returns the generation configuration.
    pub fn generation(&self) -> &GenerationConfig {
        &self.generation
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Settings of the generation pass.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationConfig {
    /// Name of the person at generation 0. The root is used when unset.
    #[serde(default)]
    anchor: Option<String>,
}

impl GenerationConfig {
    pub fn new(anchor: Option<String>) -> Self {
        Self { anchor }
    }

    /// Returns the configured anchor name, if any.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }
}

/// Visual styling of rendered output.
///
/// Colors accept any CSS color string (`"red"`, `"#ff8000"`,
/// `"rgb(0, 128, 255)"`); unset fields fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Outline color of the root person.
    #[serde(default)]
    root_color: Option<String>,

    /// Color of marriage nodes and their edges.
    #[serde(default)]
    couple_color: Option<String>,

    /// Font size of the diagram title.
    #[serde(default)]
    font_size: Option<u32>,

    /// Replaces the generated "Family tree of ..." title.
    #[serde(default)]
    title: Option<String>,
}

impl StyleConfig {
    /// Returns the root highlight color as `#rrggbb`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn root_color(&self) -> Result<String, String> {
        to_hex(self.root_color.as_deref().unwrap_or(DEFAULT_ROOT_COLOR))
    }

    /// Returns the marriage color as `#rrggbb`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn couple_color(&self) -> Result<String, String> {
        to_hex(self.couple_color.as_deref().unwrap_or(DEFAULT_COUPLE_COLOR))
    }

    pub fn font_size(&self) -> u32 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Sets the title override.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the root highlight color.
    pub fn with_root_color(mut self, color: impl Into<String>) -> Self {
        self.root_color = Some(color.into());
        self
    }
}

/// Parses a CSS color string and renders it as opaque `#rrggbb`.
fn to_hex(color_str: &str) -> Result<String, String> {
    let color = DynamicColor::from_str(color_str)
        .map_err(|err| format!("invalid color `{color_str}`: {err}"))?;
    let rgba = color.to_alpha_color::<Srgb>().to_rgba8();
    Ok(format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b))
}
