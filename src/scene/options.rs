use super::error::Error;
use log::warn;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const DEFAULT_OPTIONS_TOML: &str = include_str!("../../resources/default.render.toml");

static DEFAULT_OPTIONS: OnceLock<RenderOptions> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model type '{0}' (expected BAS, SPF or CST)")]
pub struct ParseModelStyleError(String);

/// Molecular rendering style. Emitted into the scene as a `#declare <FLAG> = true;`
/// switch that the include file branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelStyle {
    #[default]
    BallAndStick,
    SpaceFill,
    CappedSticks,
}

impl ModelStyle {
    /// The scene-language flag name: `BAS`, `SPF` or `CST`.
    pub fn flag(&self) -> &'static str {
        match self {
            ModelStyle::BallAndStick => "BAS",
            ModelStyle::SpaceFill => "SPF",
            ModelStyle::CappedSticks => "CST",
        }
    }

    /// Parses a user-supplied style, substituting ball-and-stick (with a logged
    /// warning) for anything unrecognized.
    pub fn lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|e: ParseModelStyleError| {
            warn!("{e}; using the default instead (\"BAS\", ball-and-stick)");
            ModelStyle::default()
        })
    }
}

impl fmt::Display for ModelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

impl FromStr for ModelStyle {
    type Err = ParseModelStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BAS" => Ok(ModelStyle::BallAndStick),
            "SPF" => Ok(ModelStyle::SpaceFill),
            "CST" => Ok(ModelStyle::CappedSticks),
            _ => Err(ParseModelStyleError(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ModelStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ModelStyle::lenient(&raw))
    }
}

/// Display switches for a generated scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub model: ModelStyle,
    /// Transparent textures: atoms are merged and bonds are cut by atoms.
    pub transparent: bool,
    /// Procedural sky with clouds instead of a flat background.
    pub sky: bool,
    /// Black and white checkerboard floor.
    pub checkerboard: bool,
    /// Mirror sphere beside the molecule.
    pub mirror: bool,
}

impl RenderOptions {
    pub fn new(model: ModelStyle) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    /// Parses options from TOML. Missing keys take their defaults.
    pub fn from_toml(toml: &str) -> Result<Self, Error> {
        Ok(toml::from_str(toml)?)
    }

    pub fn transparent(mut self, on: bool) -> Self {
        self.transparent = on;
        self
    }

    pub fn sky(mut self, on: bool) -> Self {
        self.sky = on;
        self
    }

    pub fn checkerboard(mut self, on: bool) -> Self {
        self.checkerboard = on;
        self
    }

    pub fn mirror(mut self, on: bool) -> Self {
        self.mirror = on;
        self
    }
}

pub fn load_options(custom_toml: Option<&str>) -> Result<RenderOptions, Error> {
    match custom_toml {
        Some(toml) => RenderOptions::from_toml(toml),
        None => Ok(default_options().clone()),
    }
}

pub fn default_options() -> &'static RenderOptions {
    DEFAULT_OPTIONS.get_or_init(|| {
        toml::from_str(DEFAULT_OPTIONS_TOML)
            .expect("Failed to parse embedded default render options. This is a library bug.")
    })
}
