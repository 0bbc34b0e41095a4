use crate::error::ConfigError;

pub const BASE_SPEED_ATTR: &str = "data-base-speed";
pub const CONTINUOUS_ATTR: &str = "data-continuous";
pub const CLAMP_FACTOR_ATTR: &str = "data-clamp-factor";

/// Immutable per-strip motion settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Signed baseline speed in notional units per second.
    pub base_speed: f64,
    /// Animate all the time, or only while the page is scrolling.
    pub continuous: bool,
    /// Clamp the velocity factor to its output window instead of extrapolating.
    pub clamp_factor: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.0,
            continuous: true,
            clamp_factor: false,
        }
    }
}

impl MotionConfig {
    pub fn new(base_speed: f64) -> Self {
        Self {
            base_speed,
            ..Self::default()
        }
    }

    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    pub fn with_clamp_factor(mut self, clamp_factor: bool) -> Self {
        self.clamp_factor = clamp_factor;
        self
    }

    /// Build a config from raw attribute values as found in markup.
    ///
    /// `base_speed` is required; absent booleans fall back to the defaults.
    pub fn from_attrs(
        base_speed: Option<&str>,
        continuous: Option<&str>,
        clamp_factor: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let raw = base_speed
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing(BASE_SPEED_ATTR))?;
        let speed: f64 = raw.parse().map_err(|_| ConfigError::NotANumber {
            name: BASE_SPEED_ATTR,
            value: raw.to_string(),
        })?;
        if !speed.is_finite() {
            return Err(ConfigError::NonFinite {
                name: BASE_SPEED_ATTR,
                value: speed,
            });
        }
        let defaults = Self::default();
        Ok(Self {
            base_speed: speed,
            continuous: parse_flag(CONTINUOUS_ATTR, continuous, defaults.continuous)?,
            clamp_factor: parse_flag(CLAMP_FACTOR_ATTR, clamp_factor, defaults.clamp_factor)?,
        })
    }
}

fn parse_flag(name: &'static str, value: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        // a bare boolean attribute (`<div data-continuous>`) reads as ""
        "" | "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::NotABool {
            name,
            value: raw.to_string(),
        }),
    }
}
