use crate::foundation::core::Axis;
use crate::foundation::error::{PrllxError, PrllxResult};

/// Largest decimal precision accepted for transform output.
pub const MAX_PRECISION: usize = 100;

/// Selector used by [`RuleOptions::default`].
pub const DEFAULT_ITEM_QUERY: &str = "[data-prllx-item]";

/// User-facing container options.
///
/// Deserializes from camelCase JSON; every key is optional.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ParallaxOptions {
    /// Scroll axis.
    pub axis: Axis,
    /// Decimal places used when formatting transform values.
    pub precision: usize,
    /// Build caches against the current scroll position instead of zero.
    pub is_based_on_current: bool,
    /// Marker class toggled on elements outside their visibility window.
    pub hidden_class: String,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            precision: 4,
            is_based_on_current: true,
            hidden_class: "u-hidden".to_owned(),
        }
    }
}

impl ParallaxOptions {
    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PrllxResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PrllxError::serde(format!("parse parallax options JSON: {e}")))
    }

    /// Parse options from a JSON string.
    pub fn from_json_str(s: &str) -> PrllxResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Check value ranges.
    pub fn validate(&self) -> PrllxResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(PrllxError::validation(format!(
                "precision must be <= {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        if self.hidden_class.is_empty() {
            return Err(PrllxError::validation("hiddenClass must be non-empty"));
        }
        if self.hidden_class.chars().any(char::is_whitespace) {
            return Err(PrllxError::validation(format!(
                "hiddenClass must be a single class name, got '{}'",
                self.hidden_class
            )));
        }
        Ok(())
    }
}

/// Resolved configuration shared read-only by a container and its rules.
///
/// A value is immutable once handed out; viewport changes produce a new value
/// via [`ParallaxConfig::with_viewport_size`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParallaxConfig {
    axis: Axis,
    precision: usize,
    is_based_on_current: bool,
    hidden_class: String,
    viewport_size: f64,
}

impl ParallaxConfig {
    /// Validate `opts` and resolve them with a zero viewport size.
    pub fn new(opts: ParallaxOptions) -> PrllxResult<Self> {
        opts.validate()?;
        Ok(Self {
            axis: opts.axis,
            precision: opts.precision,
            is_based_on_current: opts.is_based_on_current,
            hidden_class: opts.hidden_class,
            viewport_size: 0.0,
        })
    }

    /// Copy of this config with a new viewport size along the scroll axis.
    pub fn with_viewport_size(&self, size: f64) -> Self {
        Self {
            viewport_size: size,
            ..self.clone()
        }
    }

    /// Scroll axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Decimal places for transform output.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Whether caches use the current scroll position as baseline.
    pub fn is_based_on_current(&self) -> bool {
        self.is_based_on_current
    }

    /// Hidden-state marker class.
    pub fn hidden_class(&self) -> &str {
        &self.hidden_class
    }

    /// Viewport extent along the scroll axis.
    pub fn viewport_size(&self) -> f64 {
        self.viewport_size
    }

    /// Baseline scroll position to build caches against.
    pub fn baseline(&self, current: f64) -> f64 {
        if self.is_based_on_current { current } else { 0.0 }
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        let opts = ParallaxOptions::default();
        Self {
            axis: opts.axis,
            precision: opts.precision,
            is_based_on_current: opts.is_based_on_current,
            hidden_class: opts.hidden_class,
            viewport_size: 0.0,
        }
    }
}

/// Per-rule options.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RuleOptions {
    /// Selector resolving the elements a rule tracks.
    pub query: String,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            query: DEFAULT_ITEM_QUERY.to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
