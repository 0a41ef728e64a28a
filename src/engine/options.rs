use crate::animation::ease::Easing;
use crate::foundation::core::Direction;
use crate::foundation::error::{WalkwayError, WalkwayResult};
use crate::shape::state::Timing;

/// Duration used when none is configured.
pub const DEFAULT_DURATION_MS: f64 = 500.0;

/// Callback fired once when every shape of an instance has finished.
pub type CompletionCallback = Box<dyn FnMut()>;

/// Configuration for a new animation instance.
///
/// Unset fields are `None` rather than zero: a zero duration is a valid, instant animation.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct DrawOptions {
    /// Selector of the container whose shapes are animated. Mandatory.
    #[serde(default)]
    pub selector: Option<String>,
    /// Traversal time in milliseconds (default 500).
    #[serde(default)]
    pub duration: Option<f64>,
    /// Easing preset name or custom function (default `easeInOutCubic`).
    #[serde(default)]
    pub easing: Option<Easing>,
    /// Undraw instead of draw.
    #[serde(default)]
    pub reverse: bool,
}

impl DrawOptions {
    /// Options for `selector` with every other field at its default.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            ..Self::default()
        }
    }

    /// Set the traversal time in milliseconds.
    pub fn duration(mut self, ms: f64) -> Self {
        self.duration = Some(ms);
        self
    }

    /// Set the easing curve.
    pub fn easing(mut self, easing: impl Into<Easing>) -> Self {
        self.easing = Some(easing.into());
        self
    }

    /// Set the easing curve by preset name; unknown names fall back to `easeInOutCubic`.
    pub fn easing_named(self, name: &str) -> Self {
        self.easing(Easing::named(name))
    }

    /// Undraw instead of draw.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// The configured selector, or a configuration error when it is missing or empty.
    pub fn require_selector(&self) -> WalkwayResult<&str> {
        self.selector
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| WalkwayError::configuration("a selector needs to be specified"))
    }

    /// Resolve defaults into per-shape timing.
    pub fn timing(&self) -> WalkwayResult<Timing> {
        let duration_ms = self.duration.unwrap_or(DEFAULT_DURATION_MS);
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(WalkwayError::configuration(format!(
                "duration must be a finite, non-negative number of milliseconds (got {duration_ms})"
            )));
        }
        Ok(Timing {
            duration_ms,
            easing: self.easing.clone().unwrap_or_default(),
            direction: if self.reverse {
                Direction::Reverse
            } else {
                Direction::Forward
            },
        })
    }
}

impl From<&str> for DrawOptions {
    fn from(selector: &str) -> Self {
        Self::new(selector)
    }
}

impl From<String> for DrawOptions {
    fn from(selector: String) -> Self {
        Self::new(selector)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/options.rs"]
mod tests;
