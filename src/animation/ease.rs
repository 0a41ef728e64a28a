use std::fmt;
use std::rc::Rc;

/// Built-in easing presets mapping normalized time to normalized progress.
///
/// Every preset maps `0 -> 0` and `1 -> 1` exactly. Inputs outside `[0, 1]` are not clamped.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Ease {
    /// No easing, no acceleration.
    #[serde(rename = "linear")]
    Linear,
    /// Quadratic ease-in.
    #[serde(rename = "easeInQuad")]
    InQuad,
    /// Quadratic ease-out.
    #[serde(rename = "easeOutQuad")]
    OutQuad,
    /// Quadratic ease-in/out.
    #[serde(rename = "easeInOutQuad")]
    InOutQuad,
    /// Cubic ease-in.
    #[serde(rename = "easeInCubic")]
    InCubic,
    /// Cubic ease-out.
    #[serde(rename = "easeOutCubic")]
    OutCubic,
    /// Cubic ease-in/out.
    #[default]
    #[serde(rename = "easeInOutCubic")]
    InOutCubic,
    /// Quartic ease-in.
    #[serde(rename = "easeInQuart")]
    InQuart,
    /// Quartic ease-out.
    #[serde(rename = "easeOutQuart")]
    OutQuart,
    /// Quartic ease-in/out.
    #[serde(rename = "easeInOutQuart")]
    InOutQuart,
    /// Quintic ease-in.
    #[serde(rename = "easeInQuint")]
    InQuint,
    /// Quintic ease-out.
    #[serde(rename = "easeOutQuint")]
    OutQuint,
    /// Quintic ease-in/out.
    #[serde(rename = "easeInOutQuint")]
    InOutQuint,
}

impl Ease {
    /// Every preset, in declaration order.
    pub const ALL: [Ease; 13] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
    ];

    /// Apply this easing function to normalized time `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => (t - 1.0).powi(3) + 1.0,
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0).powi(2) + 1.0
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (t - 1.0).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - 8.0 * (t - 1.0).powi(4)
                }
            }
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 + (t - 1.0).powi(5),
            Self::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 + 16.0 * (t - 1.0).powi(5)
                }
            }
        }
    }

    /// Stable preset name (`"linear"`, `"easeInQuad"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "easeInQuad",
            Self::OutQuad => "easeOutQuad",
            Self::InOutQuad => "easeInOutQuad",
            Self::InCubic => "easeInCubic",
            Self::OutCubic => "easeOutCubic",
            Self::InOutCubic => "easeInOutCubic",
            Self::InQuart => "easeInQuart",
            Self::OutQuart => "easeOutQuart",
            Self::InOutQuart => "easeInOutQuart",
            Self::InQuint => "easeInQuint",
            Self::OutQuint => "easeOutQuint",
            Self::InOutQuint => "easeInOutQuint",
        }
    }

    /// Look a preset up by its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }
}

/// An easing curve: either a named preset or a caller-supplied function.
#[derive(Clone)]
pub enum Easing {
    /// One of the built-in presets.
    Preset(Ease),
    /// Arbitrary mapping from normalized time to progress.
    Custom(Rc<dyn Fn(f64) -> f64>),
}

impl Easing {
    /// Resolve a preset by name, falling back to [`Ease::InOutCubic`] for unknown names.
    pub fn named(name: &str) -> Self {
        match Ease::from_name(name) {
            Some(ease) => Self::Preset(ease),
            None => {
                tracing::debug!(name, "unknown easing, using easeInOutCubic");
                Self::Preset(Ease::default())
            }
        }
    }

    /// Wrap a custom easing function.
    pub fn custom(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::Custom(Rc::new(f))
    }

    /// Evaluate the curve at normalized time `t`.
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Preset(ease) => ease.apply(t),
            Self::Custom(f) => f(t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::Preset(Ease::default())
    }
}

impl From<Ease> for Easing {
    fn from(ease: Ease) -> Self {
        Self::Preset(ease)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(ease) => f.debug_tuple("Preset").field(ease).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Easing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::named(&name))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
