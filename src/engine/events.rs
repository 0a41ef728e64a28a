/// Notifications emitted for an instance's selector at each control transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum DrawEvent {
    /// `draw()` was called.
    Draw,
    /// Scheduling stopped and running shapes froze.
    Pause,
    /// Scheduling stopped; shape state kept.
    Cancel,
    /// Direction flipped.
    Revert {
        /// Whether the instance now runs in reverse.
        reversed: bool,
    },
    /// Restarted from scratch.
    Redraw,
    /// Scrubbed to a fixed progress.
    Progress {
        /// Progress applied to every shape.
        value: f64,
    },
    /// Returned to idle.
    Reset,
    /// Every shape finished.
    Complete,
    /// Removed from the registry.
    Clear,
}

impl DrawEvent {
    /// Notification name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Pause => "pause",
            Self::Cancel => "cancel",
            Self::Revert { .. } => "revert",
            Self::Redraw => "redraw",
            Self::Progress { .. } => "progress",
            Self::Reset => "reset",
            Self::Complete => "complete",
            Self::Clear => "clear",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/events.rs"]
mod tests;
