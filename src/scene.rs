use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::engine::context::Engine;
use crate::engine::options::DrawOptions;
use crate::engine::registry::InstanceId;
use crate::foundation::clock::Clock;
use crate::foundation::error::{WalkwayError, WalkwayResult};
use crate::host::document::Document;

/// JSON scene file: a document plus the animations to run over it.
///
/// ```json
/// {
///   "document": { "elements": [
///     { "id": "stroke", "groups": ["#logo"], "shape": { "kind": "path", "d": "M0,0 L100,0" } }
///   ] },
///   "animations": [ { "selector": "#logo", "duration": 800, "easing": "easeOutQuad" } ]
/// }
/// ```
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Scene {
    /// Shapes available to selectors.
    pub document: Document,
    /// One entry per animation instance, created in order.
    #[serde(default)]
    pub animations: Vec<DrawOptions>,
}

impl Scene {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> WalkwayResult<Self> {
        serde_json::from_reader(r).map_err(|e| WalkwayError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON string.
    pub fn from_json_str(json: &str) -> WalkwayResult<Self> {
        serde_json::from_str(json).map_err(|e| WalkwayError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> WalkwayResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WalkwayError::configuration(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Build an engine over the document and create every configured instance.
    pub fn into_engine<C: Clock>(
        self,
        clock: C,
    ) -> WalkwayResult<(Engine<Document, C>, Vec<InstanceId>)> {
        let mut engine = Engine::with_clock(self.document, clock);
        let ids = self
            .animations
            .into_iter()
            .map(|opts| engine.create(opts))
            .collect::<WalkwayResult<Vec<_>>>()?;
        Ok((engine, ids))
    }
}

#[cfg(test)]
#[path = "../tests/unit/scene.rs"]
mod tests;
