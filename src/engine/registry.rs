use slotmap::{SlotMap, new_key_type};

use crate::engine::instance::AnimationInstance;

new_key_type! {
    /// Handle to a registered animation instance.
    pub struct InstanceId;
}

/// Live animation instances of one engine.
///
/// Instances stay registered until cleared; the visibility handler walks this set to
/// force-complete whatever is still running.
#[derive(Debug, Default)]
pub struct Registry {
    live: SlotMap<InstanceId, AnimationInstance>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instance and return its handle.
    pub fn register(&mut self, instance: AnimationInstance) -> InstanceId {
        self.live.insert(instance)
    }

    /// Remove an instance, handing it back if it was registered.
    pub fn unregister(&mut self, id: InstanceId) -> Option<AnimationInstance> {
        self.live.remove(id)
    }

    /// Look up a live instance.
    pub fn get(&self, id: InstanceId) -> Option<&AnimationInstance> {
        self.live.get(id)
    }

    /// Look up a live instance mutably.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut AnimationInstance> {
        self.live.get_mut(id)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: InstanceId) -> bool {
        self.live.contains_key(id)
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no instance is registered.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Handles of every live instance.
    pub fn ids(&self) -> Vec<InstanceId> {
        self.live.keys().collect()
    }

    /// Visit every live instance.
    pub fn for_each_live(&mut self, mut f: impl FnMut(InstanceId, &mut AnimationInstance)) {
        for (id, instance) in &mut self.live {
            f(id, instance);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/registry.rs"]
mod tests;
