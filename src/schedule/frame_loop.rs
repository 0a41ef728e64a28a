use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle to a pending frame callback.
    pub struct FrameHandle;
}

#[derive(Clone, Copy, Debug)]
struct Pending<T> {
    target: T,
    seq: u64,
}

/// Cooperative single-threaded frame loop.
///
/// Each request posts one tick message for `target`; [`FrameLoop::take_due`] hands out every tick
/// queued before the current repaint, in request order. Ticks requested while those are being
/// processed wait for the next repaint, so a continuation never recurses.
#[derive(Debug)]
pub struct FrameLoop<T: Copy> {
    pending: SlotMap<FrameHandle, Pending<T>>,
    next_seq: u64,
    frames: u64,
}

impl<T: Copy> Default for FrameLoop<T> {
    fn default() -> Self {
        Self {
            pending: SlotMap::with_key(),
            next_seq: 0,
            frames: 0,
        }
    }
}

impl<T: Copy> FrameLoop<T> {
    /// Create an empty loop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a tick for `target` before the next repaint.
    pub fn request(&mut self, target: T) -> FrameHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert(Pending { target, seq })
    }

    /// Drop a queued tick. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        self.pending.remove(handle).is_some()
    }

    /// Whether `handle` is still queued.
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains_key(handle)
    }

    /// Whether any tick is queued.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of queued ticks.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Repaints processed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start a repaint: dequeue every pending tick, oldest first.
    pub fn take_due(&mut self) -> Vec<(FrameHandle, T)> {
        self.frames += 1;
        let mut due: Vec<_> = self
            .pending
            .drain()
            .map(|(handle, p)| (p.seq, handle, p.target))
            .collect();
        due.sort_unstable_by_key(|&(seq, _, _)| seq);
        due.into_iter()
            .map(|(_, handle, target)| (handle, target))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/frame_loop.rs"]
mod tests;
