use {
    base::Vec2,
    std::sync::atomic::{AtomicU64, Ordering},
};

const EMPTY: u64 = u64::MAX;

/// Hands the latest mouse click from the window to the game loop.
///
/// Holds at most one click; a newer click replaces an unconsumed one.
#[derive(Debug)]
pub struct ClickSlot {
    packed: AtomicU64,
}

impl ClickSlot {
    pub fn new() -> Self {
        Self {
            packed: AtomicU64::new(EMPTY),
        }
    }

    /// Record a click at window pixel `position`.
    pub fn store(&self, position: Vec2<u32>) {
        // keep clear of the empty marker
        let x = position.x.min(u32::MAX - 1) as u64;
        self.packed
            .store((x << 32) | position.y as u64, Ordering::Release);
    }

    /// The pending click, leaving the slot empty.
    pub fn take(&self) -> Option<Vec2<u32>> {
        match self.packed.swap(EMPTY, Ordering::AcqRel) {
            EMPTY => None,
            packed => Some(Vec2::new((packed >> 32) as u32, packed as u32)),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.packed.load(Ordering::Acquire) != EMPTY
    }

    pub fn clear(&self) {
        self.packed.store(EMPTY, Ordering::Release);
    }
}

impl Default for ClickSlot {
    fn default() -> Self {
        Self::new()
    }
}
