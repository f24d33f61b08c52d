use super::Replacer;
use crate::config::UNBOUNDED_GROWTH;
use crate::storage::{FrameId, FrameTable};

/// Baseline that never evicts: every fault takes the next unused frame and
/// the table grows in batches when it runs out. Counts compulsory faults only.
#[derive(Debug, Default)]
pub struct Unbounded {
    next_free: FrameId,
}

impl Unbounded {
    pub fn new() -> Self {
        Unbounded { next_free: 0 }
    }
}

impl Replacer for Unbounded {
    fn name(&self) -> &'static str {
        "none"
    }

    fn victim(&mut self, frames: &mut FrameTable, _hot: &[FrameId]) -> Option<FrameId> {
        if self.next_free >= frames.len() {
            frames.grow(UNBOUNDED_GROWTH);
        }

        let frame_id = self.next_free;
        self.next_free += 1;
        Some(frame_id)
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn hands_out_frames_in_order_and_grows() {
        let mut frames = FrameTable::new(2);
        let mut replacer = Unbounded::new();

        assert_eq!(replacer.victim(&mut frames, &[]), Some(0));
        assert_eq!(replacer.victim(&mut frames, &[]), Some(1));
        assert_eq!(frames.len(), 2);

        assert_eq!(replacer.victim(&mut frames, &[]), Some(2));
        assert_eq!(frames.len(), 2 + UNBOUNDED_GROWTH);
    }
}
