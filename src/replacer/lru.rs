use super::Replacer;
use crate::storage::{FrameId, FrameTable};

/// Least recently used, by scanning `last_use` of every frame.
///
/// An empty frame always wins over an occupied one; among occupied frames the
/// first one with the smallest `last_use` is chosen.
#[derive(Debug, Default)]
pub struct LruReplacer;

impl Replacer for LruReplacer {
    fn name(&self) -> &'static str {
        "lru"
    }

    fn victim(&mut self, frames: &mut FrameTable, _hot: &[FrameId]) -> Option<FrameId> {
        let mut oldest: Option<(FrameId, u64)> = None;

        for (frame_id, frame) in frames.iter().enumerate() {
            if !frame.is_occupied() {
                return Some(frame_id);
            }

            // Strict comparison keeps the lowest index on ties
            match oldest {
                Some((_, last_use)) if frame.last_use >= last_use => {}
                _ => oldest = Some((frame_id, frame.last_use)),
            }
        }

        oldest.map(|(frame_id, _)| frame_id)
    }
}
