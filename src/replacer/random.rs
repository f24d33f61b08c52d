use rand::{rngs::StdRng, Rng};

use super::Replacer;
use crate::storage::{FrameId, FrameTable};

/// Uniform random replacement that redraws while the pick is a hot frame.
///
/// Needs more frames than there can be hot ones; `SimConfig::build` rejects
/// tables of `RECENCY_WINDOW` frames or fewer.
pub struct RandomReplacer {
    rng: StdRng,
}

impl RandomReplacer {
    pub fn new(rng: StdRng) -> Self {
        RandomReplacer { rng }
    }
}

impl Replacer for RandomReplacer {
    fn name(&self) -> &'static str {
        "mrand"
    }

    fn victim(&mut self, frames: &mut FrameTable, hot: &[FrameId]) -> Option<FrameId> {
        let capacity = frames.len();
        let excluded = hot.iter().filter(|&&f| f < capacity).count();
        if excluded >= capacity {
            return None;
        }

        loop {
            let pos = self.rng.gen_range(0..capacity);
            if !hot.contains(&pos) {
                return Some(pos);
            }
        }
    }
}
