use super::Replacer;
use crate::storage::{FrameId, FrameTable};

/// Second chance replacement.
///
/// On the first lap the hand simply walks over the empty table. Once it has
/// wrapped, a frame under the hand with its reference bit set gets the bit
/// cleared and is skipped; the first frame found with a clear bit is the
/// victim and the hand moves one past it.
#[derive(Debug, Default)]
pub struct ClockReplacer {
    hand: FrameId,
    wrapped: bool,
}

impl ClockReplacer {
    pub fn new() -> Self {
        ClockReplacer {
            hand: 0,
            wrapped: false,
        }
    }

    pub fn hand(&self) -> FrameId {
        self.hand
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    fn advance(&mut self, len: usize) {
        self.hand += 1;
        if self.hand >= len {
            self.hand = 0;
            self.wrapped = true;
        }
    }
}

impl Replacer for ClockReplacer {
    fn name(&self) -> &'static str {
        "sec"
    }

    fn victim(&mut self, frames: &mut FrameTable, _hot: &[FrameId]) -> Option<FrameId> {
        let len = frames.len();
        if len == 0 {
            return None;
        }

        if !self.wrapped {
            let victim = self.hand;
            self.advance(len);
            return Some(victim);
        }

        // Terminates within two laps: the first clears every bit it passes
        loop {
            let frame = frames.get_mut(self.hand)?;
            if frame.referenced {
                frame.referenced = false;
                self.advance(len);
            } else {
                let victim = self.hand;
                self.advance(len);
                return Some(victim);
            }
        }
    }
}
