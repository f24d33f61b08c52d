pub mod clock;
pub mod lru;
pub mod random;
pub mod recency;
pub mod unbounded;

use rand::{rngs::StdRng, SeedableRng};

use crate::config::{SimConfig, Strategy};
use crate::storage::{FrameId, FrameTable};

pub use clock::ClockReplacer;
pub use lru::LruReplacer;
pub use random::RandomReplacer;
pub use recency::RecencyWindow;
pub use unbounded::Unbounded;

/// Picks the frame that receives a faulting page.
///
/// The returned frame may be empty or may still hold a page; the caller
/// accounts for a dirty eviction and installs the new page. `hot` lists the
/// frames holding recently referenced pages.
pub trait Replacer {
    fn name(&self) -> &'static str;
    fn victim(&mut self, frames: &mut FrameTable, hot: &[FrameId]) -> Option<FrameId>;
}

pub fn build_replacer(config: &SimConfig) -> Box<dyn Replacer> {
    match config.strategy {
        Strategy::None => Box::new(Unbounded::new()),
        Strategy::MRand => {
            let rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Box::new(RandomReplacer::new(rng))
        }
        Strategy::Lru => Box::new(LruReplacer),
        Strategy::Sec => Box::new(ClockReplacer::new()),
    }
}
