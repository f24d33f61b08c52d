use crate::config::IndexOptions;
use crate::error::IndexError;

use super::frame::{FrameId, FrameTable, PageId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IndexEntry {
    page: PageId,
    frame: FrameId,
}

/// Page -> frame lookup table.
///
/// A fixed number of buckets keyed by `page % buckets`, each holding at most
/// `depth` entries probed linearly. Entries are only ever superseded, so a
/// bucket is a run of occupied slots followed by empty ones. An entry whose
/// frame has since been handed to another page is stale and treated as absent.
pub struct PageIndex {
    slots: Vec<Option<IndexEntry>>,
    buckets: usize,
    depth: usize,
}

impl PageIndex {
    /// `options` must have passed `SimConfig::validate`.
    pub fn new(options: IndexOptions) -> Self {
        PageIndex {
            slots: vec![None; options.slots().unwrap_or(0)],
            buckets: options.buckets,
            depth: options.depth,
        }
    }

    pub fn bucket_of(&self, page: PageId) -> usize {
        page as usize % self.buckets
    }

    fn bucket(&self, bucket: usize) -> &[Option<IndexEntry>] {
        let start = bucket * self.depth;
        &self.slots[start..start + self.depth]
    }

    fn bucket_mut(&mut self, bucket: usize) -> &mut [Option<IndexEntry>] {
        let start = bucket * self.depth;
        &mut self.slots[start..start + self.depth]
    }

    pub fn lookup(&self, page: PageId, frames: &FrameTable) -> Option<FrameId> {
        for slot in self.bucket(self.bucket_of(page)) {
            let entry = (*slot)?;

            if entry.page == page && is_live(&entry, frames) {
                return Some(entry.frame);
            }
        }

        None
    }

    /// Points `page` at `frame_id`, which is about to receive it. Whatever
    /// `frame_id` holds now counts as evicted, so its entry may be reclaimed.
    /// On `BucketFull` nothing is modified.
    pub fn install(
        &mut self,
        page: PageId,
        frame_id: FrameId,
        frames: &FrameTable,
    ) -> Result<(), IndexError> {
        let bucket = self.bucket_of(page);
        let depth = self.depth;
        let slots = self.bucket_mut(bucket);

        let position = slots
            .iter()
            .position(|slot| matches!(slot, Some(e) if e.page == page))
            .or_else(|| slots.iter().position(|slot| slot.is_none()))
            // Reclaim an entry whose frame moved on to another page
            .or_else(|| {
                slots
                    .iter()
                    .position(|slot| {
                        matches!(slot, Some(e) if e.frame == frame_id || !is_live(e, frames))
                    })
            });

        match position {
            Some(i) => {
                slots[i] = Some(IndexEntry {
                    page,
                    frame: frame_id,
                });
                Ok(())
            }
            None => Err(IndexError::BucketFull {
                page,
                bucket,
                depth,
            }),
        }
    }

    pub fn live_entries(&self, frames: &FrameTable) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|e| is_live(e, frames))
            .count()
    }
}

fn is_live(entry: &IndexEntry, frames: &FrameTable) -> bool {
    frames
        .get(entry.frame)
        .map(|frame| frame.holds(entry.page))
        .unwrap_or(false)
}
