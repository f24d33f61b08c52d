use std::io::Read;

use tracing::{debug, info, trace, warn};

use crate::{
    config::SimConfig,
    error::{ConfigError, SimError, UnknownOperation},
    record::{Operation, Record, RecordReader, MAX_VALUE},
    replacer::{build_replacer, RecencyWindow, Replacer},
    stats::Stats,
    storage::{FrameId, FrameTable, PageId, PageIndex},
};

/// What a single record did to the frame table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Hit {
        frame: FrameId,
    },
    Fault {
        frame: FrameId,
        evicted: Option<PageId>,
        // The evicted frame was dirty and had to be written back
        flushed: bool,
    },
    Rejected {
        tag: u8,
    },
}

impl Access {
    pub fn frame(&self) -> Option<FrameId> {
        match self {
            Access::Hit { frame } | Access::Fault { frame, .. } => Some(*frame),
            Access::Rejected { .. } => None,
        }
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }
}

// Single threaded trace replay. Owns all simulation state for one run.
pub struct Engine {
    config: SimConfig,

    frames: FrameTable,
    index: PageIndex,

    // Picks the frame for a faulting page
    replacer: Box<dyn Replacer>,
    window: RecencyWindow,

    stats: Stats,
    // Reference sequence number, stamped into last_use
    sequence: u64,
}

impl Engine {
    pub fn new(config: SimConfig) -> Result<Engine, ConfigError> {
        config.validate()?;

        Ok(Engine {
            frames: FrameTable::new(config.capacity),
            index: PageIndex::new(config.index),
            replacer: build_replacer(&config),
            window: RecencyWindow::new(),
            stats: Stats::default(),
            sequence: 0,
            config,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    pub fn strategy(&self) -> &'static str {
        self.replacer.name()
    }

    /// Frame holding an already normalized page, if resident.
    pub fn lookup(&self, page: PageId) -> Option<FrameId> {
        self.index.lookup(page, &self.frames)
    }

    pub fn access(&mut self, record: Record) -> Result<Access, SimError> {
        let sequence = self.sequence;
        self.sequence += 1;
        self.stats.references += 1;

        let op = match record.operation() {
            Ok(op) => op,
            Err(UnknownOperation { tag }) => {
                // Bad records are reported and skipped, the stream goes on
                warn!(tag, sequence, "illegal opcode, record skipped");
                self.stats.rejected += 1;
                return Ok(Access::Rejected { tag });
            }
        };

        let page = self.config.geometry.normalize(record.page);
        let access = self.reference(page, sequence, op.is_write())?;

        let value = (record.value & MAX_VALUE) as i64;
        match op {
            Operation::Increment => self.stats.accumulator += value,
            Operation::Decrement => self.stats.accumulator -= value,
            Operation::Write => self.stats.writes += 1,
            Operation::Read => {}
        }

        trace!(sequence, page, ?op, ?access, "reference");
        Ok(access)
    }

    fn reference(&mut self, page: PageId, sequence: u64, is_write: bool) -> Result<Access, SimError> {
        self.window.push(page);

        let access = match self.index.lookup(page, &self.frames) {
            Some(frame) => Access::Hit { frame },
            None => self.fault(page, sequence)?,
        };

        if let Some(frame_id) = access.frame() {
            self.frames.touch(frame_id, sequence, is_write);
        }

        Ok(access)
    }

    fn fault(&mut self, page: PageId, sequence: u64) -> Result<Access, SimError> {
        let hot = self.hot_frames();
        let capacity = self.frames.len();

        let frame_id = self
            .replacer
            .victim(&mut self.frames, &hot)
            .ok_or_else(|| SimError::NoVictim {
                strategy: self.replacer.name(),
            })?;

        if self.frames.len() > capacity {
            self.stats.growths += 1;
            debug!(from = capacity, to = self.frames.len(), "frame table grown");
        }

        let (evicted, flushed) = match self.frames.get(frame_id) {
            Some(frame) => (frame.resident, frame.is_occupied() && frame.dirty),
            None => {
                return Err(SimError::NoVictim {
                    strategy: self.replacer.name(),
                })
            }
        };

        // Nothing is evicted or counted when the index bucket is full
        self.index.install(page, frame_id, &self.frames)?;
        self.frames.install(frame_id, page, sequence);

        self.stats.faults += 1;
        if flushed {
            self.stats.flushes += 1;
        }
        if let Some(old_page) = evicted {
            debug!(frame = frame_id, evicted = old_page, page, dirty = flushed, "evicting page");
        }

        Ok(Access::Fault {
            frame: frame_id,
            evicted,
            flushed,
        })
    }

    // Frames holding pages of the recency window
    fn hot_frames(&self) -> Vec<FrameId> {
        self.window
            .pages()
            .into_iter()
            .filter_map(|page| self.index.lookup(page, &self.frames))
            .collect()
    }

    pub fn replay(&mut self, records: impl IntoIterator<Item = Record>) -> Result<&Stats, SimError> {
        for record in records {
            self.access(record)?;
        }
        Ok(&self.stats)
    }

    pub fn run<R: Read>(&mut self, records: RecordReader<R>) -> Result<&Stats, SimError> {
        info!(
            strategy = self.strategy(),
            page_size = self.config.page_size,
            frames = self.capacity(),
            format = records.format().as_str(),
            "starting replay"
        );

        for record in records {
            self.access(record?)?;
        }

        info!(
            references = self.stats.references,
            faults = self.stats.faults,
            flushes = self.stats.flushes,
            "replay finished"
        );
        Ok(&self.stats)
    }
}
