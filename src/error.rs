use thiserror::Error;

use crate::config::Strategy;
use crate::storage::PageId;

/// Rejected configuration. Raised before any record is read.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("value of pagesize needs to be between 256 and 8192 bytes, got {0}")]
    PageSizeOutOfRange(usize),

    #[error("pagesize must be a power of two, got {0}")]
    PageSizeNotPowerOfTwo(usize),

    #[error("page replacement strategy needs to be one of: none, mrand, lru, sec (got '{0}')")]
    UnknownStrategy(String),

    #[error("record format needs to be one of: narrow, wide (got '{0}')")]
    UnknownFormat(String),

    #[error("strategy '{0}' needs at least one frame, memsize is too small")]
    NoFrames(Strategy),

    /// The random policy cannot draw a frame outside its recency window.
    #[error("mrand needs more than {window} frames, got {capacity}")]
    WindowCoversCapacity { capacity: usize, window: usize },

    #[error("page index needs at least one bucket of depth one (buckets={buckets}, depth={depth})")]
    InvalidIndex { buckets: usize, depth: usize },
}

/// The page index is undersized for the workload. Not a page fault.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IndexError {
    #[error("page index bucket {bucket} is full (depth {depth}) while installing page {page}")]
    BucketFull {
        page: PageId,
        bucket: usize,
        depth: usize,
    },
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("failed to read record stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated record: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

/// A record tag outside the four known operations.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("illegal opcode, received {tag}")]
pub struct UnknownOperation {
    pub tag: u8,
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("strategy '{strategy}' produced no victim frame")]
    NoVictim { strategy: &'static str },
}
