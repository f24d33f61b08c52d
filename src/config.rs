use std::str::FromStr;

use crate::error::ConfigError;
use crate::record::RecordFormat;

pub const MIN_PAGE_SIZE: usize = 256;
pub const MAX_PAGE_SIZE: usize = 8192;

// Starting frame count of the "none" strategy, regardless of memsize
pub const UNBOUNDED_INITIAL_FRAMES: usize = 20;
pub const UNBOUNDED_GROWTH: usize = 1000;

// Number of distinct recent pages the random policy stays away from
pub const RECENCY_WINDOW: usize = 3;

pub const DEFAULT_INDEX_BUCKETS: usize = 1000;
pub const DEFAULT_INDEX_DEPTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    None,
    MRand,
    Lru,
    Sec,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::None => "none",
            Strategy::MRand => "mrand",
            Strategy::Lru => "lru",
            Strategy::Sec => "sec",
        }
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Strategy::None),
            "mrand" => Ok(Strategy::MRand),
            "lru" => Ok(Strategy::Lru),
            "sec" | "clock" => Ok(Strategy::Sec),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sizing of the page -> frame hash index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    pub buckets: usize,
    pub depth: usize,
}

impl IndexOptions {
    /// Total entry count, `None` if it does not fit in memory addressing.
    pub fn slots(&self) -> Option<usize> {
        self.buckets.checked_mul(self.depth)
    }
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            buckets: DEFAULT_INDEX_BUCKETS,
            depth: DEFAULT_INDEX_DEPTH,
        }
    }
}

/// How raw page fields of a record map onto page numbers for a given page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    field_mask: u32,
    offset_bits: u32,
}

impl PageGeometry {
    pub fn new(page_size: usize, format: RecordFormat) -> Self {
        let field_bits = format.page_bits();
        // The field starts this many address bits above byte granularity
        let granularity = 32 - field_bits;

        PageGeometry {
            field_mask: (1u32 << field_bits) - 1,
            offset_bits: page_size.trailing_zeros().saturating_sub(granularity),
        }
    }

    /// Drops bits outside the field and the in-page offset.
    pub fn normalize(&self, raw_page: u32) -> u32 {
        (raw_page & self.field_mask) >> self.offset_bits
    }
}

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub page_size: usize,
    pub mem_size: usize,
    pub strategy: Strategy,
    pub format: RecordFormat,
    pub seed: Option<u64>,
    pub index: IndexOptions,

    // Derived
    pub capacity: usize,
    pub geometry: PageGeometry,
}

impl SimConfig {
    pub fn build(
        page_size: usize,
        mem_size: usize,
        strategy: Strategy,
        format: RecordFormat,
        seed: Option<u64>,
        index: IndexOptions,
    ) -> Result<SimConfig, ConfigError> {
        let capacity = match strategy {
            Strategy::None => UNBOUNDED_INITIAL_FRAMES,
            _ => mem_size.div_ceil(page_size.max(1)),
        };

        let config = SimConfig {
            page_size,
            mem_size,
            strategy,
            format,
            seed,
            index,
            capacity,
            geometry: PageGeometry::new(page_size, format),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::PageSizeOutOfRange(self.page_size));
        }
        if !self.page_size.is_power_of_two() {
            return Err(ConfigError::PageSizeNotPowerOfTwo(self.page_size));
        }
        if self.index.buckets == 0 || self.index.depth == 0 || self.index.slots().is_none() {
            return Err(ConfigError::InvalidIndex {
                buckets: self.index.buckets,
                depth: self.index.depth,
            });
        }
        if self.capacity == 0 {
            return Err(ConfigError::NoFrames(self.strategy));
        }

        // The random policy rejects every frame in the window and would never
        // finish a draw if the window can cover the whole table.
        if self.strategy == Strategy::MRand && self.capacity <= RECENCY_WINDOW {
            return Err(ConfigError::WindowCoversCapacity {
                capacity: self.capacity,
                window: RECENCY_WINDOW,
            });
        }

        Ok(())
    }

    /// Shorthand for the default record format and index sizing.
    pub fn with_defaults(
        page_size: usize,
        mem_size: usize,
        strategy: Strategy,
    ) -> Result<SimConfig, ConfigError> {
        Self::build(
            page_size,
            mem_size,
            strategy,
            RecordFormat::default(),
            None,
            IndexOptions::default(),
        )
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Simulated memory after rounding up to whole pages.
    pub fn effective_mem_size(&self) -> usize {
        self.capacity * self.page_size
    }
}
