pub mod codec;

use std::str::FromStr;

use crate::error::{ConfigError, UnknownOperation};

pub use codec::RecordReader;

pub const OP_INC: u8 = 0;
pub const OP_DEC: u8 = 1;
pub const OP_WR: u8 = 2;
pub const OP_RD: u8 = 3;

// Largest value the 6 bit field can carry
pub const MAX_VALUE: u8 = 0x3f;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Increment,
    Decrement,
    Write,
    Read,
}

impl Operation {
    pub fn tag(&self) -> u8 {
        match self {
            Operation::Increment => OP_INC,
            Operation::Decrement => OP_DEC,
            Operation::Write => OP_WR,
            Operation::Read => OP_RD,
        }
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Operation::Write)
    }
}

impl TryFrom<u8> for Operation {
    type Error = UnknownOperation;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            OP_INC => Ok(Operation::Increment),
            OP_DEC => Ok(Operation::Decrement),
            OP_WR => Ok(Operation::Write),
            OP_RD => Ok(Operation::Read),
            _ => Err(UnknownOperation { tag }),
        }
    }
}

/// One decoded access. Fields are kept raw: the tag is validated and the
/// page normalized by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub tag: u8,
    pub value: u8,
    pub page: u32,
}

impl Record {
    pub fn new(op: Operation, value: u8, page: u32) -> Self {
        Record {
            tag: op.tag(),
            value: value & MAX_VALUE,
            page,
        }
    }

    pub fn read(page: u32) -> Self {
        Self::new(Operation::Read, 0, page)
    }

    pub fn write(page: u32) -> Self {
        Self::new(Operation::Write, 0, page)
    }

    pub fn operation(&self) -> Result<Operation, UnknownOperation> {
        Operation::try_from(self.tag)
    }
}

/// Packed record layouts found in trace files.
///
/// `Narrow` is a 4 byte record with a 24 bit page field, `Wide` an 8 byte
/// record whose low word has two unused bits and a 22 bit page field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFormat {
    #[default]
    Narrow,
    Wide,
}

impl RecordFormat {
    pub fn record_len(&self) -> usize {
        match self {
            RecordFormat::Narrow => 4,
            RecordFormat::Wide => 8,
        }
    }

    pub fn page_bits(&self) -> u32 {
        match self {
            RecordFormat::Narrow => 24,
            RecordFormat::Wide => 22,
        }
    }

    fn page_shift(&self) -> u32 {
        32 - self.page_bits()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordFormat::Narrow => "narrow",
            RecordFormat::Wide => "wide",
        }
    }
}

impl FromStr for RecordFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "narrow" => Ok(RecordFormat::Narrow),
            "wide" => Ok(RecordFormat::Wide),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}
