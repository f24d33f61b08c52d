use std::io::{ErrorKind, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use bytes::BufMut;

use super::{Record, RecordFormat, MAX_VALUE};
use crate::error::RecordError;

// Low word layout shared by both formats
const VALUE_MASK: u32 = MAX_VALUE as u32;
const OP_SHIFT: u32 = 6;
const OP_MASK: u32 = 0x3;

impl RecordFormat {
    pub fn unpack(&self, word: u32) -> Record {
        Record {
            tag: ((word >> OP_SHIFT) & OP_MASK) as u8,
            value: (word & VALUE_MASK) as u8,
            page: word >> self.page_shift(),
        }
    }

    /// Inverse of [`RecordFormat::unpack`]. Bits that do not fit a field are dropped.
    pub fn pack(&self, record: &Record) -> u32 {
        let page_mask = (1u32 << self.page_bits()) - 1;

        (record.value as u32 & VALUE_MASK)
            | ((record.tag as u32 & OP_MASK) << OP_SHIFT)
            | ((record.page & page_mask) << self.page_shift())
    }

    pub fn encode(&self, record: &Record, buf: &mut impl BufMut) {
        buf.put_u32_le(self.pack(record));
        if let RecordFormat::Wide = self {
            buf.put_u32_le(0);
        }
    }

    pub fn encode_all<'a>(&self, records: impl IntoIterator<Item = &'a Record>) -> Vec<u8> {
        let mut buf = Vec::new();
        for record in records {
            self.encode(record, &mut buf);
        }
        buf
    }
}

/// Decodes fixed width records from a byte stream until it is exhausted.
pub struct RecordReader<R: Read> {
    inner: R,
    format: RecordFormat,
    done: bool,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R, format: RecordFormat) -> Self {
        RecordReader {
            inner,
            format,
            done: false,
        }
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    pub fn next_record(&mut self) -> Result<Option<Record>, RecordError> {
        let width = self.format.record_len();
        let mut buf = [0u8; 8];
        let mut filled = 0;

        while filled < width {
            match self.inner.read(&mut buf[filled..width]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        if filled == 0 {
            return Ok(None);
        }
        if filled < width {
            return Err(RecordError::Truncated {
                expected: width,
                actual: filled,
            });
        }

        // Only the low word carries fields, the wide format pads the rest
        let mut low_word = &buf[..4];
        let word = low_word.read_u32::<LittleEndian>()?;
        Ok(Some(self.format.unpack(word)))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let next = self.next_record().transpose();
        if !matches!(next, Some(Ok(_))) {
            self.done = true;
        }
        next
    }
}
