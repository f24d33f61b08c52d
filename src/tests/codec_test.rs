#[cfg(test)]
pub mod test {
    use bytes::BufMut;

    use crate::{
        error::{RecordError, UnknownOperation},
        record::{Operation, Record, RecordFormat, RecordReader, OP_WR},
    };

    #[test]
    fn narrow_layout() {
        // value 5, op write, page 0x123456
        let word = 5 | (2 << 6) | (0x123456 << 8);
        let record = RecordFormat::Narrow.unpack(word);

        assert_eq!(record.tag, OP_WR);
        assert_eq!(record.value, 5);
        assert_eq!(record.page, 0x123456);
        assert_eq!(record.operation().unwrap(), Operation::Write);
        assert_eq!(RecordFormat::Narrow.pack(&record), word);
    }

    #[test]
    fn wide_layout_skips_unused_bits() {
        let word = 63 | (3 << 6) | (0b11 << 8) | (0x2ABCD << 10);
        let record = RecordFormat::Wide.unpack(word);

        assert_eq!(record, Record::new(Operation::Read, 63, 0x2ABCD));
    }

    #[test]
    fn reader_decodes_stream() {
        let records = vec![
            Record::new(Operation::Increment, 7, 1),
            Record::new(Operation::Decrement, 2, 0xFF_FFFF),
            Record::write(42),
            Record::read(0),
        ];
        let bytes = RecordFormat::Narrow.encode_all(&records);
        assert_eq!(bytes.len(), 16);

        let decoded: Vec<Record> = RecordReader::new(bytes.as_slice(), RecordFormat::Narrow)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn wide_reader_ignores_high_word() {
        let mut bytes = Vec::new();
        bytes.put_u32_le(RecordFormat::Wide.pack(&Record::write(9)));
        bytes.put_u32_le(0xDEAD_BEEF);

        let mut reader = RecordReader::new(bytes.as_slice(), RecordFormat::Wide);
        assert_eq!(reader.next_record().unwrap(), Some(Record::write(9)));
        assert_eq!(reader.next_record().unwrap(), None);
    }

    #[test]
    fn truncated_tail_is_an_error() {
        let mut bytes = RecordFormat::Narrow.encode_all(&[Record::read(3)]);
        bytes.extend_from_slice(&[0xAA, 0xBB]);

        let mut reader = RecordReader::new(bytes.as_slice(), RecordFormat::Narrow);
        assert_eq!(reader.next().unwrap().unwrap(), Record::read(3));

        match reader.next() {
            Some(Err(RecordError::Truncated { expected, actual })) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 2);
            }
            other => panic!("expected truncated record, got {:?}", other),
        }
        assert!(reader.next().is_none());
    }

    #[test]
    fn empty_stream() {
        let mut reader = RecordReader::new(&[0u8; 0][..], RecordFormat::Wide);
        assert!(reader.next().is_none());
    }

    #[test]
    fn unknown_tag() {
        let record = Record {
            tag: 9,
            value: 0,
            page: 1,
        };
        assert_eq!(record.operation(), Err(UnknownOperation { tag: 9 }));
    }
}
