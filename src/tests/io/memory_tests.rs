//! Tests for in-memory IO implementations.

use std::io::Read;

use crate::{InMemorySource, InputProvider};

#[test]
fn in_memory_source_reads_data() {
    let src = InMemorySource::from_string("id", "hello");

    let mut reader = src.open().expect("open in-memory source");
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();

    assert_eq!(buf, "hello");
    assert_eq!(src.id(), "id");
}

#[test]
fn each_open_starts_from_the_beginning() {
    let src = InMemorySource::from_string("id", "abc");
    for _ in 0..2 {
        let mut buf = String::new();
        src.open().unwrap().read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "abc");
    }
}

#[test]
fn from_rows_joins_without_trailing_delimiter() {
    let src = InMemorySource::from_rows("rows", &["a,1", "b,2"], b'\n');
    let mut buf = String::new();
    src.open().unwrap().read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "a,1\nb,2");
    assert_eq!(src.len(), 7);
    assert!(!src.is_empty());
}
