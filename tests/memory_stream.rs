use std::io::{Read, Seek, SeekFrom, Write};

use memstream::{MemoryStream, Stream};
use rand::random;

pub fn rand_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|_| random::<u8>()).collect()
}

#[test]
fn construct_then_read_all_returns_input() {
    for len in [0usize, 1, 7, 256, 4096] {
        let input = rand_bytes(len);
        let mut stream = MemoryStream::from(input.clone());

        assert_eq!(stream.position().unwrap(), 0);
        assert_eq!(stream.size(), Some(len as u64));

        stream.rewind().unwrap();
        assert_eq!(stream.get_contents(0, b"").unwrap(), input);
        assert_eq!(stream.position().unwrap(), len as u64);

        // A second extraction from the end is empty.
        assert_eq!(stream.get_contents(0, b"").unwrap(), b"");
    }
}

#[test]
fn seek_within_bounds_sets_position() {
    let input = rand_bytes(64);
    let mut stream = MemoryStream::from(input);

    for pos in 0..=64u64 {
        stream.seek(SeekFrom::Start(pos)).unwrap();
        assert_eq!(stream.position().unwrap(), pos);
        assert_eq!(stream.size(), Some(64));
    }
}

#[test]
fn seek_past_end_pads_with_zeros() {
    let input = rand_bytes(16);
    let mut stream = MemoryStream::from(input.clone());

    stream.seek(SeekFrom::Start(40)).unwrap();
    assert_eq!(stream.size(), Some(40));
    assert_eq!(stream.position().unwrap(), 40);

    let mut padded = input;
    padded.resize(40, 0u8);
    assert_eq!(stream.as_bytes().unwrap(), padded);
}

#[test]
fn negative_seek_always_fails() {
    let mut stream = MemoryStream::from("sample");

    // From the start, from the middle and from past the end.
    assert!(stream.seek(SeekFrom::Current(-1)).is_err());
    stream.seek(SeekFrom::Start(3)).unwrap();
    assert!(stream.seek(SeekFrom::Current(-4)).is_err());
    stream.seek(SeekFrom::Start(100)).unwrap();
    assert!(stream.seek(SeekFrom::End(-101)).is_err());

    // The stream survives the rejected seeks unchanged.
    assert_eq!(stream.position().unwrap(), 100);
    assert_eq!(stream.size(), Some(100));
}

#[test]
fn relative_seek_scenario() {
    let mut stream = MemoryStream::from("sample");

    assert_eq!(stream.read_bytes(3).unwrap(), b"sam");
    assert_eq!(stream.position().unwrap(), 3);

    stream.seek(SeekFrom::Current(-1)).unwrap();
    assert_eq!(stream.position().unwrap(), 2);

    stream.seek(SeekFrom::End(-2)).unwrap();
    assert_eq!(stream.position().unwrap(), 4);
}

#[test]
fn peek_is_stable_and_non_destructive() {
    let input = rand_bytes(8);
    let mut stream = MemoryStream::from(input.clone());

    assert_eq!(stream.peek().unwrap(), Some(input[0]));
    assert_eq!(stream.position().unwrap(), 0);
    assert_eq!(stream.peek().unwrap(), Some(input[0]));
    assert_eq!(stream.position().unwrap(), 0);

    assert_eq!(stream.read_bytes(1).unwrap(), vec![input[0]]);
    assert_eq!(stream.peek().unwrap(), Some(input[1]));
    assert_eq!(stream.position().unwrap(), 1);
}

#[test]
fn delimited_extraction_scenario() {
    let mut stream = MemoryStream::from("sample");

    assert_eq!(stream.get_contents(6, b"p").unwrap(), b"sam");
    assert_eq!(stream.position().unwrap(), 3);

    // Bounded before the delimiter is reached.
    stream.rewind().unwrap();
    assert_eq!(stream.get_contents(1, b"p").unwrap(), b"s");
    assert_eq!(stream.position().unwrap(), 1);

    // Delimiter absent: a plain bounded read.
    stream.rewind().unwrap();
    assert_eq!(stream.get_contents(6, b"z").unwrap(), b"sample");
    assert_eq!(stream.position().unwrap(), 6);
    assert_eq!(stream.get_contents(6, b"z").unwrap(), b"");

    // Length without delimiter: a plain read.
    stream.rewind().unwrap();
    assert_eq!(stream.get_contents(6, b"").unwrap(), b"sample");
}

#[test]
fn ignore_scenario() {
    let mut stream = MemoryStream::from("sample");

    stream.ignore(0, b"").unwrap();
    assert_eq!(stream.position().unwrap(), 6);

    stream.rewind().unwrap();
    stream.ignore(3, b"").unwrap();
    assert_eq!(stream.position().unwrap(), 3);

    stream.rewind().unwrap();
    stream.ignore(0, b"p").unwrap();
    assert_eq!(stream.position().unwrap(), 6);

    // The delimited skip consumes the delimiter.
    stream.rewind().unwrap();
    stream.ignore(6, b"p").unwrap();
    assert_eq!(stream.position().unwrap(), 4);
}

#[test]
fn write_overlays_and_appends() {
    let mut stream = MemoryStream::from("sample");

    // Overwriting the first four bytes leaves the tail untouched.
    assert_eq!(stream.write_bytes(b"junk").unwrap(), 4);
    assert_eq!(stream.as_bytes().unwrap(), b"junkle");
    assert_eq!(stream.position().unwrap(), 4);

    // Writing from the end appends.
    stream.seek(SeekFrom::End(0)).unwrap();
    stream.write_bytes(b"junk").unwrap();
    assert_eq!(stream.as_bytes().unwrap(), b"junklejunk");
}

#[test]
fn eof_scenario() {
    let mut stream = MemoryStream::from("sample");
    assert!(!stream.eof());

    // Reading the exact remainder does not hit the end.
    assert_eq!(stream.read_bytes(6).unwrap(), b"sample");
    assert!(!stream.eof());

    // Asking for more does.
    stream.rewind().unwrap();
    assert_eq!(stream.read_bytes(7).unwrap(), b"sample");
    assert!(stream.eof());

    stream.close();
    assert!(!stream.eof());
}

#[test]
fn closed_stream_rejects_every_operation() {
    let mut stream = MemoryStream::from("sample");
    stream.close();

    assert!(stream.position().is_err());
    assert!(stream.read_bytes(1).is_err());
    assert!(stream.write_bytes(b"x").is_err());
    assert!(stream.seek(SeekFrom::Start(0)).is_err());
    assert!(stream.rewind().is_err());
    assert!(stream.peek().is_err());
    assert!(stream.get_contents(0, b"").is_err());
    assert!(stream.ignore(0, b"").is_err());
    assert!(stream.as_bytes().is_err());
    assert_eq!(stream.size(), None);

    // Release stays idempotent and detach reports the absence.
    stream.close();
    assert_eq!(stream.detach(), None);
}

#[test]
fn streams_work_as_trait_objects() {
    let mut stream: Box<dyn Stream> =
        Box::new(MemoryStream::from("sample"));

    let mut out = [0u8; 3];
    stream.read_exact(&mut out).unwrap();
    assert_eq!(&out, b"sam");
    assert_eq!(stream.position().unwrap(), 3);

    stream.write_all(b"PLE").unwrap();
    stream.rewind().unwrap();
    assert_eq!(stream.size(), Some(6));

    let mut all = Vec::new();
    stream.read_to_end(&mut all).unwrap();
    assert_eq!(all, b"samPLE");

    assert_eq!(stream.detach(), Some(b"samPLE".to_vec()));
}
