//! Capture and restore of stream state.
//!
//! A [`StreamSnapshot`](struct.StreamSnapshot.html) is the portable image
//! of a stream: its full contents and cursor position. The pair is enough
//! to rebuild an independent stream indistinguishable from the original by
//! content and position. With the `serialize` feature the snapshot also
//! travels through an opaque byte payload.

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::stream::{MemoryStream, Stream, StreamResult};
#[cfg(feature = "serialize")]
use crate::stream::StreamError;

/// Contents and cursor position of a stream, captured at one point in
/// time.
///
/// # Examples
///
/// ```
/// use memstream::{MemoryStream, Stream};
///
/// let mut stream = MemoryStream::from("sample");
/// stream.read_bytes(3).unwrap();
///
/// let snapshot = stream.snapshot().unwrap();
/// let mut rebuilt = MemoryStream::from(snapshot);
/// assert_eq!(rebuilt.position().unwrap(), 3);
/// assert_eq!(rebuilt.get_contents(0, b"").unwrap(), b"ple");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct StreamSnapshot {
    contents: Vec<u8>,
    position: u64,
}

impl StreamSnapshot {
    /// Build a snapshot from a content/position pair.
    pub fn new(contents: Vec<u8>, position: u64) -> Self {
        StreamSnapshot { contents, position }
    }

    /// The full contents of the captured stream.
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// The cursor position of the captured stream.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Encode the snapshot into an opaque byte payload.
    #[cfg(feature = "serialize")]
    pub fn to_bytes(&self) -> StreamResult<Vec<u8>> {
        bincode::serialize(self).map_err(StreamError::Serialize)
    }

    /// Decode a snapshot from a payload produced by
    /// [`to_bytes()`](struct.StreamSnapshot.html#method.to_bytes).
    #[cfg(feature = "serialize")]
    pub fn from_bytes(bytes: &[u8]) -> StreamResult<Self> {
        bincode::deserialize(bytes).map_err(StreamError::Deserialize)
    }
}

impl MemoryStream {
    /// Capture the stream contents and cursor position, leaving the
    /// stream untouched.
    pub fn snapshot(&self) -> StreamResult<StreamSnapshot> {
        Ok(StreamSnapshot::new(
            self.as_bytes()?.to_vec(),
            self.position()?,
        ))
    }
}

impl From<StreamSnapshot> for MemoryStream {
    /// Rebuild a stream from a snapshot: the stream is constructed from
    /// the snapshot contents, then sought to the snapshot position. A
    /// position past the contents grows the store with zero bytes, per
    /// seek semantics.
    fn from(snapshot: StreamSnapshot) -> Self {
        use std::io::{Seek, SeekFrom};

        let mut stream = MemoryStream::from(snapshot.contents);
        stream
            .seek(SeekFrom::Start(snapshot.position))
            .expect("seek to a non-negative position cannot fail");
        stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom};

    #[test]
    fn test_snapshot_roundtrip() {
        let mut stream = MemoryStream::from("sample");
        stream.seek(SeekFrom::Start(4)).unwrap();

        let rebuilt = MemoryStream::from(stream.snapshot().unwrap());
        assert_eq!(rebuilt.as_bytes().unwrap(), b"sample");
        assert_eq!(rebuilt.position().unwrap(), 4);

        // Capturing disturbed neither cursor nor contents.
        assert_eq!(stream.position().unwrap(), 4);
        assert_eq!(stream.as_bytes().unwrap(), b"sample");
    }

    #[test]
    fn test_snapshot_position_past_contents_pads() {
        let snapshot = StreamSnapshot::new(b"ab".to_vec(), 5);
        let stream = MemoryStream::from(snapshot);

        assert_eq!(stream.size(), Some(5));
        assert_eq!(stream.position().unwrap(), 5);
        assert_eq!(stream.as_bytes().unwrap(), b"ab\0\0\0");
    }

    #[test]
    fn test_snapshot_of_closed_stream_fails() {
        let mut stream = MemoryStream::from("sample");
        stream.close();
        assert!(stream.snapshot().is_err());
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_snapshot_byte_payload_roundtrip() {
        let mut stream = MemoryStream::from("sample");
        stream.seek(SeekFrom::Start(3)).unwrap();

        let payload = stream.snapshot().unwrap().to_bytes().unwrap();
        let snapshot = StreamSnapshot::from_bytes(&payload).unwrap();
        assert_eq!(snapshot, stream.snapshot().unwrap());

        let rebuilt = MemoryStream::from(snapshot);
        assert_eq!(rebuilt.as_bytes().unwrap(), b"sample");
        assert_eq!(rebuilt.position().unwrap(), 3);
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_corrupt_payload_is_rejected() {
        assert!(matches!(
            StreamSnapshot::from_bytes(&[0xff]),
            Err(StreamError::Deserialize(_))
        ));
    }
}
