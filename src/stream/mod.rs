//! Byte streams with file-like semantics.
//!
//! This module defines the [`Stream`](trait.Stream.html) capability contract
//! and its in-memory implementation
//! [`MemoryStream`](struct.MemoryStream.html). A stream combines the
//! [`std::io`] cursor traits with size, position and end-of-data queries,
//! capability flags, and a close/detach lifecycle.

use std::collections::BTreeMap;
use std::io::{Read, Seek, Write};

mod error;
pub use error::{StreamError, StreamResult};
mod memory;
pub use memory::MemoryStream;
mod snapshot;
pub use snapshot::StreamSnapshot;

/// Combination of traits and queries to work with a stream of bytes as
/// a random access file.
///
/// On top of reading, writing and seeking from the [`std::io`] traits,
/// a stream reports its size, cursor position and end-of-data condition,
/// advertises its capabilities, and owns its release lifecycle: it can be
/// [closed](trait.Stream.html#tymethod.close), discarding the underlying
/// buffer, or [detached](trait.Stream.html#tymethod.detach), handing the
/// buffer to the caller. Both leave the stream closed for good; every other
/// operation on a closed stream fails with
/// [`StreamError::Closed`](enum.StreamError.html).
pub trait Stream: Read + Write + Seek {
    /// Current size of the stream in bytes, or `None` once the stream
    /// has been closed or detached. Never fails: absence is the
    /// closed-state signal.
    fn size(&self) -> Option<u64>;

    /// Current cursor position in bytes from the start of the stream.
    fn position(&self) -> StreamResult<u64>;

    /// Whether end-of-data was hit. The condition arms only when a read
    /// attempt was truncated by the end of the stream, never from cursor
    /// position alone. `false` on a closed stream.
    fn eof(&self) -> bool;

    /// Whether the stream supports reading.
    fn is_readable(&self) -> bool;

    /// Whether the stream supports writing.
    fn is_writable(&self) -> bool;

    /// Whether the stream supports seeking.
    fn is_seekable(&self) -> bool;

    /// Close the stream and discard the underlying buffer.
    /// Closing an already closed stream has no effect.
    fn close(&mut self);

    /// Hand the underlying buffer to the caller and leave the stream
    /// closed, without destroying the data. Returns `None` if the stream
    /// was already closed or detached.
    fn detach(&mut self) -> Option<Vec<u8>>;

    /// Extended metadata of the stream. Streams of this library carry
    /// none: the map is empty and any key lookup on it is absent.
    fn metadata(&self) -> BTreeMap<String, String>;
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    fn size(&self) -> Option<u64> {
        (**self).size()
    }

    fn position(&self) -> StreamResult<u64> {
        (**self).position()
    }

    fn eof(&self) -> bool {
        (**self).eof()
    }

    fn is_readable(&self) -> bool {
        (**self).is_readable()
    }

    fn is_writable(&self) -> bool {
        (**self).is_writable()
    }

    fn is_seekable(&self) -> bool {
        (**self).is_seekable()
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn detach(&mut self) -> Option<Vec<u8>> {
        (**self).detach()
    }

    fn metadata(&self) -> BTreeMap<String, String> {
        (**self).metadata()
    }
}
