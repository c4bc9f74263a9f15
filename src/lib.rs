//! A library to treat strings of bytes as in-memory, random access files.
//!
//! The entry point of the library is the [`MemoryStream`](struct.MemoryStream.html)
//! structure: a growable buffer of bytes owning a cursor, readable, writable
//! and seekable through the standard [`std::io`] traits. Seeking past the end
//! of the buffer grows it with zero bytes the same way growable files do,
//! while writing overwrites in place and extends the buffer where it ends.
//!
//! On top of the cursor primitives, [`MemoryStream`](struct.MemoryStream.html)
//! provides lookahead ([`peek()`](struct.MemoryStream.html#method.peek)),
//! bounded and delimited extraction
//! ([`get_contents()`](struct.MemoryStream.html#method.get_contents),
//! [`ignore()`](struct.MemoryStream.html#method.ignore)) and whole-content
//! views. The [`Stream`](trait.Stream.html) trait captures the capability
//! contract every stream of this library satisfies: size and position
//! queries, end-of-data reporting, capability flags and lifecycle operations
//! (close, detach).
//!
//! Stream state can be captured as a
//! [`StreamSnapshot`](struct.StreamSnapshot.html), a pair of content bytes
//! and cursor position sufficient to rebuild an equivalent independent
//! stream, and, with the `serialize` feature, to ship it through an opaque
//! byte payload.
//!
//! # Examples
//!
//! ```
//! use std::io::{Seek, SeekFrom};
//! use memstream::{MemoryStream, Stream};
//!
//! let mut stream = MemoryStream::from("sample");
//!
//! // Bytes are read from the cursor, which advances.
//! assert_eq!(stream.read_bytes(3).unwrap(), b"sam");
//! assert_eq!(stream.position().unwrap(), 3);
//!
//! // The cursor moves freely, relative to start, end or itself.
//! stream.seek(SeekFrom::Current(-1)).unwrap();
//! assert_eq!(stream.position().unwrap(), 2);
//!
//! // Writes overwrite in place and extend the buffer where it ends.
//! stream.write_bytes(b"urprise").unwrap();
//! assert_eq!(stream.as_bytes().unwrap(), b"saurprise");
//! ```

pub mod stream;
pub use crate::stream::{
    MemoryStream, Stream, StreamError, StreamResult, StreamSnapshot,
};
