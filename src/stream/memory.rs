use std::collections::BTreeMap;
use std::io::{Read, Seek, SeekFrom, Write};

use crate::stream::{Stream, StreamError, StreamResult};

//----------------------------------------------------------------------------//
// Buffer state machine.
//----------------------------------------------------------------------------//

/// Lifecycle of a [`MemoryStream`](struct.MemoryStream.html).
/// The only transition is `Open` to `Closed` and it is terminal.
#[derive(Clone, Debug)]
enum State {
    Open(Buffer),
    Closed,
}

/// The byte store and cursor of an open stream.
///
/// Invariant between operations: `pos <= bytes.len()`. A seek past the end
/// of the store closes the gap with zero bytes before returning.
#[derive(Clone, Debug)]
struct Buffer {
    bytes: Vec<u8>,
    pos: usize,
    eof: bool,
}

impl Buffer {
    fn new(bytes: Vec<u8>) -> Self {
        Buffer {
            bytes,
            pos: 0,
            eof: false,
        }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Materialize zero bytes at the end of the store up to `target`.
    /// Stores already reaching `target` are left untouched.
    fn pad_to(&mut self, target: usize) {
        if target > self.bytes.len() {
            self.bytes.resize(target, 0u8);
        }
    }

    fn seek_to(&mut self, pos: SeekFrom) -> StreamResult<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => offset as i128,
            SeekFrom::Current(offset) => self.pos as i128 + offset as i128,
            SeekFrom::End(offset) => {
                self.bytes.len() as i128 + offset as i128
            }
        };

        if target < 0 {
            return Err(StreamError::NegativeSeek(target as i64));
        }

        let target = target as usize;
        self.pad_to(target);
        self.pos = target;
        self.eof = false;
        Ok(target as u64)
    }

    /// Copy up to `out.len()` bytes from the cursor into `out` and advance
    /// the cursor. The end-of-data flag arms when the read is truncated by
    /// the end of the store.
    fn read_into(&mut self, out: &mut [u8]) -> usize {
        let len = out.len().min(self.remaining());
        out[..len].copy_from_slice(&self.bytes[self.pos..self.pos + len]);
        self.pos += len;
        if len < out.len() {
            self.eof = true;
        }
        len
    }

    fn read_bytes(&mut self, length: usize) -> Vec<u8> {
        let len = length.min(self.remaining());
        let out = self.bytes[self.pos..self.pos + len].to_vec();
        self.pos += len;
        if len < length {
            self.eof = true;
        }
        out
    }

    /// Overwrite the store at the cursor, extending it where it ends.
    /// Writing never pads a gap: the cursor invariant guarantees the write
    /// starts inside or at the end of the store.
    fn write_bytes(&mut self, data: &[u8]) -> usize {
        let end = self.pos + data.len();
        if end > self.bytes.len() {
            self.bytes.resize(end, 0u8);
        }
        self.bytes[self.pos..end].copy_from_slice(data);
        self.pos = end;
        self.eof = false;
        data.len()
    }

    /// Scan at most `length` bytes from the cursor for `delimiter` and
    /// return the bytes before it. When the delimiter is found, the cursor
    /// lands right before it, or right past it with `discard`. When it is
    /// not found within the window, behaves like a plain bounded read.
    /// Only delimiter occurrences fitting entirely inside the window match.
    fn read_delimited(
        &mut self,
        length: usize,
        delimiter: &[u8],
        discard: bool,
    ) -> Vec<u8> {
        let end = self.bytes.len().min(self.pos + length);
        let window = &self.bytes[self.pos..end];

        let hit = if delimiter.is_empty() {
            None
        } else {
            window
                .windows(delimiter.len())
                .position(|bytes| bytes == delimiter)
        };

        match hit {
            Some(at) => {
                let out = window[..at].to_vec();
                self.pos += if discard { at + delimiter.len() } else { at };
                out
            }
            None => {
                let out = window.to_vec();
                self.pos += out.len();
                if out.len() < length {
                    self.eof = true;
                }
                out
            }
        }
    }
}

//----------------------------------------------------------------------------//
// MemoryStream.
//----------------------------------------------------------------------------//

/// An implementation of a [`Stream`](trait.Stream.html) in a `Vec<u8>`.
///
/// The stream owns a growable store of bytes and a cursor. It is built from
/// an initial byte string with the cursor on its first byte, then behaves
/// like a random access file: reads return up to the requested count and
/// signal end-of-data with a short result, writes overwrite in place and
/// extend the store where it ends, and seeking past the end grows the store
/// with zero bytes.
///
/// Cloning a stream deep-copies the store: clones never share bytes, and
/// writes to one are invisible to the other.
///
/// # Examples
///
/// ```
/// use std::io::{Seek, SeekFrom};
/// use memstream::{MemoryStream, Stream};
///
/// let mut stream = MemoryStream::from("sample");
/// assert_eq!(stream.size(), Some(6));
///
/// // Seeking past the end grows the store with zero bytes.
/// stream.seek(SeekFrom::Start(8)).unwrap();
/// assert_eq!(stream.size(), Some(8));
/// assert_eq!(stream.as_bytes().unwrap(), b"sample\0\0");
///
/// // Detaching hands the store to the caller and closes the stream.
/// assert_eq!(stream.detach(), Some(b"sample\0\0".to_vec()));
/// assert_eq!(stream.detach(), None);
/// assert!(stream.position().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct MemoryStream {
    state: State,
}

impl MemoryStream {
    /// Build an empty stream.
    pub fn new() -> Self {
        MemoryStream::from(Vec::new())
    }

    fn buffer(&self) -> StreamResult<&Buffer> {
        match &self.state {
            State::Open(buffer) => Ok(buffer),
            State::Closed => Err(StreamError::Closed),
        }
    }

    fn buffer_mut(&mut self) -> StreamResult<&mut Buffer> {
        match &mut self.state {
            State::Open(buffer) => Ok(buffer),
            State::Closed => Err(StreamError::Closed),
        }
    }

    /// Read up to `length` bytes from the cursor and advance it by the
    /// count actually read. A result shorter than `length`, possibly
    /// empty, means the end of the stream was reached; it is the
    /// end-of-data signal, not an error.
    pub fn read_bytes(&mut self, length: usize) -> StreamResult<Vec<u8>> {
        Ok(self.buffer_mut()?.read_bytes(length))
    }

    /// Write `data` at the cursor, overwriting the store where it is long
    /// enough and extending it where it is not, and advance the cursor
    /// past the written bytes. Clears the end-of-data condition.
    /// Returns the number of bytes written.
    pub fn write_bytes(&mut self, data: &[u8]) -> StreamResult<usize> {
        Ok(self.buffer_mut()?.write_bytes(data))
    }

    /// Look at the next byte without consuming it.
    ///
    /// A single byte is read; if one was available the cursor is moved
    /// back on it and the byte returned. At the end of the stream the
    /// cursor was never moved, the end-of-data condition arms, and `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use memstream::{MemoryStream, Stream};
    ///
    /// let mut stream = MemoryStream::from("ab");
    /// assert_eq!(stream.peek().unwrap(), Some(b'a'));
    /// assert_eq!(stream.peek().unwrap(), Some(b'a'));
    /// assert_eq!(stream.position().unwrap(), 0);
    /// ```
    pub fn peek(&mut self) -> StreamResult<Option<u8>> {
        let buffer = self.buffer_mut()?;
        let pos = buffer.pos;

        match buffer.read_bytes(1).first() {
            Some(&byte) => {
                buffer.seek_to(SeekFrom::Start(pos as u64))?;
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }

    /// Extract bytes from the cursor, in one of three modes:
    ///
    /// 1. `length` of zero: every remaining byte up to the end of the
    ///    stream, empty if the cursor is already there.
    /// 2. Non-zero `length` and non-empty `delimiter`: up to `length`
    ///    bytes, stopping before the first occurrence of `delimiter`.
    ///    The cursor lands right after the last returned byte, so a
    ///    subsequent read sees the delimiter again.
    /// 3. Non-zero `length` and empty `delimiter`: a plain
    ///    [`read_bytes()`](struct.MemoryStream.html#method.read_bytes).
    ///
    /// # Examples
    ///
    /// ```
    /// use memstream::{MemoryStream, Stream};
    ///
    /// let mut stream = MemoryStream::from("sample");
    /// assert_eq!(stream.get_contents(6, b"p").unwrap(), b"sam");
    /// assert_eq!(stream.position().unwrap(), 3);
    /// ```
    pub fn get_contents(
        &mut self,
        length: usize,
        delimiter: &[u8],
    ) -> StreamResult<Vec<u8>> {
        let buffer = self.buffer_mut()?;

        if length == 0 {
            let remaining = buffer.remaining();
            Ok(buffer.read_bytes(remaining))
        } else if !delimiter.is_empty() {
            Ok(buffer.read_delimited(length, delimiter, false))
        } else {
            Ok(buffer.read_bytes(length))
        }
    }

    /// Skip bytes from the cursor, with the same three modes as
    /// [`get_contents()`](struct.MemoryStream.html#method.get_contents),
    /// discarding the result. In the delimited mode the delimiter is
    /// consumed: the cursor lands right past it.
    pub fn ignore(
        &mut self,
        length: usize,
        delimiter: &[u8],
    ) -> StreamResult<()> {
        let buffer = self.buffer_mut()?;

        if length == 0 {
            let remaining = buffer.remaining();
            buffer.read_bytes(remaining);
        } else if !delimiter.is_empty() {
            buffer.read_delimited(length, delimiter, true);
        } else {
            buffer.read_bytes(length);
        }
        Ok(())
    }

    /// The whole store, from its first byte to its last, regardless of
    /// the cursor. The cursor is left untouched.
    pub fn as_bytes(&self) -> StreamResult<&[u8]> {
        Ok(self.buffer()?.bytes.as_slice())
    }
}

impl Default for MemoryStream {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for MemoryStream {
    /// Build a stream owning `bytes`, cursor on the first byte.
    fn from(bytes: Vec<u8>) -> Self {
        MemoryStream {
            state: State::Open(Buffer::new(bytes)),
        }
    }
}

impl From<&[u8]> for MemoryStream {
    fn from(bytes: &[u8]) -> Self {
        MemoryStream::from(bytes.to_vec())
    }
}

impl From<&str> for MemoryStream {
    fn from(s: &str) -> Self {
        MemoryStream::from(s.as_bytes().to_vec())
    }
}

impl Read for MemoryStream {
    fn read(&mut self, out: &mut [u8]) -> std::io::Result<usize> {
        Ok(self.buffer_mut()?.read_into(out))
    }
}

impl Write for MemoryStream {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        Ok(self.buffer_mut()?.write_bytes(data))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.buffer_mut()?;
        Ok(())
    }
}

impl Seek for MemoryStream {
    /// Move the cursor to an offset relative to the start, the end or the
    /// cursor itself. A target before the start of the stream is an
    /// `InvalidInput` error and nothing moves. A target past the end grows
    /// the store with zero bytes up to the target, mirroring the
    /// semantics of growable files.
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        Ok(self.buffer_mut()?.seek_to(pos)?)
    }
}

impl Stream for MemoryStream {
    fn size(&self) -> Option<u64> {
        match &self.state {
            State::Open(buffer) => Some(buffer.bytes.len() as u64),
            State::Closed => None,
        }
    }

    fn position(&self) -> StreamResult<u64> {
        Ok(self.buffer()?.pos as u64)
    }

    fn eof(&self) -> bool {
        match &self.state {
            State::Open(buffer) => buffer.eof,
            State::Closed => false,
        }
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn is_writable(&self) -> bool {
        true
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn close(&mut self) {
        self.state = State::Closed;
    }

    fn detach(&mut self) -> Option<Vec<u8>> {
        match std::mem::replace(&mut self.state, State::Closed) {
            State::Open(buffer) => Some(buffer.bytes),
            State::Closed => None,
        }
    }

    fn metadata(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }
}
