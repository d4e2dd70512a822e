//! Sequential writer/reader over a growable byte buffer.
//!
//! The cursor is the only serialization surface in this crate: vertex data
//! is written as raw little-endian `f64` pairs, and the enclosing geometry
//! envelope reads it back through the same cursor. Within one serialization
//! call the position only moves forward.

/// Position-tracking writer/reader over a growable byte buffer.
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    buf: Vec<u8>,
    pos: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-reserve `bytes` of capacity; callers size this from
    /// `VertexVec::serialized_size` to avoid growth on the hot path.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bytes),
            pos: 0,
        }
    }

    /// Wrap an existing buffer for reading, position at the start.
    pub fn from_bytes(buf: Vec<u8>) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the position; target must lie inside the written buffer.
    #[inline]
    pub fn seek(&mut self, pos: usize) {
        assert!(pos <= self.buf.len(), "cursor seek past end of buffer");
        self.pos = pos;
    }

    /// Write raw bytes at the current position, extending the buffer if the
    /// write runs past its end, and advance.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        if end > self.buf.len() {
            self.buf.resize(end, 0);
        }
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    /// Write one `f64` as 8 little-endian bytes and advance.
    #[inline]
    pub fn write_f64(&mut self, v: f64) {
        self.write_bytes(&v.to_le_bytes());
    }

    /// Read one little-endian `f64` at the current position and advance.
    /// Reading past the written end is a caller contract violation.
    #[inline]
    pub fn read_f64(&mut self) -> f64 {
        assert!(self.pos + 8 <= self.buf.len(), "cursor read past end of buffer");
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&self.buf[self.pos..self.pos + 8]);
        self.pos += 8;
        f64::from_le_bytes(raw)
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
