use core::ops::Range;

/// A slice of a canonical spec, addressed by offset and length.
///
/// Example spec: "<http://user@example.com:8080/path?q#frag>"
/// - host: begin 12, len 11 ("example.com")
/// - port: begin 24, len 4 ("8080")
/// - query: begin 34, len 1 ("q"), the `?` is not part of the component
///
/// `len` is `-1` when the component is absent, `0` when it is present but
/// empty (`http://host/?` has an empty query), and positive otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Component {
    pub begin: u32,
    pub len: i32,
}

impl Component {
    pub const fn new(begin: u32, len: i32) -> Self {
        Self { begin, len }
    }

    /// The absent component (`len == -1`)
    pub const fn absent() -> Self {
        Self { begin: 0, len: -1 }
    }

    /// Component covering `range` of the spec being written
    pub(crate) fn from_range(range: Range<usize>) -> Self {
        Self::new(range.start as u32, (range.end - range.start) as i32)
    }

    /// Present, possibly empty
    pub const fn is_present(&self) -> bool {
        self.len >= 0
    }

    /// Present with at least one byte
    pub const fn is_nonempty(&self) -> bool {
        self.len > 0
    }

    /// Offset one past the last byte; equal to `begin` when absent or empty.
    pub const fn end(&self) -> u32 {
        if self.len > 0 {
            self.begin + self.len as u32
        } else {
            self.begin
        }
    }

    /// Byte range in the owning spec, `None` when absent
    pub fn range(&self) -> Option<Range<usize>> {
        self.is_present()
            .then(|| self.begin as usize..self.end() as usize)
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::absent()
    }
}
