//! Line and column computation for spans.
//!
//! [`LineOffsetTable`] pre-computes line starts for O(log L) lookups when a
//! file has many diagnostics.

/// Pre-computed line start offsets.
///
/// ```
/// use ecma_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "var a;\nreturn b;";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 14), (2, 8));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column); the column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets.get((line - 1) as usize).copied().unwrap_or(0) as usize;
        (line, column(source, line_start, offset as usize))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

fn column(source: &str, line_start: usize, offset: usize) -> u32 {
    let end = offset.min(source.len()).max(line_start);
    let col_chars = source.get(line_start..end).map_or(0, |s| s.chars().count());
    u32::try_from(col_chars).unwrap_or(u32::MAX - 1) + 1
}
