//! Byte-offset-to-line/column conversion for diagnostics.

/// Computes a 1-based `(line, column)` pair for a byte offset into
/// `source`. Columns count UTF-8 bytes, consistent with this crate's
/// byte-offset data model (spec.md §3) rather than Unicode scalar values
/// or grapheme clusters.
#[must_use]
pub fn line_col(source: &str, byte_offset: usize) -> (usize, usize) {
    let mut line = 1usize;
    let mut col = 1usize;
    for &byte in source.as_bytes().iter().take(byte_offset) {
        if byte == b'\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_byte_is_line_one_column_one() {
        assert_eq!(line_col("abc", 0), (1, 1));
    }

    #[test]
    fn counts_newlines() {
        let source = "a\nbb\nccc";
        assert_eq!(line_col(source, 0), (1, 1));
        assert_eq!(line_col(source, 2), (2, 1));
        assert_eq!(line_col(source, 5), (3, 1));
        assert_eq!(line_col(source, 7), (3, 3));
    }
}
