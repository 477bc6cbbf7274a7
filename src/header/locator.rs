use super::SENTINEL;

/// The opening sentinel must appear within this many leading lines.
pub const HEADER_SCAN_LINES: usize = 10;

/// The closing sentinel must appear within this many lines of the opening
/// one, both sentinels included.
pub const MAX_HEADER_LINES: usize = 200;

/// Location of an existing header block within a file's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBlock {
    /// Index of the opening sentinel line.
    pub start: usize,
    /// Index one past the closing sentinel line.
    pub end: usize,
}

impl HeaderBlock {
    pub fn line_count(&self) -> usize {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Searching,
    FoundOpen { start: usize },
}

fn is_sentinel(line: &str) -> bool {
    line.trim() == SENTINEL
}

/// Finds a previously written header block.
///
/// The opening sentinel is only looked for in the first
/// [`HEADER_SCAN_LINES`] lines, and the closing one within
/// [`MAX_HEADER_LINES`] of it. Whatever sits between the two is header body.
/// A lone sentinel is not a header.
pub fn locate_header<S: AsRef<str>>(lines: &[S]) -> Option<HeaderBlock> {
    let mut state = ScanState::Searching;

    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        match state {
            ScanState::Searching => {
                if idx >= HEADER_SCAN_LINES {
                    return None;
                }
                if is_sentinel(line) {
                    state = ScanState::FoundOpen { start: idx };
                }
            }
            ScanState::FoundOpen { start } => {
                if idx - start >= MAX_HEADER_LINES {
                    return None;
                }
                if is_sentinel(line) {
                    return Some(HeaderBlock {
                        start,
                        end: idx + 1,
                    });
                }
            }
        }
    }

    None
}

/// Removes an existing header block and returns what follows it.
///
/// Lines before the opening sentinel go with the header. One empty line
/// directly after the closing sentinel is treated as the header's trailing
/// separator and removed too, so that rewriting a file twice gives the same
/// result. Without a complete header the lines come back untouched.
pub fn strip_existing_header(mut lines: Vec<String>) -> (Vec<String>, bool) {
    let Some(block) = locate_header(&lines) else {
        return (lines, false);
    };

    let mut remainder = lines.split_off(block.end);
    if remainder.first().is_some_and(|line| line.trim().is_empty()) {
        remainder.remove(0);
    }
    (remainder, true)
}
