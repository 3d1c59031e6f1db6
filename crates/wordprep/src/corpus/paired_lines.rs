//! # Paired Line Reader
//!
//! Reads two line-aligned sources in lockstep.

use std::io::{BufRead, Lines};

use crate::errors::WPResult;

/// Where a step of a [`PairedLines`] walk stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairState {
    /// Both sources produced a line.
    Paired,

    /// The source ended while the target still had lines.
    SourceEnded,

    /// The target ended while the source still had lines.
    TargetEnded,
}

/// One lockstep read from both sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    /// The source line, if the source had one.
    pub source: Option<String>,

    /// The target line, if the target had one.
    pub target: Option<String>,
}

impl AlignedPair {
    /// Classify this step.
    ///
    /// A pair with neither line is never yielded; it ends the walk.
    pub fn state(&self) -> PairState {
        match (&self.source, &self.target) {
            (None, Some(_)) => PairState::SourceEnded,
            (Some(_), None) => PairState::TargetEnded,
            _ => PairState::Paired,
        }
    }

    /// Both lines, when paired.
    pub fn lines(&self) -> Option<(&str, &str)> {
        match (&self.source, &self.target) {
            (Some(s), Some(t)) => Some((s.as_str(), t.as_str())),
            _ => None,
        }
    }
}

/// Lockstep iterator over two [`BufRead`] sources.
///
/// * Yields `Ok(pair)` with [`PairState::Paired`] while both have lines.
/// * Ends (`None`) when both run out together.
/// * Yields one final unpaired step when only one runs out; then ends.
/// * Yields `Err` once on an I/O error; then ends.
pub struct PairedLines<S: BufRead, T: BufRead> {
    source: Lines<S>,
    target: Lines<T>,
    done: bool,
}

impl<S: BufRead, T: BufRead> PairedLines<S, T> {
    /// Pair two line sources.
    pub fn new(
        source: S,
        target: T,
    ) -> Self {
        Self {
            source: source.lines(),
            target: target.lines(),
            done: false,
        }
    }
}

impl<S: BufRead, T: BufRead> Iterator for PairedLines<S, T> {
    type Item = WPResult<AlignedPair>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let step = self
            .source
            .next()
            .transpose()
            .and_then(|source| Ok((source, self.target.next().transpose()?)));

        let (source, target) = match step {
            Ok(lines) => lines,
            Err(err) => {
                self.done = true;
                return Some(Err(err.into()));
            }
        };

        if source.is_none() && target.is_none() {
            self.done = true;
            return None;
        }

        let pair = AlignedPair { source, target };
        if pair.state() != PairState::Paired {
            self.done = true;
        }
        Some(Ok(pair))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn walk(
        source: &str,
        target: &str,
    ) -> Vec<AlignedPair> {
        PairedLines::new(Cursor::new(source.to_string()), Cursor::new(target.to_string()))
            .map(|step| step.unwrap())
            .collect()
    }

    #[test]
    fn test_equal_lengths() {
        let pairs = walk("a\nb\n", "x\ny\n");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].lines(), Some(("b", "y")));
        assert!(pairs.iter().all(|p| p.state() == PairState::Paired));
    }

    #[test]
    fn test_empty_lines_are_paired() {
        let pairs = walk("a\n\nc\n", "x\ny\n\n");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1].lines(), Some(("", "y")));
        assert_eq!(pairs[2].lines(), Some(("c", "")));
    }

    #[test]
    fn test_target_ends_first() {
        let pairs = walk("a\nb\nc\n", "x\ny\n");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2].state(), PairState::TargetEnded);
        assert_eq!(pairs[2].source.as_deref(), Some("c"));
        assert_eq!(pairs[2].lines(), None);
    }

    #[test]
    fn test_source_ends_first() {
        let pairs = walk("a\n", "x\ny\nz\n");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].state(), PairState::SourceEnded);
    }

    #[test]
    fn test_fused_after_end() {
        let mut lines = PairedLines::new(Cursor::new("a\nb\n"), Cursor::new("x\n"));
        assert!(lines.next().is_some());
        assert!(lines.next().is_some());
        assert!(lines.next().is_none());
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_io_error_propagates() {
        let bad: &[u8] = &[0xff, 0xfe, b'\n'];
        let mut lines = PairedLines::new(Cursor::new(bad), Cursor::new("x\n"));
        assert!(matches!(lines.next(), Some(Err(_))));
        assert!(lines.next().is_none());
    }
}
