use crate::enumerator::DecibinaryEnumerator;

/// Unbounded iterator over the decibinary sequence.
///
/// Starts at a given 1-based index and grows the underlying enumerator as it
/// walks, so it never returns `None`. Bound it with `take`.
pub struct Sequence<'a> {
    enumerator: &'a mut DecibinaryEnumerator,
    next: u64,
}

impl<'a> Sequence<'a> {
    pub(crate) fn new(enumerator: &'a mut DecibinaryEnumerator, start: u64) -> Self {
        Self {
            enumerator,
            next: start.max(1),
        }
    }
}

impl Iterator for Sequence<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.enumerator.nth(self.next).ok()?.to_string();
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl DecibinaryEnumerator {
    /// Returns an unbounded iterator over the sequence from the first element.
    pub fn sequence(&mut self) -> Sequence<'_> {
        Sequence::new(self, 1)
    }

    /// Returns an unbounded iterator starting at the 1-based index `start`.
    /// A `start` of 0 is treated as 1.
    pub fn sequence_from(&mut self, start: u64) -> Sequence<'_> {
        Sequence::new(self, start)
    }
}
