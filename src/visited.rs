// Boggle Visited Set
// Fixed-size bitset over board cell indices

const WORD_BITS: usize = u64::BITS as usize;

/// Marks which cells are on the current search path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    /// Bitset for `len` cells, all unmarked
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    #[inline]
    pub fn mark(&mut self, cell: usize) {
        debug_assert!(cell < self.len);
        self.words[cell / WORD_BITS] |= 1u64 << (cell % WORD_BITS);
    }

    #[inline]
    pub fn unmark(&mut self, cell: usize) {
        debug_assert!(cell < self.len);
        self.words[cell / WORD_BITS] &= !(1u64 << (cell % WORD_BITS));
    }

    #[inline]
    pub fn is_marked(&self, cell: usize) -> bool {
        self.words[cell / WORD_BITS] & (1u64 << (cell % WORD_BITS)) != 0
    }

    /// Number of marked cells
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    /// Capacity in cells
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_unmark() {
        let mut set = VisitedSet::new(16);
        assert!(!set.is_marked(5));

        set.mark(5);
        assert!(set.is_marked(5));
        assert_eq!(set.count(), 1);

        set.unmark(5);
        assert!(!set.is_marked(5));
        assert_eq!(set.count(), 0);
    }

    #[test]
    fn test_crosses_word_boundary() {
        // 10x10 board spans two u64 words
        let mut set = VisitedSet::new(100);
        set.mark(63);
        set.mark(64);
        set.mark(99);
        assert!(set.is_marked(63));
        assert!(set.is_marked(64));
        assert!(set.is_marked(99));
        assert!(!set.is_marked(65));
        assert_eq!(set.count(), 3);

        set.clear();
        assert_eq!(set.count(), 0);
        assert_eq!(set.len(), 100);
    }

    #[test]
    fn test_empty() {
        let set = VisitedSet::new(0);
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
    }
}
