use ahash::AHashMap as HashMap;

/// Memoized digit-strings, keyed by decoded value and then by digit length.
///
/// Entries are append-only: once a `(value, length)` pair has been stored it
/// is never replaced. Empty lists are stored too, so a pair that has no
/// representation is not recomputed.
#[derive(Debug, Default)]
pub struct MemoTable {
    by_value: HashMap<u64, HashMap<u32, Vec<String>>>,
    entries: usize,
}

impl MemoTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the two single-digit seeds `0 -> ["0"]` and
    /// `1 -> ["1"]`.
    pub fn seeded() -> Self {
        let mut memo = Self::new();
        memo.insert(0, 1, vec!["0".to_string()]);
        memo.insert(1, 1, vec!["1".to_string()]);
        memo
    }

    /// Returns the strings of `length` digits decoding to `value`, if that
    /// pair has been computed.
    pub fn get(&self, value: u64, length: u32) -> Option<&[String]> {
        self.by_value
            .get(&value)
            .and_then(|lengths| lengths.get(&length))
            .map(Vec::as_slice)
    }

    /// Same as [`get`](Self::get) but treats a missing pair as empty.
    pub(crate) fn lookup(&self, value: u64, length: u32) -> &[String] {
        self.get(value, length).unwrap_or(&[])
    }

    pub fn contains(&self, value: u64, length: u32) -> bool {
        self.get(value, length).is_some()
    }

    /// Stores a new entry. Returns `false` and leaves the table untouched if
    /// the pair is already present.
    pub fn insert(&mut self, value: u64, length: u32, strings: Vec<String>) -> bool {
        let lengths = self.by_value.entry(value).or_default();
        if lengths.contains_key(&length) {
            return false;
        }
        lengths.insert(length, strings);
        self.entries += 1;
        true
    }

    /// Number of `(value, length)` pairs stored.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Total number of digit-strings across all entries.
    pub fn total_strings(&self) -> usize {
        self.by_value
            .values()
            .flat_map(|lengths| lengths.values())
            .map(Vec::len)
            .sum()
    }
}
