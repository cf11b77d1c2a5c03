use crate::digits::{max_length, Decibinary};
use crate::error::DecibinaryError;
use crate::memo::MemoTable;
use tracing::{debug, trace};

/// Incremental enumerator of decibinary numbers.
///
/// Keeps an ordered list of every digit-string found so far, sorted by decoded
/// value, then by length, then by leading digit and suffix order. The list is
/// always complete for every value up to the frontier, so it is a prefix of the
/// infinite sequence and grows only when a query reaches past its end.
///
/// Each instance owns its memo table; independent enumerators share nothing.
#[derive(Debug)]
pub struct DecibinaryEnumerator {
    /// Memoized strings per (value, length)
    memo: MemoTable,

    /// Every string enumerated so far, in sequence order
    list: Vec<String>,

    /// `starts[v]` is the index in `list` of the first string decoding to `v`
    starts: Vec<usize>,

    /// Highest value whose strings are all in `list`
    frontier: u64,
}

impl DecibinaryEnumerator {
    /// Creates an enumerator seeded with `"0"` and `"1"`, frontier at 1.
    pub fn new() -> Self {
        Self {
            memo: MemoTable::seeded(),
            list: vec!["0".to_string(), "1".to_string()],
            starts: vec![0, 1],
            frontier: 1,
        }
    }

    /// Returns the `i`-th decibinary number (1-indexed).
    ///
    /// Extends the enumeration until it holds at least `i` strings. Repeated
    /// calls with an index already covered do not move the frontier.
    pub fn nth(&mut self, i: u64) -> Result<&str, DecibinaryError> {
        if i == 0 {
            return Err(DecibinaryError::ZeroIndex);
        }
        let index = usize::try_from(i - 1).map_err(|_| DecibinaryError::IndexTooLarge(i))?;
        while self.list.len() <= index {
            self.extend_frontier();
        }
        Ok(&self.list[index])
    }

    /// Returns the canonical strings of `length` digits decoding to `value`.
    ///
    /// The frontier is advanced to `value` first so every remainder lookup
    /// sees a complete memo. Lengths with no representation yield `[]`.
    pub fn strings_for(&mut self, value: u64, length: u32) -> &[String] {
        self.advance_to(value);
        self.memo.lookup(value, length)
    }

    /// Returns every decibinary number decoding to `value`, in sequence order.
    pub fn all_strings_for(&mut self, value: u64) -> &[String] {
        self.advance_to(value);
        let (start, end) = self.bounds(value);
        &self.list[start..end]
    }

    /// Number of decibinary numbers decoding to `value`.
    pub fn count_for(&mut self, value: u64) -> usize {
        self.all_strings_for(value).len()
    }

    /// Returns the 1-based position of a canonical digit-string, the inverse
    /// of [`nth`](Self::nth).
    pub fn position_of(&mut self, digits: &str) -> Result<u64, DecibinaryError> {
        let number = Decibinary::parse(digits)?;
        let value = number.value();
        self.advance_to(value);
        let (start, end) = self.bounds(value);

        // Within one value, canonical strings are ordered by length then
        // lexically, which is plain numeric order.
        let key = (number.len(), number.as_str());
        let offset = self.list[start..end]
            .binary_search_by(|s| (s.len(), s.as_str()).cmp(&key))
            .map_err(|_| DecibinaryError::NotFound(digits.to_string()))?;
        Ok((start + offset) as u64 + 1)
    }

    /// Highest value whose strings have all been enumerated.
    pub fn frontier(&self) -> u64 {
        self.frontier
    }

    /// Number of strings enumerated so far.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Always false; the two seeds are present from construction.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }

    /// Strings enumerated so far, in sequence order. Never grows the list.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.list.iter().map(String::as_str)
    }

    pub fn stats(&self) -> EnumerationStats {
        EnumerationStats {
            frontier: self.frontier,
            listed: self.list.len(),
            memo_entries: self.memo.entries(),
        }
    }

    fn advance_to(&mut self, value: u64) {
        while self.frontier < value {
            self.extend_frontier();
        }
    }

    fn bounds(&self, value: u64) -> (usize, usize) {
        let v = value as usize;
        let start = self.starts[v];
        let end = self.starts.get(v + 1).copied().unwrap_or(self.list.len());
        (start, end)
    }

    /// Enumerates every string for `frontier + 1`, shortest first, appending
    /// them to the list and recording each length in the memo.
    fn extend_frontier(&mut self) {
        let value = self.frontier + 1;
        let start = self.list.len();

        for length in 1..=max_length(value) {
            let strings = self.build(value, length);
            trace!(value, length, count = strings.len(), "built decibinary strings");
            self.list.extend(strings.iter().cloned());
            self.memo.insert(value, length, strings);
        }

        self.starts.push(start);
        self.frontier = value;
        debug!(
            frontier = value,
            listed = self.list.len(),
            "extended decibinary frontier"
        );
    }

    /// Builds the `length`-digit strings for `value` from memoized suffixes.
    ///
    /// Requires every value below `value` to be memoized. The first digit runs
    /// 1..=9 while the remainder stays non-negative; each remainder is written
    /// as zero padding followed by a shorter memoized string. Output order is
    /// first digit, then suffix length, then suffix order.
    fn build(&self, value: u64, length: u32) -> Vec<String> {
        if length == 1 {
            return if value < 10 {
                vec![value.to_string()]
            } else {
                Vec::new()
            };
        }

        let Some(weight) = 1u64.checked_shl(length - 1) else {
            return Vec::new();
        };

        let mut strings = Vec::new();
        for first in 1..=9u8 {
            let Some(remainder) = u64::from(first)
                .checked_mul(weight)
                .and_then(|place| value.checked_sub(place))
            else {
                break;
            };

            for sub_length in 1..length {
                let padding = (length - 1 - sub_length) as usize;
                for suffix in self.memo.lookup(remainder, sub_length) {
                    let mut s = String::with_capacity(length as usize);
                    s.push(char::from(b'0' + first));
                    s.extend(std::iter::repeat('0').take(padding));
                    s.push_str(suffix);
                    strings.push(s);
                }
            }
        }
        strings
    }
}

impl Default for DecibinaryEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Size of an enumerator's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationStats {
    /// Highest fully enumerated value
    pub frontier: u64,
    /// Strings in the enumeration list
    pub listed: usize,
    /// Memoized (value, length) pairs
    pub memo_entries: usize,
}

impl EnumerationStats {
    /// Average number of representations per enumerated value.
    pub fn strings_per_value(&self) -> f64 {
        self.listed as f64 / (self.frontier + 1) as f64
    }
}
