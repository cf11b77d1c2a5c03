use crate::error::DecibinaryError;
use std::fmt;

/// Decodes a digit-string using base-2 positional weights.
///
/// Digits may exceed 1, so `"13"` decodes to `1·2 + 3 = 5`. Zero-padded
/// strings such as `"03"` are accepted; use [`Decibinary::parse`] when the
/// canonical (no leading zero) form is required.
pub fn decode(digits: &str) -> Result<u64, DecibinaryError> {
    if digits.is_empty() {
        return Err(DecibinaryError::Empty);
    }

    let mut value: u64 = 0;
    for (position, c) in digits.chars().enumerate() {
        let digit = c
            .to_digit(10)
            .ok_or(DecibinaryError::InvalidDigit { position, found: c })?;
        value = value
            .checked_mul(2)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| DecibinaryError::Overflow(digits.to_string()))?;
    }
    Ok(value)
}

/// Longest canonical digit-string that can decode to `value`.
///
/// A leading digit of at least 1 in the top slot contributes `2^(len-1)`, so
/// the length is bounded by `floor(log2(value)) + 1`. Zero is only `"0"`.
pub fn max_length(value: u64) -> u32 {
    if value == 0 {
        1
    } else {
        u64::BITS - value.leading_zeros()
    }
}

/// A canonical decibinary number: decimal digits with no leading zero unless
/// the whole string is `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decibinary {
    digits: String,
    value: u64,
}

impl Decibinary {
    /// Validates and decodes a canonical digit-string.
    pub fn parse(digits: &str) -> Result<Self, DecibinaryError> {
        let value = decode(digits)?;
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(DecibinaryError::LeadingZero(digits.to_string()));
        }
        Ok(Self {
            digits: digits.to_string(),
            value,
        })
    }

    /// Decoded decimal value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; a decibinary number has at least one digit.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for Decibinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl std::str::FromStr for Decibinary {
    type Err = DecibinaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_simple() {
        assert_eq!(decode("0").unwrap(), 0);
        assert_eq!(decode("1").unwrap(), 1);
        assert_eq!(decode("10").unwrap(), 2);
        assert_eq!(decode("13").unwrap(), 5);
        assert_eq!(decode("100").unwrap(), 4);
        assert_eq!(decode("999").unwrap(), 9 * 4 + 9 * 2 + 9);
    }

    #[test]
    fn test_decode_zero_padded() {
        assert_eq!(decode("003").unwrap(), 3);
        assert_eq!(decode("010").unwrap(), 2);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode(""), Err(DecibinaryError::Empty)));
        assert!(matches!(
            decode("1a2"),
            Err(DecibinaryError::InvalidDigit {
                position: 1,
                found: 'a'
            })
        ));
    }

    #[test]
    fn test_decode_overflow() {
        let long = "9".repeat(70);
        assert!(matches!(decode(&long), Err(DecibinaryError::Overflow(_))));
    }

    #[test]
    fn test_max_length() {
        assert_eq!(max_length(0), 1);
        assert_eq!(max_length(1), 1);
        assert_eq!(max_length(2), 2);
        assert_eq!(max_length(3), 2);
        assert_eq!(max_length(4), 3);
        assert_eq!(max_length(7), 3);
        assert_eq!(max_length(8), 4);
        assert_eq!(max_length(u64::MAX), 64);
    }

    #[test]
    fn test_parse_canonical() {
        let d = Decibinary::parse("102").unwrap();
        assert_eq!(d.value(), 6);
        assert_eq!(d.len(), 3);
        assert_eq!(d.to_string(), "102");

        assert_eq!("0".parse::<Decibinary>().unwrap().value(), 0);
        assert!(matches!(
            Decibinary::parse("012"),
            Err(DecibinaryError::LeadingZero(_))
        ));
    }
}
