use crate::value::Value;

/// A named segment matcher usable in patterns as `{name:|key}`.
///
/// `convert` is only called on segments for which `matches` returned true,
/// and may change the representation of the captured value.
pub trait ShortRegex {
    fn matches(&self, segment: &str) -> bool;

    fn convert(&self, segment: &str) -> Value;
}

/// Matches natural numbers without leading zeros and converts them to
/// [`Value::Int`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalNumber;

impl ShortRegex for NaturalNumber {
    fn matches(&self, segment: &str) -> bool {
        match segment.as_bytes().split_first() {
            Some((b'1'..=b'9', rest)) => rest.iter().all(u8::is_ascii_digit),
            _ => false,
        }
    }

    fn convert(&self, segment: &str) -> Value {
        // digit strings longer than i64 stay as text
        match segment.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Str(segment.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NaturalNumber, ShortRegex};
    use crate::value::Value;

    #[test]
    fn natural_number_matches() {
        let sreg = NaturalNumber;
        assert!(sreg.matches("1"));
        assert!(sreg.matches("123"));
        assert!(!sreg.matches("0"));
        assert!(!sreg.matches("0123"));
        assert!(!sreg.matches(""));
        assert!(!sreg.matches("12a"));
        assert!(!sreg.matches("-3"));
    }

    #[test]
    fn natural_number_converts() {
        let sreg = NaturalNumber;
        assert_eq!(sreg.convert("123"), Value::Int(123));

        let huge = "123456789012345678901234567890";
        assert!(sreg.matches(huge));
        assert_eq!(sreg.convert(huge), Value::Str(huge.into()));
    }
}
