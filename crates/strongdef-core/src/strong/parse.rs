// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::strong::tag::StrongTag;
use crate::strong::wrapper::Strong;
use std::str::FromStr;

/// The error returned when parsing a strong typedef from a string fails.
///
/// Carries the wrapper's name so that messages read in domain terms
/// ("invalid Meter") rather than in terms of the representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrongError<E> {
    /// The `StrongTag::NAME` of the wrapper being parsed.
    pub name: &'static str,
    /// The input that failed to parse.
    pub input: String,
    /// The error reported by the wrapped type's `FromStr`.
    pub cause: E,
}

impl<E> std::fmt::Display for ParseStrongError<E>
where
    E: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid {} '{}': {}", self.name, self.input, self.cause)
    }
}

impl<E> std::error::Error for ParseStrongError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Parses the wrapped value with `V::from_str` and wraps it.
///
/// # Examples
///
/// ```rust
/// # use strongdef_core::strong_type;
/// strong_type!(Meter: i32, MeterTag);
///
/// let m: Meter = "42".parse().unwrap();
/// assert_eq!(m, 42);
///
/// let err = "forty".parse::<Meter>().unwrap_err();
/// assert_eq!(err.name, "Meter");
/// assert_eq!(err.to_string(), "Invalid Meter 'forty': invalid digit found in string");
/// ```
impl<V, Tag> FromStr for Strong<V, Tag>
where
    V: FromStr,
    Tag: StrongTag,
{
    type Err = ParseStrongError<V::Err>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        V::from_str(s).map(Self::new).map_err(|cause| ParseStrongError {
            name: Tag::NAME,
            input: s.to_string(),
            cause,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ParseStrongError;
    use std::error::Error;

    crate::strong_type!(Meter: i32, MeterTag);
    crate::strong_type!(Ratio: f64, RatioTag);

    #[test]
    fn test_parse_ok() {
        let m: Meter = "-17".parse().unwrap();
        assert_eq!(m, -17);

        let r: Ratio = "0.25".parse().unwrap();
        assert_eq!(r, 0.25);
    }

    #[test]
    fn test_parse_error_carries_name_and_input() {
        let err: ParseStrongError<_> = "12x".parse::<Meter>().unwrap_err();
        assert_eq!(err.name, "Meter");
        assert_eq!(err.input, "12x");
        assert!(err.to_string().starts_with("Invalid Meter '12x': "));
    }

    #[test]
    fn test_parse_error_source_is_underlying_error() {
        let err = "".parse::<Meter>().unwrap_err();
        let source = err.source().expect("source should be present");
        assert_eq!(source.to_string(), "".parse::<i32>().unwrap_err().to_string());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        crate::strong_type!(Small: u8, SmallTag);
        assert!("256".parse::<Small>().is_err());
        assert_eq!("255".parse::<Small>().unwrap(), 255);
    }
}
