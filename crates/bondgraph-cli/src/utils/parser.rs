use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid atom index '{0}'. Expected an integer such as '3' or '-1'.")]
    InvalidIndex(String),

    #[error("Invalid atom range '{0}'. Expected 'START..END' (e.g., '2..10').")]
    InvalidRange(String),

    #[error("Invalid mask character '{character}' in '{mask}'. Only '0' and '1' are allowed.")]
    InvalidMask { mask: String, character: char },

    #[error("Component '{component}' cannot be empty in '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },
}

pub fn parse_indices(input: &str) -> Result<Vec<isize>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "index list",
            input: input.to_string(),
        });
    }
    input
        .split(',')
        .map(str::trim)
        .map(|part| {
            part.parse::<isize>()
                .map_err(|_| ParseError::InvalidIndex(part.to_string()))
        })
        .collect()
}

/// Parses `START..END`; a missing start means 0 and a missing end means
/// "up to the last atom".
pub fn parse_range(input: &str) -> Result<Range<usize>, ParseError> {
    let (start, end) = input
        .trim()
        .split_once("..")
        .ok_or_else(|| ParseError::InvalidRange(input.to_string()))?;
    let bound = |value: &str, default: usize| -> Result<usize, ParseError> {
        let value = value.trim();
        if value.is_empty() {
            Ok(default)
        } else {
            value
                .parse()
                .map_err(|_| ParseError::InvalidRange(input.to_string()))
        }
    };
    Ok(bound(start, 0)?..bound(end, usize::MAX)?)
}

pub fn parse_mask(input: &str) -> Result<Vec<bool>, ParseError> {
    input
        .trim()
        .chars()
        .map(|c| match c {
            '1' => Ok(true),
            '0' => Ok(false),
            other => Err(ParseError::InvalidMask {
                mask: input.to_string(),
                character: other,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_index_lists_with_negative_values() {
        assert_eq!(parse_indices("0, 2,-1").unwrap(), vec![0, 2, -1]);
        assert_eq!(
            parse_indices("1,x"),
            Err(ParseError::InvalidIndex("x".to_string()))
        );
        assert!(matches!(
            parse_indices(" "),
            Err(ParseError::EmptyComponent { .. })
        ));
    }

    #[test]
    fn parses_ranges_with_open_bounds() {
        assert_eq!(parse_range("2..10").unwrap(), 2..10);
        assert_eq!(parse_range("..4").unwrap(), 0..4);
        assert_eq!(parse_range("3..").unwrap(), 3..usize::MAX);
        assert!(parse_range("3-4").is_err());
        assert!(parse_range("a..4").is_err());
    }

    #[test]
    fn parses_masks() {
        assert_eq!(parse_mask("1101").unwrap(), vec![true, true, false, true]);
        assert_eq!(
            parse_mask("10x"),
            Err(ParseError::InvalidMask {
                mask: "10x".to_string(),
                character: 'x'
            })
        );
    }
}
