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

//! Point set loader.
//!
//! This module turns whitespace-delimited text into a `PointSet`. Every
//! record is three tokens, `x y label`, where `label` is a single character.
//! Records may span or share lines; only the token sequence matters. A `#`
//! starts a comment that runs to the end of the line.
//!
//! ```raw
//! # x   y   label
//!   0   0   A
//!   1   0   B
//!   0   2   A
//! ```
//!
//! The loader either checks labels against a fixed `LabelAlphabet` or infers
//! the alphabet from the symbols in order of first appearance. Input order is
//! kept, since it is the tie-break order for points of equal magnitude.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice.

use crate::{
    alphabet::LabelAlphabet,
    point_set::{PointSet, PointSetBuilder},
};
use roundel_core::{geometry::Point, num::Coordinate};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the point set loading process.
#[derive(Debug, thiserror::Error)]
pub enum PointSetLoaderError {
    /// An I/O error occurred while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A coordinate token could not be parsed into the coordinate type.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseTokenError),
    /// A label token is not exactly one character, or uses a reserved symbol.
    #[error("Invalid label '{token}' in record {record}: labels are single non-reserved characters")]
    InvalidLabel { record: usize, token: String },
    /// A label symbol is not part of the configured alphabet.
    #[error("Unknown label '{symbol}' in record {record}")]
    UnknownLabel { record: usize, symbol: char },
    /// The input ended in the middle of a record.
    #[error("Unexpected end of input inside record {record}")]
    TruncatedRecord { record: usize },
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Could not parse token '{token}' as type {type_name}")]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

/// A configurable loader for point set text.
///
/// # Configuration
/// * `with_alphabet`: check labels against a fixed alphabet. Without it, the
///   alphabet is inferred from the input.
///
/// # Examples
///
/// ```rust
/// # use roundel_model::loading::PointSetLoader;
///
/// let set = PointSetLoader::<i64>::new()
///     .from_str("0 0 A  1 0 B  0 2 A")
///     .unwrap();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.alphabet().symbols(), &['A', 'B']);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSetLoader<T> {
    alphabet: Option<LabelAlphabet>,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Default for PointSetLoader<T> {
    fn default() -> Self {
        Self {
            alphabet: None,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> PointSetLoader<T>
where
    T: Coordinate + FromStr,
{
    /// Creates a new `PointSetLoader` that infers the alphabet.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts labels to `alphabet`. Symbols outside of it are reported as
    /// `PointSetLoaderError::UnknownLabel`.
    #[inline]
    pub fn with_alphabet(mut self, alphabet: LabelAlphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Loads a point set from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<PointSet<T>, PointSetLoaderError> {
        let mut sc = Scanner::new(rdr);
        let fixed = self.alphabet.is_some();
        let mut builder = PointSetBuilder::new(self.alphabet.clone().unwrap_or_default());
        let mut inferred = LabelAlphabet::default();
        let mut pending = Vec::new();

        let mut record = 0usize;
        while let Some(x_token) = sc.next_token()? {
            let x = parse_token::<T>(&x_token)?;
            let y = match sc.next_token()? {
                Some(token) => parse_token::<T>(&token)?,
                None => return Err(PointSetLoaderError::TruncatedRecord { record }),
            };
            let label_token = sc
                .next_token()?
                .ok_or(PointSetLoaderError::TruncatedRecord { record })?;
            let symbol = single_symbol(&label_token).ok_or_else(|| {
                PointSetLoaderError::InvalidLabel {
                    record,
                    token: label_token.clone(),
                }
            })?;

            if fixed {
                builder
                    .add_labeled(Point::new(x, y), symbol)
                    .map_err(|e| PointSetLoaderError::UnknownLabel {
                        record,
                        symbol: e.symbol,
                    })?;
            } else {
                let label =
                    inferred
                        .intern(symbol)
                        .map_err(|_| PointSetLoaderError::InvalidLabel {
                            record,
                            token: label_token.clone(),
                        })?;
                pending.push((Point::new(x, y), label));
            }
            record += 1;
        }

        if fixed {
            return Ok(builder.build());
        }

        let mut builder = PointSetBuilder::with_capacity(inferred, pending.len());
        for (point, label) in pending {
            builder.add_point(point, label);
        }
        Ok(builder.build())
    }

    /// Loads a point set from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<PointSet<T>, PointSetLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a point set from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<PointSet<T>, PointSetLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a point set from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<PointSet<T>, PointSetLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

fn parse_token<T: FromStr>(token: &str) -> Result<T, ParseTokenError> {
    token.parse::<T>().map_err(|_| ParseTokenError {
        token: token.to_owned(),
        type_name: std::any::type_name::<T>(),
    })
}

/// Returns the only character of `token`, if it has exactly one.
fn single_symbol(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// A helper to read whitespace-delimited tokens from a generic reader.
struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the line buffer. Returns `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, PointSetLoaderError> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf)?;
        Ok(n > 0)
    }

    /// Returns the next token, or `None` at the end of the input.
    /// Skips whitespace and `#` comments.
    fn next_token(&mut self) -> Result<Option<String>, PointSetLoaderError> {
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Ok(None);
            }

            let rest = &self.buf[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                // Nothing left on this line.
                self.pos = self.buf.len();
                continue;
            }

            let len = trimmed
                .find(|c: char| c.is_whitespace() || c == '#')
                .unwrap_or(trimmed.len());
            let token = trimmed[..len].to_owned();
            self.pos += len;
            return Ok(Some(token));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{LabelIndex, PointIndex};

    const SMALL_SET: &str = r#"
        # x  y  label
        0  0  A     # origin
        1  0  B
        0  2  A
    "#;

    #[test]
    fn test_loads_and_infers_alphabet() {
        let set: PointSet<i64> = PointSetLoader::new().from_str(SMALL_SET).expect("Failed to load");

        assert_eq!(set.len(), 3);
        assert_eq!(set.alphabet().symbols(), &['A', 'B']);
        assert_eq!(set.point(PointIndex::new(1)), Point::new(1, 0));
        assert_eq!(set.label(PointIndex::new(2)), LabelIndex::new(0));
    }

    #[test]
    fn test_records_may_span_lines() {
        let data = "-3\n4 C 5 #comment\n-6 D";
        let set: PointSet<i32> = PointSetLoader::new().from_str(data).unwrap();
        assert_eq!(set.points(), &[Point::new(-3, 4), Point::new(5, -6)]);
        assert_eq!(set.alphabet().symbols(), &['C', 'D']);
    }

    #[test]
    fn test_fixed_alphabet_keeps_its_order() {
        let loader = PointSetLoader::<i64>::new().with_alphabet(LabelAlphabet::letters(4));
        let set = loader.from_str("7 7 D 1 1 A").unwrap();
        assert_eq!(set.num_labels(), 4);
        assert_eq!(set.labels(), &[LabelIndex::new(3), LabelIndex::new(0)]);
    }

    #[test]
    fn test_fixed_alphabet_rejects_unknown_symbol() {
        let loader = PointSetLoader::<i64>::new().with_alphabet(LabelAlphabet::letters(2));
        match loader.from_str("0 0 A\n1 1 Q") {
            Err(PointSetLoaderError::UnknownLabel { record, symbol }) => {
                assert_eq!(record, 1);
                assert_eq!(symbol, 'Q');
            }
            other => panic!("Expected UnknownLabel, got {:?}", other),
        }
    }

    #[test]
    fn test_multi_character_label_is_invalid() {
        match PointSetLoader::<i64>::new().from_str("0 0 AB") {
            Err(PointSetLoaderError::InvalidLabel { record, token }) => {
                assert_eq!(record, 0);
                assert_eq!(token, "AB");
            }
            other => panic!("Expected InvalidLabel, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_structure() {
        match PointSetLoader::<i64>::new().from_str("0 garbage A") {
            Err(PointSetLoaderError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("i64"));
            }
            other => panic!("Expected Parse error with context, got {:?}", other),
        }
    }

    #[test]
    fn test_coordinate_out_of_range_is_parse_error() {
        let res = PointSetLoader::<i8>::new().from_str("200 0 A");
        assert!(matches!(res, Err(PointSetLoaderError::Parse(_))));
    }

    #[test]
    fn test_truncated_record() {
        for data in ["0 0 A 1", "0 0 A 1 2"] {
            match PointSetLoader::<i64>::new().from_str(data) {
                Err(PointSetLoaderError::TruncatedRecord { record }) => assert_eq!(record, 1),
                other => panic!("Expected TruncatedRecord, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        let set = PointSetLoader::<i64>::new()
            .from_str("  # only a comment\n\n")
            .unwrap();
        assert!(set.is_empty());
        assert!(set.alphabet().is_empty());
    }

    #[test]
    fn test_error_messages() {
        let err = PointSetLoaderError::TruncatedRecord { record: 4 };
        assert_eq!(err.to_string(), "Unexpected end of input inside record 4");

        let err = PointSetLoaderError::from(ParseTokenError {
            token: "x".into(),
            type_name: "i32",
        });
        assert_eq!(
            err.to_string(),
            "Parse error: Could not parse token 'x' as type i32"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let res = PointSetLoader::<i64>::new().from_path("/definitely/not/here.txt");
        assert!(matches!(res, Err(PointSetLoaderError::Io(_))));
    }
}
