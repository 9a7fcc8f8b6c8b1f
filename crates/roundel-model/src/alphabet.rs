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

//! Label alphabets.
//!
//! A `LabelAlphabet` is an ordered set of distinct `char` symbols. Points
//! reference labels by `LabelIndex`, the position of the symbol in the
//! alphabet, which keeps the per-point label a plain integer and lets the
//! scanner track seen labels in a bitset sized to the alphabet.
//!
//! Symbols must be printable tokens for the text format: whitespace and the
//! comment marker `#` are rejected.

use crate::index::LabelIndex;
use rustc_hash::FxHashMap;

/// Errors raised while constructing or extending a `LabelAlphabet`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    /// The same symbol was supplied twice.
    #[error("label symbol '{symbol}' appears more than once in the alphabet")]
    DuplicateSymbol { symbol: char },
    /// The symbol cannot be represented in the point set text format.
    #[error("label symbol {symbol:?} is reserved (whitespace or '#')")]
    ReservedSymbol { symbol: char },
}

/// A symbol that is not part of the alphabet it was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("label symbol '{symbol}' is not part of the alphabet")]
pub struct UnknownLabelError {
    /// The offending symbol.
    pub symbol: char,
}

/// An ordered set of distinct label symbols.
///
/// # Examples
///
/// ```rust
/// # use roundel_model::alphabet::LabelAlphabet;
///
/// let alphabet = LabelAlphabet::new(['A', 'B', 'C']).unwrap();
/// let b = alphabet.index_of('B').unwrap();
/// assert_eq!(b.get(), 1);
/// assert_eq!(alphabet.symbol(b), 'B');
/// assert!(alphabet.index_of('Z').is_none());
/// ```
#[derive(Clone, Default)]
pub struct LabelAlphabet {
    symbols: Vec<char>,
    lookup: FxHashMap<char, LabelIndex>,
}

impl LabelAlphabet {
    /// Creates an alphabet from symbols in the given order.
    ///
    /// Returns an error if a symbol repeats or is reserved.
    pub fn new<I>(symbols: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut alphabet = Self::default();
        for symbol in symbols {
            if alphabet.index_of(symbol).is_some() {
                return Err(AlphabetError::DuplicateSymbol { symbol });
            }
            alphabet.intern(symbol)?;
        }
        Ok(alphabet)
    }

    /// Creates the alphabet of the first `count` upper-case Latin letters,
    /// `A`, `B`, `C`, ...
    ///
    /// # Panics
    ///
    /// Panics if `count > 26`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roundel_model::alphabet::LabelAlphabet;
    ///
    /// let alphabet = LabelAlphabet::letters(6);
    /// assert_eq!(alphabet.symbols(), &['A', 'B', 'C', 'D', 'E', 'F']);
    /// ```
    pub fn letters(count: usize) -> Self {
        assert!(
            count <= 26,
            "called `LabelAlphabet::letters` with count {} but only 26 letters exist",
            count
        );

        let mut alphabet = Self::default();
        alphabet.symbols.reserve(count);
        for symbol in ('A'..='Z').take(count) {
            let index = LabelIndex::new(alphabet.symbols.len());
            alphabet.symbols.push(symbol);
            alphabet.lookup.insert(symbol, index);
        }
        alphabet
    }

    /// Returns the index of `symbol`, adding it to the end of the alphabet if
    /// it is not present yet.
    pub fn intern(&mut self, symbol: char) -> Result<LabelIndex, AlphabetError> {
        if symbol.is_whitespace() || symbol == '#' {
            return Err(AlphabetError::ReservedSymbol { symbol });
        }
        if let Some(index) = self.index_of(symbol) {
            return Ok(index);
        }
        let index = LabelIndex::new(self.symbols.len());
        self.symbols.push(symbol);
        self.lookup.insert(symbol, index);
        Ok(index)
    }

    /// Returns the number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet has no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns `true` if `label` refers to a symbol of this alphabet.
    #[inline]
    pub fn contains(&self, label: LabelIndex) -> bool {
        label.get() < self.symbols.len()
    }

    /// Returns the index of `symbol`, if present.
    #[inline]
    pub fn index_of(&self, symbol: char) -> Option<LabelIndex> {
        self.lookup.get(&symbol).copied()
    }

    /// Like `index_of`, but reports a missing symbol as an error.
    #[inline]
    pub fn try_index_of(&self, symbol: char) -> Result<LabelIndex, UnknownLabelError> {
        self.index_of(symbol).ok_or(UnknownLabelError { symbol })
    }

    /// Returns the symbol at `label`.
    ///
    /// # Panics
    ///
    /// Panics if `label` is out of range.
    #[inline]
    pub fn symbol(&self, label: LabelIndex) -> char {
        let index = label.get();
        assert!(
            index < self.len(),
            "called `LabelAlphabet::symbol` with label index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );
        self.symbols[index]
    }

    /// Returns all symbols in alphabet order.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Iterates over `(LabelIndex, symbol)` pairs in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (LabelIndex, char)> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, &symbol)| (LabelIndex::new(i), symbol))
    }
}

impl PartialEq for LabelAlphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for LabelAlphabet {}

impl std::fmt::Debug for LabelAlphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LabelAlphabet").field(&self.symbols).finish()
    }
}

impl std::fmt::Display for LabelAlphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, "}}")
    }
}
