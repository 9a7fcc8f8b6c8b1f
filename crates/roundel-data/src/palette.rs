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

/// Display color assigned to a label symbol.
///
/// Only the symbols `A` to `F` have a color; plotting tools fall back to
/// their own default for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelColor {
    Red,
    Blue,
    Green,
    Orange,
    Purple,
    Black,
}

impl LabelColor {
    /// All colors in palette order, `A` to `F`.
    pub const ALL: [LabelColor; 6] = [
        LabelColor::Red,
        LabelColor::Blue,
        LabelColor::Green,
        LabelColor::Orange,
        LabelColor::Purple,
        LabelColor::Black,
    ];

    /// Returns the color for the label `symbol`, if any.
    ///
    /// The mapping depends on the symbol alone, never on its position in an
    /// alphabet, so inferred and fixed alphabets color alike.
    #[inline]
    pub const fn for_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'A' => Some(LabelColor::Red),
            'B' => Some(LabelColor::Blue),
            'C' => Some(LabelColor::Green),
            'D' => Some(LabelColor::Orange),
            'E' => Some(LabelColor::Purple),
            'F' => Some(LabelColor::Black),
            _ => None,
        }
    }

    /// Returns the lowercase color name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            LabelColor::Red => "red",
            LabelColor::Blue => "blue",
            LabelColor::Green => "green",
            LabelColor::Orange => "orange",
            LabelColor::Purple => "purple",
            LabelColor::Black => "black",
        }
    }
}

impl std::fmt::Display for LabelColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_a_to_f_have_colors() {
        let names: Vec<&str> = ('A'..='F')
            .map(|symbol| LabelColor::for_symbol(symbol).unwrap().name())
            .collect();
        assert_eq!(names, ["red", "blue", "green", "orange", "purple", "black"]);

        let all: Vec<LabelColor> = ('A'..='F').filter_map(LabelColor::for_symbol).collect();
        assert_eq!(all, LabelColor::ALL);
    }

    #[test]
    fn test_other_symbols_have_no_color() {
        assert_eq!(LabelColor::for_symbol('G'), None);
        assert_eq!(LabelColor::for_symbol('a'), None);
        assert_eq!(LabelColor::for_symbol('7'), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(LabelColor::Blue.to_string(), "blue");
    }
}
