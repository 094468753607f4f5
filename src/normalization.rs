use std::fmt;

/// Recognizer output reduced to uppercase ASCII letters and digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Uppercases `raw` and drops everything outside `[A-Z0-9]`.
    ///
    /// Never fails; the result may be empty.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let text = raw
            .as_ref()
            .bytes()
            .filter(u8::is_ascii_alphanumeric)
            .map(|u| u.to_ascii_uppercase() as char)
            .collect();

        NormalizedText(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    // Callers only ever substitute [A-Z0-9] for [A-Z0-9].
    pub(crate) fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        NormalizedText(chars.into_iter().collect())
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize(raw: impl AsRef<str>) -> NormalizedText {
    NormalizedText::new(raw)
}

/// Splits recognizer output into its non-blank lines, in order.
pub fn lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// A one-directional table of glyphs OCR tends to confuse.
pub trait ConfusionMap {
    fn substitute(&self, c: char) -> char;
}

/// Demotes digit-like glyphs to letters, for positions that must hold a letter.
#[derive(Copy, Clone, Debug)]
pub struct AsLetter;

impl ConfusionMap for AsLetter {
    fn substitute(&self, c: char) -> char {
        match c {
            '0' => 'O',
            '1' => 'I',
            '2' => 'Z',
            '5' => 'S',
            '8' => 'B',
            x => x,
        }
    }
}

/// Promotes letter-like glyphs to digits, for positions that must hold a digit.
#[derive(Copy, Clone, Debug)]
pub struct AsDigit;

impl ConfusionMap for AsDigit {
    fn substitute(&self, c: char) -> char {
        match c {
            'O' => '0',
            'I' => '1',
            'Z' => '2',
            'S' => '5',
            'B' => '8',
            x => x,
        }
    }
}
