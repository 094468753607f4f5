use crate::error::Result;
use crate::normalization::{AsDigit, AsLetter, ConfusionMap, NormalizedText};
use regex::Regex;
use std::ops::RangeInclusive;

/// One plate shape: where letters and digits are expected, and the exact
/// format a corrected candidate must match.
#[derive(Clone, Debug)]
pub struct PlateTemplate {
    name: &'static str,
    lengths: RangeInclusive<usize>,
    letters: Vec<usize>,
    digits: Vec<usize>,
    pattern: Regex,
}

impl PlateTemplate {
    /// `pattern` is anchored at both ends whether or not it says so.
    pub fn new(
        name: &'static str,
        lengths: RangeInclusive<usize>,
        letters: &[usize],
        digits: &[usize],
        pattern: &str,
    ) -> Result<Self> {
        let pattern = Regex::new(&format!(
            "^(?:{})$",
            pattern.trim_start_matches('^').trim_end_matches('$')
        ))?;

        Ok(PlateTemplate {
            name,
            lengths,
            letters: letters.to_vec(),
            digits: digits.to_vec(),
            pattern,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Shape check only; region membership is the scheme's business.
    pub fn matches(&self, s: &str) -> bool {
        self.lengths.contains(&s.len()) && self.pattern.is_match(s)
    }

    /// Applies the confusion maps at this template's declared positions.
    ///
    /// Positions past the end of `text` are skipped.
    pub fn remap(&self, text: &NormalizedText) -> NormalizedText {
        let mut chars: Vec<char> = text.as_str().chars().collect();
        substitute(&mut chars, &self.letters, AsLetter);
        substitute(&mut chars, &self.digits, AsDigit);
        NormalizedText::from_chars(chars)
    }
}

fn substitute(chars: &mut [char], positions: &[usize], map: impl ConfusionMap) {
    for &idx in positions {
        if let Some(c) = chars.get_mut(idx) {
            *c = map.substitute(*c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PlateTemplate;
    use crate::normalization::normalize;

    fn full() -> PlateTemplate {
        PlateTemplate::new(
            "full",
            10..=10,
            &[0, 1, 4, 5],
            &[2, 3, 6, 7, 8, 9],
            "[A-Z]{2}[0-9]{2}[A-Z]{2}[0-9]{4}",
        )
        .unwrap()
    }

    #[test]
    fn patterns_are_anchored() {
        let template = full();
        assert!(template.matches("MH20DV2366"));
        assert!(!template.matches("XMH20DV2366"));
        assert!(!template.matches("MH20DV23661"));
        assert!(!template.matches("MH20DV236"));
    }

    #[test]
    fn explicit_anchors_are_accepted() {
        let template = PlateTemplate::new("bh", 10..=10, &[0, 1], &[2, 3], "^BH[0-9]{2}[A-Z]{2}[0-9]{4}$").unwrap();
        assert!(template.matches("BH12AB1234"));
        assert!(!template.matches("MH12AB1234"));
    }

    #[test]
    fn bad_pattern_is_an_error() {
        assert!(PlateTemplate::new("broken", 1..=1, &[], &[], "[A-Z").is_err());
    }

    #[test]
    fn remap_uses_position_classes() {
        let template = full();
        assert_eq!(template.remap(&normalize("M8Z0D5SO1B")).as_str(), "MB20DS5018");
        assert_eq!(template.remap(&normalize("MH2ODV236G")).as_str(), "MH20DV236G");
    }

    #[test]
    fn remap_skips_positions_past_the_end() {
        let template = full();
        assert_eq!(template.remap(&normalize("0O")).as_str(), "OO");
        assert_eq!(template.remap(&normalize("")).as_str(), "");
        assert_eq!(template.remap(&normalize("MH2O")).as_str(), "MH20");
    }
}
