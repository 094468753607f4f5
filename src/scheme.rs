use crate::error::Result;
use crate::normalization::NormalizedText;
use crate::template::PlateTemplate;
use lazy_static::lazy_static;
use log::debug;
use std::collections::HashSet;

/// Everything that makes one regional numbering scheme different from another.
///
/// Templates are tried in the order given; the first to validate wins.
#[derive(Clone, Debug)]
pub struct Scheme {
    name: &'static str,
    templates: Vec<PlateTemplate>,
    regions: HashSet<&'static str>,
    region_confusions: &'static [(char, &'static [char])],
    min_len: usize,
}

impl Scheme {
    pub fn new(
        name: &'static str,
        templates: Vec<PlateTemplate>,
        regions: &[&'static str],
        region_confusions: &'static [(char, &'static [char])],
        min_len: usize,
    ) -> Self {
        Scheme {
            name,
            templates,
            regions: regions.iter().copied().collect(),
            region_confusions,
            min_len,
        }
    }

    pub fn india() -> Result<Self> {
        let templates = vec![
            // MH20DV2366
            PlateTemplate::new(
                "full",
                10..=10,
                &[0, 1, 4, 5],
                &[2, 3, 6, 7, 8, 9],
                "[A-Z]{2}[0-9]{2}[A-Z]{2}[0-9]{4}",
            )?,
            // DL8CA5030
            PlateTemplate::new(
                "compact",
                8..=9,
                &[0, 1],
                &[2, 3, 4, 5, 6, 7],
                "[A-Z]{2}[0-9]{1}[A-Z]{1,2}[0-9]{4}",
            )?,
            // BH12AB1234
            PlateTemplate::new(
                "bharat",
                10..=10,
                &[0, 1, 4, 5],
                &[2, 3, 6, 7, 8, 9],
                "BH[0-9]{2}[A-Z]{2}[0-9]{4}",
            )?,
        ];

        Ok(Scheme::new(
            "india",
            templates,
            INDIAN_REGIONS,
            INDIAN_REGION_CONFUSIONS,
            6,
        ))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn templates(&self) -> &[PlateTemplate] {
        &self.templates
    }

    /// Normalized texts shorter than this are not worth correcting.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn is_region(&self, code: &str) -> bool {
        self.regions.contains(code.to_ascii_uppercase().as_str())
    }

    /// Repairs a leading region code by swapping a single confusable letter.
    ///
    /// Position 0 is tried before position 1 and never both at once. Text
    /// that cannot be repaired comes back unchanged.
    pub fn fix_region(&self, text: &NormalizedText) -> NormalizedText {
        let s = text.as_str();
        if s.len() < 2 || self.is_region(&s[..2]) {
            return text.clone();
        }

        let (prefix, rest) = s.split_at(2);
        let prefix: Vec<char> = prefix.chars().collect();

        for idx in 0..prefix.len() {
            for &replacement in self.confusable(prefix[idx]) {
                let mut code = prefix.clone();
                code[idx] = replacement;
                let code: String = code.into_iter().collect();

                if self.is_region(&code) {
                    debug!("repaired region code {}{} -> {}", prefix[0], prefix[1], code);
                    return NormalizedText::from_chars(code.chars().chain(rest.chars()));
                }
            }
        }

        text.clone()
    }

    /// True if `text` is exactly a plate of any template in this scheme.
    pub fn is_valid(&self, text: &str) -> bool {
        self.templates.iter().any(|t| self.is_valid_for(text, t))
    }

    /// True if `text` matches `template` exactly and starts with a known region.
    pub fn is_valid_for(&self, text: &str, template: &PlateTemplate) -> bool {
        template.matches(text) && text.get(..2).map_or(false, |code| self.is_region(code))
    }

    fn confusable(&self, c: char) -> &'static [char] {
        self.region_confusions
            .iter()
            .find(|&&(from, _)| from == c)
            .map(|&(_, to)| to)
            .unwrap_or(&[])
    }
}

static INDIAN_REGIONS: &[&str] = &[
    "AN", "AP", "AR", "AS", "BR", "CH", "CG", "DD", "DL", "DN", "GA", "GJ", "HP", "HR", "JH", "JK",
    "KA", "KL", "LA", "LD", "MH", "ML", "MN", "MP", "MZ", "NL", "OD", "PB", "PY", "RJ", "SK", "TN",
    "TR", "TS", "UK", "UP", "WB", "BH",
];

static INDIAN_REGION_CONFUSIONS: &[(char, &[char])] = &[
    ('H', &['M']),
    ('M', &['H']),
    ('N', &['M']),
    ('W', &['M']),
];

lazy_static! {
    pub static ref INDIA: Scheme = Scheme::india().expect("built-in patterns compile");
}

#[cfg(test)]
mod tests {
    use super::INDIA;
    use crate::normalization::normalize;

    #[test]
    fn region_table() {
        assert!(INDIA.is_region("MH"));
        assert!(INDIA.is_region("bh"));
        assert!(!INDIA.is_region("ZZ"));
        assert!(!INDIA.is_region("M"));
        assert_eq!(super::INDIAN_REGIONS.len(), 38);
    }

    #[test]
    fn known_region_is_left_alone() {
        let text = normalize("MH20DV2366");
        assert_eq!(INDIA.fix_region(&text), text);
    }

    #[test]
    fn repairs_first_position_first() {
        assert_eq!(INDIA.fix_region(&normalize("HH20DV2366")).as_str(), "MH20DV2366");
        // N -> M at position 0 already yields "MN".
        assert_eq!(INDIA.fix_region(&normalize("NN01AB1234")).as_str(), "MN01AB1234");
    }

    #[test]
    fn repairs_second_position() {
        assert_eq!(INDIA.fix_region(&normalize("MM01AB1234")).as_str(), "MH01AB1234");
        assert_eq!(INDIA.fix_region(&normalize("CM01AB1234")).as_str(), "CH01AB1234");
        assert_eq!(INDIA.fix_region(&normalize("JM05AB1234")).as_str(), "JH05AB1234");
    }

    #[test]
    fn unrepairable_region_is_unchanged() {
        for input in &["ZZ00ZZ0000", "QQ12", "W", "", "UV12AB3456"] {
            let text = normalize(input);
            assert_eq!(INDIA.fix_region(&text), text);
        }
    }

    #[test]
    fn region_fix_changes_at_most_one_leading_position() {
        let inputs = ["HH20DV2366", "WW11AA1111", "NH99", "HM", "WN", "CM01AB1234", "ZZ00ZZ0000"];
        for input in &inputs {
            let before = normalize(input);
            let after = INDIA.fix_region(&before);
            assert_eq!(before.len(), after.len());

            let changed: Vec<usize> = before
                .as_str()
                .chars()
                .zip(after.as_str().chars())
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(|(idx, _)| idx)
                .collect();

            assert!(changed.len() <= 1, "{} changed at {:?}", input, changed);
            assert!(changed.iter().all(|&idx| idx < 2));
        }
    }

    #[test]
    fn validator_is_exact() {
        assert!(INDIA.is_valid("MH20DV2366"));
        assert!(INDIA.is_valid("DL8C5030"));
        assert!(INDIA.is_valid("DL8CA5030"));
        assert!(INDIA.is_valid("BH12AB1234"));

        assert!(!INDIA.is_valid("mh20dv2366"));
        assert!(!INDIA.is_valid("MH20DV236G"));
        assert!(!INDIA.is_valid("MH 20 DV 2366"));
        assert!(!INDIA.is_valid("DL8CAF5030"));
        assert!(!INDIA.is_valid("ZZ00ZZ0000"));
        assert!(!INDIA.is_valid(""));
    }

    #[test]
    fn validator_checks_the_given_template_only() {
        let templates = INDIA.templates();
        assert!(INDIA.is_valid_for("DL8CA5030", &templates[1]));
        assert!(!INDIA.is_valid_for("DL8CA5030", &templates[0]));
        assert!(INDIA.is_valid_for("BH12AB1234", &templates[2]));
        assert!(!INDIA.is_valid_for("MH12AB1234", &templates[2]));
    }
}
