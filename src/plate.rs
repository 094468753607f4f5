use crate::normalization::NormalizedText;
use crate::scheme::{Scheme, INDIA};
use crate::template::PlateTemplate;
use log::{debug, trace};
use serde::Serialize;

/// Text that has been through one template's corrections but is not yet
/// known to be a plate.
#[derive(Clone, Debug)]
pub struct Candidate<'a> {
    text: NormalizedText,
    template: &'a PlateTemplate,
}

impl<'a> Candidate<'a> {
    /// Remaps `text` for `template`, then repairs its region code.
    pub fn new(scheme: &Scheme, template: &'a PlateTemplate, text: &NormalizedText) -> Self {
        Candidate {
            text: scheme.fix_region(&template.remap(text)),
            template,
        }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn template(&self) -> &'a PlateTemplate {
        self.template
    }

    /// Checks the candidate against its own template only.
    pub fn validate(self, scheme: &Scheme) -> Option<ValidatedPlate> {
        if scheme.is_valid_for(self.text.as_str(), self.template) {
            Some(ValidatedPlate {
                plate: self.text.into_string(),
                template: self.template.name(),
            })
        } else {
            None
        }
    }
}

/// A plate string that exactly matches one template of its scheme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedPlate {
    plate: String,
    template: &'static str,
}

impl ValidatedPlate {
    pub fn as_str(&self) -> &str {
        &self.plate
    }

    /// Name of the template the plate validated against.
    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn into_string(self) -> String {
        self.plate
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlateResult {
    Found(ValidatedPlate),
    NotFound,
}

impl PlateResult {
    pub fn is_found(&self) -> bool {
        match self {
            PlateResult::Found(_) => true,
            PlateResult::NotFound => false,
        }
    }

    pub fn plate(&self) -> Option<&ValidatedPlate> {
        match self {
            PlateResult::Found(plate) => Some(plate),
            PlateResult::NotFound => None,
        }
    }

    pub fn into_option(self) -> Option<ValidatedPlate> {
        match self {
            PlateResult::Found(plate) => Some(plate),
            PlateResult::NotFound => None,
        }
    }
}

impl From<Option<ValidatedPlate>> for PlateResult {
    fn from(plate: Option<ValidatedPlate>) -> Self {
        plate.map_or(PlateResult::NotFound, PlateResult::Found)
    }
}

impl Scheme {
    /// Tries each template in priority order and returns the first candidate
    /// that validates against the template it was corrected for.
    pub fn correct(&self, text: &NormalizedText) -> Option<ValidatedPlate> {
        self.templates().iter().find_map(|template| {
            let candidate = Candidate::new(self, template, text);
            debug!("{} candidate for {}: {}", template.name(), text, candidate.as_str());
            candidate.validate(self)
        })
    }

    /// Normalizes one line of recognizer output and corrects it if it is long
    /// enough to be a plate.
    pub fn read_plate(&self, raw: impl AsRef<str>) -> PlateResult {
        let text = NormalizedText::new(raw.as_ref());
        trace!("normalized {:?} -> {}", raw.as_ref(), text);

        if text.len() < self.min_len() {
            return PlateResult::NotFound;
        }

        self.correct(&text).into()
    }

    /// Reads each line in order and stops at the first plate found.
    pub fn first_plate<I, S>(&self, lines: I) -> PlateResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.read_plate(line))
            .find(PlateResult::is_found)
            .unwrap_or(PlateResult::NotFound)
    }
}

pub fn read_plate(raw: impl AsRef<str>) -> PlateResult {
    INDIA.read_plate(raw)
}

pub fn first_plate<I, S>(lines: I) -> PlateResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    INDIA.first_plate(lines)
}

pub fn is_valid(plate: &str) -> bool {
    INDIA.is_valid(plate)
}
