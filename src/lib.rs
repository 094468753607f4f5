//! Corrects and validates licence-plate text recovered from OCR.
//!
//! Raw recognizer output is normalized, then each template of a [`Scheme`]
//! gets one attempt at remapping confusable glyphs and repairing the region
//! code. The first candidate that validates against its own template wins.

pub mod error;
pub mod normalization;
pub mod plate;
#[cfg(feature = "ocr")]
pub mod reader;
pub mod scheme;
pub mod template;

pub use error::{Error, Result};
pub use normalization::{normalize, NormalizedText};
pub use plate::{first_plate, is_valid, read_plate, Candidate, PlateResult, ValidatedPlate};
pub use scheme::{Scheme, INDIA};
pub use template::PlateTemplate;
