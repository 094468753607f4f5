use env_logger::Env;
use log::{info, warn};
use plate_reader::{PlateResult, Result, ValidatedPlate, INDIA};
use serde::Serialize;
use std::process;
use structopt::StructOpt;

#[derive(Clone, Debug, StructOpt)]
#[structopt(about = "Corrects and validates Indian licence plates read by OCR")]
enum Opt {
    /// Correct raw OCR lines; the first line that yields a plate wins
    Correct {
        #[structopt(required = true)]
        lines: Vec<String>,
    },

    /// Check plate strings exactly, without correction
    Validate {
        #[structopt(required = true)]
        plates: Vec<String>,
    },

    /// Recognize a cropped vehicle image, then correct its text lines
    #[cfg(feature = "ocr")]
    Read {
        path: std::path::PathBuf,

        /// Directory holding Tesseract language data
        #[structopt(long, env = "PLATE_TESSDATA", default_value = "./resource")]
        tessdata: String,

        /// Tesseract language
        #[structopt(long, env = "PLATE_LANG", default_value = "eng")]
        lang: String,
    },
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    found: bool,
    plate: Option<ValidatedPlate>,
}

impl From<PlateResult> for Report {
    fn from(result: PlateResult) -> Self {
        let plate = result.into_option();
        Report {
            found: plate.is_some(),
            plate,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Verdict {
    plate: String,
    is_valid: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run(Opt::from_args()) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    }
}

fn run(opt: Opt) -> Result<bool> {
    match opt {
        Opt::Correct { lines } => report(INDIA.first_plate(&lines)),

        Opt::Validate { plates } => {
            let verdicts: Vec<_> = plates
                .into_iter()
                .map(|plate| Verdict {
                    is_valid: INDIA.is_valid(&plate),
                    plate,
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&verdicts)?);
            Ok(verdicts.iter().all(|verdict| verdict.is_valid))
        }

        #[cfg(feature = "ocr")]
        Opt::Read {
            path,
            tessdata,
            lang,
        } => {
            let mut reader = plate_reader::reader::Reader::new(&tessdata, &lang)?;
            let lines = reader.read_lines(&path)?;
            info!("{} text line(s) in {}", lines.len(), path.display());
            report(INDIA.first_plate(&lines))
        }
    }
}

fn report(result: PlateResult) -> Result<bool> {
    match result.plate() {
        Some(plate) => info!("found {} ({})", plate.as_str(), plate.template()),
        None => warn!("no valid plate"),
    }

    let report = Report::from(result);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(report.found)
}
