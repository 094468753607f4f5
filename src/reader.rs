use crate::error::{Error, Result};
use crate::normalization::lines;
use leptess::{leptonica, tesseract::TessApi};
use log::info;
use std::path::Path;
use stopwatch::Stopwatch;

/// Tesseract over an image that already holds just the vehicle.
pub struct Reader {
    api: TessApi,
}

impl Reader {
    pub fn new(data_path: &str, lang: &str) -> Result<Self> {
        let api = TessApi::new(Some(data_path), lang).map_err(|_| Error::RecognizerInit {
            data_path: data_path.into(),
            lang: lang.into(),
        })?;

        Ok(Self { api })
    }

    /// Recognizes `path` and returns its text lines in reading order.
    pub fn read_lines(&mut self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = path.as_ref();
        let pixels = leptonica::pix_read(path)
            .ok_or_else(|| Error::Image(path.display().to_string()))?;

        let watch = Stopwatch::start_new();
        self.api.set_image(&pixels);
        let text = self.api.get_utf8_text().map_err(|_| Error::Text)?;
        info!("recognized {} in {}ms", path.display(), watch.elapsed_ms());

        Ok(lines(&text))
    }
}
