//! Word cloud rendering
//!
//! Layout and rasterisation are left to a [`CloudRenderer`] implementation.
//! Each call gets one speaker's frequency table and writes one file.

pub mod colour;
pub mod json;

pub use colour::{colourmaps, Colour};
pub use json::JsonRenderer;

use std::path::{Path, PathBuf};

use crate::core::WordFrequencyTable;
use crate::error::WcgResult;

/// Everything a renderer needs to produce one speaker's cloud
#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    pub speaker: &'a str,
    pub table: &'a WordFrequencyTable,
    pub mask: &'a Path,
    pub colour: &'a Colour,
    pub output_dir: &'a Path,
    /// Upper bound on words placed in the cloud
    pub max_words: usize,
}

impl<'a> RenderRequest<'a> {
    /// `wordcloud_<speaker>_<mask stem>_<colour>.<extension>` inside the output directory
    pub fn output_path(&self, extension: &str) -> PathBuf {
        let mask_stem = self
            .mask
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "mask".to_string());

        self.output_dir.join(format!(
            "wordcloud_{}_{}_{}.{}",
            self.speaker,
            mask_stem,
            self.colour.file_label(),
            extension
        ))
    }

    /// Up to `max_words` words, most frequent first; ties keep first-seen order
    pub fn top_words(&self) -> Vec<(&'a str, u64)> {
        let mut words: Vec<(&'a str, u64)> =
            self.table.iter().map(|(w, c)| (w.as_str(), *c)).collect();
        words.sort_by(|a, b| b.1.cmp(&a.1));
        words.truncate(self.max_words);
        words
    }
}

/// Produces a word cloud file from a frequency table
pub trait CloudRenderer {
    /// Render one cloud and return the path written
    fn render(&self, request: &RenderRequest<'_>) -> WcgResult<PathBuf>;

    /// Whether the mask file has to exist on disk
    fn requires_mask(&self) -> bool {
        true
    }
}
