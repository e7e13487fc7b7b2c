//! JSON frequency output
//!
//! Writes the words a cloud would contain, with their weights and the
//! chosen mask and colours, for an external layout tool to draw.

use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::{CloudRenderer, RenderRequest};
use crate::error::{WcgError, WcgResult};

#[derive(Debug, Serialize)]
struct WordEntry<'a> {
    word: &'a str,
    count: u64,
}

#[derive(Debug, Serialize)]
struct CloudDocument<'a> {
    speaker: &'a str,
    mask: String,
    colour: String,
    distinct_words: usize,
    words: Vec<WordEntry<'a>>,
}

/// Renderer that writes one pretty-printed JSON file per speaker
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl CloudRenderer for JsonRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> WcgResult<PathBuf> {
        let document = CloudDocument {
            speaker: request.speaker,
            mask: request.mask.display().to_string(),
            colour: request.colour.to_string(),
            distinct_words: request.table.len(),
            words: request
                .top_words()
                .into_iter()
                .map(|(word, count)| WordEntry { word, count })
                .collect(),
        };

        let path = request.output_path("json");
        let content = serde_json::to_string_pretty(&document)?;
        fs::write(&path, content).map_err(|e| WcgError::Render {
            speaker: request.speaker.to_string(),
            reason: format!("{}: {}", path.display(), e),
        })?;

        debug!("Wrote {}", path.display());
        Ok(path)
    }

    fn requires_mask(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordFrequencyTable;
    use crate::render::Colour;
    use std::path::Path;

    #[test]
    fn test_render_writes_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let table: WordFrequencyTable = [("HELLO".to_string(), 2), ("WORLD".to_string(), 5)]
            .into_iter()
            .collect();
        let colour = Colour::default();
        let request = RenderRequest {
            speaker: "Alice",
            table: &table,
            mask: Path::new("heart.png"),
            colour: &colour,
            output_dir: dir.path(),
            max_words: 2000,
        };

        let path = JsonRenderer::new().render(&request).expect("render");
        assert_eq!(path, dir.path().join("wordcloud_Alice_heart_GnBu.json"));

        let content = fs::read_to_string(&path).expect("read");
        let value: serde_json::Value = serde_json::from_str(&content).expect("json");
        assert_eq!(value["speaker"], "Alice");
        assert_eq!(value["colour"], "GnBu");
        assert_eq!(value["distinct_words"], 2);
        assert_eq!(value["words"][0]["word"], "WORLD");
        assert_eq!(value["words"][0]["count"], 5);
    }

    #[test]
    fn test_render_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let table = WordFrequencyTable::new();
        let colour = Colour::default();
        let missing = dir.path().join("missing");
        let request = RenderRequest {
            speaker: "Bob",
            table: &table,
            mask: Path::new("heart.png"),
            colour: &colour,
            output_dir: &missing,
            max_words: 10,
        };

        assert!(matches!(
            JsonRenderer::new().render(&request),
            Err(WcgError::Render { .. })
        ));
    }
}
