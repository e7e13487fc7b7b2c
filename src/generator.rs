//! Word cloud generation pipeline
//!
//! read source -> attribute -> extract words per speaker -> render per speaker.
//! Any parsing failure aborts before a single cloud is rendered; a render
//! failure only loses that speaker's cloud.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::attribution::{attribute_sequential_with, attribute_tabular, MessageGroup, SourceFormat};
use crate::config::Config;
use crate::core::{build_frequency_tables, SpeakerTables};
use crate::error::WcgResult;
use crate::render::{CloudRenderer, JsonRenderer, RenderRequest};
use crate::source::{default_search_dirs, find_file, read_lines, read_table};

/// Outcome of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files written, in speaker order
    pub rendered: Vec<PathBuf>,
    /// Speakers whose cloud could not be rendered
    pub failed: Vec<String>,
}

impl RunSummary {
    pub fn speaker_count(&self) -> usize {
        self.rendered.len() + self.failed.len()
    }
}

/// Drives a single generation run with a fixed configuration
pub struct Generator {
    config: Config,
    renderer: Box<dyn CloudRenderer>,
    search_dirs: Vec<PathBuf>,
}

impl Generator {
    /// Create a generator that writes JSON frequency files
    pub fn new(config: Config) -> Self {
        Self::with_renderer(config, Box::new(JsonRenderer::new()))
    }

    pub fn with_renderer(config: Config, renderer: Box<dyn CloudRenderer>) -> Self {
        Self {
            config,
            renderer,
            search_dirs: default_search_dirs(),
        }
    }

    /// Replace the directories used to resolve relative input and mask paths
    pub fn with_search_dirs(mut self, search_dirs: Vec<PathBuf>) -> Self {
        self.search_dirs = search_dirs;
        self
    }

    /// Read `input` and group its messages by speaker
    pub fn attribute(&self, input: &Path) -> WcgResult<MessageGroup> {
        let input = find_file(input, &self.search_dirs)?;

        let group = match self.config.file_type {
            SourceFormat::WhatsApp => {
                info!("📖 Parsing data from WhatsApp export {}", input.display());
                let lines = read_lines(&input)?;
                attribute_sequential_with(&lines, self.config.unattributed_policy)
            }
            SourceFormat::Csv => {
                info!("📖 Parsing data from CSV {}", input.display());
                let table = read_table(&input)?;
                attribute_tabular(&table)
            }
        }?;

        info!(
            "🗂️ Attributed {} message(s) to {} speaker(s)",
            group.message_count(),
            group.len()
        );
        Ok(group)
    }

    /// Attribute `input` and count each speaker's words
    pub fn frequency_tables(&self, input: &Path) -> WcgResult<SpeakerTables> {
        let group = self.attribute(input)?;
        Ok(build_frequency_tables(group, &self.config.illegal_chars))
    }

    fn resolve_mask(&self) -> WcgResult<PathBuf> {
        match find_file(&self.config.mask, &self.search_dirs) {
            Ok(path) => Ok(path),
            Err(e) if self.renderer.requires_mask() => Err(e),
            Err(_) => {
                warn!(
                    "⚠️ Mask {} not found, recording it by name only",
                    self.config.mask.display()
                );
                Ok(self.config.mask.clone())
            }
        }
    }

    /// Run the full pipeline for `input`
    pub fn run(&self, input: &Path) -> WcgResult<RunSummary> {
        let mask = self.resolve_mask()?;
        let tables = self.frequency_tables(input)?;

        let mut summary = RunSummary::default();
        if tables.is_empty() {
            info!("Nothing to do");
            return Ok(summary);
        }

        fs::create_dir_all(&self.config.output_dir)?;

        info!("☁️ Generating {} WordCloud(s)", tables.len());
        for (speaker, table) in &tables {
            let request = RenderRequest {
                speaker: speaker.as_str(),
                table,
                mask: &mask,
                colour: &self.config.colour,
                output_dir: &self.config.output_dir,
                max_words: self.config.max_words,
            };

            match self.renderer.render(&request) {
                Ok(path) => {
                    info!("   {} -> {}", speaker, path.display());
                    summary.rendered.push(path);
                }
                Err(e) => {
                    warn!("❌ Failed to generate WordCloud for {}: {}", speaker, e);
                    summary.failed.push(speaker.clone());
                }
            }
        }

        info!(
            "✅ Done. Your WordClouds can be found in {}",
            self.config.output_dir.display()
        );
        Ok(summary)
    }
}
