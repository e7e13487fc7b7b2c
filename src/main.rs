//! WordCloud Generator
//!
//! Generates a word cloud per speaker from a WhatsApp export or a CSV.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wordcloud_generator::attribution::{SourceFormat, UnattributedPolicy};
use wordcloud_generator::config::{Config, GIRAFFE_MASK, HEART_MASK};
use wordcloud_generator::core::IllegalChars;
use wordcloud_generator::render::{colourmaps, Colour};
use wordcloud_generator::Generator;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Specify a file to create a wordcloud from
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Specified file is a WhatsApp export (default)
    #[arg(short, long, group = "file_type")]
    whatsapp: bool,

    /// Specified file is a CSV
    #[arg(short, long, group = "file_type")]
    csv: bool,

    /// Specify a custom mask (image) for the word cloud
    #[arg(short, long, group = "mask_choice")]
    mask: Option<PathBuf>,

    /// Use the built-in heart mask (default)
    #[arg(long, group = "mask_choice")]
    heart: bool,

    /// Use the built-in giraffe mask
    #[arg(long, group = "mask_choice")]
    giraffe: bool,

    /// Use the named colourmap, e.g. PuRd, GnBu, YlOrBr, hsv, magma
    #[arg(short, long, group = "colour_choice")]
    pallet: Option<String>,

    /// Use the magma colourmap
    #[arg(long, group = "colour_choice")]
    magma: bool,

    /// Use a Purple/Red (PuRd) colourmap
    #[arg(long, group = "colour_choice")]
    purd: bool,

    /// Use a Green/Blue (GnBu) colourmap (default)
    #[arg(long, group = "colour_choice")]
    gnbu: bool,

    /// Use ALL THE COLOURS
    #[arg(long, group = "colour_choice")]
    multicolour: bool,

    /// Infer the colour from the mask file
    #[arg(long, group = "colour_choice")]
    infer_colour: bool,

    /// Characters removed from words (default ".,!?;:"); words with any other
    /// non-alphanumeric character are left out of the cloud
    #[arg(short, long)]
    ignore: Option<String>,

    /// Output directory (default ./wcg_output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Attribute lines before the first speaker to "(unknown)" instead of failing
    #[arg(long)]
    lenient: bool,

    /// Save the effective settings as the new defaults
    #[arg(long)]
    save_config: bool,

    /// Print the available colourmaps and exit
    #[arg(long)]
    colourmap: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Layer command-line choices over the loaded config
    fn apply(&self, mut config: Config) -> Result<Config> {
        if self.csv {
            config.file_type = SourceFormat::Csv;
        } else if self.whatsapp {
            config.file_type = SourceFormat::WhatsApp;
        }

        if let Some(mask) = &self.mask {
            config.mask = mask.clone();
        } else if self.heart {
            config.mask = PathBuf::from(HEART_MASK);
        } else if self.giraffe {
            config.mask = PathBuf::from(GIRAFFE_MASK);
        }

        let colour = if let Some(name) = &self.pallet {
            Some(name.as_str())
        } else if self.magma {
            Some("magma")
        } else if self.purd {
            Some("PuRd")
        } else if self.gnbu {
            Some("GnBu")
        } else if self.multicolour {
            Some("hsv")
        } else if self.infer_colour {
            Some("infer")
        } else {
            None
        };
        if let Some(name) = colour {
            config.colour = Colour::parse(name)?;
        }

        if let Some(ignore) = &self.ignore {
            config.illegal_chars = IllegalChars::from(ignore.as_str());
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if self.lenient {
            config.unattributed_policy = UnattributedPolicy::Unknown;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging (RUST_LOG wins over --verbose)
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("☁️ WordCloud Generator v{}", env!("CARGO_PKG_VERSION"));

    if args.colourmap {
        println!("Available colourmaps (use with -p):");
        for name in colourmaps() {
            println!(" - {}", name);
        }
        return Ok(());
    }

    let Some(file) = args.file.clone() else {
        println!("You specified neither a file, nor a debug option.");
        println!("For usage help, run again with the '--help' option");
        return Ok(());
    };

    let config = args.apply(Config::load()?)?;
    debug!("File:      {}", file.display());
    debug!("File Type: {}", config.file_type);
    debug!("Mask:      {}", config.mask.display());
    debug!("Colours:   {}", config.colour);
    debug!("Ignored:   {}", config.illegal_chars);

    if args.save_config {
        config.save()?;
        info!("💾 Saved settings to {}", wordcloud_generator::config::config_path().display());
    }

    let summary = Generator::new(config).run(&file)?;
    if !summary.failed.is_empty() {
        anyhow::bail!(
            "{} of {} WordCloud(s) failed: {}",
            summary.failed.len(),
            summary.speaker_count(),
            summary.failed.join(", ")
        );
    }

    Ok(())
}
