use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use snap_pdf::{Collection, GenerateOptions, Quality};

#[derive(Parser)]
#[command(name = "snap2pdf", about = "Turn a set of photos into one PDF", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a PDF with one page per image
    Generate {
        /// Input files; anything that is not an image is skipped
        #[arg(required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Directory the PDF is written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Output file name without extension
        #[arg(short, long)]
        name: Option<String>,

        /// JPEG quality between 0.1 and 1.0
        #[arg(short, long)]
        quality: Option<f32>,

        /// Paper size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Page orientation
        #[arg(long, value_enum)]
        orientation: Option<OrientationArg>,

        /// Move the image at FROM to TO before generating (0-based, repeatable)
        #[arg(long = "move", value_name = "FROM:TO", value_parser = parse_move)]
        moves: Vec<(usize, usize)>,

        /// Load options from a JSON file; flags override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the effective options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,
    },

    /// Show the estimated PDF size without generating anything
    Estimate {
        #[arg(required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// JPEG quality between 0.1 and 1.0
        #[arg(short, long, default_value = "0.75")]
        quality: f32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for snap_pdf::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for snap_pdf::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

fn parse_move(s: &str) -> std::result::Result<(usize, usize), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{}'", s))?;
    let from = from
        .trim()
        .parse()
        .map_err(|e| format!("bad FROM index '{}': {}", from, e))?;
    let to = to
        .trim()
        .parse()
        .map_err(|e| format!("bad TO index '{}': {}", to, e))?;
    Ok((from, to))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output_dir,
            name,
            quality,
            paper,
            orientation,
            moves,
            config,
            save_config,
        } => {
            let mut options = match &config {
                Some(path) => GenerateOptions::load(path)
                    .await
                    .with_context(|| format!("Loading config {}", path.display()))?,
                None => GenerateOptions::default(),
            };
            if let Some(name) = name {
                options.output_name = name;
            }
            if let Some(quality) = quality {
                options.quality = Quality::new(quality);
            }
            if let Some(paper) = paper {
                options.paper_size = paper.into();
            }
            if let Some(orientation) = orientation {
                options.orientation = orientation.into();
            }
            options.validate()?;

            if let Some(path) = &save_config {
                options.save(path).await?;
                println!("Saved options → {}", path.display());
            }

            let images = snap_pdf::ingest_paths(&input).await?;
            let mut collection: Collection = images.into_iter().collect();
            for (from, to) in moves {
                if !collection.move_to(from, to) {
                    log::warn!(
                        "Ignoring move {}:{} for {} image(s)",
                        from,
                        to,
                        collection.len()
                    );
                }
            }

            let estimate = snap_pdf::estimate_size(&collection, options.quality);
            println!("Images: {}", collection.len());
            for (index, item) in collection.iter().enumerate() {
                println!("  {:>3}. {}", index + 1, item.name);
            }
            println!("  Quality: {}%", options.quality.percent());
            println!("  Estimated size: {:.2} MB", estimate.megabytes);

            let total = collection.len();
            let path = snap_pdf::generate_pdf_with_progress(
                collection.as_slice(),
                &options,
                &output_dir,
                move |done, _| log::debug!("Rendered page {}/{}", done, total),
            )
            .await?;
            println!("Generated {} page(s) → {}", total, path.display());
        }

        Commands::Estimate { input, quality } => {
            let images = snap_pdf::ingest_paths(&input).await?;
            let quality = Quality::new(quality);
            let estimate = snap_pdf::estimate_size(&images, quality);

            println!("Size Estimate:");
            println!("  Images: {}", estimate.image_count);
            println!("  Source bytes: {}", estimate.source_bytes);
            println!("  Quality: {}%", quality.percent());
            println!("  Estimated size: {:.2} MB", estimate.megabytes);
        }
    }

    Ok(())
}
