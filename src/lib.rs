//! Boxview: draw YOLO bounding-box annotations over an image.
//!
//! A label file lists one box per line as a class id plus a normalized
//! center and size. Boxview parses those lines, converts each box to pixel
//! corners for the image at hand, and draws the outlines so the labels can be
//! checked by eye.
//!
//! # Modules
//!
//! - [`ir`]: annotation records, typed geometry, and the label parser
//! - [`render`]: drawing boxes onto an RGB image
//! - [`image_io`]: decoding inputs and encoding the annotated output
//! - [`inspect`]: a textual summary of a label file
//! - [`error`]: error types for boxview operations

pub mod error;
pub mod image_io;
pub mod inspect;
pub mod ir;
pub mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::info;

pub use error::BoxviewError;

use ir::io_yolo::{parse_strict, parse_with_report, ParseReport};
use ir::AnnotationSet;
use render::{RenderStyle, DEFAULT_STROKE_WIDTH};

/// The boxview CLI application.
#[derive(Parser)]
#[command(name = "boxview")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Draw the boxes from a label file onto an image.
    Render(RenderArgs),
    /// Print the boxes parsed from a label file.
    Inspect(InspectArgs),
}

/// Arguments for the render subcommand.
#[derive(clap::Args)]
struct RenderArgs {
    /// Image to draw on (JPEG, PNG or BMP).
    image: PathBuf,

    /// YOLO label file for the image.
    labels: PathBuf,

    /// Where to write the annotated image; format follows the extension.
    #[arg(short, long)]
    output: PathBuf,

    /// Fail on the first malformed label line instead of skipping it.
    #[arg(long)]
    strict: bool,

    /// Outline color as six hex digits.
    #[arg(long, default_value = "ff0000")]
    color: String,

    /// Outline thickness in pixels (1 to 1024).
    #[arg(
        long,
        default_value_t = DEFAULT_STROKE_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..=1024)
    )]
    stroke_width: u32,
}

/// Arguments for the inspect subcommand.
#[derive(clap::Args)]
struct InspectArgs {
    /// YOLO label file to inspect.
    labels: PathBuf,

    /// Image whose size is used to report pixel corners.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Fail on the first malformed label line instead of skipping it.
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the boxview CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), BoxviewError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render(args)) => run_render(args),
        Some(Commands::Inspect(args)) => run_inspect(args),
        None => {
            println!("boxview {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Draw YOLO bounding-box annotations over an image.");
            println!();
            println!("Run 'boxview --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the render subcommand.
fn run_render(args: RenderArgs) -> Result<(), BoxviewError> {
    let style = RenderStyle {
        color: render::parse_color(&args.color)?,
        stroke_width: args.stroke_width,
    };

    let mut image = image_io::read_image(&args.image)?;
    let (annotations, report) = load_annotations(&args.labels, args.strict)?;

    // The decoded image is ours alone, so draw straight into it.
    let drawn = render::render_in_place(&mut image, &annotations, &style);
    image_io::write_image(&args.output, &image)?;

    info!("rendered {} onto {}", args.labels.display(), args.image.display());
    println!(
        "Drew {} of {} box(es) ({} line(s) skipped) -> {}",
        drawn,
        annotations.len(),
        report.skipped_count(),
        args.output.display()
    );
    Ok(())
}

/// Execute the inspect subcommand.
fn run_inspect(args: InspectArgs) -> Result<(), BoxviewError> {
    if !matches!(args.output.as_str(), "text" | "json") {
        return Err(BoxviewError::UnsupportedFormat(format!(
            "'{}' (supported: text, json)",
            args.output
        )));
    }

    let (annotations, parse_report) = load_annotations(&args.labels, args.strict)?;
    let image_size = match &args.image {
        Some(path) => Some(image_io::read_image(path)?.dimensions()),
        None => None,
    };

    let report = inspect::inspect_annotations(
        &annotations,
        &parse_report,
        &inspect::InspectOptions { image_size },
    );

    if args.output == "json" {
        let json = serde_json::to_string_pretty(&report)
            .map_err(BoxviewError::ReportJson)?;
        println!("{}", json);
    } else {
        print!("{}", report);
    }
    Ok(())
}

/// Reads and parses a label file under the requested line policy.
fn load_annotations(
    path: &Path,
    strict: bool,
) -> Result<(AnnotationSet, ParseReport), BoxviewError> {
    let content = image_io::read_annotation_file(path)?;
    if strict {
        let annotations = parse_strict(&content)?;
        let report = ParseReport {
            parsed: annotations.len(),
            skipped: Vec::new(),
        };
        Ok((annotations, report))
    } else {
        Ok(parse_with_report(&content))
    }
}
