//! CLI logic for the Lineage family tree tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::fs;

use log::info;

use lineage::{FamilyBuilder, LineageError};

/// Run the Lineage CLI application
///
/// Reads the input file, renders it in the requested [`Format`], and writes
/// the result to the output file, or to standard output when none is given.
///
/// # Errors
///
/// Returns `LineageError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - An undeclared generation anchor
pub fn run(args: &Args) -> Result<(), LineageError> {
    info!(
        input_path = args.input,
        format:? = args.format;
        "Processing family tree"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = FamilyBuilder::new(app_config);
    let output = render(&builder, &source, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path; "Output written successfully");
        }
        None => print!("{output}"),
    }

    Ok(())
}

fn render(builder: &FamilyBuilder, source: &str, format: Format) -> Result<String, LineageError> {
    match format {
        Format::Timeline => Ok(builder.render_timeline(&builder.parse(source)?)),
        Format::Generations => Ok(builder.render_generations(&builder.parse(source)?)),
        #[cfg(feature = "graphviz")]
        Format::Tree => builder.render_tree(&builder.parse(source)?),
        #[cfg(feature = "graphviz")]
        Format::Structure => builder.render_structure(source),
        #[cfg(not(feature = "graphviz"))]
        Format::Tree | Format::Structure => Err(LineageError::Config(format!(
            "format `{format:?}` requires the `graphviz` feature"
        ))),
    }
}
