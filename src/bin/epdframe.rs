//! Convert an image to a 6-color e-paper C byte array, fitted to the
//! 800x480 panel (rotate for vertical mounting, cover-resize, center-crop).

use std::path::PathBuf;

use clap::Parser;

use epdgen::fit::{fit_to_display, Orientation};
use epdgen::{init_tracing, loader, pipeline};

const USAGE: &str = "Usage: epdframe <horizontal|vertical> <input_image> <output_file>";

#[derive(Parser)]
#[command(name = "epdframe", about = "Convert an image to a panel-fitted e-paper byte array")]
struct Cli {
    /// Panel mounting: "horizontal" or "vertical"
    orientation: String,

    /// Path to the input image
    input: PathBuf,

    /// Path for the generated C source file
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let orientation: Orientation = match cli.orientation.parse() {
        Ok(orientation) => orientation,
        Err(_) => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    init_tracing();

    let img = loader::load_image(&cli.input)?;
    let fitted = fit_to_display(&img, orientation);
    pipeline::write_image_array(&fitted, &cli.output)?;

    println!("Data array saved to {}", cli.output.display());
    Ok(())
}
