//! Convert an image to a 6-color e-paper C byte array at native resolution.

use std::path::PathBuf;

use clap::Parser;

use epdgen::{init_tracing, loader, pipeline};

const USAGE: &str = "Usage: epdgen <input_image> <output_file>";

#[derive(Parser)]
#[command(name = "epdgen", about = "Convert an image to a 6-color e-paper byte array")]
struct Cli {
    /// Path to the input image (any format the `image` crate can decode)
    input: PathBuf,

    /// Path for the generated C source file
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Wrong argument counts print usage and exit cleanly rather than
    // surfacing a parse error.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    init_tracing();

    let img = loader::load_image(&cli.input)?;
    pipeline::write_image_array(&img, &cli.output)?;

    println!("Data array saved to {}", cli.output.display());
    Ok(())
}
