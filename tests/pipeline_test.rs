//! End-to-end tests covering the full conversion pipeline and the CLI
//! argument contract.

use std::path::Path;
use std::process::Command;

use image::{DynamicImage, RgbImage};
use pretty_assertions::assert_eq;

use epdgen::fit::{fit_to_display, Orientation};
use epdgen::{loader, pipeline};

fn convert(img: DynamicImage, output: &Path) -> String {
    pipeline::write_image_array(&img, output).unwrap();
    std::fs::read_to_string(output).unwrap()
}

#[test]
fn test_near_black_and_near_white_pixels_to_exact_source() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("image.c");

    let mut img = RgbImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgb([10, 10, 10]));
    img.put_pixel(1, 0, image::Rgb([240, 240, 240]));

    let source = convert(DynamicImage::ImageRgb8(img), &output);
    assert_eq!(source, "const unsigned char imageData[2] = {\n0x00,0xFF,\n};");
}

#[test]
fn test_solid_red_pixel_encodes_as_red_device_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("red.c");

    let img = RgbImage::from_pixel(1, 1, image::Rgb([255, 0, 0]));
    let source = convert(DynamicImage::ImageRgb8(img), &output);
    assert_eq!(source, "const unsigned char imageData[1] = {\n0xE0,\n};");
}

#[test]
fn test_fitted_conversion_always_yields_panel_sized_array() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("fitted.c");

    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
        1234,
        777,
        image::Rgb([100, 150, 200]),
    ));
    let fitted = fit_to_display(&img, Orientation::Horizontal);
    let source = convert(fitted, &output);

    let expected_header = format!("const unsigned char imageData[{}] = {{\n", 800 * 480);
    assert!(
        source.starts_with(&expected_header),
        "fitted output must declare exactly 800x480 entries"
    );
}

#[test]
fn test_vertical_orientation_rotates_the_image() {
    // A tall gradient: after rotation the top row of the original becomes
    // the right column, so fitting must succeed at panel dimensions.
    let img = DynamicImage::ImageRgb8(RgbImage::from_fn(300, 900, |_, y| {
        image::Rgb([(y % 256) as u8, 0, 0])
    }));
    let fitted = fit_to_display(&img, Orientation::Vertical);
    assert_eq!((fitted.width(), fitted.height()), (800, 480));
}

#[test]
fn test_file_round_trip_through_decoder() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("output.c");

    let mut img = RgbImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgb([10, 10, 10]));
    img.put_pixel(1, 0, image::Rgb([240, 240, 240]));
    img.save(&input).unwrap();

    let loaded = loader::load_image(&input).unwrap();
    let source = convert(loaded, &output);
    assert_eq!(source, "const unsigned char imageData[2] = {\n0x00,0xFF,\n};");
}

#[test]
fn test_epdgen_without_arguments_prints_usage_and_exits_cleanly() {
    let result = Command::new(env!("CARGO_BIN_EXE_epdgen")).output().unwrap();
    assert!(
        result.status.success(),
        "missing arguments must not be treated as a failure"
    );
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("Usage: epdgen <input_image> <output_file>"));
}

#[test]
fn test_epdframe_without_arguments_prints_usage_and_exits_cleanly() {
    let result = Command::new(env!("CARGO_BIN_EXE_epdframe"))
        .output()
        .unwrap();
    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("Usage: epdframe <horizontal|vertical> <input_image> <output_file>"));
}

#[test]
fn test_epdframe_with_bad_orientation_prints_usage_and_exits_cleanly() {
    let result = Command::new(env!("CARGO_BIN_EXE_epdframe"))
        .args(["diagonal", "in.png", "out.c"])
        .output()
        .unwrap();
    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("Usage: epdframe"));
}

#[test]
fn test_epdgen_end_to_end_through_the_binary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("output.c");

    let img = RgbImage::from_pixel(1, 1, image::Rgb([255, 255, 0]));
    img.save(&input).unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_epdgen"))
        .args([input.as_os_str(), output.as_os_str()])
        .output()
        .unwrap();
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("Data array saved to"));

    let source = std::fs::read_to_string(&output).unwrap();
    assert_eq!(source, "const unsigned char imageData[1] = {\n0xFC,\n};");
}
