//! Standalone demo: generate a palette, tune nothing, export a PNG sheet.
//!
//! Usage: `cargo run --example export -- [hex] [mode] [out.png]`

use std::path::PathBuf;
use std::process::ExitCode;

use color_alchemy::{export_png, HarmonyMode, Hsv, Palette};

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut args = std::env::args().skip(1);
    let hex = args.next().unwrap_or_else(|| "#bb86fc".to_string());
    let mode = match args.next() {
        Some(raw) => match raw.parse::<HarmonyMode>() {
            Ok(mode) => mode,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => HarmonyMode::SmartUi,
    };
    let out = PathBuf::from(args.next().unwrap_or_else(|| "palette.png".to_string()));

    let base = Hsv::from_hex(&hex);
    let palette = Palette::generate(base, mode, &mut rand::rng());

    for swatch in palette.swatches() {
        println!(
            "{:<10} {}  on white: {:>4.1} {:<14} on black: {:>4.1} {}",
            swatch.label,
            swatch.hex,
            swatch.report.on_white.ratio,
            swatch.report.on_white.rating.label(),
            swatch.report.on_black.ratio,
            swatch.report.on_black.rating.label(),
        );
    }

    if let Err(err) = export_png(&palette, &out) {
        eprintln!("export failed: {err}");
        return ExitCode::FAILURE;
    }
    println!("saved {}", out.display());
    ExitCode::SUCCESS
}
