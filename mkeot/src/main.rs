//! Create an EOT file from an OpenType font.
//!
//! Takes a font file and zero or more URL prefixes, and writes a binary
//! EOT stream (header followed by the font bytes, verbatim) to standard
//! output. The URLs can currently only be in ASCII. MicroType Express
//! compression, obfuscation and subsetting are not performed.

use std::io::Write;

use clap::Parser;
use eot::convert::make_eot;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The input font file.
    font: std::path::PathBuf,

    /// URL prefixes for which the embedded font is authorized.
    urls: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let font_bytes = match std::fs::read(&args.font) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("{}: {e}", args.font.display());
            std::process::exit(1);
        }
    };

    let eot_bytes = match make_eot(&font_bytes, args.urls.iter().map(String::as_str)) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("{}: {e}", args.font.display());
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    if let Err(e) = locked.write_all(&eot_bytes) {
        eprintln!("Could not write EOT file: {e}");
        std::process::exit(1);
    }
}
