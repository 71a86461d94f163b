//! `barqode` CLI: decode a barcode from a textual bit-matrix file. Plain
//! `clap` derive subcommands, with `env_logger::init()` as the first line of
//! `main` before any decode work.

use barqode_rs::barcode::{BarcodeFormat, ReaderOptions};
use barqode_rs::bit_matrix::BitMatrix;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "barqode", version, about = "Decode barcodes from a rectified bit-matrix file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a bit-matrix text file (`#`/space or `1`/`0` per module, one row per line).
    Decode {
        path: PathBuf,
        #[arg(long, value_enum)]
        format: CliFormat,
    },
    /// List the formats this build understands.
    List,
}

#[derive(Clone, clap::ValueEnum)]
enum CliFormat {
    Qr,
    DataMatrix,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Decode { path, format } => {
            if let Err(err) = run_decode(&path, format) {
                log::error!("{err}");
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        Command::List => {
            for format in barqode_rs::barcode::ALL_FORMATS {
                println!("{format:?}");
            }
        }
    }
}

fn run_decode(path: &PathBuf, format: CliFormat) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let matrix = parse_bit_matrix(&text)?;
    let format = match format {
        CliFormat::Qr => BarcodeFormat::QRCode,
        CliFormat::DataMatrix => BarcodeFormat::DataMatrix,
    };
    let options = ReaderOptions::default();
    let barcode = barqode_rs::decode::decode_barcode(&matrix, format, &options)?;
    println!("text: {}", barcode.text);
    println!("symbology: {}", barcode.symbology_identifier);
    if let Some(v) = &barcode.metadata.version {
        println!("version: {v}");
    }
    Ok(())
}

/// One row per line; `#`/`1` is a set module, anything else (space, `.`, `0`) is unset.
fn parse_bit_matrix(text: &str) -> Result<BitMatrix, Box<dyn std::error::Error>> {
    let rows: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    let height = rows.len() as u32;
    let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as u32;
    if height == 0 || width == 0 {
        return Err("empty bit-matrix input".into());
    }
    let mut matrix = BitMatrix::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if x as u32 >= width {
                break;
            }
            matrix.set(x as u32, y as u32, ch == '#' || ch == '1');
        }
    }
    Ok(matrix)
}
