use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_qr_encode::tools::{matrix_stats, penalty_report, save_surface, target_size_from_env};
use rust_qr_encode::{EncodeOptions, Rendered, encode_with_options, render_with_options};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR encoder CLI tools")]
struct Cli {
    /// Score the finder-look-alike penalty during mask selection
    #[arg(long, global = true)]
    rule3: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and write the rasterized symbol to an image file
    Encode {
        #[arg(long)]
        text: String,
        #[arg(long)]
        size: Option<u32>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the symbol as text
    Ascii {
        #[arg(long)]
        text: String,
    },
    /// Print version, mask and penalty breakdown
    Info {
        #[arg(long)]
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let options = EncodeOptions {
        penalty_rule3: cli.rule3 || EncodeOptions::from_env().penalty_rule3,
        ..EncodeOptions::from_env()
    };

    match cli.command {
        Command::Encode { text, size, out } => encode_cmd(&text, size, &out, &options),
        Command::Ascii { text } => ascii_cmd(&text, &options),
        Command::Info { text } => info_cmd(&text, &options),
    }
}

fn encode_cmd(text: &str, size: Option<u32>, out: &Path, options: &EncodeOptions) -> anyhow::Result<()> {
    let target = size.unwrap_or_else(target_size_from_env);
    let start = Instant::now();
    match render_with_options(text, target, options)? {
        Rendered::Surface(surface) => {
            save_surface(&surface, out)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!(
                "Wrote {} ({}x{}, {} px/module) in {:.2?}",
                out.display(),
                surface.width(),
                surface.height(),
                surface.scale(),
                start.elapsed()
            );
        }
        Rendered::Image(image) => {
            println!(
                "Input is already image data ({}), nothing to encode; display box {}x{}",
                image.media_type(),
                image.width,
                image.height
            );
        }
    }
    Ok(())
}

fn ascii_cmd(text: &str, options: &EncodeOptions) -> anyhow::Result<()> {
    let qr = encode_with_options(text, options)?;
    print!("{}", qr.to_ascii(2));
    Ok(())
}

fn info_cmd(text: &str, options: &EncodeOptions) -> anyhow::Result<()> {
    let start = Instant::now();
    let qr = encode_with_options(text, options)?;
    let elapsed = start.elapsed();

    let stats = matrix_stats(&qr);
    let report = penalty_report(&qr);
    println!("Payload: {} bytes", text.len());
    println!(
        "Version: {} ({}x{}), EC level {:?}, mask {}",
        qr.version.number(),
        qr.size(),
        qr.size(),
        qr.error_correction,
        qr.mask_pattern.index()
    );
    println!(
        "Modules: dark={} total={} dark_ratio={:.2}%",
        stats.dark_modules,
        stats.total_modules,
        stats.dark_ratio * 100.0
    );
    println!(
        "Penalty: runs={} blocks={} finder_like={} balance={} (selection total {})",
        report.runs,
        report.blocks,
        report.finder_like,
        report.balance,
        report.selection_total()
    );
    println!("Encoded in {:.2?}", elapsed);
    Ok(())
}
