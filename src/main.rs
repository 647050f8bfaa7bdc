use clap::Parser;
use keyout::keying::{self, ColorKey, DEFAULT_TOLERANCE};
use keyout::{process_file, Tolerance};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input image (any format the decoder understands)
    input: PathBuf,

    /// Output path, always written as PNG
    output: PathBuf,

    /// Color to key out as r,g,b
    /// Falls back to 0,255,0 (green) when omitted or malformed
    #[arg(allow_hyphen_values = true)]
    color: Option<String>,

    /// Pixels whose summed RGB distance to the color is below this become transparent
    #[arg(long, default_value_t = DEFAULT_TOLERANCE, allow_negative_numbers = true)]
    tolerance: Tolerance,

    /// Write the background matte (white = removed) instead of the keyed image
    #[arg(long)]
    show_matte: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let target = keying::target_color_or_default(args.color.as_deref());
    let key = ColorKey::new(target, args.tolerance);

    tracing::debug!("Target color: {}", key.target());
    tracing::debug!("Tolerance: {}", key.tolerance());

    match process_file(&args.input, &args.output, &key, args.show_matte) {
        Ok(summary) => {
            tracing::info!("Successfully processed {}", args.input.display());
            tracing::info!(
                "{}x{} in {:.1}ms",
                summary.width,
                summary.height,
                summary.elapsed.as_secs_f64() * 1000.0
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            let status = e.exit_status();
            tracing::error!("{:#}", anyhow::Error::new(e));
            ExitCode::from(status)
        }
    }
}
