use clap::{Parser, Subcommand, ValueEnum};
use rust_qr_encoder::renderer::{RenderOptions, to_data_url, to_svg, to_utf8};
use rust_qr_encoder::{ECLevel, EncodeOptions, QRCode, encode};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR encoder CLI tools")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Utf8,
    Svg,
    DataUrl,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and print the rendered symbol
    Encode {
        text: String,
        /// Error correction level (L, M, Q, H)
        #[arg(long)]
        ec_level: Option<ECLevel>,
        /// Symbol version (1-40)
        #[arg(long)]
        version: Option<u8>,
        /// Mask pattern (0-7)
        #[arg(long)]
        mask: Option<u8>,
        /// Quiet zone in modules
        #[arg(long, default_value_t = 4)]
        margin: u32,
        #[arg(long, value_enum, default_value_t = Format::Utf8)]
        format: Format,
    },
    /// Print version, level, mask and segments chosen for the text
    Info {
        text: String,
        #[arg(long)]
        ec_level: Option<ECLevel>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn options(ec_level: Option<ECLevel>, version: Option<u8>, mask: Option<u8>) -> EncodeOptions {
    let mut opts = EncodeOptions::new();
    if let Some(level) = ec_level {
        opts = opts.with_error_correction_level(level);
    }
    if let Some(v) = version {
        opts = opts.with_version(v);
    }
    if let Some(m) = mask {
        opts = opts.with_mask_pattern(m);
    }
    opts
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Encode {
            text,
            ec_level,
            version,
            mask,
            margin,
            format,
        } => encode_cmd(&text, options(ec_level, version, mask), margin, format),
        Command::Info { text, ec_level } => info_cmd(&text, options(ec_level, None, None)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn encode_cmd(
    text: &str,
    opts: EncodeOptions,
    margin: u32,
    format: Format,
) -> rust_qr_encoder::Result<()> {
    let qr = encode(text, &opts)?;
    let render = RenderOptions::new().with_margin(margin);
    match format {
        Format::Utf8 => println!("{}", to_utf8(&qr, &render)),
        Format::Svg => print!("{}", to_svg(&qr, &render)),
        Format::DataUrl => println!("{}", to_data_url(&qr, &render)?),
    }
    Ok(())
}

fn info_cmd(text: &str, opts: EncodeOptions) -> rust_qr_encoder::Result<()> {
    let qr: QRCode = encode(text, &opts)?;
    println!(
        "version={} size={} error_correction={:?} mask={}",
        qr.version,
        qr.size(),
        qr.error_correction,
        qr.mask_pattern.index()
    );
    for (i, segment) in qr.segments.iter().enumerate() {
        println!(
            "  segment {}: mode={} chars={} bits={}",
            i,
            segment.mode,
            segment.char_count(),
            segment.total_bits(qr.version)
        );
    }
    Ok(())
}
