use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use blockdct::consts::{BLOCK_SIZE, DEFAULT_MAX_VALUE};
use blockdct::{
    read_coefficients, read_ppm_file, write_coefficients, write_ppm_file, Decoder, Encoder,
    LevelBlock,
};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "blockdct", version, about = "8x8 block DCT transform coder")]
struct Args {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Worker threads for block processing (default: one per core)
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a binary PPM into zigzag coefficient text
    Encode {
        input: PathBuf,
        /// Coefficient text destination (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Print the quantized 8x8x3 block at this row-major index instead
        #[arg(long)]
        block_index: Option<usize>,
    },
    /// Decode coefficient text back into a binary PPM
    Decode {
        input: PathBuf,
        output: PathBuf,
        /// Largest sample value of the decoded raster
        #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
        max_value: u16,
    },
}

fn print_block(levels: &[LevelBlock; 3], mut out: impl Write) -> io::Result<()> {
    for (name, block) in ["Y", "Cb", "Cr"].iter().zip(levels) {
        writeln!(out, "{}:", name)?;
        for row in block.chunks_exact(BLOCK_SIZE) {
            let line: Vec<String> = row.iter().map(|v| format!("{:5}", v)).collect();
            writeln!(out, "{}", line.join(" "))?;
        }
    }
    Ok(())
}

fn encode(input: PathBuf, output: Option<PathBuf>, block_index: Option<usize>) -> Result<()> {
    let image =
        read_ppm_file(&input).with_context(|| format!("failed to read {}", input.display()))?;
    info!(
        width = image.width(),
        height = image.height(),
        max_value = image.max_value,
        "loaded {}",
        input.display()
    );

    let encoder = Encoder::for_max_value(image.max_value)?;

    if let Some(index) = block_index {
        let levels = encoder
            .quantized_block(&image, index)
            .with_context(|| format!("cannot inspect block {}", index))?;
        print_block(&levels, io::stdout().lock())?;
        return Ok(());
    }

    let coefficients = encoder.encode(&image)?;
    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_coefficients(&coefficients, file)?;
            info!(blocks = coefficients.block_count(), "wrote {}", path.display());
        }
        None => write_coefficients(&coefficients, io::stdout().lock())?,
    }
    Ok(())
}

fn decode(input: PathBuf, output: PathBuf, max_value: u16) -> Result<()> {
    let file = File::open(&input).with_context(|| format!("failed to open {}", input.display()))?;
    let coefficients = read_coefficients(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let image = Decoder::for_max_value(max_value)?.decode(&coefficients)?;
    write_ppm_file(&image, &output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        width = image.width(),
        height = image.height(),
        "wrote {}",
        output.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| anyhow!("rayon init failed: {}", e))?;
    }

    match args.command {
        Command::Encode {
            input,
            output,
            block_index,
        } => encode(input, output, block_index),
        Command::Decode {
            input,
            output,
            max_value,
        } => decode(input, output, max_value),
    }
}
