//! `xx` — assemble XX notation into a binary file.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::Level;
use xx_core::{dump, Assembler, XxConfig, XxError};

#[derive(Parser, Debug)]
#[command(name = "xx", version, about = "Assemble XX notation into raw bytes", long_about = None)]
struct Args {
    /// Path of env.toml
    #[arg(short, long, default_value = xx_core::config::DEFAULT_CONFIG_PATH)]
    env: PathBuf,

    /// Log verbosity
    #[arg(short, long, value_enum, default_value_t = LogLevel::Error)]
    verbose: LogLevel,

    /// File to open
    #[arg(short, long)]
    input: PathBuf,

    /// Output filename, written under the configured output directory
    #[arg(short, long, default_value = "outFile")]
    output: PathBuf,

    /// Dump buffer to stdout instead of writing file
    #[arg(short, long)]
    raw: bool,

    /// Dump hex instead of writing file
    #[arg(short = 'x', long)]
    hexdump: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(Level::from(args.verbose))
        .with_writer(io::stderr)
        .init();

    match main_real(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            let code = e.downcast_ref::<XxError>().map_or(1, XxError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn main_real(args: Args) -> anyhow::Result<()> {
    let config = XxConfig::load(&args.env)?;
    tracing::info!(input = %args.input.display(), "input");
    tracing::info!(hexdump = args.hexdump, raw = args.raw, "mode");
    tracing::info!(output = %args.output.display(), "output");

    let source = fs::read_to_string(&args.input).map_err(|source| XxError::ReadInput {
        path: args.input.clone(),
        source,
    })?;

    let mut asm = Assembler::new();
    for line in source.lines() {
        asm.push_line(line)?;
    }
    let out = asm.finish();

    if args.hexdump || args.raw {
        let mut stdout = io::stdout().lock();
        let written = if args.hexdump {
            dump::write_hex_dump(&mut stdout, &out)
        } else {
            stdout.write_all(&out)
        };
        written.and_then(|()| stdout.flush()).map_err(|source| XxError::WriteOutput {
            path: PathBuf::from("<stdout>"),
            source,
        })?;
    } else {
        let path = config.output_path(&args.output);
        fs::write(&path, &out).map_err(|source| XxError::WriteOutput {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "success");
    }
    Ok(())
}
