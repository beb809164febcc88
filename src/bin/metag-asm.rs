use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use metag_asm::assemble;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble a META thread-unit source listing into a binary image"
)]
struct Opts {
    #[arg(value_name = "ASMFILE")]
    input: String,
    /// Write the raw image here instead of printing the listing.
    #[arg(short, long)]
    output: Option<String>,
    /// Emit the statement listing as JSON.
    #[arg(long)]
    json: bool,
    /// Log constraint matching at debug level.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let filter = if opts.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let source = std::fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input))?;
    let program = assemble(&source)?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&program.statements)?);
    } else {
        for statement in &program.statements {
            println!("{statement}");
        }
    }

    if let Some(path) = &opts.output {
        std::fs::write(path, &program.bytes).with_context(|| format!("writing {path}"))?;
    }

    Ok(())
}
