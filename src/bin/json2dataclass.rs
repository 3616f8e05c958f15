//! json2dataclass: generate record types from sample JSON
//!
//! Usage:
//!   # Read from file, print Python dataclasses
//!   json2dataclass data.json
//!
//!   # Read from stdin, emit TypeScript interfaces
//!   curl -s https://api.example.com/items | json2dataclass --backend typescript
//!
//!   # Merge every line of an NDJSON file, write Rust structs to a file
//!   json2dataclass --ndjson events.jsonl --backend rust --root-name Event -o src/event.rs

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use json2dataclass::codegen::{write_to_path, CodeGenerator, SourceWriter};
use json2dataclass::input::{read_documents, InputFormat};
use json2dataclass::{backend, GeneratorConfig, SchemaBuilder};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "json2dataclass")]
#[command(about = "Generate record types from sample JSON", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Process newline-delimited JSON (one document per line)
    #[arg(long)]
    ndjson: bool,

    /// Target language backend (python, typescript, rust)
    #[arg(long, short = 'b', default_value = "python")]
    backend: String,

    /// Class name of the top-level document (default: "root")
    #[arg(long)]
    root_name: Option<String>,

    /// Separator between parent and field names in nested class names (default: "_")
    #[arg(long)]
    separator: Option<String>,

    /// Output file (stdout if omitted)
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    /// Print the generated class list as JSON instead of source code
    #[arg(long)]
    dump_schema: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = GeneratorConfig::default();
    if let Some(root_name) = args.root_name {
        config = config.with_root_name(root_name);
    }
    if let Some(separator) = args.separator {
        config = config.with_separator(separator);
    }

    let backend = backend::get_backend(&args.backend)?;

    let reader: Box<dyn Read> = if let Some(path) = &args.input {
        Box::new(File::open(path).with_context(|| format!("Failed to open {}", path.display()))?)
    } else {
        Box::new(std::io::stdin())
    };
    let format = if args.ndjson { InputFormat::Ndjson } else { InputFormat::Json };
    let documents = read_documents(reader, format).context("Failed to read JSON input")?;

    if documents.is_empty() {
        warn!("no JSON documents found in input");
    }

    let mut builder = SchemaBuilder::new();
    builder.add_values(&documents);
    for conflict in builder.conflicts() {
        warn!(
            path = %conflict.path,
            kept = %conflict.kept,
            ignored = %conflict.ignored,
            "field seen with more than one type, keeping the first"
        );
    }
    let schema = builder.build();

    let classes = CodeGenerator::new(config).generate(&schema, backend.translator());
    info!(documents = documents.len(), classes = classes.len(), backend = backend.name(), "generated");

    let output = if args.dump_schema {
        serde_json::to_string_pretty(&classes)?
    } else {
        backend.renderer().render(&classes)
    };

    match &args.out {
        Some(path) => write_to_path(path, &output)?,
        None => {
            let mut writer = SourceWriter::new(std::io::stdout().lock());
            writer.write_source(&output)?;
            writer.flush()?;
        }
    }

    Ok(())
}
