use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};
use uuidkit::{
    EmbeddedTime, FormatOptions, UuidGen, UuidKind, decode_v1_timestamp, export_batch,
    format_uuid, is_valid, namespace, parse_uuid,
};

/// UUID generator, validator, decoder and formatter.
#[derive(Parser, Debug)]
#[command(name = "uuidkit", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one or more identifiers
    Next(NextArgs),
    /// Check an identifier; prints true or false
    Validate { id: String },
    /// Show version, variant and embedded timestamp
    Parse {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Restyle an identifier
    Format {
        id: String,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Generate every kind and check it round-trips
    Selftest,
}

#[derive(Args, Debug)]
struct NextArgs {
    /// v1, v3, v4, v5, v7 or nil
    #[arg(long, env = "UUIDKIT_KIND", default_value = "v4")]
    kind: String,

    /// Namespace UUID or alias (dns, url, oid, x500) for v3/v5
    #[arg(long)]
    namespace: Option<String>,

    /// Name for v3/v5
    #[arg(long)]
    name: Option<String>,

    /// Number of identifiers, clamped to 1..=100
    #[arg(long, env = "UUIDKIT_COUNT", default_value_t = 1)]
    count: usize,

    /// Write the batch to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Args, Debug, Clone, Copy)]
struct StyleArgs {
    #[arg(long)]
    uppercase: bool,
    #[arg(long)]
    no_hyphens: bool,
    #[arg(long)]
    braces: bool,
    #[arg(long)]
    urn: bool,
}

impl From<StyleArgs> for FormatOptions {
    fn from(s: StyleArgs) -> Self {
        Self {
            hyphens: !s.no_hyphens,
            uppercase: s.uppercase,
            braces: s.braces,
            urn: s.urn,
        }
    }
}

fn run_next(args: NextArgs) -> Result<(), String> {
    let kind = UuidKind::select(&args.kind, args.namespace.as_deref(), args.name.as_deref())
        .map_err(|e| e.to_string())?;
    let uuids = UuidGen::new()
        .generate_batch(&kind, args.count)
        .map_err(|e| e.to_string())?;

    let options = FormatOptions::from(args.style);
    let lines: Vec<String> = export_batch(&uuids)
        .lines()
        .map(|line| format_uuid(line, &options))
        .collect();
    let body = lines.join("\n");

    match args.output {
        Some(path) => {
            fs::write(&path, &body).map_err(|e| format!("{}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), count = lines.len(), "batch written");
        }
        None => println!("{body}"),
    }
    Ok(())
}

fn run_validate(id: &str) -> Result<(), String> {
    let ok = is_valid(id);
    println!("{}", if ok { "true" } else { "false" });
    if ok {
        Ok(())
    } else {
        Err("invalid uuid".to_string())
    }
}

fn run_parse(id: &str, json_out: bool) -> Result<(), String> {
    let parsed = parse_uuid(id).map_err(|e| e.to_string())?;
    if json_out {
        println!(
            "{}",
            serde_json::to_string(&parsed).map_err(|e| e.to_string())?
        );
    } else {
        println!("uuid={}", parsed.uuid);
        println!("version={}", parsed.version);
        println!("variant={}", parsed.variant);
        println!(
            "timestamp={}",
            parsed.timestamp.map(|t| t.to_rfc3339()).unwrap_or_default()
        );
    }
    Ok(())
}

fn run_selftest() -> Result<(), String> {
    let uuid_gen = UuidGen::new();
    let kinds = [
        UuidKind::Nil,
        UuidKind::V1,
        UuidKind::select("v3", Some("dns"), Some("selftest")).map_err(|e| e.to_string())?,
        UuidKind::V4,
        UuidKind::select("v5", Some("dns"), Some("selftest")).map_err(|e| e.to_string())?,
        UuidKind::V7,
    ];

    for kind in &kinds {
        let id = uuid_gen.generate(kind).map_err(|e| e.to_string())?.to_string();
        let parsed = parse_uuid(&id).map_err(|e| format!("selftest failed: {kind}: {e}"))?;
        if parsed.version != kind.version() {
            return Err(format!("selftest failed: {kind}: version {}", parsed.version));
        }
    }

    let v5 = uuid_gen.v5(&namespace::DNS, "www.example.com").to_string();
    if v5 != "2ed6657d-e927-568b-95e1-2665a8aea6a2" {
        return Err(format!("selftest failed: v5 vector {v5}"));
    }

    let v1 = uuid_gen.v1().map_err(|e| e.to_string())?.to_string();
    match decode_v1_timestamp(&v1).map_err(|e| e.to_string())? {
        EmbeddedTime::At(t) if (chrono::Utc::now() - t).num_seconds().abs() < 5 => Ok(()),
        other => Err(format!("selftest failed: v1 timestamp {other:?}")),
    }
}

fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let res = match cli.command {
        Command::Next(args) => run_next(args),
        Command::Validate { id } => run_validate(&id),
        Command::Parse { id, json } => run_parse(&id, json),
        Command::Format { id, style } => {
            println!("{}", format_uuid(&id, &style.into()));
            Ok(())
        }
        Command::Selftest => run_selftest(),
    };

    if let Err(err) = res {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
