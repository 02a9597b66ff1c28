use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trophic", version)]
struct Cli {
    /// Log pipeline details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a network and print every defect found.
    Validate(InArgs),
    /// Lay out a network and write the scene as JSON.
    Layout(LayoutArgs),
    /// Lay out a network and print its draw operations, one per line.
    Ops(InArgs),
}

#[derive(Parser, Debug)]
struct InArgs {
    /// Input network JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input network JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output scene JSON path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Emit compact instead of pretty-printed JSON.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Layout(args) => cmd_layout(args),
        Command::Ops(args) => cmd_ops(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> anyhow::Result<trophic::NetworkDocument> {
    trophic::NetworkDocument::from_path(path)
        .with_context(|| format!("load network '{}'", path.display()))
}

fn cmd_validate(args: InArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    doc.options.validate()?;
    match doc.network.validate(doc.options.tolerance()) {
        Ok(()) => {
            println!("ok");
            Ok(())
        }
        Err(defects) => {
            eprintln!("{defects}");
            anyhow::bail!(
                "'{}' has {} defect(s)",
                args.in_path.display(),
                defects.len()
            )
        }
    }
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let scene = doc.assemble()?;
    let json = if args.compact {
        serde_json::to_string(&scene)?
    } else {
        serde_json::to_string_pretty(&scene)?
    };

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write scene '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_ops(args: InArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let scene = doc.assemble()?;
    for op in trophic::compile_ops(&scene) {
        println!("{op}");
    }
    Ok(())
}
