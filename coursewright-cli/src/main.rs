use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "coursewright", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a course description and print the report.
    Validate(ValidateArgs),
    /// Compile a course description into blocks.
    Compile(CompileArgs),
    /// Validate, analyze and compile without publishing.
    DryRun(DryRunArgs),
    /// Write the create/append request bodies for a course to a directory.
    Publish(PublishArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input course JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input course JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Treat text literally instead of recognizing inline markdown.
    #[arg(long, default_value_t = false)]
    no_markdown: bool,

    /// Emit only section blocks, without page header and footer.
    #[arg(long, default_value_t = false)]
    no_scaffolding: bool,
}

#[derive(Parser, Debug)]
struct DryRunArgs {
    /// Input course JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Treat text literally instead of recognizing inline markdown.
    #[arg(long, default_value_t = false)]
    no_markdown: bool,
}

#[derive(Parser, Debug)]
struct PublishArgs {
    /// Input course JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving one JSON file per request.
    #[arg(long)]
    out_dir: PathBuf,

    /// Top-level blocks per request (1 to 100).
    #[arg(long, default_value_t = coursewright::publish::materialize::MAX_BATCH_SIZE)]
    batch_size: usize,

    /// Publish even when validation reports errors.
    #[arg(long, default_value_t = false)]
    skip_validation: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(cmd = ?cli.cmd, "starting");
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Compile(args) => cmd_compile(args),
        Command::DryRun(args) => cmd_dry_run(args),
        Command::Publish(args) => cmd_publish(args),
    }
}

fn load(path: &Path) -> anyhow::Result<coursewright::Course> {
    coursewright::Course::from_path(path)
        .with_context(|| format!("load course '{}'", path.display()))
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let course = load(&args.in_path)?;
    let report = course.validate();
    print_json(&report)?;
    if !report.valid {
        anyhow::bail!(
            "'{}' has {} validation error(s)",
            args.in_path.display(),
            report.errors.len()
        );
    }
    Ok(())
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let course = load(&args.in_path)?;
    let opts = coursewright::CompileOpts {
        parse_markdown: !args.no_markdown,
        scaffolding: !args.no_scaffolding,
    };
    let blocks = course.compile(&opts);

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let s = serde_json::to_string_pretty(&blocks).context("serialize blocks")?;
            std::fs::write(&out, s).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {} blocks to {}", blocks.len(), out.display());
        }
        None => print_json(&blocks)?,
    }
    Ok(())
}

fn cmd_dry_run(args: DryRunArgs) -> anyhow::Result<()> {
    let course = load(&args.in_path)?;
    let opts = coursewright::CompileOpts {
        parse_markdown: !args.no_markdown,
        ..coursewright::CompileOpts::default()
    };
    print_json(&course.dry_run(&opts))
}

fn cmd_publish(args: PublishArgs) -> anyhow::Result<()> {
    let course = load(&args.in_path)?;
    let sink = coursewright::JsonDirSink::new(&args.out_dir)?;
    let opts = coursewright::MaterializeOpts {
        batch_size: args.batch_size,
        validate_first: !args.skip_validation,
        ..coursewright::MaterializeOpts::default()
    };
    let mut materializer = coursewright::Materializer::new(sink, opts);
    let report = materializer
        .publish(course.def())
        .with_context(|| format!("publish '{}'", args.in_path.display()))?;
    print_json(&report)?;
    eprintln!(
        "wrote {} request(s) to {}",
        materializer.sink().written().len(),
        args.out_dir.display()
    );
    Ok(())
}
