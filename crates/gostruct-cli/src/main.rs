use anyhow::Context;
use clap::Parser;
use gostruct_config::GostructConfig;
use gostruct_parser::{ExtractOptions, LoadOptions, Output, extract_path};

mod cli;

fn main() {
    if let Err(error) = run() {
        eprintln!("gostruct error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = GostructConfig::load_with_dotenv().context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("invalid command-line override")?;

    let output = extract(&cli, &config)?;
    println!("{}", render(&output, config.output.pretty)?);
    Ok(())
}

fn extract(cli: &cli::Cli, config: &GostructConfig) -> anyhow::Result<Output> {
    let load = LoadOptions {
        recursive: config.scan.recursive,
        include_tests: config.scan.include_tests,
        respect_gitignore: config.scan.respect_gitignore,
        exclude: config.scan.exclude.clone(),
        filter: None,
    };
    let options = ExtractOptions {
        include_bodies: config.scan.include_bodies,
    };

    tracing::debug!(path = %cli.path.display(), ?load, "extracting");
    extract_path(&cli.path, &load, &options)
        .with_context(|| format!("failed to extract declarations from {}", cli.path.display()))
}

fn render(output: &Output, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    Ok(rendered)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GOSTRUCT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
