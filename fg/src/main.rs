use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use flowgen::cli::Cli;
use flowgen::config::Config;
use flowgen::{GenError, GenerateOptions, Names, TemplateOutcome, generate};

fn setup_logging(level: Option<&str>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    match level {
        Some(level) => {
            let filter = level
                .parse::<log::LevelFilter>()
                .with_context(|| format!("Invalid log level: {}", level))?;
            builder.filter_level(filter);
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            builder.filter_level(log::LevelFilter::Warn);
        }
        None => {}
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    // Names are checked before touching the filesystem
    let names = match Names::from_options(cli.data.as_deref(), cli.result.as_deref(), cli.prepare.as_deref()) {
        Ok(names) => names,
        Err(e @ GenError::Usage { .. }) => {
            eprintln!("{}", e.to_string().yellow());
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!("flowgen starting: {} known templates", config.templates.len());

    let mut opts = GenerateOptions::new(&cli.source, &cli.output, names, config).dry_run(cli.dry_run);
    if let Some(package) = cli.package {
        opts = opts.package(package);
    }

    let report = generate(&opts).context("Failed to generate files")?;
    for outcome in &report.outcomes {
        match outcome {
            TemplateOutcome::Generated { path, .. } if cli.dry_run => {
                println!("{} would generate {}", "~".cyan(), path.display())
            }
            TemplateOutcome::Generated { path, .. } => println!("{} generated {}", "✓".green(), path.display()),
            TemplateOutcome::Skipped { name } => println!("{} skipped {} (not found)", "-".dimmed(), name),
        }
    }
    println!("{}", "[SUCCESS]".green());

    Ok(())
}
