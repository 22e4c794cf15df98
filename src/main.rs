use clap::Parser;
use coursebook::{Config, checks, display, loaders};
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Options {
    /// Use FILE instead of coursebook.toml
    #[arg(short, long, value_name = "FILE", default_value = "coursebook.toml")]
    config: PathBuf,

    /// Do not write the ranking file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = Config::load(&options.config)?;
    let course = loaders::load_course(&config)?;
    let ranking = course.top_students(config.report.top);
    display::display_details(&course);
    display::display_stats(&course);
    display::display_ranking(&ranking);
    checks::check_consistency(&course);
    if let Some(output) = &config.report.output {
        if options.dry_run {
            tracing::info!("dry run, not writing {}", output.display());
        } else {
            loaders::save_ranking(&config.resolve(output), &ranking)?;
        }
    }
    Ok(())
}
