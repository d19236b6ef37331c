use anyhow::Context;
use lead_sheet::{
    config::Config,
    domain::{
        filter::RowFilter,
        pipeline::{run_filter, run_tabulate, setup_logging},
    },
};
use tracing::info;

const USAGE: &str = "usage: lead_sheet <tabulate|filter> [--dry-run|--dr]";

enum Mode {
    Tabulate,
    Filter,
}

fn parse_mode() -> anyhow::Result<Mode> {
    let mode = std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .ok_or_else(|| anyhow::anyhow!("missing mode. {}", USAGE))?;
    match mode.as_str() {
        "tabulate" => Ok(Mode::Tabulate),
        "filter" => Ok(Mode::Filter),
        other => anyhow::bail!("unknown mode '{}'. {}", other, USAGE),
    }
}

fn main() -> anyhow::Result<()> {
    let mode = parse_mode()?;
    let dry_run = std::env::args().any(|arg| arg == "--dry-run" || arg == "--dr");
    let config =
        Config::from_env().context("Failed to load configuration from environment variables")?;

    setup_logging(config.log_level)?;
    if dry_run {
        info!("Dry-run mode: output files will not be written");
    }

    match mode {
        Mode::Tabulate => {
            info!("Starting tabulate run");
            run_tabulate(
                &config.tabulate_input_path,
                &config.tabulate_output_path,
                dry_run,
            )?
            .log();
        }
        Mode::Filter => {
            info!("Starting filter run");
            let row_filter = RowFilter::from_config(&config);
            run_filter(
                &config.filter_input_path,
                &config.filter_output_path,
                &row_filter,
                dry_run,
            )?
            .log();
        }
    }

    Ok(())
}
