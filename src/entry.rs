use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::app::run_probe;
use crate::args::ProbeArgs;
use crate::config::{apply_config, load_config};
use crate::error::AppResult;

/// Parses arguments, applies the config file, and runs the probe to
/// completion. Request failures never make this return an error.
///
/// # Errors
///
/// Returns an error for invalid arguments or config, or when the HTTP client
/// or the async runtime cannot be built.
pub fn run() -> AppResult<()> {
    let (args, matches) = parse_args()?;
    let args = resolve_args(args, &matches)?;

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let measurement = runtime.block_on(run_probe(&args))?;
    tracing::debug!(
        "Probe finished: {}/{} runs succeeded",
        measurement.success_count(),
        measurement.len()
    );
    Ok(())
}

fn parse_args() -> AppResult<(ProbeArgs, ArgMatches)> {
    let matches = ProbeArgs::command().get_matches();
    let args = ProbeArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn resolve_args(mut args: ProbeArgs, matches: &ArgMatches) -> AppResult<ProbeArgs> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, matches, &config)?;
    }
    Ok(args)
}
