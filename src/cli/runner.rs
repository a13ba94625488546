use std::io::{self, Write};

use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

use rifeinterp::core::command::render_command;
use rifeinterp::{ExitCheck, InterpolationRequest, RifeInterpolator, RifeSettings};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let builder = tracing_subscriber::fmt().with_writer(io::stderr);
    // try_init: a subscriber may already be installed when run from tests.
    if verbose {
        let _ = builder.with_max_level(Level::DEBUG).try_init();
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = builder.with_env_filter(filter).try_init();
    }
}

fn settings_from_args(args: &CliArgs) -> RifeSettings {
    RifeSettings {
        binary: Some(args.binary.clone()),
        model: args.model.clone(),
        scale: args.scale,
        tta: args.tta,
        uhd: args.uhd,
        gpu_id: args.gpu_id,
        threads: args.threads,
    }
}

fn request_from_args(args: &CliArgs) -> InterpolationRequest {
    // Separators that survive argument parsing are not meant for the binary.
    let extra = args.extra_args.iter().filter(|a| a.as_str() != "--").cloned();
    InterpolationRequest::new(&args.first, &args.second, &args.output)
        .with_time(args.time)
        .with_extra_args(extra)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log);

    let interpolator = RifeInterpolator::from_settings(settings_from_args(&args))?;
    let request = request_from_args(&args);
    debug!("Configuration: {:?}", interpolator.config());

    if args.dry_run {
        let command = interpolator.build_command(&request)?;
        let mut stdout = io::stdout().lock();
        if args.json {
            let tokens: Vec<String> = command
                .iter()
                .map(|t| t.to_string_lossy().into_owned())
                .collect();
            serde_json::to_writer(&mut stdout, &tokens)?;
            writeln!(stdout)?;
        } else {
            writeln!(stdout, "{}", render_command(&command))?;
        }
        return Ok(());
    }

    interpolator.interpolate(&request, ExitCheck::Strict)?;
    info!(
        "Successfully interpolated: {:?} + {:?} -> {:?}",
        request.first, request.second, request.output
    );
    Ok(())
}
