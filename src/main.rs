use alert::config::usage;
use alert::utils::logger;
use alert::{AlertError, CliConfig};
use clap::Parser;

fn report(program: &str, err: &AlertError) -> i32 {
    if err.shows_usage() {
        eprint!("{}", usage(program));
    }
    eprintln!("{}: {}", program, err);
    err.exit_code()
}

#[tokio::main]
async fn main() {
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "alert".to_string());

    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => std::process::exit(report(&program, &AlertError::from(e))),
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let code = match alert::app::run(&program, config.args.as_slice()).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "finished");
            0
        }
        Err(e) => {
            tracing::debug!("run failed: {:?}", e);
            report(&program, &e)
        }
    };

    std::process::exit(code);
}
