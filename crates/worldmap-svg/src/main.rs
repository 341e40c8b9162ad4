use std::process::ExitCode;

mod cli;
mod logging;
mod run;

fn main() -> ExitCode {
    let cli = match cli::parse_args::<cli::Cli>() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    logging::init(cli.verbose);
    logging::log_version_info();

    match run::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
