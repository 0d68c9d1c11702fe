use std::process::ExitCode;

fn main() -> ExitCode {
    match admissions_forecast::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("exiting with code {}", err.exit_code());
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
