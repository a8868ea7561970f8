use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match lsq_curves::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {err:?}");
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
