use std::process::ExitCode;

fn main() -> ExitCode {
    match ray_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("erreur: {e:#}");
            ExitCode::FAILURE
        }
    }
}
