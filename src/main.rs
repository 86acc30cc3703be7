use std::process::ExitCode;

fn main() -> ExitCode {
    match adaptive_buckets::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
