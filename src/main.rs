use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = shopcart::run() {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
