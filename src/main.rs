use std::process::ExitCode;

fn main() -> ExitCode {
    csv_vars_lib::run()
}
