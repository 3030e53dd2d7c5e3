use clap::Parser;
use std::process::ExitCode;
use texview::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match texview::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("texview: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
