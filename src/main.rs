use clap::Parser;
use site_audit::args::{AuditArgs, convert_check};
use site_audit::runner;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = AuditArgs::parse();
    let checks = convert_check(args.check);

    ::log::info!("Running {} validator(s)", checks.len());
    runner::execute(&checks, &args.common)
}
