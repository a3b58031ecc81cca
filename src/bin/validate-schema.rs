use site_audit::args::ValidatorArgs;
use site_audit::results::ValidatorKind;
use site_audit::runner;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = ValidatorArgs::parse_named(
        "validate-schema",
        "Validate JSON-LD structured data embedded in every HTML page",
    );
    runner::execute(&[ValidatorKind::StructuredData], &args.common)
}
