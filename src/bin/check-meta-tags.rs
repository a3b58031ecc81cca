use site_audit::args::ValidatorArgs;
use site_audit::results::ValidatorKind;
use site_audit::runner;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = ValidatorArgs::parse_named(
        "check-meta-tags",
        "Check SEO meta tags, title and canonical link of every HTML page",
    );
    runner::execute(&[ValidatorKind::MetaTags], &args.common)
}
