use spooksearch::context::Environment;
use spooksearch::status::ExitStatus;
use spooksearch::{core, signals};

/// Entry point - installs the Ctrl+C handler and calls core::run()
fn main() -> ExitStatus {
    signals::install_handler();

    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    let status = core::run(args, env);

    if signals::was_interrupted() {
        return ExitStatus::Interrupted;
    }

    status
}
