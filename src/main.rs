use log4shell_scan::cli::parse_from;
use log4shell_scan::commands::BUILTIN;
use log4shell_scan::output::{print_error, print_report};
use log4shell_scan::scanner::engine::ScanEngine;
use std::process;
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let invocation = match parse_from(&BUILTIN, std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(e) => e.exit(),
    };

    init_logging(invocation.globals.verbose, invocation.globals.quiet);

    let config = invocation.globals.engine_config();
    debug!("Engine config: {:?}", config);

    let engine = ScanEngine::new(config);

    match engine.run(invocation.spec, &invocation.args).await {
        Ok(report) => {
            if let Err(e) = print_report(&report) {
                eprintln!("Error: failed to write report: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            print_error(&e);
            process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // stdout is reserved for the scanner report.
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
