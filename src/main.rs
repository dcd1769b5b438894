use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::{error, info};

use most_active_cookie::{most_active_cookies, utils, Args, DateArg};

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.no_log_file {
        if let Err(e) = utils::setup_logging(args.verbose, &args.log_dir) {
            eprintln!("Warning: diagnostic logging disabled: {:#}", e);
        }
    }

    info!(action = "start", component = "main", file_path = ?args.file_path, date = %args.date, "Starting processing");

    let date = DateArg::from(args.date.as_str());
    match most_active_cookies(&args.file_path, &date) {
        Ok(result) => {
            info!(action = "complete", component = "main", "End of processing");
            utils::print_results(&result, &mut io::stdout().lock())?;
            Ok(())
        }
        Err(e) => {
            error!(action = "abort", component = "main", kind = ?e.kind(), "Error: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
