use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "most-active-cookie",
    about = "Find the most active cookie(s) in a cookie log for a given day",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the cookie log CSV file
    pub file_path: PathBuf,

    /// Date in the format YYYY-MM-DD
    #[arg(short, long)]
    pub date: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory for diagnostic log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Do not write a diagnostic log file
    #[arg(long)]
    pub no_log_file: bool,
}
