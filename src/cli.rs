use clap::Parser;

use crate::VERSION;

/// Label used when no name is given on the command line.
pub const DEFAULT_NAME: &str = "<No Name>";

#[derive(Parser, Debug)]
#[command(
    name = "cloc_summary",
    version = VERSION,
    about = "Summarize a cloc report (read on stdin) into per-language code counts"
)]
pub struct Args {
    /// Display name printed in front of the summary counts
    #[arg(value_name = "NAME", default_value = DEFAULT_NAME)]
    pub name: String,
}
