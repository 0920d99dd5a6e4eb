use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ftree")]
#[command(about = "Annotate an HTML list as an interactive file tree", long_about = None)]
pub struct Cli {
    /// Input HTML file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Localized label announced before directory names
    #[arg(long, default_value = "Directory")]
    pub label: String,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
