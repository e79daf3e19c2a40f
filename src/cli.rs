use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "photo-sorter")]
#[command(about = "Sort photos into a year/month/day directory layout based on their EXIF date")]
pub struct Args {
    /// Input directory containing the photos to sort
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory where the dated layout will be created
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Delete each source file after its copy has been verified
    #[arg(short, long, default_value_t = false)]
    pub remove: bool,

    /// Show what would be done without actually copying files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
