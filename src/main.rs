mod cli;
mod layout;
mod metadata;
mod placer;
mod scanner;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use placer::Placement;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Args::parse();

    // Validate paths
    if !args.input.exists() {
        anyhow::bail!("Input directory does not exist: {}", args.input.display());
    }
    if !args.input.is_dir() {
        anyhow::bail!("Input path is not a directory: {}", args.input.display());
    }

    // Scan for photo files
    println!(
        "Sorting photos from {} to {}",
        args.input.display(),
        args.output.display()
    );
    let scanned = scanner::scan_photos(&args.input, &args.output)?;
    if scanned.is_empty() {
        println!("No photo files found.");
        return Ok(());
    }
    println!("Found {} files", scanned.len());

    if args.dry_run {
        println!("[dry-run] No files will be copied.");
    } else {
        std::fs::create_dir_all(&args.output)?;
    }

    let pb = ProgressBar::new(scanned.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Sorting {pos}/{len} {wide_bar} {msg}")?
            .progress_chars("=> "),
    );

    let mut sorted = 0usize;
    let mut already_sorted = 0usize;
    let mut conflicts = 0usize;
    let mut failed = 0usize;

    for file in &scanned {
        let file_name = file.file_name().unwrap_or_default().to_string_lossy();
        pb.set_message(file_name.to_string());

        // Resolve date, plan layout, place
        let date = match metadata::resolve_date(file) {
            Ok(date) => date,
            Err(e) => {
                pb.suspend(|| {
                    log::warn!("Skipping {}: could not resolve a date ({})", file.display(), e)
                });
                failed += 1;
                pb.inc(1);
                continue;
            }
        };
        let dest_dir = args.output.join(layout::date_path(date));

        if args.dry_run {
            pb.suspend(|| {
                println!("[dry-run] {} -> {}", file.display(), dest_dir.display());
            });
            sorted += 1;
            pb.inc(1);
            continue;
        }

        match placer::place_file(file, &dest_dir, args.remove) {
            Ok(Placement::Copied(dest)) => {
                pb.suspend(|| log::info!("Copied {} to {}", file.display(), dest.display()));
                sorted += 1;
            }
            Ok(Placement::Moved(dest)) => {
                pb.suspend(|| log::info!("Moved {} to {}", file.display(), dest.display()));
                sorted += 1;
            }
            Ok(Placement::AlreadySorted(dest)) => {
                pb.suspend(|| {
                    log::info!("Already sorted: {} at {}", file.display(), dest.display())
                });
                already_sorted += 1;
            }
            Ok(Placement::Conflict(dest)) => {
                pb.suspend(|| {
                    log::warn!(
                        "Conflict: {} differs from existing {}, leaving both in place",
                        file.display(),
                        dest.display()
                    )
                });
                conflicts += 1;
            }
            Err(e) => {
                pb.suspend(|| log::warn!("Skipping {}: {:#}", file.display(), e));
                failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("Photos sorted: {}", sorted);
    if already_sorted > 0 {
        println!("Already sorted: {}", already_sorted);
    }
    if conflicts > 0 {
        println!("Name conflicts: {}", conflicts);
    }
    if failed > 0 {
        println!("Failed: {}", failed);
    }

    Ok(())
}
