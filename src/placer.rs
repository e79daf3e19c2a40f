use anyhow::{Context, Result};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

const BUFFER_SIZE: usize = 64 * 1024;

/// Outcome of placing one file into its dated destination directory.
#[derive(Debug)]
pub enum Placement {
    Copied(PathBuf),
    Moved(PathBuf),
    /// An identical copy already exists at the destination.
    AlreadySorted(PathBuf),
    /// A different file with the same name already exists at the destination.
    Conflict(PathBuf),
}

/// Copy a file into the destination directory, verify the copy, and delete
/// the source only when removal was requested and verification passed.
/// The source is never touched on a conflict or an unverified copy.
pub fn place_file(src: &Path, dest_dir: &Path, remove: bool) -> Result<Placement> {
    let dest = dest_dir.join(destination_name(src)?);

    if dest.exists() {
        // When sorting in place the source may already be the destination;
        // removing it would delete the only copy.
        if same_file(src, &dest)? {
            return Ok(Placement::AlreadySorted(dest));
        }
        if !files_identical(src, &dest)? {
            return Ok(Placement::Conflict(dest));
        }
        // The verified copy is already in place, so removal is still safe.
        if remove {
            fs::remove_file(src)
                .with_context(|| format!("failed to remove {}", src.display()))?;
            return Ok(Placement::Moved(dest));
        }
        return Ok(Placement::AlreadySorted(dest));
    }

    fs::create_dir_all(dest_dir)
        .with_context(|| format!("failed to create {}", dest_dir.display()))?;

    let written = fs::copy(src, &dest)
        .with_context(|| format!("failed to copy {} to {}", src.display(), dest.display()))?;

    let src_len = fs::metadata(src)?.len();
    if written != src_len || !files_identical(src, &dest)? {
        let _ = fs::remove_file(&dest);
        anyhow::bail!(
            "copy of {} to {} did not verify, source left in place",
            src.display(),
            dest.display()
        );
    }

    // Preserve modified time so the fallback date survives the copy
    if let Ok(meta) = fs::metadata(src) {
        if let Ok(mtime) = meta.modified() {
            let _ = set_modified(&dest, mtime);
        }
    }

    if remove {
        fs::remove_file(src).with_context(|| format!("failed to remove {}", src.display()))?;
        Ok(Placement::Moved(dest))
    } else {
        Ok(Placement::Copied(dest))
    }
}

/// Destination filename: source filename with the extension lowercased.
fn destination_name(src: &Path) -> Result<PathBuf> {
    let name = src
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("source has no file name: {}", src.display()))?;
    let name = Path::new(name);

    match name.extension().and_then(|e| e.to_str()) {
        Some(ext) => {
            let mut out = name.file_stem().unwrap_or_default().to_os_string();
            out.push(".");
            out.push(ext.to_ascii_lowercase());
            Ok(PathBuf::from(out))
        }
        None => Ok(name.to_path_buf()),
    }
}

/// True when both paths resolve to the same underlying file.
fn same_file(a: &Path, b: &Path) -> Result<bool> {
    Ok(a.canonicalize()? == b.canonicalize()?)
}

/// Streamed byte-for-byte comparison of two files.
fn files_identical(a: &Path, b: &Path) -> Result<bool> {
    if fs::metadata(a)?.len() != fs::metadata(b)?.len() {
        return Ok(false);
    }

    let mut reader_a = BufReader::new(fs::File::open(a)?);
    let mut reader_b = BufReader::new(fs::File::open(b)?);
    let mut buf_a = vec![0u8; BUFFER_SIZE];
    let mut buf_b = vec![0u8; BUFFER_SIZE];

    loop {
        let read_a = read_full(&mut reader_a, &mut buf_a)?;
        let read_b = read_full(&mut reader_b, &mut buf_b)?;
        if buf_a[..read_a] != buf_b[..read_b] {
            return Ok(false);
        }
        if read_a == 0 {
            return Ok(true);
        }
    }
}

/// Fill as much of the buffer as the reader will give before EOF.
fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        let n = reader.read(&mut buf[total..])?;
        if n == 0 {
            break;
        }
        total += n;
    }
    Ok(total)
}

fn set_modified(path: &Path, mtime: std::time::SystemTime) -> Result<()> {
    let file = fs::OpenOptions::new().write(true).open(path)?;
    file.set_modified(mtime)?;
    Ok(())
}
