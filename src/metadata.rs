use anyhow::Result;
use chrono::NaiveDate;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Resolve the date a photo was taken.
/// Tries the EXIF capture date first, falls back to filesystem modified time.
/// Metadata problems never bubble up; only a failed stat of the file itself
/// is an error.
pub fn resolve_date(path: &Path) -> Result<NaiveDate> {
    match exif_date(path) {
        Ok(date) => Ok(date),
        Err(e) => {
            log::debug!(
                "No usable EXIF date for {} ({}), using modified time",
                path.display(),
                e
            );
            modified_date(path)
        }
    }
}

fn exif_date(path: &Path) -> Result<NaiveDate> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader)?;

    // Try DateTimeOriginal first, then DateTimeDigitized, then DateTime
    let field = exif
        .get_field(exif::Tag::DateTimeOriginal, exif::In::PRIMARY)
        .or_else(|| exif.get_field(exif::Tag::DateTimeDigitized, exif::In::PRIMARY))
        .or_else(|| exif.get_field(exif::Tag::DateTime, exif::In::PRIMARY))
        .ok_or_else(|| anyhow::anyhow!("no EXIF datetime field found"))?;

    let ascii = match field.value {
        exif::Value::Ascii(ref parts) => parts
            .first()
            .ok_or_else(|| anyhow::anyhow!("empty EXIF datetime value"))?,
        _ => anyhow::bail!("EXIF datetime field is not ASCII"),
    };

    // EXIF format: "2021:06:15 10:30:00"
    let dt = exif::DateTime::from_ascii(ascii)?;
    NaiveDate::from_ymd_opt(dt.year as i32, dt.month as u32, dt.day as u32)
        .ok_or_else(|| anyhow::anyhow!("EXIF date out of range"))
}

fn modified_date(path: &Path) -> Result<NaiveDate> {
    let metadata = std::fs::metadata(path)?;
    let modified = metadata.modified()?;
    let datetime: chrono::DateTime<chrono::Local> = modified.into();
    Ok(datetime.date_naive())
}
