// Shared helpers for the CLI tests
use std::path::Path;
use std::time::SystemTime;

/// Minimal little-endian TIFF block holding a single EXIF DateTimeOriginal.
fn tiff_with_datetime_original(datetime: &str) -> Vec<u8> {
    assert_eq!(datetime.len(), 19, "EXIF datetime must be YYYY:MM:DD HH:MM:SS");
    let mut buf = Vec::new();
    buf.extend_from_slice(b"II");
    buf.extend_from_slice(&42u16.to_le_bytes());
    buf.extend_from_slice(&8u32.to_le_bytes()); // IFD0 offset

    // IFD0: one entry pointing at the Exif sub-IFD
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x8769u16.to_le_bytes()); // ExifIFDPointer
    buf.extend_from_slice(&4u16.to_le_bytes()); // LONG
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&26u32.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());

    // Exif IFD at offset 26: one DateTimeOriginal entry
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x9003u16.to_le_bytes()); // DateTimeOriginal
    buf.extend_from_slice(&2u16.to_le_bytes()); // ASCII
    buf.extend_from_slice(&20u32.to_le_bytes());
    buf.extend_from_slice(&44u32.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());

    // Value at offset 44
    buf.extend_from_slice(datetime.as_bytes());
    buf.push(0);
    buf
}

/// A tiny but valid JPEG carrying an EXIF APP1 segment with the given
/// DateTimeOriginal ("YYYY:MM:DD HH:MM:SS").
pub fn jpeg_with_exif_date(datetime: &str) -> Vec<u8> {
    let tiff = tiff_with_datetime_original(datetime);
    let mut buf = vec![0xFF, 0xD8]; // SOI
    buf.extend_from_slice(&[0xFF, 0xE1]); // APP1
    buf.extend_from_slice(&((tiff.len() + 8) as u16).to_be_bytes());
    buf.extend_from_slice(b"Exif\0\0");
    buf.extend_from_slice(&tiff);
    buf.extend_from_slice(&[0xFF, 0xD9]); // EOI
    buf
}

/// Set a file's modified time to noon local time on the given day.
pub fn set_mtime(path: &Path, year: i32, month: u32, day: u32) {
    use chrono::TimeZone;
    let local = chrono::Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .unwrap();
    let file = std::fs::OpenOptions::new().write(true).open(path).unwrap();
    file.set_modified(SystemTime::from(local)).unwrap();
}
