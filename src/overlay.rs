//! Layout, draw and save the stance overlay PNG

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::config::StanceConfig;
use crate::domain::StanceLayout;
use crate::render::image::render_overlay;

/// Result of a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedOverlay {
    pub path: PathBuf,
    pub size: (u32, u32),
}

impl std::fmt::Display for SavedOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "saved at {} size ({}, {})",
            self.path.display(),
            self.size.0,
            self.size.1
        )
    }
}

fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    // IEND errors are swallowed on drop
    writer.finish()
}

/// Encode `image` as PNG at `path`, creating parent directories as needed
///
/// The PNG is written to a temporary file beside `path` and renamed into
/// place, so a failed save never leaves a truncated file at `path`.
pub fn save_overlay(path: &Path, image: &RgbaImage) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

    let mut file = tempfile::Builder::new()
        .prefix(".stance_overlay-")
        .suffix(".png")
        .tempfile_in(parent)
        .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
    write_png(&mut file, image)
        .with_context(|| format!("Failed to encode PNG for {}", path.display()))?;
    file.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    file.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Saved stance overlay to {}", path.display());
    Ok(())
}

/// Compute the layout, render it and save it to the configured path
pub fn render_and_save(config: &StanceConfig) -> Result<SavedOverlay> {
    let layout = StanceLayout::compute(config);
    let image = render_overlay(&layout, &config.stroke)?;
    save_overlay(&config.output_path, &image)?;

    Ok(SavedOverlay {
        path: config.output_path.clone(),
        size: image.dimensions(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OUTPUT_PATH;

    #[test]
    fn test_end_to_end_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let config = StanceConfig::default().rooted_at(dir.path());

        let saved = render_and_save(&config).unwrap();
        assert_eq!(saved.size, (900, 900));
        assert_eq!(saved.path, dir.path().join(OUTPUT_PATH));

        let decoded = image::open(&saved.path).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        let rgba = decoded.to_rgba8();
        assert_eq!(rgba.dimensions(), (900, 900));
        assert_eq!(rgba.get_pixel(0, 0)[3], 0);
        assert!(rgba.pixels().any(|p| p[3] == 220));
    }

    #[test]
    fn test_confirmation_message() {
        let saved = SavedOverlay {
            path: PathBuf::from(OUTPUT_PATH),
            size: (900, 900),
        };
        assert_eq!(
            saved.to_string(),
            "saved at assets/overlays/stance_overlay.png size (900, 900)"
        );
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = StanceConfig::default().rooted_at(dir.path());

        render_and_save(&config).unwrap();
        let first = std::fs::read(&config.output_path).unwrap();
        // Directory already exists on the second run
        render_and_save(&config).unwrap();
        let second = std::fs::read(&config.output_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_temporary_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let config = StanceConfig::default().rooted_at(dir.path());
        render_and_save(&config).unwrap();

        let parent = config.output_path.parent().unwrap();
        let entries: Vec<_> = std::fs::read_dir(parent)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("stance_overlay.png")]);
    }

    #[test]
    fn test_blocked_directory_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file occupies the path where the directory should go
        std::fs::write(dir.path().join("assets"), b"not a directory").unwrap();
        let config = StanceConfig::default().rooted_at(dir.path());

        let err = render_and_save(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to create directory"));
        assert!(!config.output_path.exists());
    }

    /// Accepts `limit` bytes, then fails every write
    struct CappedWriter {
        written: Vec<u8>,
        limit: usize,
    }

    impl io::Write for CappedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.written.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"));
            }
            let n = buf.len().min(room);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_png_reports_failure_in_trailer() {
        let blank = RgbaImage::new(4, 4);
        let mut full = Vec::new();
        write_png(&mut full, &blank).unwrap();
        assert!(full.ends_with(b"IEND\xaeB`\x82"));

        // Room for everything except part of the IEND chunk
        let mut capped = CappedWriter {
            written: Vec::new(),
            limit: full.len() - 6,
        };
        assert!(write_png(&mut capped, &blank).is_err());
        assert!(!capped.written.ends_with(b"IEND\xaeB`\x82"));
    }

    #[test]
    fn test_save_into_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.png");
        let blank = RgbaImage::new(4, 4);

        save_overlay(&path, &blank).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
    }
}
