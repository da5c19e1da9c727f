use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{error, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use crate::config::{SpecialEntry, UpdaterConfig};
use crate::fetch::Fetch;

#[cfg(unix)]
pub const PUBLISHED_FILE_MODE: u32 = 0o644;

/// Replace `path` with `contents` by renaming a sibling temp file over it.
/// Readers see either the previous file or the new one, never a partial write.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(contents)
        .with_context(|| format!("Failed to write temp file for {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to sync temp file for {}", path.display()))?;
    set_publish_permissions(tmp.as_file(), path)?;
    tmp.persist(path)
        .with_context(|| format!("Failed to move temp file into place: {}", path.display()))?;
    Ok(())
}

/// Temp files start out owner-only. Keep the mode of the file being replaced,
/// or make a new file world-readable so the web server can serve it.
#[cfg(unix)]
fn set_publish_permissions(file: &fs::File, target: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = match fs::metadata(target) {
        Ok(meta) => meta.permissions().mode() & 0o7777,
        Err(_) => PUBLISHED_FILE_MODE,
    };
    file.set_permissions(fs::Permissions::from_mode(mode))
        .with_context(|| format!("Failed to set permissions for {}", target.display()))
}

#[cfg(not(unix))]
fn set_publish_permissions(_file: &fs::File, _target: &Path) -> Result<()> {
    Ok(())
}

/// Download one image to `path`. Failures are logged and reported as `false`.
pub fn download_image<F: Fetch + ?Sized>(
    fetcher: &F,
    url: &str,
    path: &Path,
    config: &UpdaterConfig,
) -> bool {
    info!("Downloading {} to {}...", url, path.display());
    let result = fetcher
        .fetch_bytes(url, config.image_timeout)
        .and_then(|bytes| write_atomic(path, &bytes));

    match result {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to download image: {:#}", e);
            false
        }
    }
}

/// Download each URL to its fixed slot and return how many succeeded.
pub fn download_all<F: Fetch + ?Sized>(
    fetcher: &F,
    urls: &[String],
    config: &UpdaterConfig,
) -> usize {
    let mut success_count = 0;
    for (i, url) in urls.iter().enumerate() {
        if download_image(fetcher, url, &config.image_path(i), config) {
            success_count += 1;
        }
    }
    success_count
}

pub fn manifest_json(entries: &[SpecialEntry]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries
        .serialize(&mut ser)
        .context("Failed to serialize specials manifest")?;
    Ok(buf)
}

pub fn write_manifest(path: &Path, entries: &[SpecialEntry]) -> Result<()> {
    let json = manifest_json(entries)?;
    write_atomic(path, &json)?;
    info!("Updated {}", path.display());
    Ok(())
}
