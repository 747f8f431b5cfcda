//! JSON writer for canonical documents.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, ScraperError};
use crate::types::DocumentSet;

/// File names of the canonical documents, in write order.
pub const DOCUMENT_FILES: [&str; 4] = [
    "leagues.json",
    "clubs.json",
    "fixtures.json",
    "standings.json",
];

/// Subdirectory for raw payload dumps.
pub const RAW_DIR: &str = "raw";

/// Output directory for a region and year: `<base>/<code lowercased>/<year>`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use rugby_scraper::output::region_dir;
///
/// let dir = region_dir(Path::new("data"), "QC", "2026");
/// assert_eq!(dir, Path::new("data").join("qc").join("2026"));
/// ```
pub fn region_dir(output_base: &Path, region_code: &str, year: &str) -> PathBuf {
    output_base.join(region_code.to_lowercase()).join(year)
}

/// Serialize a document as indented JSON.
///
/// Non-ASCII text is written as UTF-8, not escaped.
pub fn generate_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Save one document.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// This ensures partial writes don't corrupt existing files on crash.
pub fn save_json<T: Serialize + ?Sized>(data: &T, path: &Path) -> Result<()> {
    let content = generate_json(data)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    Ok(())
}

/// Write all four documents into `dir`, replacing earlier output.
///
/// # Returns
/// Paths of the written files
pub fn write_documents<C, F, S>(docs: &DocumentSet<C, F, S>, dir: &Path) -> Result<Vec<PathBuf>>
where
    C: Serialize,
    F: Serialize,
    S: Serialize,
{
    fs::create_dir_all(dir)?;

    let [leagues, clubs, fixtures, standings] = DOCUMENT_FILES.map(|name| dir.join(name));
    save_json(&docs.leagues, &leagues)?;
    save_json(&docs.clubs, &clubs)?;
    save_json(&docs.fixtures, &fixtures)?;
    save_json(&docs.standings, &standings)?;

    Ok(vec![leagues, clubs, fixtures, standings])
}

/// Where raw payloads go when debugging a region.
#[derive(Debug, Clone)]
pub struct RawDump {
    dir: PathBuf,
}

impl RawDump {
    /// Dump into `<region dir>/raw`.
    pub fn new(region_dir: &Path) -> Self {
        Self {
            dir: region_dir.join(RAW_DIR),
        }
    }

    /// Write one raw payload as `<name>.json`.
    ///
    /// Failures are logged; a dump never stops the run.
    pub fn save<T: Serialize + ?Sized>(&self, name: &str, data: &T) {
        let path = self.dir.join(format!("{name}.json"));
        let result = fs::create_dir_all(&self.dir)
            .map_err(ScraperError::from)
            .and_then(|()| save_json(data, &path));
        match result {
            Ok(()) => tracing::debug!(path = %path.display(), "Saved raw payload"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Could not save raw payload"),
        }
    }
}
