//! Where palettes come from.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::PaletteConfig;
use crate::error::Result;
use crate::palette::Palette;

/// Something that yields parsed palettes.
pub trait PaletteSource {
    fn load(&self) -> Result<Vec<Palette>>;
}

/// A single JSON palette file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PaletteSource for FileSource {
    fn load(&self) -> Result<Vec<Palette>> {
        Ok(vec![Palette::from_json_file(&self.path)?])
    }
}

/// Every palette file in a list of directories.
///
/// Directories are read in order and files within each are sorted by name.
/// A directory that does not exist is skipped.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dirs: Vec<PathBuf>,
    extension: String,
}

impl DirectorySource {
    pub fn new(dirs: Vec<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dirs,
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &PaletteConfig) -> Self {
        Self::new(config.dirs.clone(), config.extension.as_str())
    }

    fn matches(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }

    fn collect_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let listing = match std::fs::read_dir(dir) {
            Ok(listing) => listing,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(dir = %dir.display(), "Palette directory not found, skipping");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        for entry in listing {
            match entry {
                Ok(entry) if self.matches(&entry.path()) => files.push(entry.path()),
                Ok(_) => {}
                Err(e) => warn!(dir = %dir.display(), error = %e, "Skipping unreadable directory entry"),
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

impl PaletteSource for DirectorySource {
    fn load(&self) -> Result<Vec<Palette>> {
        let mut palettes = Vec::new();
        for dir in &self.dirs {
            for file in self.collect_files(dir)? {
                palettes.push(Palette::from_json_file(&file)?);
            }
        }
        info!(dirs = self.dirs.len(), palettes = palettes.len(), "Loaded palettes from directories");
        Ok(palettes)
    }
}
