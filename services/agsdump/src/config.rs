//! Resolved settings for one dump run.

use std::path::{Path, PathBuf};

use symbology::IconFormat;

/// What to dump and where.
#[derive(Debug, Clone)]
pub struct DumpConfig {
    pub map_name: String,
    pub service_url: String,
    /// `<output_dir>/<map_name>`
    pub root: PathBuf,
    pub icon_format: IconFormat,
    pub dump_data: bool,
    pub dump_styles: bool,
}

impl DumpConfig {
    pub fn new(output_dir: &Path, map_name: &str, service_url: &str) -> Self {
        Self {
            map_name: map_name.to_string(),
            service_url: service_url.trim_end_matches('/').to_string(),
            root: output_dir.join(map_name),
            icon_format: IconFormat::default(),
            dump_data: true,
            dump_styles: true,
        }
    }

    /// Folder holding `<layer>.json` feature dumps.
    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    /// Folder holding `<layer>.sld` documents and icon folders.
    pub fn styles_dir(&self) -> PathBuf {
        self.root.join("styles")
    }
}
