use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{app_data_dir, profiles_file_in},
    domain::Profile,
};

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence: every profile lives in one
/// pretty-printed `profiles.json` under the data directory.
#[derive(Clone)]
pub struct JsonStorage {
    profiles_file: PathBuf,
}

impl JsonStorage {
    pub fn new(base: Option<PathBuf>) -> Result<Self> {
        let base = base.unwrap_or_else(app_data_dir);
        fs::create_dir_all(&base)?;
        Ok(Self {
            profiles_file: profiles_file_in(&base),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn profiles_path(&self) -> &Path {
        &self.profiles_file
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Vec<Profile> {
        if !self.profiles_file.exists() {
            return Vec::new();
        }
        let data = match fs::read_to_string(&self.profiles_file) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(?err, "profile slot unreadable, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(profiles) => profiles,
            Err(err) => {
                tracing::warn!(?err, "profile slot not parseable, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, profiles: &[Profile]) -> Result<()> {
        let json = serde_json::to_string_pretty(profiles)?;
        let tmp = tmp_path(&self.profiles_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.profiles_file)?;
        tracing::debug!(count = profiles.len(), "profiles saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
