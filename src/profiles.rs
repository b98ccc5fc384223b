//! Endpoint profiles: load/save a JSON mapping of profile name -> { url, interval_secs }
//! Stored under XDG config dir: $XDG_CONFIG_HOME/polltop/profiles.json (fallback ~/.config/polltop/profiles.json)

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProfileEntry {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfilesFile {
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileEntry>,
    #[serde(default)]
    pub version: u32,
}

pub fn config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("polltop")
    } else {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("polltop")
    }
}

pub fn profiles_path() -> PathBuf {
    config_dir().join("profiles.json")
}

pub fn load_profiles() -> ProfilesFile {
    let path = profiles_path();
    match fs::read_to_string(&path) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
        Err(_) => ProfilesFile::default(),
    }
}

pub fn save_profiles(p: &ProfilesFile) -> std::io::Result<()> {
    let path = profiles_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_vec_pretty(p).map_err(std::io::Error::other)?;
    fs::write(path, data)
}

pub enum ResolveProfile {
    /// Use the provided runtime inputs (not persisted). (url, interval_secs)
    Direct(String, Option<u64>),
    /// Loaded from an existing profile entry (url, interval_secs)
    Loaded(String, Option<u64>),
    /// Should prompt the user to select among profile names
    PromptSelect(Vec<String>),
    /// Should prompt the user to create a new profile (name)
    PromptCreate(String),
    /// No profile could be resolved (e.g. missing arguments)
    None,
}

pub struct ProfileRequest {
    pub profile_name: Option<String>,
    pub url: Option<String>,
    pub interval_secs: Option<u64>,
}

impl ProfileRequest {
    pub fn resolve(self, pf: &ProfilesFile) -> ResolveProfile {
        // Only a profile name given -> try load
        if self.url.is_none() && self.profile_name.is_some() {
            let name = self.profile_name.unwrap();
            if let Some(entry) = pf.profiles.get(&name) {
                return ResolveProfile::Loaded(entry.url.clone(), entry.interval_secs);
            } else {
                return ResolveProfile::PromptCreate(name);
            }
        }
        // URL provided -> direct (maybe saved later by the caller)
        if let Some(u) = self.url {
            return ResolveProfile::Direct(u, self.interval_secs);
        }
        // Nothing provided -> prompt select if profiles exist
        if pf.profiles.is_empty() {
            ResolveProfile::None
        } else {
            ResolveProfile::PromptSelect(pf.profiles.keys().cloned().collect())
        }
    }
}
