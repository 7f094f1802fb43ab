// src/save/src/lib.rs
//! 积分存档：玩家名 → 最高分
//!
//! The file store rewrites the whole JSON map on every change; the cache
//! sits in front of it and skips reads for names it has already seen.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use error::GameError;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// 默认积分文件名（相对于工作目录）
pub const SCORE_FILENAME: &str = "score.json";

/// 玩家档案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    name: String,
    score: u32,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

impl fmt::Display for PlayerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (счет: {})", self.name, self.score)
    }
}

/// Name → profile storage.
pub trait ProfileRepository {
    /// Existing profile, or a freshly stored zero-score one.
    fn get_profile(&mut self, name: &str) -> Result<PlayerProfile, GameError>;

    fn update_high_score(&mut self, name: &str, score: u32) -> Result<(), GameError>;
}

/// Keys stay in file order (`preserve_order`).
type ProfileMap = Map<String, Value>;

/// 基于JSON文件的档案存储
#[derive(Debug)]
pub struct JsonProfileRepository {
    path: PathBuf,
}

impl JsonProfileRepository {
    /// Opens the store, creating the file with `{}` if it does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "creating empty score file");
            fs::write(&path, "{}")?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取整个积分文件，按文件中的顺序
    pub fn find_all(&self) -> Result<Vec<PlayerProfile>, GameError> {
        self.read_all()?
            .into_iter()
            .map(|(_, value)| serde_json::from_value(value).map_err(GameError::from))
            .collect()
    }

    fn read_all(&self) -> Result<ProfileMap, GameError> {
        let data = fs::read_to_string(&self.path)?;
        let profiles: ProfileMap = serde_json::from_str(&data)?;
        tracing::debug!(path = %self.path.display(), count = profiles.len(), "score file read");
        Ok(profiles)
    }

    /// 整体覆盖写入（4空格缩进）
    fn write_all(&self, profiles: &ProfileMap) -> Result<(), GameError> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        profiles.serialize(&mut serializer)?;

        fs::write(&self.path, buffer)?;
        tracing::debug!(path = %self.path.display(), count = profiles.len(), "score file written");
        Ok(())
    }
}

impl ProfileRepository for JsonProfileRepository {
    fn get_profile(&mut self, name: &str) -> Result<PlayerProfile, GameError> {
        let mut profiles = self.read_all()?;

        if let Some(value) = profiles.get(name) {
            return Ok(serde_json::from_value(value.clone())?);
        }

        let profile = PlayerProfile::new(name, 0);
        profiles.insert(name.to_string(), serde_json::to_value(&profile)?);
        self.write_all(&profiles)?;
        Ok(profile)
    }

    fn update_high_score(&mut self, name: &str, score: u32) -> Result<(), GameError> {
        let mut profiles = self.read_all()?;

        // existing names keep their position in the file
        let profile = match profiles.get(name) {
            Some(value) => {
                let mut profile: PlayerProfile = serde_json::from_value(value.clone())?;
                profile.set_score(score);
                profile
            }
            None => PlayerProfile::new(name, score),
        };
        profiles.insert(name.to_string(), serde_json::to_value(&profile)?);

        self.write_all(&profiles)
    }
}

/// 带内存缓存的档案仓库
#[derive(Debug)]
pub struct CachedProfileRepository<R = JsonProfileRepository> {
    cache: HashMap<String, PlayerProfile>,
    store: R,
}

impl<R: ProfileRepository> CachedProfileRepository<R> {
    pub fn new(store: R) -> Self {
        Self {
            cache: HashMap::new(),
            store,
        }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }
}

impl<R: ProfileRepository> ProfileRepository for CachedProfileRepository<R> {
    fn get_profile(&mut self, name: &str) -> Result<PlayerProfile, GameError> {
        if let Some(profile) = self.cache.get(name) {
            return Ok(profile.clone());
        }

        let profile = self.store.get_profile(name)?;
        self.cache.insert(name.to_string(), profile.clone());
        Ok(profile)
    }

    fn update_high_score(&mut self, name: &str, score: u32) -> Result<(), GameError> {
        let mut profile = self.get_profile(name)?;
        profile.set_score(score);
        self.cache.insert(name.to_string(), profile);
        self.store.update_high_score(name, score)
    }
}
