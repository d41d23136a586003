//! User preferences: bookmarks, likes, theme.
//!
//! Preferences live in a flat key-value store — one key per concern, values
//! are small opaque strings (JSON id arrays for the two sets, a plain word
//! for the theme). Reads are tolerant: an absent or corrupt value means "no
//! saved preference" and never an error, so a damaged store degrades to a
//! fresh profile instead of breaking startup. Writes go through after every
//! mutation; a failed write is reported to the caller and the in-memory
//! state stands.
//!
//! [`KvStore`] is the seam. [`FileStore`] backs each key with a file under
//! a preferences directory; [`MemoryStore`] serves tests and hosts without
//! a writable disk.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub const KEY_BOOKMARKS: &str = "paper_insight_bookmarks";
pub const KEY_LIKES: &str = "paper_insight_likes";
pub const KEY_THEME: &str = "paper_insight_theme";

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Flat key-value storage for preference blobs.
pub trait KvStore {
    /// Fetch a value. `None` covers both "never written" and "unreadable" —
    /// callers treat them identically.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// One file per key under a preferences directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created on first write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// Theme
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored theme string. Anything unrecognized reads as "no
    /// saved preference".
    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Precedence: explicit saved preference, then the host's dark-mode
    /// signal, then light.
    pub fn resolve(saved: Option<Theme>, system_dark: bool) -> Theme {
        match saved {
            Some(theme) => theme,
            None if system_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the theme toggle control: the sun invites you out of
    /// the dark, the moon in.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

pub fn load_theme(store: &dyn KvStore) -> Option<Theme> {
    store.get(KEY_THEME).and_then(|v| Theme::parse(&v))
}

pub fn save_theme(store: &mut dyn KvStore, theme: Theme) -> Result<(), PrefsError> {
    store.set(KEY_THEME, theme.as_str())
}

// ============================================================================
// Bookmark / like sets
// ============================================================================

/// The two per-user article id sets. Ordered sets so serialization is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub bookmarks: BTreeSet<String>,
    pub likes: BTreeSet<String>,
}

impl Preferences {
    /// Load both sets, treating each absent or corrupt key independently
    /// as empty.
    pub fn load(store: &dyn KvStore) -> Preferences {
        Preferences {
            bookmarks: load_id_set(store, KEY_BOOKMARKS),
            likes: load_id_set(store, KEY_LIKES),
        }
    }

    /// Write both sets. Each key holds a JSON-encoded id array.
    pub fn save(&self, store: &mut dyn KvStore) -> Result<(), PrefsError> {
        store.set(KEY_BOOKMARKS, &encode_id_set(&self.bookmarks)?)?;
        store.set(KEY_LIKES, &encode_id_set(&self.likes)?)?;
        Ok(())
    }

    /// Flip membership; returns true when the id is now present.
    pub fn toggle_bookmark(&mut self, id: &str) -> bool {
        toggle(&mut self.bookmarks, id)
    }

    pub fn toggle_like(&mut self, id: &str) -> bool {
        toggle(&mut self.likes, id)
    }
}

fn toggle(set: &mut BTreeSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}

fn load_id_set(store: &dyn KvStore, key: &str) -> BTreeSet<String> {
    store
        .get(key)
        .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
        .map(|ids| ids.into_iter().collect())
        .unwrap_or_default()
}

fn encode_id_set(set: &BTreeSet<String>) -> Result<String, PrefsError> {
    let ids: Vec<&String> = set.iter().collect();
    Ok(serde_json::to_string(&ids)?)
}
