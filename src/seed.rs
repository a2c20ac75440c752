use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::{Note, Privacy, SeedComment};
use crate::store::NoteStore;

pub const SEED_FILE_NAME: &str = "seed.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub comments: Vec<SeedComment>,
}

static SAMPLE_SEED: Lazy<Seed> = Lazy::new(|| Seed {
    notes: vec![
        Note {
            privacy: Privacy::Friends,
            comment_privacy: Privacy::Friends,
            privacy_view: "private".to_string(),
            privacy_comment: "private".to_string(),
            ..Note::new("1", "Note 1", "Text of note 1")
        },
        Note {
            privacy: Privacy::FriendsOfFriends,
            comment_privacy: Privacy::FriendsOfFriends,
            privacy_view: "public".to_string(),
            privacy_comment: "public".to_string(),
            ..Note::new("2", "Note 2", "Text of note 2")
        },
    ],
    comments: Vec::new(),
});

pub fn sample_seed() -> &'static Seed {
    &SAMPLE_SEED
}

pub fn default_seed_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com", "Netology", "note_store")
        .context("Cannot determine project dirs")?;
    Ok(proj.config_dir().join(SEED_FILE_NAME))
}

pub fn load_seed_file(path: &Path) -> Result<Seed> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", path.display()))
}

/// Picks the seed: explicit path, then the config dir file, then samples.
pub fn resolve_seed(explicit: Option<&Path>) -> Result<Seed> {
    if let Some(path) = explicit {
        return load_seed_file(path);
    }

    match default_seed_path() {
        Ok(path) if path.exists() => {
            log::info!("[NOTES] Loading seed from {}", path.display());
            load_seed_file(&path)
        }
        Ok(_) => Ok(sample_seed().clone()),
        Err(err) => {
            log::warn!("[NOTES] {err:#}, using sample data");
            Ok(sample_seed().clone())
        }
    }
}

impl Seed {
    /// Builds a store from the seed. Comments go through `create_comment`
    /// so each must reference a seeded note.
    pub fn into_store(self) -> Result<NoteStore> {
        let store = NoteStore::new();
        for note in self.notes {
            store.add(note);
        }
        for comment in self.comments {
            store
                .create_comment(&comment.note_id, comment.message)
                .with_context(|| format!("seed comment for note {}", comment.note_id))?;
        }
        Ok(store)
    }
}
