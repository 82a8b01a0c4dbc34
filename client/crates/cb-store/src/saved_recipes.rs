use crate::{KeyValueStore, StoreResult};

use std::sync::Arc;

use log::warn;

const GUEST_OWNER: &str = "guest";

/// Which locally saved list a [`SavedRecipes`] handle points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedListKind {
    Bookmarks,
    Favorites,
}

impl SavedListKind {
    fn prefix(&self) -> &'static str {
        match self {
            Self::Bookmarks => "bookmarkedRecipes",
            Self::Favorites => "likedRecipes",
        }
    }

    /// Store key for the list owned by `owner`, or the guest list.
    pub fn key_for(&self, owner: Option<&str>) -> String {
        let owner: String = match owner.filter(|o| !o.is_empty()) {
            Some(id) => id
                .chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() || matches!(c, '_' | '-') {
                        c
                    } else {
                        '_'
                    }
                })
                .collect(),
            None => GUEST_OWNER.to_string(),
        };
        format!("{}_{owner}", self.prefix())
    }
}

/// Recipe ids saved on this device, stored as a JSON array under one key.
#[derive(Clone)]
pub struct SavedRecipes {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl SavedRecipes {
    pub fn new(store: Arc<dyn KeyValueStore>, kind: SavedListKind, owner: Option<&str>) -> Self {
        Self {
            store,
            key: kind.key_for(owner),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Saved ids in insertion order. A corrupt list reads as empty.
    pub async fn ids(&self) -> StoreResult<Vec<String>> {
        let Some(raw) = self.store.get_item(&self.key).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => Ok(ids),
            Err(e) => {
                warn!("Ignoring corrupt saved list '{}': {e}", self.key);
                Ok(Vec::new())
            }
        }
    }

    pub async fn contains(&self, id: &str) -> StoreResult<bool> {
        Ok(self.ids().await?.iter().any(|saved| saved == id))
    }

    /// Flip the saved state of `id`; returns whether it is saved afterwards.
    pub async fn toggle(&self, id: &str) -> StoreResult<bool> {
        let mut ids = self.ids().await?;

        let saved = if ids.iter().any(|saved| saved == id) {
            ids.retain(|saved| saved != id);
            false
        } else {
            ids.push(id.to_string());
            true
        };

        self.save(&ids).await?;
        Ok(saved)
    }

    /// Drop `id` from the list; returns whether it was present.
    pub async fn remove(&self, id: &str) -> StoreResult<bool> {
        let mut ids = self.ids().await?;
        let before = ids.len();
        ids.retain(|saved| saved != id);

        if ids.len() == before {
            return Ok(false);
        }

        self.save(&ids).await?;
        Ok(true)
    }

    /// Keep only ids present in `valid`; returns the ids that were dropped.
    ///
    /// The list is rewritten only when something was dropped.
    pub async fn retain(&self, valid: &[String]) -> StoreResult<Vec<String>> {
        let ids = self.ids().await?;
        let (kept, dropped): (Vec<String>, Vec<String>) =
            ids.into_iter().partition(|id| valid.contains(id));

        if !dropped.is_empty() {
            self.save(&kept).await?;
        }

        Ok(dropped)
    }

    async fn save(&self, ids: &[String]) -> StoreResult<()> {
        let json = serde_json::to_string(ids)?;
        self.store.set_item(&self.key, &json).await
    }
}
