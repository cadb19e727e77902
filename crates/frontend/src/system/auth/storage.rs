use serde::{Deserialize, Serialize};
use web_sys::window;

use super::context::Session;

/// Single localStorage entry holding everything that survives a reload
pub const ROOT_KEY: &str = "persist:root";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedRoot {
    #[serde(default)]
    pub auth: Option<Session>,
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn encode_root(root: &PersistedRoot) -> Result<String, String> {
    serde_json::to_string(root).map_err(|e| format!("Failed to serialize session: {}", e))
}

/// A missing or unreadable entry is treated as "no session"
pub fn decode_root(raw: Option<&str>) -> PersistedRoot {
    match raw {
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
            log::warn!("Discarding unreadable {} entry: {}", ROOT_KEY, e);
            PersistedRoot::default()
        }),
        None => PersistedRoot::default(),
    }
}

/// Save session to localStorage
pub fn save_session(session: &Session) {
    let root = PersistedRoot {
        auth: Some(session.clone()),
    };
    match encode_root(&root) {
        Ok(raw) => {
            if let Some(storage) = get_local_storage() {
                let _ = storage.set_item(ROOT_KEY, &raw);
            }
        }
        Err(e) => log::error!("{}", e),
    }
}

/// Get session from localStorage
pub fn load_session() -> Option<Session> {
    let raw = get_local_storage()?.get_item(ROOT_KEY).ok()?;
    decode_root(raw.as_deref()).auth
}

/// Clear persisted session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ROOT_KEY);
    }
}
