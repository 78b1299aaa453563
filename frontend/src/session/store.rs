//! Single-slot credential storage backed by a file on disk.
//!
//! Holds at most one token at a time. Saving replaces whatever was there
//! before, so signing in a second time overwrites the first credential.

use std::fs;
use std::io;
use std::path::PathBuf;

/// File-backed slot for the bearer token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the stored token. A missing file and a blank file both mean
    /// no credential.
    pub fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_owned()))
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Writes the token into the slot, replacing any previous one.
    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    /// Empties the slot. Clearing an already-empty slot is fine.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> TokenStore {
        TokenStore::new(dir.path().join("token"))
    }

    #[test]
    fn saves_and_loads_a_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("abc.def.ghi").unwrap();
        assert_eq!(store.load().unwrap(), Some("abc.def.ghi".to_owned()));
    }

    #[test]
    fn loads_none_when_nothing_was_saved() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn treats_a_blank_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("  \n").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn saving_again_replaces_the_previous_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load().unwrap(), Some("second".to_owned()));
    }

    #[test]
    fn creates_missing_parent_directories_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("nested/dirs/token"));

        store.save("tok").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok".to_owned()));
    }

    #[test]
    fn clear_empties_the_slot_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("tok").unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        store.clear().unwrap();
    }
}
