//! File-backed card store.
//!
//! Cards live as one record per line in a single slot file, encoded with
//! [`Card::to_record`]. A missing file reads as an empty collection.

use std::fs;
use std::io;
use std::path::PathBuf;

use cards_core::Card;
use tracing::debug;

use super::traits::{CardStore, StoreError};

pub struct FileCardStore {
    path: PathBuf,
}

impl FileCardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CardStore for FileCardStore {
    fn load(&self) -> Result<Vec<Card>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(error.into()),
        };

        let mut cards = Vec::new();
        for line in contents.lines().filter(|line| !line.trim().is_empty()) {
            cards.push(Card::from_record(line)?);
        }
        debug!(count = cards.len(), path = %self.path.display(), "loaded cards");
        Ok(cards)
    }

    fn save(&self, cards: &[Card]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut contents = String::new();
        for card in cards {
            contents.push_str(&card.to_record());
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        debug!(count = cards.len(), path = %self.path.display(), "saved cards");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCardStore::new(dir.path().join("cards"));
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCardStore::new(dir.path().join("cards"));

        let cards = vec![Card::new("a"), Card::new("b").scratched().activated(true)];
        store.save(&cards).unwrap();
        assert_eq!(store.load().unwrap(), cards);
    }

    #[test]
    fn save_overwrites_the_previous_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCardStore::new(dir.path().join("cards"));

        store.save(&[Card::new("a"), Card::new("b")]).unwrap();
        store.save(&[Card::new("b")]).unwrap();
        assert_eq!(store.load().unwrap(), vec![Card::new("b")]);
    }

    #[test]
    fn corrupted_record_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards");
        fs::write(&path, "abc;maybe\n").unwrap();

        let store = FileCardStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Corrupted(_))));
    }
}
