//! Integration tests for the preference stores
//!
//! Exercises the file-backed store against a scratch directory

use std::path::PathBuf;
use taskdesk::storage::{FileStore, KeyValueStore, MemoryStore};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("taskdesk-test-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

mod file_store_tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let dir = scratch_dir("set-get");
        let store = FileStore::new(&dir);

        store.set("theme", "light").expect("Failed to set storage");
        assert_eq!(store.get("theme"), Some("light".to_string()));

        std::fs::remove_dir_all(&dir).expect("Failed to clean up");
    }

    #[test]
    fn test_get_nonexistent() {
        let store = FileStore::new(scratch_dir("missing"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_overwrite() {
        let dir = scratch_dir("overwrite");
        let store = FileStore::new(&dir);

        store.set("theme", "light").expect("Failed to set");
        store.set("theme", "dark").expect("Failed to overwrite");
        assert_eq!(store.get("theme"), Some("dark".to_string()));

        std::fs::remove_dir_all(&dir).expect("Failed to clean up");
    }

    #[test]
    fn test_values_survive_new_instance() {
        let dir = scratch_dir("reopen");
        FileStore::new(&dir)
            .set("theme", "light")
            .expect("Failed to set");

        let reopened = FileStore::new(&dir);
        assert_eq!(reopened.get("theme"), Some("light".to_string()));

        std::fs::remove_dir_all(&dir).expect("Failed to clean up");
    }

    #[test]
    fn test_special_characters_in_key() {
        let dir = scratch_dir("special");
        let store = FileStore::new(&dir);

        // Key gets sanitized but stays addressable by the original name
        store.set("user:preferences/theme", "dark").expect("Failed to set");
        assert_eq!(store.get("user:preferences/theme"), Some("dark".to_string()));
        assert!(dir.join("user_preferences_theme.txt").exists());

        std::fs::remove_dir_all(&dir).expect("Failed to clean up");
    }
}

mod memory_store_tests {
    use super::*;

    #[test]
    fn test_isolated_instances() {
        let first = MemoryStore::new();
        let second = MemoryStore::new();

        first.set("theme", "light").expect("Failed to set");
        assert_eq!(first.get("theme"), Some("light".to_string()));
        assert_eq!(second.get("theme"), None);
    }
}
