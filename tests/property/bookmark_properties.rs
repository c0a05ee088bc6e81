//! Property-based tests: alias validity and create/get/remove invariants

use jump::bookmarks::BookmarkService;
use jump::error::BookmarkError;
use jump::store::JsonFileStore;
use jump::validate::{is_valid_alias, PathResolver};
use proptest::prelude::*;
use tempfile::TempDir;

fn fresh_service() -> (TempDir, BookmarkService<JsonFileStore>) {
    let temp_dir = TempDir::new().unwrap();
    let svc = BookmarkService::new(
        JsonFileStore::new(temp_dir.path().join("bookmarks.json")),
        PathResolver::new(temp_dir.path().to_path_buf(), None),
    );
    (temp_dir, svc)
}

/// Aliases drawn from the allowed character class are always valid
#[test]
fn test_allowed_charset_is_valid_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[A-Za-z0-9_-]{1,40}", |alias| {
            assert!(is_valid_alias(&alias));
            Ok(())
        })
        .unwrap();
}

/// Any alias containing a character outside the class is rejected
#[test]
fn test_foreign_character_is_invalid_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                "[A-Za-z0-9_-]{0,10}",
                any::<char>(),
                "[A-Za-z0-9_-]{0,10}",
            ),
            |(prefix, c, suffix)| {
                prop_assume!(!(c.is_ascii_alphanumeric() || c == '_' || c == '-'));
                let alias = format!("{}{}{}", prefix, c, suffix);
                assert!(!is_valid_alias(&alias));
                Ok(())
            },
        )
        .unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// create then get returns the resolved path, and a second create is refused
    #[test]
    fn create_get_duplicate_property(alias in "[A-Za-z0-9_-]{1,20}", sub in "[a-z]{1,8}") {
        let (temp_dir, svc) = fresh_service();
        let target = temp_dir.path().join(&sub);
        std::fs::create_dir_all(&target).unwrap();

        let created = svc.create(&sub, &alias).unwrap();
        prop_assert_eq!(&created.path, &target);
        prop_assert_eq!(svc.get(&alias).unwrap().path, target.clone());

        let dup = svc.create(".", &alias);
        prop_assert!(matches!(dup, Err(BookmarkError::AliasExists(_))));
        prop_assert_eq!(svc.get(&alias).unwrap().path, target);
    }

    /// remove drops exactly one key
    #[test]
    fn remove_exactly_one_property(aliases in proptest::collection::btree_set("[a-z]{1,6}", 1..6)) {
        let (_temp_dir, svc) = fresh_service();
        for alias in &aliases {
            svc.create(".", alias).unwrap();
        }
        let victim = aliases.iter().next().unwrap().clone();

        svc.remove(&victim).unwrap();
        let left = svc.list();
        prop_assert_eq!(left.len(), aliases.len() - 1);
        prop_assert!(!left.contains(&victim));
        for alias in aliases.iter().filter(|a| **a != victim) {
            prop_assert!(left.contains(alias));
        }
        prop_assert!(matches!(svc.remove(&victim), Err(BookmarkError::AliasNotFound(_))));
        prop_assert_eq!(svc.list().len(), aliases.len() - 1);
    }
}
