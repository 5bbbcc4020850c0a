use chrono::{TimeZone, Utc};
use relive_core::db::open_db_in_memory;
use relive_core::{
    BookReview, CreateReviewRequest, KeyValueStore, LocalReviewRepository, MemoryKeyValueStore,
    RepoError, ReviewRepository, SqliteKeyValueStore, REVIEWS_STORAGE_KEY,
};

fn review(id: &str, title: &str) -> BookReview {
    BookReview::from_request(
        id.to_string(),
        CreateReviewRequest {
            title: title.to_string(),
            author: "Author".to_string(),
            rating: 3.0,
            read_date: "2024-04-01".to_string(),
            ..CreateReviewRequest::default()
        },
        Utc.with_ymd_and_hms(2024, 4, 2, 9, 30, 0).unwrap(),
    )
}

#[test]
fn add_appends_in_insertion_order() {
    let repo = LocalReviewRepository::new(MemoryKeyValueStore::new());
    repo.add(&review("b", "First"));
    repo.add(&review("a", "Second"));

    let ids: Vec<String> = repo.get_all().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn update_replaces_in_place() {
    let repo = LocalReviewRepository::new(MemoryKeyValueStore::new());
    repo.add(&review("a", "One"));
    repo.add(&review("b", "Two"));

    let mut changed = review("a", "One, revised");
    changed.rating = 5.0;
    repo.update(&changed).unwrap();

    let all = repo.get_all();
    assert_eq!(all[0], changed);
    assert_eq!(all[1].title, "Two");
}

#[test]
fn update_missing_reports_not_found_and_writes_nothing() {
    let kv = MemoryKeyValueStore::new();
    let repo = LocalReviewRepository::new(&kv);
    repo.add(&review("a", "One"));
    let before = kv.get_item(REVIEWS_STORAGE_KEY).unwrap();

    let err = repo.update(&review("zzz", "Ghost")).unwrap_err();
    assert_eq!(err, RepoError::NotFound("zzz".to_string()));
    assert_eq!(kv.get_item(REVIEWS_STORAGE_KEY).unwrap(), before);
}

#[test]
fn delete_removes_and_reports_missing() {
    let repo = LocalReviewRepository::new(MemoryKeyValueStore::new());
    repo.add(&review("a", "One"));
    repo.add(&review("b", "Two"));

    repo.delete("a").unwrap();
    assert!(repo.get("a").is_none());
    assert_eq!(repo.get_all().len(), 1);

    let err = repo.delete("a").unwrap_err();
    assert_eq!(err, RepoError::NotFound("a".to_string()));
    assert_eq!(repo.get_all().len(), 1);
}

#[test]
fn sqlite_backed_repository_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = LocalReviewRepository::new(SqliteKeyValueStore::new(&conn));

    let mut stored = review("x1", "Persisted");
    stored.favorite_quote = Some("It was the best of times".to_string());
    stored.tags = vec!["classic".to_string(), "classic".to_string()];
    repo.add(&stored);

    assert_eq!(repo.get("x1"), Some(stored));
}

#[test]
fn two_repositories_on_one_slot_see_each_others_writes() {
    let kv = MemoryKeyValueStore::new();
    let first_tab = LocalReviewRepository::new(&kv);
    let second_tab = LocalReviewRepository::new(&kv);

    first_tab.add(&review("a", "From first"));
    second_tab.add(&review("b", "From second"));

    assert_eq!(first_tab.get_all().len(), 2);
}
