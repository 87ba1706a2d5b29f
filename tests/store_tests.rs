use std::time::{SystemTime, UNIX_EPOCH};

use filmrank::{
    db,
    error::AppError,
    store::{MovieStore, NewMovie},
};

async fn temp_store() -> (MovieStore, std::path::PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!("filmrank-store-{}-{}.sqlite", std::process::id(), nanos));

    let url = format!("sqlite://{}?mode=rwc", path.display());
    let conn = db::connect_and_migrate(&url).await.expect("failed to open test database");
    (MovieStore::new(conn), path)
}

fn phone_booth() -> NewMovie {
    NewMovie {
        id: 1368,
        title: "Phone Booth".to_string(),
        year: "2002-04-24".to_string(),
        description: "Publicist Stuart Shepard finds himself trapped in a phone booth."
            .to_string(),
        img_url: "https://image.tmdb.org/t/p/w500/tjrX2oWRCM3Tvarz38zlZM7Uc10.jpg".to_string(),
    }
}

#[tokio::test]
async fn create_then_get_round_trips_with_placeholders() {
    let (store, path) = temp_store().await;

    let created = store.create(phone_booth()).await.expect("create failed");
    let fetched = store.get(1368).await.expect("get failed");

    assert_eq!(created, fetched);
    assert_eq!(fetched.id, 1368);
    assert_eq!(fetched.title, "Phone Booth");
    assert_eq!(fetched.year, "2002-04-24");
    assert_eq!(fetched.rating, Some(0.0));
    assert_eq!(fetched.ranking, Some(0));
    assert_eq!(fetched.review.as_deref(), Some(" "));

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn duplicate_create_is_conflict_and_keeps_existing_row() {
    let (store, path) = temp_store().await;

    store.create(phone_booth()).await.expect("create failed");
    store
        .update_review(1368, 8.0, "My favourite character was the caller.".to_string())
        .await
        .expect("update failed");

    let err = store.create(phone_booth()).await.expect_err("duplicate create succeeded");
    assert!(matches!(err, AppError::Conflict(_)), "unexpected error: {err}");

    let row = store.get(1368).await.expect("get failed");
    assert_eq!(row.rating, Some(8.0));
    assert_eq!(row.review.as_deref(), Some("My favourite character was the caller."));

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn list_all_is_sorted_by_ascending_rating() {
    let (store, path) = temp_store().await;

    for (id, title, rating) in
        [(1368, "Phone Booth", 7.0), (27205, "Inception", 3.0), (550, "Fight Club", 9.0)]
    {
        let mut new = phone_booth();
        new.id = id;
        new.title = title.to_string();
        store.create(new).await.expect("create failed");
        store.update_review(id, rating, String::new()).await.expect("update failed");
    }

    let movies = store.list_all().await.expect("list failed");
    let ratings: Vec<f64> = movies.iter().filter_map(|m| m.rating).collect();
    assert_eq!(ratings, vec![3.0, 7.0, 9.0]);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn update_missing_id_is_not_found_and_changes_nothing() {
    let (store, path) = temp_store().await;

    store.create(phone_booth()).await.expect("create failed");

    let err = store
        .update_review(99, 5.0, "nope".to_string())
        .await
        .expect_err("update of missing id succeeded");
    assert!(matches!(err, AppError::NotFound(_)), "unexpected error: {err}");

    let row = store.get(1368).await.expect("get failed");
    assert_eq!(row.rating, Some(0.0));
    assert_eq!(row.review.as_deref(), Some(" "));

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn delete_missing_id_is_not_found_and_keeps_other_rows() {
    let (store, path) = temp_store().await;

    store.create(phone_booth()).await.expect("create failed");

    let err = store.delete(99).await.expect_err("delete of missing id succeeded");
    assert!(matches!(err, AppError::NotFound(_)), "unexpected error: {err}");

    assert_eq!(store.list_all().await.expect("list failed").len(), 1);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn delete_removes_only_the_target_row() {
    let (store, path) = temp_store().await;

    store.create(phone_booth()).await.expect("create failed");
    let mut other = phone_booth();
    other.id = 27205;
    other.title = "Inception".to_string();
    store.create(other).await.expect("create failed");

    store.delete(1368).await.expect("delete failed");

    let remaining = store.list_all().await.expect("list failed");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 27205);

    let err = store.get(1368).await.expect_err("deleted row still present");
    assert!(matches!(err, AppError::NotFound(_)), "unexpected error: {err}");

    let _ = std::fs::remove_file(&path);
}
