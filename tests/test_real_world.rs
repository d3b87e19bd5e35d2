use dessert_catalog::{get_recipe_detail, list_desserts};
use std::env;

#[tokio::test]
#[ignore] // This test requires network access
async fn test_public_catalog() {
    env::set_var("RUST_LOG", "debug");
    let _ = env_logger::try_init();

    let desserts = list_desserts().await.expect("Failed to list desserts");
    assert!(!desserts.is_empty());

    let first = &desserts[0];
    let detail = get_recipe_detail(&first.id)
        .await
        .expect("Failed to fetch recipe detail");
    println!("{}: {} ingredients", detail.name, detail.ingredients.len());

    assert_eq!(detail.name, first.name);
    assert!(detail.ingredients.len() <= 5);
    assert!(detail.ingredients.iter().all(|i| !i.trim().is_empty()));
}
