use dessert_catalog::{CatalogError, ErrorKind, RecipeClient, RecipeDetail};
use mockito::{Matcher, Server, ServerGuard};

async fn mock_lookup(server: &mut ServerGuard, id: &str, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), id.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_apple_pie_detail() {
    let mut server = Server::new_async().await;
    let mock = mock_lookup(
        &mut server,
        "1",
        r#"{"meals":[{"strMeal":"Apple Pie","strInstructions":"Bake it.","strIngredient1":"Apple","strMeasure1":"3"}]}"#,
    )
    .await;

    let client = RecipeClient::builder().base_url(server.url()).build().unwrap();
    let detail = client.get_detail("1").await.unwrap();

    assert_eq!(
        detail,
        RecipeDetail {
            name: "Apple Pie".to_string(),
            instructions: "Bake it.".to_string(),
            ingredients: vec!["3 Apple".to_string()],
        }
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_blank_and_missing_slots_are_skipped() {
    let mut server = Server::new_async().await;
    let _m = mock_lookup(
        &mut server,
        "52768",
        r#"{"meals":[{
            "idMeal": "52768",
            "strMeal": "Apple Frangipan Tart",
            "strInstructions": "Preheat the oven to 200C.",
            "strIngredient1": "Flour",
            "strMeasure1": "200g",
            "strIngredient2": "",
            "strMeasure2": "1 tsp",
            "strIngredient3": null,
            "strMeasure3": null,
            "strIngredient4": "Butter",
            "strMeasure4": "175g ",
            "strIngredient5": " ",
            "strMeasure5": " ",
            "strIngredient6": "Caster Sugar",
            "strMeasure6": "175g"
        }]}"#,
    )
    .await;

    let client = RecipeClient::builder().base_url(server.url()).build().unwrap();
    let detail = client.get_detail("52768").await.unwrap();

    // Slot 6 is beyond the default bound of 5
    assert_eq!(
        detail.ingredients,
        vec!["200g Flour".to_string(), "175g Butter".to_string()]
    );
}

#[tokio::test]
async fn test_configured_slot_bound_reads_more_fields() {
    let mut server = Server::new_async().await;
    let _m = mock_lookup(
        &mut server,
        "52768",
        r#"{"meals":[{
            "strMeal": "Apple Frangipan Tart",
            "strInstructions": "Preheat the oven to 200C.",
            "strIngredient1": "Flour",
            "strMeasure1": "200g",
            "strIngredient6": "Caster Sugar",
            "strMeasure6": "175g"
        }]}"#,
    )
    .await;

    let client = RecipeClient::builder()
        .base_url(server.url())
        .ingredient_slots(20)
        .build()
        .unwrap();
    let detail = client.get_detail("52768").await.unwrap();

    assert_eq!(
        detail.ingredients,
        vec!["200g Flour".to_string(), "175g Caster Sugar".to_string()]
    );
}

#[tokio::test]
async fn test_empty_meals_is_not_found() {
    let mut server = Server::new_async().await;
    let _m = mock_lookup(&mut server, "0", r#"{"meals":[]}"#).await;

    let client = RecipeClient::builder().base_url(server.url()).build().unwrap();
    match client.get_detail("0").await {
        Err(CatalogError::NotFound(id)) => assert_eq!(id, "0"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_null_meals_is_not_found() {
    let mut server = Server::new_async().await;
    let _m = mock_lookup(&mut server, "abc", r#"{"meals":null}"#).await;

    let client = RecipeClient::builder().base_url(server.url()).build().unwrap();
    let err = client.get_detail("abc").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_missing_instructions_is_decode_error() {
    let mut server = Server::new_async().await;
    let _m = mock_lookup(&mut server, "1", r#"{"meals":[{"strMeal":"Apple Pie"}]}"#).await;

    let client = RecipeClient::builder().base_url(server.url()).build().unwrap();
    let err = client.get_detail("1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_malformed_top_level_is_decode_error() {
    let mut server = Server::new_async().await;
    let _m = mock_lookup(&mut server, "1", "[1, 2, 3]").await;

    let client = RecipeClient::builder().base_url(server.url()).build().unwrap();
    let err = client.get_detail("1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}
