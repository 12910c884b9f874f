mod common;

use common::{json_response, setup_test_client};
use serde_json::json;

#[tokio::test]
async fn test_create_client_with_and_without_email() {
    let client = setup_test_client().await;

    let (status, body) = json_response(
        client
            .post("/api/clients")
            .body_json(&json!({"name": "Acme", "email": "ops@acme.test"}))
            .send()
            .await,
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(body["name"], "Acme");
    assert_eq!(body["email"], "ops@acme.test");

    let (status, body) = json_response(
        client
            .post("/api/clients")
            .body_json(&json!({"name": "Globex"}))
            .send()
            .await,
    )
    .await;
    assert_eq!(status, 201);
    assert!(body.get("email").map_or(true, |email| email.is_null()));
}

#[tokio::test]
async fn test_client_errors_are_collected() {
    let client = setup_test_client().await;

    let (status, body) = json_response(
        client
            .post("/api/clients")
            .body_json(&json!({"name": "", "email": "not-an-email"}))
            .send()
            .await,
    )
    .await;

    assert_eq!(status, 400);
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email"]);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let client = setup_test_client().await;
    let body = json!({"name": "Acme", "email": "ops@acme.test"});

    let (status, _) = json_response(client.post("/api/clients").body_json(&body).send().await).await;
    assert_eq!(status, 201);

    let (status, err) = json_response(client.post("/api/clients").body_json(&body).send().await).await;
    assert_eq!(status, 409);
    assert_eq!(err["error"], "conflict");
    assert_eq!(err["statusCode"], 409);

    let (_, listed) = json_response(client.get("/api/clients").send().await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_update_delete_client() {
    let client = setup_test_client().await;

    let (_, created) = json_response(
        client
            .post("/api/clients")
            .body_json(&json!({"name": "Acme", "email": "ops@acme.test"}))
            .send()
            .await,
    )
    .await;
    let path = format!("/api/clients/{}", created["id"].as_str().unwrap());

    let (status, fetched) = json_response(client.get(&path).send().await).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);

    let (status, updated) = json_response(
        client
            .put(&path)
            .body_json(&json!({"name": "Acme Ltd", "email": "  "}))
            .send()
            .await,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["name"], "Acme Ltd");
    assert!(updated.get("email").map_or(true, |email| email.is_null()));

    client
        .delete(&path)
        .send()
        .await
        .assert_status(poem::http::StatusCode::NO_CONTENT);

    let (status, body) = json_response(client.get(&path).send().await).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_unknown_client_is_not_found() {
    let client = setup_test_client().await;

    let (status, _) = json_response(client.get("/api/clients/missing").send().await).await;
    assert_eq!(status, 404);

    let (status, _) = json_response(
        client
            .put("/api/clients/missing")
            .body_json(&json!({"name": "Acme"}))
            .send()
            .await,
    )
    .await;
    assert_eq!(status, 404);

    let (status, _) = json_response(client.delete("/api/clients/missing").send().await).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_update_to_taken_email_is_conflict() {
    let client = setup_test_client().await;

    client
        .post("/api/clients")
        .body_json(&json!({"name": "Acme", "email": "ops@acme.test"}))
        .send()
        .await
        .assert_status(poem::http::StatusCode::CREATED);

    let (_, globex) = json_response(
        client
            .post("/api/clients")
            .body_json(&json!({"name": "Globex", "email": "hi@globex.test"}))
            .send()
            .await,
    )
    .await;
    let path = format!("/api/clients/{}", globex["id"].as_str().unwrap());

    let (status, err) = json_response(
        client
            .put(&path)
            .body_json(&json!({"name": "Globex", "email": "ops@acme.test"}))
            .send()
            .await,
    )
    .await;
    assert_eq!(status, 409);
    assert_eq!(err["error"], "conflict");

    let (_, unchanged) = json_response(client.get(&path).send().await).await;
    assert_eq!(unchanged["email"], "hi@globex.test");
}
