//! End-to-end tests against a real listener on an ephemeral port.

use project_registry::app::build_router;
use project_registry::projects::protocol::ErrorResponse;
use project_registry::projects::store::ProjectStore;
use project_registry::projects::types::Project;
use reqwest::StatusCode;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(Arc::new(ProjectStore::new()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn create_update_delete_scenario() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();
    let base = format!("http://{}/projects", addr);

    let response = client
        .post(&base)
        .json(&json!({ "name": "Projeto1", "owner": "Tobias" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Project = response.json().await.unwrap();
    assert!(!created.id.as_str().is_empty());
    assert_eq!(created.name, "Projeto1");
    assert_eq!(created.owner, "Tobias");

    let listed: Vec<Project> = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let item_url = format!("{}/{}", base, created.id);
    let response = client
        .put(&item_url)
        .json(&json!({ "name": "Projeto2", "owner": "Dalvana" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Project = response.json().await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Projeto2");
    assert_eq!(updated.owner, "Dalvana");

    let response = client.delete(&item_url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.bytes().await.unwrap().is_empty());

    let listed: Vec<Project> = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert!(listed.is_empty());

    let response = client.delete(&item_url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.error, "Project not found");
}

#[tokio::test]
async fn list_reflects_insertion_order() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();
    let base = format!("http://{}/projects", addr);

    for name in ["A", "B", "C"] {
        client
            .post(&base)
            .json(&json!({ "name": name, "owner": "team" }))
            .send()
            .await
            .unwrap();
    }

    let listed: Vec<Project> = client.get(&base).send().await.unwrap().json().await.unwrap();
    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    let middle_url = format!("{}/{}", base, listed[1].id);
    let response = client
        .put(&middle_url)
        .json(&json!({ "name": "B2", "owner": "team" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed: Vec<Project> = client.get(&base).send().await.unwrap().json().await.unwrap();
    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B2", "C"]);
}

#[tokio::test]
async fn update_error_ordering_over_http() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();
    let base = format!("http://{}/projects", addr);

    let response = client
        .put(format!("{}/unknown-id", base))
        .json(&json!({ "name": "", "owner": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let created: Project = client
        .post(&base)
        .json(&json!({ "name": "A", "owner": "x" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let response = client
        .put(format!("{}/{}", base, created.id))
        .json(&json!({ "name": "A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.error, "Name and owner are required");
}
