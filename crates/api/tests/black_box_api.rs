use reqwest::StatusCode;
use serde_json::{json, Value};

use stockroom_api::app::{build_app, AppServices};

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod with a fresh store, bound to an ephemeral port.
        let app = build_app(AppServices::in_memory());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn create(&self, body: Value) -> reqwest::Response {
        self.client
            .post(self.url("/item"))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn widget() -> Value {
    json!({ "name": "Widget", "quantity": 5, "unitPrice": 9.99 })
}

fn gadget() -> Value {
    json!({ "name": "Gadget", "quantity": 0, "unitPrice": 12.5 })
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    assert_eq!(srv.get("/health").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_assigns_sequential_ids_and_lists_in_order() {
    let srv = TestServer::spawn().await;

    let res = srv.create(widget()).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "successfully added", "id": 1 }));

    let res = srv.create(gadget()).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], 2);

    let res = srv.get("/item").await;
    assert_eq!(res.status(), StatusCode::OK);
    let items: Value = res.json().await.unwrap();
    assert_eq!(
        items,
        json!([
            { "ID": 1, "name": "Widget", "quantity": 5, "unitPrice": 9.99 },
            { "ID": 2, "name": "Gadget", "quantity": 0, "unitPrice": 12.5 },
        ])
    );
}

#[tokio::test]
async fn empty_inventory_lists_as_empty_array() {
    let srv = TestServer::spawn().await;
    let res = srv.get("/item").await;
    assert_eq!(res.status(), StatusCode::OK);
    let items: Value = res.json().await.unwrap();
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn pagination_slices_and_rejects_out_of_range() {
    let srv = TestServer::spawn().await;
    srv.create(widget()).await;
    srv.create(gadget()).await;

    let items: Value = srv.get("/item?page=1&size=1").await.json().await.unwrap();
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["name"], "Widget");

    // size omitted -> single-item pages
    let items: Value = srv.get("/item?page=2").await.json().await.unwrap();
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["name"], "Gadget");

    // last page is clamped
    let items: Value = srv.get("/item?page=1&size=5").await.json().await.unwrap();
    assert_eq!(items.as_array().unwrap().len(), 2);

    let res = srv.get("/item?page=3&size=1").await;
    assert_eq!(res.status(), StatusCode::RANGE_NOT_SATISFIABLE);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "page/size limit exceeded" }));
}

#[tokio::test]
async fn negative_pagination_is_a_validation_error() {
    let srv = TestServer::spawn().await;
    let res = srv.get("/item?page=-1").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([{ "Page": "should not be less than 1" }]));
}

#[tokio::test]
async fn non_numeric_pagination_is_unsupported() {
    let srv = TestServer::spawn().await;
    let res = srv.get("/item?size=many").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body[0]["unknown"].as_str().is_some());
}

#[tokio::test]
async fn missing_name_is_rejected() {
    let srv = TestServer::spawn().await;
    let res = srv
        .create(json!({ "quantity": 5, "unitPrice": 9.99 }))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([{ "Name": "is required" }]));

    // Nothing was stored.
    let items: Value = srv.get("/item").await.json().await.unwrap();
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn type_mismatch_names_the_field() {
    let srv = TestServer::spawn().await;
    let res = srv
        .create(json!({ "name": "Widget", "quantity": "lots", "unitPrice": 9.99 }))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([{ "quantity": "quantity can not be a string" }]));
}

#[tokio::test]
async fn get_by_id_and_not_found() {
    let srv = TestServer::spawn().await;
    srv.create(widget()).await;

    let res = srv.get("/item/1").await;
    assert_eq!(res.status(), StatusCode::OK);
    let item: Value = res.json().await.unwrap();
    assert_eq!(
        item,
        json!({ "ID": 1, "name": "Widget", "quantity": 5, "unitPrice": 9.99 })
    );

    let res = srv.get("/item/42").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "item not found" }));
}

#[tokio::test]
async fn unparsable_id_is_a_validation_error() {
    let srv = TestServer::spawn().await;
    let res = srv.get("/item/abc").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([{ "ID": "is required" }]));
}

#[tokio::test]
async fn negative_id_is_not_found() {
    let srv = TestServer::spawn().await;
    srv.create(widget()).await;

    let res = srv.get("/item/-1").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "item not found" }));

    let res = srv.client.delete(srv.url("/item/-1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = srv
        .client
        .patch(srv.url("/item/-1"))
        .json(&widget())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "item not found" }));

    // The existing item is untouched.
    assert_eq!(srv.get("/item/1").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_id() {
    let srv = TestServer::spawn().await;
    srv.create(widget()).await;

    let res = srv
        .client
        .patch(srv.url("/item/1"))
        .json(&json!({ "name": "Gizmo", "quantity": 7, "unitPrice": 1.25 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "updated" }));

    let item: Value = srv.get("/item/1").await.json().await.unwrap();
    assert_eq!(
        item,
        json!({ "ID": 1, "name": "Gizmo", "quantity": 7, "unitPrice": 1.25 })
    );
}

#[tokio::test]
async fn update_validates_before_checking_existence() {
    let srv = TestServer::spawn().await;

    let res = srv
        .client
        .patch(srv.url("/item/9"))
        .json(&json!({ "name": "Gizmo9", "quantity": 7, "unitPrice": 1.25 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = srv
        .client
        .patch(srv.url("/item/9"))
        .json(&json!({ "name": "Gizmo", "quantity": 7, "unitPrice": 1.25 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_is_not_found_and_ids_are_not_reused() {
    let srv = TestServer::spawn().await;
    srv.create(widget()).await;
    srv.create(gadget()).await;

    let res = srv.client.delete(srv.url("/item/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "deleted" }));

    assert_eq!(srv.get("/item/1").await.status(), StatusCode::NOT_FOUND);

    let res = srv.client.delete(srv.url("/item/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = srv.create(widget()).await.json().await.unwrap();
    assert_eq!(body["id"], 3);

    // Item 2 is still intact.
    let item: Value = srv.get("/item/2").await.json().await.unwrap();
    assert_eq!(item["name"], "Gadget");
}

#[tokio::test]
async fn csv_export_has_header_and_rows() {
    let srv = TestServer::spawn().await;
    srv.create(widget()).await;
    srv.create(gadget()).await;

    let res = srv.get("/item/csv").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[reqwest::header::CONTENT_TYPE],
        "text/csv"
    );
    assert_eq!(
        res.headers()[reqwest::header::CONTENT_DISPOSITION],
        "attachment; filename=inventory.csv"
    );

    let body = res.text().await.unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,name,quantity,unit price",
            "1,Widget,5,9.990000",
            "2,Gadget,0,12.500000",
        ]
    );
}

#[tokio::test]
async fn concurrent_creates_get_unique_ids() {
    let srv = TestServer::spawn().await;

    let mut tasks = Vec::new();
    for _ in 0..20 {
        let client = srv.client.clone();
        let url = srv.url("/item");
        tasks.push(tokio::spawn(async move {
            let res = client.post(url).json(&widget()).send().await.unwrap();
            let body: Value = res.json().await.unwrap();
            body["id"].as_u64().unwrap()
        }));
    }

    let mut ids = Vec::new();
    for t in tasks {
        ids.push(t.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
}
