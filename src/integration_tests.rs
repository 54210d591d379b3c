//! API 통합 테스트
//!
//! 테스트마다 임시 디렉토리에 새 SQLite 파일을 만들고, `main`과 같은
//! `app::build_router`로 조립한 라우터에 실제 HTTP 요청을 보냅니다.

use crate::{app::build_router, db, routes::AppState};
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

/// 테스트 서버를 만듭니다. TempDir이 drop되면 DB 파일도 지워지므로 함께 반환합니다.
async fn create_test_app() -> (TestServer, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let url = database_url(&temp_dir);
    let pool = db::init(db::DbOptions {
        url: &url,
        max_connections: 2,
        run_migrations: true,
    })
    .await
    .unwrap();

    let server = TestServer::new(build_router(AppState::new(pool))).unwrap();
    (server, temp_dir)
}

fn database_url(temp_dir: &TempDir) -> String {
    format!("sqlite:{}", temp_dir.path().join("meydan.db").display())
}

async fn post_created(server: &TestServer, path: &str, body: Value) -> Value {
    let response = server.post(path).json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

fn id_of(record: &Value) -> i64 {
    record["id"].as_i64().expect("record has an integer id")
}

/// 주문에 필요한 네 엔티티를 만들고 (sariciId, toptanciId, paketciId, sigaraTuruId)를 반환
async fn seed_order_references(server: &TestServer) -> (i64, i64, i64, i64) {
    let roller = post_created(server, "/api/saricilar", json!({ "name": "Hasan" })).await;
    let wholesaler = post_created(server, "/api/toptancilar", json!({ "name": "Ege Toptan" })).await;
    let packager = post_created(server, "/api/paketciler", json!({ "name": "Paket AŞ" })).await;
    let cigarette_type = post_created(
        server,
        "/api/sigara-turleri",
        json!({ "name": "Samsun", "price": 42.5 }),
    )
    .await;
    (
        id_of(&roller),
        id_of(&wholesaler),
        id_of(&packager),
        id_of(&cigarette_type),
    )
}

fn order_body(refs: (i64, i64, i64, i64), quantity: i64) -> Value {
    let (sarici_id, toptanci_id, paketci_id, sigara_turu_id) = refs;
    json!({
        "sariciId": sarici_id,
        "toptanciId": toptanci_id,
        "paketciId": paketci_id,
        "sigaraTuruId": sigara_turu_id,
        "quantity": quantity,
        "orderDate": "2025-03-01"
    })
}

async fn create_order(server: &TestServer) -> Value {
    let refs = seed_order_references(server).await;
    post_created(server, "/api/siparisler", order_body(refs, 120)).await
}

#[tokio::test]
async fn test_create_then_get_cigarette_type() {
    let (server, _dir) = create_test_app().await;

    let created = post_created(
        &server,
        "/api/sigara-turleri",
        json!({ "name": "Marlboro", "price": 50 }),
    )
    .await;
    assert!(created["id"].is_i64());
    assert_eq!(created["name"], "Marlboro");
    assert_eq!(created["price"].as_f64(), Some(50.0));

    let response = server
        .get(&format!("/api/sigara-turleri/{}", id_of(&created)))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);
}

/// 여섯 엔티티 모두에 대해: 생성 → 조회 일치 → 부분 수정(나머지 필드 유지)
/// → 삭제 204 → 조회 404 → 재삭제 404
#[tokio::test]
async fn test_crud_round_trip_for_every_entity() {
    let (server, _dir) = create_test_app().await;
    let refs = seed_order_references(&server).await;
    let parent_order = post_created(&server, "/api/siparisler", order_body(refs, 5)).await;
    let participant = json!({ "name": "Ali Veli", "phone": "+90 555 000 00 00", "address": "İzmir" });

    // (경로, 생성 본문, 수정 본문, 수정 후에도 유지되어야 하는 필드)
    let cases = vec![
        ("/api/saricilar", participant.clone(), json!({ "name": "Ali Yeni" }), "phone"),
        ("/api/toptancilar", participant.clone(), json!({ "name": "Ali Yeni" }), "address"),
        ("/api/paketciler", participant.clone(), json!({ "phone": "+90 532 111 11 11" }), "name"),
        (
            "/api/sigara-turleri",
            json!({ "name": "Marlboro", "price": 50 }),
            json!({ "price": 55.5 }),
            "name",
        ),
        ("/api/siparisler", order_body(refs, 120), json!({ "quantity": 80 }), "orderDate"),
        (
            "/api/odeme-takvimi",
            json!({ "siparisId": id_of(&parent_order), "amount": 2500, "dueDate": "2025-04-15" }),
            json!({ "status": "paid" }),
            "amount",
        ),
    ];

    for (path, create, update, kept) in cases {
        let created = post_created(&server, path, create).await;
        let item = format!("{}/{}", path, id_of(&created));

        let response = server.get(&item).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), created, "{}", path);

        let response = server.put(&item).json(&update).await;
        response.assert_status_ok();
        let updated = response.json::<Value>();
        assert_eq!(server.get(&item).await.json::<Value>(), updated, "{}", path);
        for (field, value) in update.as_object().unwrap() {
            assert_eq!(&updated[field], value, "{} {}", path, field);
        }
        assert_eq!(updated[kept], created[kept], "{} {}", path, kept);
        assert_eq!(updated["id"], created["id"], "{}", path);
        assert_eq!(updated["createdAt"], created["createdAt"], "{}", path);

        server.delete(&item).await.assert_status(StatusCode::NO_CONTENT);
        server.get(&item).await.assert_status_not_found();
        server.delete(&item).await.assert_status_not_found();
    }
}

#[tokio::test]
async fn test_list_after_creates_and_deletes() {
    let (server, _dir) = create_test_app().await;

    let mut ids = Vec::new();
    for i in 0..5 {
        let created =
            post_created(&server, "/api/saricilar", json!({ "name": format!("Sarıcı {}", i) }))
                .await;
        ids.push(id_of(&created));
    }
    for id in &ids[1..3] {
        server
            .delete(&format!("/api/saricilar/{}", id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    let list = server.get("/api/saricilar").await.json::<Vec<Value>>();
    let listed: Vec<i64> = list.iter().map(id_of).collect();
    assert_eq!(listed, vec![ids[0], ids[3], ids[4]]);
}

#[tokio::test]
async fn test_order_round_trip_and_update() {
    let (server, _dir) = create_test_app().await;

    let order = create_order(&server).await;
    assert_eq!(order["quantity"], 120);
    assert_eq!(order["orderDate"], "2025-03-01");

    let item = format!("/api/siparisler/{}", id_of(&order));
    let response = server.put(&item).json(&json!({ "quantity": 80 })).await;
    response.assert_status_ok();

    let fetched = server.get(&item).await.json::<Value>();
    assert_eq!(fetched["quantity"], 80);
    assert_eq!(fetched["orderDate"], order["orderDate"]);
    assert_eq!(fetched["sigaraTuruId"], order["sigaraTuruId"]);
}

#[tokio::test]
async fn test_order_with_unknown_cigarette_type_is_rejected() {
    let (server, _dir) = create_test_app().await;
    let (sarici_id, toptanci_id, paketci_id, _) = seed_order_references(&server).await;

    let response = server
        .post("/api/siparisler")
        .json(&json!({
            "sariciId": sarici_id,
            "toptanciId": toptanci_id,
            "paketciId": paketci_id,
            "sigaraTuruId": 9999,
            "quantity": 10,
            "orderDate": "2025-03-01"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "constraint_violation");

    let orders = server.get("/api/siparisler").await.json::<Vec<Value>>();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_order_update_with_unknown_reference_leaves_row_unchanged() {
    let (server, _dir) = create_test_app().await;
    let order = create_order(&server).await;
    let item = format!("/api/siparisler/{}", id_of(&order));

    let response = server
        .put(&item)
        .json(&json!({ "paketciId": 4242, "quantity": 1 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let fetched = server.get(&item).await.json::<Value>();
    assert_eq!(fetched, order);
}

#[tokio::test]
async fn test_deleting_referenced_rows_conflicts() {
    let (server, _dir) = create_test_app().await;
    let order = create_order(&server).await;
    let order_item = format!("/api/siparisler/{}", id_of(&order));

    let parents = [
        format!("/api/saricilar/{}", order["sariciId"]),
        format!("/api/toptancilar/{}", order["toptanciId"]),
        format!("/api/paketciler/{}", order["paketciId"]),
        format!("/api/sigara-turleri/{}", order["sigaraTuruId"]),
    ];

    for parent in &parents {
        let response = server.delete(parent).await;
        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(response.json::<Value>()["error"]["code"], "conflict", "{}", parent);
        server.get(parent).await.assert_status_ok();
    }
    assert_eq!(server.get(&order_item).await.json::<Value>(), order);

    // 주문이 사라지면 더 이상 참조되지 않으므로 삭제할 수 있습니다
    server.delete(&order_item).await.assert_status(StatusCode::NO_CONTENT);
    for parent in &parents {
        server.delete(parent).await.assert_status(StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
async fn test_payment_schedule_lifecycle_and_cascade() {
    let (server, _dir) = create_test_app().await;
    let order = create_order(&server).await;

    let schedule = post_created(
        &server,
        "/api/odeme-takvimi",
        json!({ "siparisId": id_of(&order), "amount": 2500, "dueDate": "2025-04-15" }),
    )
    .await;
    assert_eq!(schedule["status"], "pending");
    assert_eq!(schedule["dueDate"], "2025-04-15");

    let item = format!("/api/odeme-takvimi/{}", id_of(&schedule));
    let updated = server
        .put(&item)
        .json(&json!({ "status": "paid" }))
        .await
        .json::<Value>();
    assert_eq!(updated["status"], "paid");
    assert_eq!(updated["amount"].as_f64(), Some(2500.0));

    // 주문을 지우면 결제 일정도 함께 지워집니다
    server
        .delete(&format!("/api/siparisler/{}", id_of(&order)))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server.get(&item).await.assert_status_not_found();
}

#[tokio::test]
async fn test_payment_schedule_for_missing_order_is_rejected() {
    let (server, _dir) = create_test_app().await;

    let response = server
        .post("/api/odeme-takvimi")
        .json(&json!({ "siparisId": 77, "amount": 10, "dueDate": "2025-04-15" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validation_errors() {
    let (server, _dir) = create_test_app().await;

    // 필수 필드(price) 누락
    let response = server
        .post("/api/sigara-turleri")
        .json(&json!({ "name": "Parliament" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");

    // 음수 가격
    server
        .post("/api/sigara-turleri")
        .json(&json!({ "name": "Parliament", "price": -1 }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    // 공백 이름
    server
        .post("/api/saricilar")
        .json(&json!({ "name": "  " }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    // 수량 0
    let (sarici_id, toptanci_id, paketci_id, sigara_turu_id) =
        seed_order_references(&server).await;
    server
        .post("/api/siparisler")
        .json(&json!({
            "sariciId": sarici_id,
            "toptanciId": toptanci_id,
            "paketciId": paketci_id,
            "sigaraTuruId": sigara_turu_id,
            "quantity": 0,
            "orderDate": "2025-03-01"
        }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    // 아무것도 생성되지 않았어야 합니다 (seed로 만든 1건 제외)
    let types = server.get("/api/sigara-turleri").await.json::<Vec<Value>>();
    assert_eq!(types.len(), 1);
    assert!(server.get("/api/siparisler").await.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_duplicate_cigarette_type_name_conflicts() {
    let (server, _dir) = create_test_app().await;

    post_created(&server, "/api/sigara-turleri", json!({ "name": "Camel", "price": 45 })).await;
    let response = server
        .post("/api/sigara-turleri")
        .json(&json!({ "name": "Camel", "price": 47 }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_not_found_and_bad_ids() {
    let (server, _dir) = create_test_app().await;

    let response = server.get("/api/toptancilar/12345").await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");

    server
        .put("/api/paketciler/12345")
        .json(&json!({ "name": "Yok" }))
        .await
        .assert_status_not_found();
    server
        .delete("/api/odeme-takvimi/12345")
        .await
        .assert_status_not_found();

    let response = server.get("/api/saricilar/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "bad_request");

    let response = server.get("/api/unknown").await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (server, _dir) = create_test_app().await;

    let response = server
        .post("/api/saricilar")
        .content_type("application/json")
        .bytes("{ not json".into())
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_documentation_pages() {
    let (server, _dir) = create_test_app().await;

    let response = server.get("/").await;
    response.assert_status_ok();
    response.assert_text_contains("Meydan API Dokümantasyonu");

    let response = server.get("/api-docs/").await;
    response.assert_status_ok();
    assert!(response.text().to_lowercase().contains("swagger"));

    let openapi = server.get("/openapi.json").await.json::<Value>();
    let paths = openapi["paths"].as_object().unwrap();
    for path in [
        "/api/saricilar",
        "/api/toptancilar/{id}",
        "/api/paketciler",
        "/api/sigara-turleri/{id}",
        "/api/siparisler",
        "/api/odeme-takvimi/{id}",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}

#[tokio::test]
async fn test_health_check() {
    let (server, _dir) = create_test_app().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "ok", "database": "ok" })
    );
}

#[tokio::test]
async fn test_serves_migrated_database_without_auto_migrate() {
    let (server, dir) = create_test_app().await;
    post_created(&server, "/api/saricilar", json!({ "name": "Hasan" })).await;
    drop(server);

    let url = database_url(&dir);
    let pool = db::init(db::DbOptions {
        url: &url,
        max_connections: 2,
        run_migrations: false,
    })
    .await
    .unwrap();
    let server = TestServer::new(build_router(AppState::new(pool))).unwrap();

    let rollers = server.get("/api/saricilar").await.json::<Vec<Value>>();
    assert_eq!(rollers.len(), 1);
    assert_eq!(rollers[0]["name"], "Hasan");
}
