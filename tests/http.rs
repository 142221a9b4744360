use once_cell::sync::Lazy;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct UserState {
    xp: u64,
    level: u32,
    title: String,
}

#[derive(Debug, Deserialize)]
struct CheckInResponse {
    log: Value,
    user: UserState,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));
static NEXT_OWNER: AtomicU64 = AtomicU64::new(100);

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("buhat_buddy_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/health")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_buhat_buddy"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

/// Client bound to one fresh owner id.
struct Session {
    base_url: String,
    owner: u64,
    client: Client,
}

impl Session {
    async fn new() -> Self {
        let server = shared_server().await;
        Self {
            base_url: server.base_url.clone(),
            owner: NEXT_OWNER.fetch_add(1, Ordering::SeqCst),
            client: Client::new(),
        }
    }

    fn as_owner(&self, owner: u64) -> Self {
        Self {
            base_url: self.base_url.clone(),
            owner,
            client: self.client.clone(),
        }
    }

    fn auth(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("x-user-id", self.owner.to_string())
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let resp = self
            .auth(self.client.get(format!("{}{path}", self.base_url)))
            .send()
            .await
            .unwrap();
        (resp.status(), resp.json().await.unwrap_or(Value::Null))
    }

    async fn send(&self, method: reqwest::Method, path: &str, body: Value) -> (StatusCode, Value) {
        let resp = self
            .auth(self.client.request(method, format!("{}{path}", self.base_url)))
            .json(&body)
            .send()
            .await
            .unwrap();
        (resp.status(), resp.json().await.unwrap_or(Value::Null))
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send(reqwest::Method::POST, path, body).await
    }

    async fn plan_id(&self, day: &str) -> u64 {
        let (status, body) = self.post("/weekly-plan", json!({ "day_of_week": day })).await;
        assert_eq!(status, StatusCode::OK);
        body["plan"]["id"].as_u64().unwrap()
    }
}

#[tokio::test]
async fn http_requires_owner_header() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let resp = Client::new()
        .get(format!("{}/weekly-plan", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn http_check_in_overwrites_day_by_delta() {
    let _guard = TEST_LOCK.lock().await;
    let session = Session::new().await;

    let (status, body) = session
        .post(
            "/check-in",
            json!({ "date": "2024-01-08", "workout_text": "Leg Day", "is_rest_day": false }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let first: CheckInResponse = serde_json::from_value(body).unwrap();
    assert_eq!(first.log["xp_gained"], 15);
    assert_eq!(first.user.xp, 15);

    let (_, body) = session
        .post("/check-in", json!({ "date": "2024-01-08", "is_rest_day": true }))
        .await;
    let second: CheckInResponse = serde_json::from_value(body).unwrap();
    assert_eq!(second.log["xp_gained"], 0);
    assert_eq!(second.user.xp, 0);
    assert_eq!(second.user.level, 1);
    assert_eq!(second.user.title, "Novice");

    let (_, calendar) = session.get("/calendar?year=2024&month=1").await;
    let logs = calendar["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["date"], "2024-01-08");
    assert_eq!(logs[0]["is_rest_day"], true);

    let (status, body) = session
        .post("/check-in", json!({ "date": "yesterday", "is_rest_day": false }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "date");
}

#[tokio::test]
async fn http_profile_and_stats() {
    let _guard = TEST_LOCK.lock().await;
    let session = Session::new().await;
    for (date, rest, text) in [
        ("2024-01-01", false, Value::Null),
        ("2024-01-02", true, Value::Null),
        ("2024-01-08", false, json!("Leg Day")),
    ] {
        let (status, _) = session
            .post(
                "/check-in",
                json!({ "date": date, "is_rest_day": rest, "workout_text": text }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, profile) = session.get("/api/profile").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["xp"], 25);
    assert_eq!(profile["level"], 1);
    assert_eq!(profile["most_active_day"], "Monday");

    let (_, stats) = session.get("/api/profile/stats").await;
    let series = stats["xp_over_time"].as_array().unwrap();
    let totals: Vec<u64> = series.iter().map(|p| p["xp"].as_u64().unwrap()).collect();
    assert_eq!(totals, vec![10, 10, 25]);
    assert_eq!(stats["weekday_counts"][1], 2);
    assert_eq!(stats["weekday_counts"][2], 0);
    assert_eq!(stats["label_distribution"][0]["label"], "Leg Day");
    assert_eq!(stats["weekly_summary"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn http_plan_label_survives_omitted_text() {
    let _guard = TEST_LOCK.lock().await;
    let session = Session::new().await;

    let (_, body) = session
        .post("/weekly-plan", json!({ "day_of_week": "Friday", "workout_text": "Pull" }))
        .await;
    let plan_id = body["plan"]["id"].as_u64().unwrap();

    let (_, body) = session.post("/weekly-plan", json!({ "day_of_week": "Friday" })).await;
    assert_eq!(body["plan"]["id"].as_u64(), Some(plan_id));
    assert_eq!(body["plan"]["workout_text"], "Pull");

    let (status, body) = session
        .post("/weekly-plan", json!({ "day_of_week": "Someday" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "day_of_week");

    let (_, plans) = session.get("/weekly-plan").await;
    assert_eq!(plans["plans"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn http_apply_template_replaces_items() {
    let _guard = TEST_LOCK.lock().await;
    let session = Session::new().await;
    let plan_id = session.plan_id("Monday").await;

    for name in ["Old A", "Old B"] {
        let (status, _) = session
            .post(
                &format!("/weekly-plan/{plan_id}/items"),
                json!({ "exercise_name": name, "sets": 2 }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, templates) = session
        .get("/workout-templates?category=legs&equipment=bodyweight")
        .await;
    let template = &templates["templates"][0];
    assert_eq!(template["name"], "Legs (Bodyweight)");
    let template_id = template["id"].as_u64().unwrap();
    let expected = template["items"].as_array().unwrap().len();

    let (status, body) = session
        .post(
            &format!("/weekly-plan/{plan_id}/apply-template"),
            json!({ "template_id": template_id }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (_, listing) = session.get(&format!("/weekly-plan/{plan_id}/items")).await;
    let items = listing["items"].as_array().unwrap();
    assert_eq!(items.len(), expected);
    let positions: Vec<u64> = items.iter().map(|i| i["position"].as_u64().unwrap()).collect();
    assert_eq!(positions, (1..=expected as u64).collect::<Vec<_>>());
    assert!(items.iter().all(|i| !i["exercise_name"].as_str().unwrap().starts_with("Old")));

    let item_id = items[0]["id"].as_u64().unwrap();
    let (status, body) = session
        .send(
            reqwest::Method::PATCH,
            &format!("/weekly-plan/{plan_id}/items/{item_id}/toggle"),
            json!({ "is_completed": true }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item"]["is_completed"], true);
}

#[tokio::test]
async fn http_foreign_item_cannot_be_deleted() {
    let _guard = TEST_LOCK.lock().await;
    let owner = Session::new().await;
    let intruder = owner.as_owner(NEXT_OWNER.fetch_add(1, Ordering::SeqCst));

    let plan_id = owner.plan_id("Sunday").await;
    let (_, body) = owner
        .post(
            &format!("/weekly-plan/{plan_id}/items"),
            json!({ "exercise_name": "Deadlift" }),
        )
        .await;
    let item_id = body["item"]["id"].as_u64().unwrap();

    let path = format!("/weekly-plan/{plan_id}/items/{item_id}");
    let (status, _) = intruder.send(reqwest::Method::DELETE, &path, json!({})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = intruder.get("/weekly-plan/999999/items").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listing) = owner.get(&format!("/weekly-plan/{plan_id}/items")).await;
    assert_eq!(listing["items"].as_array().unwrap().len(), 1);

    let (status, body) = owner.send(reqwest::Method::DELETE, &path, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn http_malformed_query_and_path_return_json_errors() {
    let _guard = TEST_LOCK.lock().await;
    let session = Session::new().await;

    for path in ["/calendar?month=abc", "/weekly-plan/abc/items"] {
        let (status, body) = session.get(path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert!(body["error"].is_string(), "{path}: {body}");
    }

    let (status, body) = session
        .send(reqwest::Method::DELETE, "/weekly-plan/1/items/x", json!({}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn http_calendar_reports_year_and_month_separately() {
    let _guard = TEST_LOCK.lock().await;
    let session = Session::new().await;

    let (status, body) = session.get("/calendar?year=300000&month=6").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "year");

    let (status, body) = session.get("/calendar?year=2024&month=13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "month");

    let (status, body) = session.get("/calendar?year=2024&month=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["logs"].is_array());
}
