use chrono::Local;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct WordEntry {
    id: u64,
    word_count: u64,
    date: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HeatmapCell {
    date: String,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct StreaksResponse {
    current_streak: u32,
    longest_streak: u32,
    total_words: u64,
    writing_days: u32,
    heatmap: Vec<HeatmapCell>,
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
    path.push(format!(
        "writing_tracker_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/streaks")).send().await {
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
    let child = Command::new(env!("CARGO_BIN_EXE_writing_tracker"))
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

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

#[tokio::test]
async fn http_create_entry_appears_in_list() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let today = today_string();

    let response = client
        .post(format!("{}/api/word-entries", server.base_url))
        .json(&serde_json::json!({
            "word_count": 750,
            "date": today,
            "description": "morning pages"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let created: WordEntry = response.json().await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.word_count, 750);
    assert_eq!(created.date, today);
    assert_eq!(created.description.as_deref(), Some("morning pages"));

    let entries: Vec<WordEntry> = client
        .get(format!("{}/api/word-entries", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(entries.iter().any(|entry| entry.id == created.id));
}

#[tokio::test]
async fn http_rfc3339_midnight_is_stored_as_date() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created: WordEntry = client
        .post(format!("{}/api/word-entries", server.base_url))
        .json(&serde_json::json!({
            "word_count": 10,
            "date": "2024-03-10T00:00:00+02:00"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(created.date, "2024-03-10");
    assert_eq!(created.description, None);
}

#[tokio::test]
async fn http_streaks_reflect_logged_entry() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let today = today_string();

    let response = client
        .post(format!("{}/api/word-entries", server.base_url))
        .json(&serde_json::json!({ "word_count": 1200, "date": today }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let streaks: StreaksResponse = client
        .get(format!("{}/api/streaks", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(streaks.heatmap.len(), 366);
    assert_eq!(streaks.heatmap.last().unwrap().date, today);
    assert!(streaks.current_streak >= 1);
    assert!(streaks.longest_streak >= streaks.current_streak);
    assert!(streaks.total_words >= 1200);
    assert!(streaks.writing_days >= 1);

    let today_cell = streaks
        .heatmap
        .iter()
        .find(|cell| cell.date == today)
        .expect("missing today cell");
    assert!(today_cell.count >= 1200);
}

#[tokio::test]
async fn http_rejects_malformed_date() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/word-entries", server.base_url))
        .json(&serde_json::json!({ "word_count": 5, "date": "last tuesday" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}
