use std::{
    sync::{
        atomic::{
            AtomicUsize,
            Ordering,
        },
        Arc,
    },
    thread,
    time::{
        Duration,
        Instant,
    },
};

use rand::{
    rngs::StdRng,
    SeedableRng,
};
use tokio::{
    io::{
        AsyncReadExt,
        AsyncWriteExt,
    },
    net::TcpListener,
    task::JoinHandle,
};
use wordcloud3d::{
    cloud::{
        encoding::PALETTE,
        CloudScene,
        Glyph,
    },
    core::{
        models::GENERIC_FAILURE,
        tasks::{
            manager::Waker,
            BackendStatus,
            TaskManager,
            TaskResult,
        },
        AnalysisClient,
        AnalyzeOutcome,
        AppConfig,
    },
    gui::app::AnalysisState,
};

/// Accepts one connection, answers with `status` and `body`, and resolves to
/// the raw request text.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });

    (base, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let read = socket.read(&mut chunk).await.unwrap();
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);

        let text = String::from_utf8_lossy(&buffer);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse().ok())?
                })
                .unwrap_or(0usize);
            if buffer.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buffer).into_owned()
}

fn client_for(base: &str) -> AnalysisClient {
    let config = AppConfig::from_values(Some(base.to_string()), Some("10".to_string())).unwrap();
    AnalysisClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_success_posts_url_and_returns_words() {
    let (base, server) =
        serve_once("200 OK", r#"{"words":[{"word":"economy","weight":0.9}]}"#).await;

    let outcome = client_for(&base).analyze("https://www.bbc.com/news").await;
    let request = server.await.unwrap();

    assert!(request.starts_with("POST /analyze HTTP/1.1"), "request was {request}");
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"url":"https://www.bbc.com/news"}"#));

    let words = match outcome {
        AnalyzeOutcome::Success { words } => words,
        other => panic!("Expected success, got {:?}", other),
    };

    let mut rng = StdRng::seed_from_u64(3);
    let glyphs: Vec<Glyph> = CloudScene::new(words, &mut rng).glyphs().collect();
    assert_eq!(glyphs.len(), 1);
    assert_eq!(glyphs[0].word, "economy");
    assert!((glyphs[0].size - 1.85).abs() < 1e-5);
    assert_eq!(glyphs[0].color, PALETTE[PALETTE.len() - 1]);
}

#[tokio::test]
async fn test_declared_error_shown_verbatim() {
    let (base, server) = serve_once("400 Bad Request", r#"{"detail":"invalid url"}"#).await;

    let outcome = client_for(&base).analyze("notaurl").await;
    server.await.unwrap();

    assert_eq!(outcome, AnalyzeOutcome::Failure { message: "invalid url".to_string() });
}

#[tokio::test]
async fn test_unparseable_error_body_falls_back() {
    let (base, server) = serve_once("502 Bad Gateway", "<html>upstream down</html>").await;

    let outcome = client_for(&base).analyze("https://www.cnn.com/").await;
    server.await.unwrap();

    assert_eq!(outcome, AnalyzeOutcome::Failure { message: GENERIC_FAILURE.to_string() });
}

#[tokio::test]
async fn test_malformed_success_body_is_a_failure() {
    let (base, server) = serve_once("200 OK", r#"{"words":"nope"}"#).await;

    let outcome = client_for(&base).analyze("https://www.cnn.com/").await;
    server.await.unwrap();

    match outcome {
        AnalyzeOutcome::Failure { message } => assert!(message.starts_with("Invalid JSON")),
        other => panic!("Expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_service_is_a_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = client_for(&base);
    match client.analyze("https://www.nytimes.com/").await {
        AnalyzeOutcome::Failure { message } => assert!(!message.is_empty()),
        other => panic!("Expected failure, got {:?}", other),
    }
    assert!(!client.health().await);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (base, server) = serve_once("200 OK", r#"{"status":"ok"}"#).await;
    assert!(client_for(&base).health().await);
    let request = server.await.unwrap();
    assert!(request.starts_with("GET /health HTTP/1.1"));

    let (base, server) = serve_once("200 OK", r#"{"status":"degraded"}"#).await;
    assert!(!client_for(&base).health().await);
    server.await.unwrap();
}

/// Drives a submission through the view-model and the background task manager.
#[test]
fn test_repeated_submissions_place_independently() {
    let server_rt = tokio::runtime::Runtime::new().unwrap();
    let body = r#"{"words":[{"word":"economy","weight":0.9},{"word":"trade","weight":0.4}]}"#;

    let mut state = AnalysisState::default();
    let mut scenes = Vec::new();

    for _ in 0..2 {
        let (base, server) = server_rt.block_on(serve_once("200 OK", body));

        let waker: Waker = Arc::new(|| {});
        let mut manager = TaskManager::new(client_for(&base), waker).unwrap();

        let request_id = state.submit("https://www.bbc.com/news").unwrap();
        manager.analyze(request_id, "https://www.bbc.com/news".to_string());

        let deadline = Instant::now() + Duration::from_secs(10);
        let (id, outcome) = loop {
            if let Some(TaskResult::Analysis { request_id, outcome }) =
                manager.poll_results().into_iter().next()
            {
                break (request_id, outcome);
            }
            assert!(Instant::now() < deadline, "analysis never completed");
            thread::sleep(Duration::from_millis(10));
        };

        assert!(state.complete(id, outcome));
        server_rt.block_on(server).unwrap();

        let words = state.words().unwrap().to_vec();
        scenes.push(CloudScene::new(words, &mut rand::rng()));
    }

    assert_ne!(scenes[0].positions(), scenes[1].positions());
    let first: Vec<Glyph> = scenes[0].glyphs().collect();
    let second: Vec<Glyph> = scenes[1].glyphs().collect();
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.size, b.size);
        assert_eq!(a.color, b.color);
    }
}

/// A backend that accepts connections and never answers must not pin health
/// workers: each check times out, and overlapping checks are skipped.
#[test]
fn test_silent_backend_health_check_times_out() {
    let server_rt = tokio::runtime::Runtime::new().unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));

    let listener = server_rt.block_on(TcpListener::bind("127.0.0.1:0")).unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let counter = accepted.clone();
    server_rt.spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            held.push(socket);
        }
    });

    let wakes = Arc::new(AtomicUsize::new(0));
    let wake_counter = wakes.clone();
    let waker: Waker = Arc::new(move || {
        wake_counter.fetch_add(1, Ordering::SeqCst);
    });
    let client = client_for(&base).with_health_timeout(Duration::from_millis(300));
    let mut manager = TaskManager::new(client, waker).unwrap();

    assert!(manager.check_backend());
    for _ in 0..4 {
        assert!(!manager.check_backend());
    }

    let deadline = Instant::now() + Duration::from_secs(5);
    let status = loop {
        if let Some(TaskResult::BackendHealth(status)) = manager.poll_results().into_iter().next() {
            break status;
        }
        assert!(Instant::now() < deadline, "health check never finished");
        thread::sleep(Duration::from_millis(10));
    };

    assert_eq!(status, BackendStatus::Offline);
    while wakes.load(Ordering::SeqCst) == 0 {
        assert!(Instant::now() < deadline, "UI was never woken");
        thread::sleep(Duration::from_millis(10));
    }
    assert_eq!(wakes.load(Ordering::SeqCst), 1);
    assert!(accepted.load(Ordering::SeqCst) <= 1);
    assert!(!manager.health_check_running());

    // The next interval starts a fresh check.
    assert!(manager.check_backend());
}
