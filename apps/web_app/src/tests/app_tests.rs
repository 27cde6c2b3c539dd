use super::*;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{http::StatusCode, routing::get, Router};
use crossbeam_channel::bounded;
use info_client::HttpInfoSource;
use shared::domain::AppInfo;
use tokio::{net::TcpListener, runtime::Runtime};

use crate::backend_bridge::runtime::launch;
use crate::component::{state::PLACEHOLDER_APP_NAME, view::TitleTone};
use crate::controller::events::FailureCategory;

fn spawn_info_server(runtime: &Runtime, status: StatusCode, body: &'static str) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    runtime.block_on(async move {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let app = Router::new().route("/api/info", get(move || async move { (status, body) }));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}/")
    })
}

fn unused_base_url(runtime: &Runtime) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    runtime.block_on(async {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        format!("http://{addr}/")
    })
}

fn start_app(base_url: String) -> WebApp {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(4);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(4);
    launch(cmd_rx, ui_tx, Arc::new(HttpInfoSource::new()), Arc::new(|| {}));
    WebApp::new(
        cmd_tx,
        ui_rx,
        &StartupConfig {
            base_url,
            ..StartupConfig::default()
        },
    )
}

fn run_until_settled(app: &mut WebApp) -> ViewNode {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let (tree, _) = app.frame();
        if !app.component().state().phase().is_awaiting() || Instant::now() > deadline {
            return tree;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn frames_before_any_response_show_placeholder_and_request_once() {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(4);
    let (_ui_tx, ui_rx) = bounded::<UiEvent>(4);
    let mut app = WebApp::new(cmd_tx, ui_rx, &StartupConfig::default());

    for _ in 0..10 {
        let (tree, changed) = app.frame();
        assert!(!changed);
        assert_eq!(tree.title(), Some((PLACEHOLDER_APP_NAME, TitleTone::Pending)));
    }

    assert!(cmd_rx.try_recv().is_ok(), "mount issues the request");
    assert!(cmd_rx.try_recv().is_err(), "re-rendering must not issue another");
}

#[test]
fn success_response_renders_app_name() {
    let runtime = Runtime::new().expect("runtime");
    let base_url = spawn_info_server(&runtime, StatusCode::OK, r#"{"appName":"MyApp"}"#);
    let mut app = start_app(base_url);

    let tree = run_until_settled(&mut app);
    assert_eq!(tree.title(), Some(("MyApp", TitleTone::Normal)));
}

#[test]
fn not_found_response_renders_failure_state() {
    let runtime = Runtime::new().expect("runtime");
    let base_url = spawn_info_server(&runtime, StatusCode::NOT_FOUND, "not here");
    let mut app = start_app(base_url);

    let tree = run_until_settled(&mut app);
    let (title, tone) = tree.title().expect("title");
    assert_eq!(tone, TitleTone::Error);
    assert_ne!(title, PLACEHOLDER_APP_NAME);
    assert_ne!(title, "not here");

    let failure = app.component().state().failure().expect("failure state");
    assert_eq!(failure.category(), FailureCategory::HttpStatus);
    assert_eq!(failure.status(), Some(404));
}

#[test]
fn refused_connection_renders_failure_state() {
    let runtime = Runtime::new().expect("runtime");
    let base_url = unused_base_url(&runtime);
    let mut app = start_app(base_url);

    let tree = run_until_settled(&mut app);
    assert_eq!(tree.title().map(|(_, tone)| tone), Some(TitleTone::Error));
    assert_eq!(
        app.component().state().failure().map(|f| f.category()),
        Some(FailureCategory::Transport)
    );
}

#[test]
fn malformed_body_renders_failure_state() {
    let runtime = Runtime::new().expect("runtime");
    let base_url = spawn_info_server(&runtime, StatusCode::OK, "{\"appName\":");
    let mut app = start_app(base_url);

    run_until_settled(&mut app);
    assert_eq!(
        app.component().state().failure().map(|f| f.category()),
        Some(FailureCategory::Decode)
    );
}

#[test]
fn reload_mounts_a_fresh_component_and_ignores_the_old_completion() {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(4);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(4);
    let mut app = WebApp::new(cmd_tx, ui_rx, &StartupConfig::default());

    app.frame();
    let BackendCommand::FetchInfo {
        component_id: first_id,
        ..
    } = cmd_rx.try_recv().expect("first request");

    app.reload();
    app.frame();
    let BackendCommand::FetchInfo {
        component_id: second_id,
        ..
    } = cmd_rx.try_recv().expect("request from the new instance");
    assert_ne!(first_id, second_id);

    ui_tx
        .try_send(UiEvent::InfoLoaded {
            component_id: first_id,
            info: AppInfo {
                app_name: "Stale".to_string(),
            },
        })
        .expect("send");
    let (tree, changed) = app.frame();
    assert!(!changed);
    assert_eq!(tree.title(), Some((PLACEHOLDER_APP_NAME, TitleTone::Pending)));

    ui_tx
        .try_send(UiEvent::InfoLoaded {
            component_id: second_id,
            info: AppInfo {
                app_name: "Fresh".to_string(),
            },
        })
        .expect("send");
    let (tree, changed) = app.frame();
    assert!(changed);
    assert_eq!(tree.title(), Some(("Fresh", TitleTone::Normal)));
}

#[test]
fn backend_loss_reported_before_first_frame_ends_in_failure_state() {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(4);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(4);
    let mut app = WebApp::new(cmd_tx, ui_rx, &StartupConfig::default());

    // The worker reports its death while its command receiver is still alive.
    ui_tx
        .try_send(UiEvent::BackendUnavailable(
            "backend worker startup failure: failed to build runtime".to_string(),
        ))
        .expect("send");
    let (tree, changed) = app.frame();
    assert!(changed);
    assert!(cmd_rx.try_recv().is_err(), "no request into a dead worker's queue");
    drop(cmd_rx);

    for _ in 0..5 {
        let (tree, _) = app.frame();
        assert_eq!(tree.title().map(|(_, tone)| tone), Some(TitleTone::Error));
    }
    assert_eq!(tree.title().map(|(_, tone)| tone), Some(TitleTone::Error));
    assert_eq!(
        app.component().state().failure().map(|f| f.category()),
        Some(FailureCategory::Transport)
    );

    app.reload();
    let (tree, _) = app.frame();
    assert_eq!(tree.title().map(|(_, tone)| tone), Some(TitleTone::Error));
}
