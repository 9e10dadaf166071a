use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use sidebar_server::{
    BoardAdapter, BoardError, BoardServer, ServerConfig, Viewer, ViewerId,
};
use sidebar_shared::{Body, ContractError, Title};
use sidebar_test::{ClientView, RecordingViewer, ScriptedAdapter};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn server() -> BoardServer<String> {
    init_logger();
    BoardServer::new(ServerConfig::default()).unwrap()
}

/// Shows each viewer their own name and counts refreshes in a shared log
struct PerViewer {
    order: Mutex<Vec<String>>,
    refreshes: AtomicUsize,
}

impl BoardAdapter<String> for PerViewer {
    fn title(&self, viewer: &dyn Viewer) -> Title<String> {
        Title::legacy(&format!("&e{}", viewer.name()))
    }

    fn body(&self, viewer: &dyn Viewer) -> Body<String> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        self.order.lock().unwrap().push(viewer.name().to_string());
        Body::legacy(&[format!("Hello {}", viewer.name())])
    }
}

#[test]
fn test_each_viewer_gets_own_board() {
    let server = server();
    let adapter = Arc::new(PerViewer {
        order: Mutex::new(Vec::new()),
        refreshes: AtomicUsize::new(0),
    });
    let alice = RecordingViewer::new(1, "alice", server.capabilities());
    let bob = RecordingViewer::new(2, "bob", server.capabilities());

    let alice_id = server.create_session(alice.clone(), adapter.clone()).unwrap();
    let bob_id = server.create_session(bob.clone(), adapter.clone()).unwrap();

    assert_ne!(alice_id, bob_id);
    for (viewer, name) in [(&alice, "alice"), (&bob, "bob")] {
        let mut client = ClientView::new(server.capabilities());
        client.apply_all(viewer.take_decoded()).unwrap();
        assert_eq!(client.title(), format!("§e{}", name));
        assert_eq!(client.visible_rows(), vec![format!("Hello {}", name)]);
    }
}

#[test]
fn test_tick_refreshes_in_registration_order() {
    let server = server();
    let adapter = Arc::new(PerViewer {
        order: Mutex::new(Vec::new()),
        refreshes: AtomicUsize::new(0),
    });
    for (id, name) in [(3, "carol"), (1, "alice"), (2, "bob")] {
        let viewer = RecordingViewer::new(id, name, server.capabilities());
        server.create_session(viewer, adapter.clone()).unwrap();
    }
    adapter.order.lock().unwrap().clear();

    assert_eq!(server.tick().unwrap(), 3);

    assert_eq!(*adapter.order.lock().unwrap(), vec!["carol", "alice", "bob"]);
}

#[test]
fn test_tick_skips_destroyed_sessions() {
    let server = server();
    let adapter = Arc::new(PerViewer {
        order: Mutex::new(Vec::new()),
        refreshes: AtomicUsize::new(0),
    });
    let alice = RecordingViewer::new(1, "alice", server.capabilities());
    let bob = RecordingViewer::new(2, "bob", server.capabilities());
    server.create_session(alice, adapter.clone()).unwrap();
    server.create_session(bob, adapter.clone()).unwrap();

    server.destroy_session(ViewerId::new(1)).unwrap();
    adapter.order.lock().unwrap().clear();

    assert_eq!(server.tick().unwrap(), 1);
    assert_eq!(*adapter.order.lock().unwrap(), vec!["bob"]);
}

#[test]
fn test_failing_session_does_not_block_others() {
    let server = server();
    let broken = ScriptedAdapter::new("Broken", &["ok"]);
    let healthy = ScriptedAdapter::new("Healthy", &["ok"]);
    let alice = RecordingViewer::new(1, "alice", server.capabilities());
    let bob = RecordingViewer::new(2, "bob", server.capabilities());
    server.create_session(alice.clone(), broken.clone()).unwrap();
    server.create_session(bob.clone(), healthy.clone()).unwrap();
    let mut bob_client = ClientView::new(server.capabilities());
    bob_client.apply_all(bob.take_decoded()).unwrap();

    let too_long = "n".repeat(31);
    broken.set_lines(&[too_long.as_str()]);
    healthy.set_lines(&["still", "here"]);

    assert_eq!(server.tick().unwrap(), 1);
    bob_client.apply_all(bob.take_decoded()).unwrap();
    assert_eq!(bob_client.visible_rows(), vec!["still", "here"]);
    assert_eq!(server.session_count().unwrap(), 2);
}

#[test]
fn test_disconnected_viewer_receives_nothing() {
    let server = server();
    let viewer = RecordingViewer::new(1, "alice", server.capabilities());
    let adapter = ScriptedAdapter::new("Title", &["a"]);
    server.create_session(viewer.clone(), adapter.clone()).unwrap();
    viewer.take_packets();

    viewer.set_connected(false);
    adapter.set_lines(&["b"]);
    assert_eq!(server.tick().unwrap(), 1);

    assert_eq!(viewer.packet_count(), 0);
    let session = server.session(ViewerId::new(1)).unwrap().unwrap();
    assert_eq!(session.lock().unwrap().body().get(0).unwrap().content(), "b");
}

#[test]
fn test_send_failures_are_not_errors() {
    let server = server();
    let viewer = RecordingViewer::new(1, "alice", server.capabilities());
    viewer.set_failing(true);

    let result = server.create_session(viewer.clone(), ScriptedAdapter::new("Title", &["a"]));

    assert!(result.is_ok());
    assert_eq!(server.tick().unwrap(), 1);
    assert_eq!(viewer.packet_count(), 0);
}

#[test]
fn test_tick_interval_validation() {
    let server = server();

    let error = server.set_tick_interval(0).unwrap_err();

    assert!(matches!(
        error,
        BoardError::Contract(ContractError::InvalidTickInterval { ticks: 0 })
    ));
    assert_eq!(server.tick_interval(), 3);

    server.set_tick_interval(20).unwrap();
    assert_eq!(server.refresh_period(), std::time::Duration::from_secs(1));
}

#[test]
fn test_zero_interval_config_is_rejected() {
    init_logger();
    let result = BoardServer::<String>::new(ServerConfig {
        update_interval_ticks: 0,
        ..ServerConfig::default()
    });

    assert!(matches!(
        result.err(),
        Some(BoardError::Contract(ContractError::InvalidTickInterval { ticks: 0 }))
    ));
}

#[test]
fn test_sessions_are_shared_across_threads() {
    let server = Arc::new(server());
    let adapter = ScriptedAdapter::new("Title", &["a"]);

    let handles: Vec<_> = (0..8u64)
        .map(|id| {
            let server = server.clone();
            let adapter = adapter.clone();
            std::thread::spawn(move || {
                let viewer = RecordingViewer::new(id, &format!("viewer{}", id), server.capabilities());
                server.create_session(viewer, adapter).unwrap();
                server.tick().unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(server.session_count().unwrap(), 8);
    assert_eq!(server.tick().unwrap(), 8);
}
