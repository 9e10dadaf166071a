use std::{sync::Arc, time::Duration};

use tokio::time::sleep;

use sidebar_server::{BoardServer, ServerConfig, TickScheduler};
use sidebar_test::{ClientView, RecordingViewer, ScriptedAdapter};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Fixture {
    server: Arc<BoardServer<String>>,
    viewer: Arc<RecordingViewer>,
    adapter: Arc<ScriptedAdapter>,
}

// 3 ticks of 50ms: one refresh every 150ms
fn fixture() -> Fixture {
    init_logger();
    let server = Arc::new(BoardServer::new(ServerConfig::default()).unwrap());
    let viewer = RecordingViewer::new(1, "alice", server.capabilities());
    let adapter = ScriptedAdapter::new("Title", &["a"]);
    server.create_session(viewer.clone(), adapter.clone()).unwrap();
    Fixture {
        server,
        viewer,
        adapter,
    }
}

impl Fixture {
    /// Refreshes since the session was created
    fn refreshes(&self) -> usize {
        self.adapter.body_requests() - 1
    }
}

#[tokio::test(start_paused = true)]
async fn test_refreshes_once_per_period() {
    let fixture = fixture();
    let mut scheduler = TickScheduler::new(&fixture.server);

    scheduler.start().unwrap();

    sleep(Duration::from_millis(75)).await;
    assert_eq!(fixture.refreshes(), 0);

    sleep(Duration::from_millis(150)).await;
    assert_eq!(fixture.refreshes(), 1);

    sleep(Duration::from_millis(300)).await;
    assert_eq!(fixture.refreshes(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_stop_halts_refreshes() {
    let fixture = fixture();
    let mut scheduler = TickScheduler::new(&fixture.server);
    scheduler.start().unwrap();
    sleep(Duration::from_millis(225)).await;
    assert_eq!(fixture.refreshes(), 1);

    scheduler.stop();
    sleep(Duration::from_millis(1000)).await;

    assert_eq!(fixture.refreshes(), 1);
    assert!(!scheduler.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_start_twice_keeps_one_driver() {
    let fixture = fixture();
    let mut scheduler = TickScheduler::new(&fixture.server);

    scheduler.start().unwrap();
    scheduler.start().unwrap();
    sleep(Duration::from_millis(525)).await;

    assert_eq!(fixture.refreshes(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_changing_interval_applies_immediately() {
    let fixture = fixture();
    let mut scheduler = TickScheduler::new(&fixture.server);
    scheduler.start().unwrap();

    scheduler.set_tick_interval(1).unwrap();
    assert_eq!(fixture.server.refresh_period(), Duration::from_millis(50));
    sleep(Duration::from_millis(225)).await;

    assert_eq!(fixture.refreshes(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_interval_keeps_schedule() {
    let fixture = fixture();
    let mut scheduler = TickScheduler::new(&fixture.server);
    scheduler.start().unwrap();

    assert!(scheduler.set_tick_interval(0).is_err());
    assert_eq!(fixture.server.tick_interval(), 3);
    assert!(scheduler.is_running());

    sleep(Duration::from_millis(225)).await;
    assert_eq!(fixture.refreshes(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_scheduled_refreshes_reach_the_client() {
    let fixture = fixture();
    let mut client = ClientView::new(fixture.server.capabilities());
    client.apply_all(fixture.viewer.take_decoded()).unwrap();
    let mut scheduler = TickScheduler::new(&fixture.server);
    scheduler.start().unwrap();

    fixture.adapter.set_lines(&["b", "c"]);
    sleep(Duration::from_millis(160)).await;

    client.apply_all(fixture.viewer.take_decoded()).unwrap();
    assert_eq!(client.visible_rows(), vec!["b", "c"]);
}

#[tokio::test(start_paused = true)]
async fn test_failing_viewer_does_not_stop_the_scheduler() {
    let fixture = fixture();
    let mut scheduler = TickScheduler::new(&fixture.server);
    scheduler.start().unwrap();
    fixture.viewer.take_packets();
    fixture.viewer.set_failing(true);

    sleep(Duration::from_millis(525)).await;

    assert!(scheduler.is_running());
    assert_eq!(fixture.refreshes(), 3);
    assert_eq!(fixture.viewer.packet_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_scheduler_stops_driver() {
    let fixture = fixture();
    {
        let mut scheduler = TickScheduler::new(&fixture.server);
        scheduler.start().unwrap();
        sleep(Duration::from_millis(160)).await;
    }

    sleep(Duration::from_millis(1000)).await;

    assert_eq!(fixture.refreshes(), 1);
}
