use std::sync::Arc;

use sidebar_server::{BoardServer, RefreshHook, ServerConfig, Session, SharedSession, ViewerId};
use sidebar_shared::{
    row_token, strip_colors, team_name, Animation, Body, ObjectiveMode, Packet, ScoreAction,
    ScorePacket, TeamMode, TeamPacket, Title,
};
use sidebar_test::{
    assert_board_displayed, assert_rows_synced, ClientView, RecordingViewer, ScriptedAdapter,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Fixture {
    server: BoardServer<String>,
    viewer: Arc<RecordingViewer>,
    adapter: Arc<ScriptedAdapter>,
    client: ClientView,
    id: String,
}

impl Fixture {
    fn new(protocol_version: i32, title: &str, lines: &[&str]) -> Self {
        Self::with_adapter(protocol_version, ScriptedAdapter::new(title, lines))
    }

    fn with_adapter(protocol_version: i32, adapter: Arc<ScriptedAdapter>) -> Self {
        init_logger();
        let server = BoardServer::new(ServerConfig {
            protocol_version,
            ..ServerConfig::default()
        })
        .unwrap();
        let viewer = RecordingViewer::new(1, "alice", server.capabilities());
        let id = server
            .create_session(viewer.clone(), adapter.clone())
            .unwrap()
            .to_string();
        let mut client = ClientView::new(server.capabilities());
        client.apply_all(viewer.take_decoded()).unwrap();
        Self {
            server,
            viewer,
            adapter,
            client,
            id,
        }
    }

    fn session(&self) -> SharedSession<String> {
        self.server.session(ViewerId::new(1)).unwrap().unwrap()
    }

    fn refresh(&mut self) -> Vec<Packet> {
        self.session().lock().unwrap().refresh().unwrap();
        self.sync()
    }

    /// Feeds everything sent since the last call to the client
    fn sync(&mut self) -> Vec<Packet> {
        let packets = self.viewer.take_decoded();
        self.client.apply_all(packets.clone()).unwrap();
        packets
    }
}

fn describe(packets: &[Packet]) -> Vec<String> {
    packets
        .iter()
        .map(|packet| match packet {
            Packet::Objective(objective) => format!("objective {:?}", objective.mode()),
            Packet::DisplayObjective(_) => "display".to_string(),
            Packet::Score(score) => format!("score {:?} {}", score.action(), score.token()),
            Packet::Team(team) => format!("team {:?} {}", team.mode(), team.name()),
        })
        .collect()
}

#[test]
fn test_shrinking_body_retires_highest_score() {
    let mut fixture = Fixture::new(47, "Title", &["A", "B", "C"]);
    assert_eq!(fixture.client.visible_rows(), vec!["A", "B", "C"]);

    fixture.adapter.set_lines(&["A", "B"]);
    let packets = fixture.refresh();

    let id = fixture.id.clone();
    assert_eq!(
        describe(&packets),
        vec![
            format!("team Remove {}", team_name(&id, 2)),
            format!("score Remove {}", row_token(2).unwrap()),
            format!("team Update {}", team_name(&id, 0)),
            format!("team Update {}", team_name(&id, 1)),
        ]
    );
    assert_eq!(fixture.client.visible_rows(), vec!["A", "B"]);
}

/// Grows an empty board to one row and checks the exact packets sent
fn first_row_on_empty_board(protocol_version: i32) -> Vec<Packet> {
    let mut fixture = Fixture::new(protocol_version, "Title", &[]);
    assert!(fixture.client.rows().is_empty());

    fixture.adapter.set_lines(&["X"]);
    let packets = fixture.refresh();

    let id = fixture.id.clone();
    assert_eq!(
        describe(&packets),
        vec![
            format!("score Change {}", row_token(0).unwrap()),
            format!("team Create {}", team_name(&id, 0)),
            format!("team Update {}", team_name(&id, 0)),
        ]
    );
    match &packets[1] {
        Packet::Team(team) => assert_eq!(team.members(), [row_token(0).unwrap()]),
        other => panic!("expected a team packet, got {:?}", other),
    }
    assert_eq!(fixture.client.rows(), vec!["X"]);
    assert_eq!(fixture.client.score(&row_token(0).unwrap()), Some(0));
    packets
}

#[test]
fn test_first_row_on_empty_board_without_title_change() {
    first_row_on_empty_board(47);
}

#[test]
fn test_first_row_on_empty_legacy_board() {
    let packets = first_row_on_empty_board(5);

    assert!(matches!(&packets[0], Packet::Score(ScorePacket::Legacy(_))));
    assert!(packets[1..]
        .iter()
        .all(|packet| matches!(packet, Packet::Team(TeamPacket::Legacy(_)))));
}

#[test]
fn test_same_size_refresh_only_updates() {
    let mut fixture = Fixture::new(47, "Title", &["a", "b"]);

    fixture.adapter.set_lines(&["c", "d"]);
    let packets = fixture.refresh();

    assert!(packets
        .iter()
        .all(|packet| matches!(packet, Packet::Team(team) if team.mode() == TeamMode::Update)));
    assert_eq!(packets.len(), 2);
    assert_eq!(fixture.client.visible_rows(), vec!["c", "d"]);
}

#[test]
fn test_clearing_the_body() {
    let mut fixture = Fixture::new(47, "Title", &["a", "b", "c"]);

    fixture.adapter.set_lines(&[]);
    let packets = fixture.refresh();

    let removals = packets
        .iter()
        .filter(|packet| matches!(packet, Packet::Score(score) if score.action() == ScoreAction::Remove))
        .count();
    assert_eq!(removals, 3);
    assert_eq!(fixture.client.team_count(), 0);
    assert!(fixture.client.rows().is_empty());
    assert_eq!(fixture.client.objective(), Some(fixture.id.as_str()));
}

#[test]
fn test_title_change_resends_objective() {
    let mut fixture = Fixture::new(47, "Old", &["a"]);

    fixture.adapter.set_title(Title::legacy("&bNew"));
    let packets = fixture.refresh();

    assert_eq!(describe(&packets).last().unwrap(), "objective Update");
    assert_eq!(fixture.client.title(), "§bNew");

    let packets = fixture.refresh();
    assert!(!describe(&packets).iter().any(|p| p.starts_with("objective")));
}

#[test]
fn test_animated_title_advances_every_refresh() {
    let animation = Animation::highlight("Board", "&4", "&c").unwrap();
    let adapter = ScriptedAdapter::new("", &["a"]);
    adapter.set_title(Title::animated(animation.clone()));
    let mut fixture = Fixture::with_adapter(47, adapter);

    let mut expected = animation.clone();
    assert_eq!(fixture.client.title(), expected.next_frame());
    for _ in 0..(animation.len() + 2) {
        fixture.refresh();
        assert_eq!(fixture.client.title(), expected.next_frame());
    }
}

#[test]
fn test_regenerated_row_animation_keeps_running() {
    let animation = Animation::scroll("&aWelcome to the arena", 10, 3).unwrap();
    let body = || {
        let mut body = Body::legacy(&["top"]);
        body.push_animated(animation.clone());
        body
    };
    let adapter = ScriptedAdapter::new("Title", &[]);
    adapter.set_body(body());
    let mut fixture = Fixture::with_adapter(47, adapter);

    let mut expected = animation.clone();
    assert_eq!(
        fixture.client.visible_rows()[1],
        strip_colors(&expected.next_frame())
    );
    for _ in 0..5 {
        // the adapter hands out a fresh animation each time
        fixture.adapter.set_body(body());
        fixture.refresh();
        assert_eq!(
            fixture.client.visible_rows()[1],
            strip_colors(&expected.next_frame())
        );
    }
}

#[test]
fn test_animated_row_resends_static_title() {
    let frames = vec!["a".to_string(), "b".to_string()];
    let mut body = Body::legacy(&["top"]);
    body.push_animated(Animation::new("a".to_string(), frames).unwrap());
    let adapter = ScriptedAdapter::new("T", &[]);
    adapter.set_body(body);
    let mut fixture = Fixture::with_adapter(47, adapter);

    for _ in 0..3 {
        let packets = fixture.refresh();
        let updates = packets
            .iter()
            .filter(|packet| {
                matches!(packet, Packet::Objective(objective)
                    if objective.mode() == ObjectiveMode::Update)
            })
            .count();
        assert_eq!(updates, 1);
        assert_eq!(fixture.client.title(), "T");
    }
}

#[test]
fn test_update_line_in_place_sends_single_update() {
    let mut fixture = Fixture::new(47, "Title", &["a", "b", "c"]);

    fixture
        .session()
        .lock()
        .unwrap()
        .update_line(1, "middle".to_string())
        .unwrap();
    let packets = fixture.sync();

    let id = fixture.id.clone();
    assert_eq!(describe(&packets), vec![format!("team Update {}", team_name(&id, 1))]);
    assert_eq!(fixture.client.visible_rows(), vec!["a", "middle", "c"]);
}

#[test]
fn test_update_line_below_body_pads_with_empty_rows() {
    let mut fixture = Fixture::new(47, "Title", &["a"]);

    fixture
        .session()
        .lock()
        .unwrap()
        .update_line(3, "d".to_string())
        .unwrap();
    fixture.sync();

    assert_eq!(fixture.client.visible_rows(), vec!["a", "", "", "d"]);
    let session = fixture.session();
    let session = session.lock().unwrap();
    assert_eq!(session.size(), 4);
    assert_rows_synced!(fixture.client, session);
}

#[test]
fn test_update_line_at_capacity_is_rejected() {
    let fixture = Fixture::new(47, "Title", &["a"]);

    let result = fixture
        .session()
        .lock()
        .unwrap()
        .update_line(15, "x".to_string());

    assert!(result.is_err());
    assert_eq!(fixture.viewer.packet_count(), 0);
}

#[test]
fn test_remove_line_moves_rows_up() {
    let mut fixture = Fixture::new(47, "Title", &["a", "b", "c"]);

    fixture.session().lock().unwrap().remove_line(0).unwrap();
    fixture.sync();
    assert_eq!(fixture.client.visible_rows(), vec!["b", "c"]);

    fixture.session().lock().unwrap().remove_line(7).unwrap();
    assert_eq!(fixture.viewer.packet_count(), 0);
}

#[test]
fn test_long_legacy_row_is_split_across_prefix_and_suffix() {
    let line = "&aabcdefghijklmnopqrs";
    let mut fixture = Fixture::new(47, "Title", &[line]);

    let team = fixture
        .client
        .team(&team_name(&fixture.id, 0))
        .cloned()
        .unwrap();
    assert_eq!(team.prefix, "§aabcdefghijklmn");
    assert_eq!(team.suffix, "§aopqrs");
    assert_eq!(fixture.client.visible_rows(), vec!["abcdefghijklmnopqrs"]);

    fixture.refresh();
    assert_eq!(fixture.client.visible_rows(), vec!["abcdefghijklmnopqrs"]);
}

#[test]
fn test_refresh_hook_replaces_default_refresh() {
    let adapter = ScriptedAdapter::new("Title", &["a", "b"]);
    let hook: RefreshHook<String> =
        Arc::new(|session: &mut Session<String>| session.update_line(0, "hooked".to_string()));
    adapter.set_hook(hook);
    let mut fixture = Fixture::with_adapter(47, adapter);
    let requests = fixture.adapter.body_requests();

    fixture.adapter.set_lines(&["ignored"]);
    fixture.refresh();

    assert_eq!(fixture.client.visible_rows(), vec!["hooked", "b"]);
    assert_eq!(fixture.adapter.body_requests(), requests);
}

#[test]
fn test_rejected_refresh_keeps_previous_rows() {
    let mut fixture = Fixture::new(47, "Title", &["a", "b"]);
    let long = "z".repeat(40);

    fixture.adapter.set_lines(&["a", long.as_str(), "c"]);
    let result = fixture.session().lock().unwrap().refresh();

    assert!(result.is_err());
    assert_eq!(fixture.viewer.packet_count(), 0);
    assert_eq!(fixture.client.visible_rows(), vec!["a", "b"]);
    let session = fixture.session();
    let session = session.lock().unwrap();
    assert_rows_synced!(fixture.client, session);
    assert_board_displayed!(fixture.client, session);
}

#[test]
fn test_rich_text_board_accepts_long_rows() {
    let long = format!("&d{}", "w".repeat(60));
    let mut fixture = Fixture::new(393, "&lWide", &[long.as_str(), ""]);

    assert_eq!(fixture.client.title(), "§lWide");
    assert_eq!(
        fixture.client.visible_rows(),
        vec!["w".repeat(60), String::new()]
    );

    fixture.adapter.set_lines(&["short"]);
    fixture.refresh();
    assert_eq!(fixture.client.visible_rows(), vec!["short"]);
}
