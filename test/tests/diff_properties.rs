/// Property tests for the body differ and the row text pipeline.
///
/// Invariants:
/// 1. Resizing emits one removal pair per dropped row, from the top score down
/// 2. Growing emits one creation pair per added row, from the bottom score up
/// 3. Every surviving score is updated exactly once, after the structural ops
/// 4. A client fed the packets always shows the adapter's rows
/// 5. Split affixes never exceed the generation's limit
use proptest::prelude::*;

use sidebar_server::{BoardServer, ServerConfig};
use sidebar_shared::{
    colorize, split_affixes, strip_colors, Animation, BoardOp, Body, BodyDiff, Line, MAX_LINES,
};
use sidebar_test::{ClientView, RecordingViewer, ScriptedAdapter};

fn size_strategy() -> impl Strategy<Value = usize> {
    0..=MAX_LINES
}

// one optional leading color, then plain text short enough for every generation
fn line_strategy() -> impl Strategy<Value = String> {
    "(&[0-9a-f])?[a-z ]{0,18}"
}

fn body_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..=MAX_LINES)
}

fn protocol_strategy() -> impl Strategy<Value = i32> {
    prop::sample::select(vec![5, 47, 340, 393, 498, 755, 763])
}

proptest! {
    #[test]
    fn prop_shrinking_retires_top_scores(old in size_strategy(), new in size_strategy()) {
        prop_assume!(old > new);

        let diff = BodyDiff::resize(old, new);
        let structural: Vec<BoardOp> = diff.ops().iter().copied().filter(BoardOp::is_structural).collect();

        let mut expected = Vec::new();
        for score in (new..old).rev() {
            expected.push(BoardOp::Remove(score));
            expected.push(BoardOp::RemoveScoreEntry(score));
        }
        prop_assert_eq!(structural, expected);
        prop_assert_eq!(diff.removed(), old - new);
        prop_assert_eq!(diff.created(), 0);
    }

    #[test]
    fn prop_growing_adds_bottom_up(old in size_strategy(), new in size_strategy()) {
        prop_assume!(old < new);

        let diff = BodyDiff::resize(old, new);
        let structural: Vec<BoardOp> = diff.ops().iter().copied().filter(BoardOp::is_structural).collect();

        let mut expected = Vec::new();
        for score in old..new {
            expected.push(BoardOp::AddScoreEntry(score));
            expected.push(BoardOp::Create(score));
        }
        prop_assert_eq!(structural, expected);
        prop_assert_eq!(diff.created(), new - old);
        prop_assert_eq!(diff.removed(), 0);
    }

    #[test]
    fn prop_updates_follow_structure(old in size_strategy(), new in size_strategy()) {
        let diff = BodyDiff::resize(old, new);
        let ops = diff.ops();
        let first_update = ops.iter().position(|op| !op.is_structural()).unwrap_or(ops.len());

        prop_assert!(ops[..first_update].iter().all(BoardOp::is_structural));
        let updates: Vec<BoardOp> = ops[first_update..].to_vec();
        let expected: Vec<BoardOp> = (0..new).map(BoardOp::Update).collect();
        prop_assert_eq!(updates, expected);
    }

    #[test]
    fn prop_client_tracks_adapter(
        protocol_version in protocol_strategy(),
        bodies in prop::collection::vec(body_strategy(), 1..6),
    ) {
        let server: BoardServer<String> = BoardServer::new(ServerConfig {
            protocol_version,
            ..ServerConfig::default()
        })
        .unwrap();
        let viewer = RecordingViewer::new(7, "prop", server.capabilities());
        let adapter = ScriptedAdapter::new("Board", &[]);
        server.create_session(viewer.clone(), adapter.clone()).unwrap();
        let mut client = ClientView::new(server.capabilities());

        for lines in bodies {
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            adapter.set_lines(&refs);
            server.tick().unwrap();
            client.apply_all(viewer.take_decoded()).unwrap();

            let expected: Vec<String> = lines
                .iter()
                .map(|line| strip_colors(&colorize('&', line)))
                .collect();
            prop_assert_eq!(client.visible_rows(), expected);
            prop_assert_eq!(client.team_count(), lines.len());
        }
    }

    #[test]
    fn prop_split_respects_limit(
        content in "[§a-fl-or x]{0,80}",
        max_length in 1usize..40,
    ) {
        let affixes = split_affixes(&content, max_length);

        prop_assert!(affixes.prefix.chars().count() <= max_length);
        prop_assert!(affixes.suffix.chars().count() <= max_length);
        if content.chars().count() <= max_length {
            prop_assert_eq!(affixes.prefix, content);
            prop_assert_eq!(affixes.suffix, "");
        }
    }

    #[test]
    fn prop_split_keeps_plain_text(content in "[a-z]{0,30}") {
        let affixes = split_affixes(&content, 16);

        let joined = format!("{}{}", affixes.prefix, affixes.suffix);
        prop_assert_eq!(strip_colors(&joined), content);
    }

    #[test]
    fn prop_running_animations_survive_regeneration(
        animated in prop::collection::vec(any::<bool>(), 0..=MAX_LINES),
        advance in 0usize..5,
    ) {
        let animation = Animation::new("x".to_string(), vec!["x1".to_string(), "x2".to_string()]).unwrap();
        let mut old = Body::new();
        for (index, is_animated) in animated.iter().enumerate() {
            let line = Line::new(format!("line {}", index), index).unwrap();
            let line = if *is_animated { line.with_animation(animation.clone()) } else { line };
            old.add_line(line);
        }
        for index in 0..old.size() {
            for _ in 0..advance {
                old.get_mut(index).unwrap().render();
            }
        }
        let regenerated = Body::of((0..animated.len()).map(|index| format!("line {}", index)));

        let merged = old.copy_line_contents(regenerated);

        for (index, is_animated) in animated.iter().enumerate() {
            let line = merged.get(index).unwrap();
            prop_assert_eq!(line.is_animated(), *is_animated);
            if *is_animated {
                prop_assert_eq!(
                    line.animation().map(Animation::cursor),
                    old.get(index).unwrap().animation().map(Animation::cursor)
                );
            }
        }
    }

    #[test]
    fn prop_animation_wraps(frame_count in 1usize..8, steps in 0usize..30) {
        let frames: Vec<String> = (0..frame_count).map(|i| format!("f{}", i)).collect();
        let mut animation = Animation::new("f".to_string(), frames.clone()).unwrap();

        for step in 0..steps {
            prop_assert_eq!(animation.next_frame(), frames[step % frame_count].clone());
        }
        if steps > 0 {
            let last = frames[(steps - 1) % frame_count].clone();
            prop_assert_eq!(animation.previous_frame(), last);
        }
    }
}
