/// Assert that a client view shows exactly the static rows of a session's
/// body, formatting aside
#[macro_export]
macro_rules! assert_rows_synced {
    ($client:expr, $session:expr) => {
        let expected: Vec<String> = $session
            .body()
            .iter()
            .map(|line| ::sidebar_shared::strip_colors(line.content()))
            .collect();
        assert_eq!(
            $client.visible_rows(),
            expected,
            "client rows differ from board {}",
            $session.id()
        );
    };
}

/// Assert that a client view shows the board's objective in the sidebar
#[macro_export]
macro_rules! assert_board_displayed {
    ($client:expr, $session:expr) => {
        assert_eq!(
            $client.objective(),
            Some($session.id().as_str()),
            "client does not know board {}",
            $session.id()
        );
        assert!(
            $client.is_displayed(),
            "board {} is not in the sidebar",
            $session.id()
        );
    };
}
