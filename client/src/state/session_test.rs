use super::*;

#[test]
fn new_session_starts_connecting_with_a_blank_grid() {
    let session = Session::new(500.0);
    assert_eq!(session.status, ConnectionStatus::Connecting);
    assert_eq!(session.grid, Grid::default());
    assert_eq!(session.selected_color, DEFAULT_COLOR);
    assert_eq!(session.client_count, 0);
    assert!(!session.canvas_revealed);
}

#[test]
fn bump_scene_rev_increments() {
    let mut session = Session::new(500.0);
    let before = session.scene_rev;
    session.bump_scene_rev();
    assert_eq!(session.scene_rev, before + 1);
}

#[test]
fn terminal_states_are_exactly_the_three_end_states() {
    assert!(!ConnectionStatus::Connecting.is_terminal());
    assert!(!ConnectionStatus::Open.is_terminal());
    assert!(ConnectionStatus::Closed.is_terminal());
    assert!(ConnectionStatus::Errored.is_terminal());
    assert!(ConnectionStatus::Blocked.is_terminal());
}
