use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use directorio::config::Config;
use directorio::groups::GroupStore;
use directorio::ui::core::{Action, EventType};
use directorio::ui::AppComponent;
use tokio::time::Duration;

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn app() -> AppComponent {
    let store = GroupStore::load_bundled().unwrap();
    AppComponent::new(&Config::default(), store)
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = app();
    assert!(!app.should_quit());

    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app2 = self::app();
    app2.handle_event(EventType::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert!(app2.should_quit());
}

#[tokio::test]
async fn test_menu_captures_keys_until_closed() {
    let mut app = app();

    app.handle_event(key(KeyCode::Char('n')));

    // 'q' normally quits, but the open menu swallows it
    app.handle_event(key(KeyCode::Char('q')));
    assert!(!app.should_quit());

    // Escape closes the menu; afterwards 'q' reaches the global handler
    app.handle_event(key(KeyCode::Esc));
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_search_flow_through_actions() {
    let mut app = app();

    app.dispatch(Action::SetSearchText("esperanza".to_string()));
    app.dispatch(Action::SubmitSearch);

    assert!(app.directory().search_mode());
    let names: Vec<&str> = app
        .directory()
        .visible()
        .iter()
        .map(|g| g.name.as_str())
        .collect();
    assert_eq!(names, vec!["Grupo Esperanza"]);
}

#[tokio::test]
async fn test_district_change_hides_the_map() {
    let mut app = app();

    app.dispatch(Action::ShowMap("grupo-esperanza".to_string()));
    assert!(app.directory().map_visible());

    app.dispatch(Action::SelectDistrict("2".to_string()));
    assert!(!app.directory().map_visible());
}

#[tokio::test]
async fn test_escape_closes_the_map_before_quitting() {
    let mut app = app();

    app.dispatch(Action::ShowMap("grupo-esperanza".to_string()));
    app.handle_event(key(KeyCode::Esc));

    assert!(!app.directory().map_visible());
    assert!(!app.should_quit());

    app.handle_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_notification_auto_dismisses_after_timeout() {
    let mut app = app();

    // No filters at all: the submission is refused with an error banner
    app.dispatch(Action::SubmitSearch);
    assert!(app.directory().notification().is_some());

    // Let the scheduled expiry fire (paused clock auto-advances)
    tokio::time::sleep(Duration::from_secs(6)).await;
    for action in app.process_background_actions() {
        app.dispatch(action);
    }

    assert!(app.directory().notification().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_stale_expiry_leaves_newer_notification_standing() {
    let mut app = app();

    app.dispatch(Action::SubmitSearch);
    tokio::time::sleep(Duration::from_secs(2)).await;

    // A second submission raises a fresh banner before the first expires
    app.dispatch(Action::SubmitSearch);
    let current = app.directory().notification().map(|n| n.id);

    // The first expiry fires now, the second in another three seconds
    tokio::time::sleep(Duration::from_secs(3)).await;
    for action in app.process_background_actions() {
        app.dispatch(action);
    }
    assert_eq!(app.directory().notification().map(|n| n.id), current);

    tokio::time::sleep(Duration::from_secs(3)).await;
    for action in app.process_background_actions() {
        app.dispatch(action);
    }
    assert!(app.directory().notification().is_none());
}

#[tokio::test]
async fn test_close_notification_key() {
    let mut app = app();

    app.dispatch(Action::SubmitSearch);
    assert!(app.directory().notification().is_some());

    app.handle_event(key(KeyCode::Char('x')));
    assert!(app.directory().notification().is_none());
}
