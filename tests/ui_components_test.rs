use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use directorio::config::NavEntry;
use directorio::groups::{Address, Group};
use directorio::ui::components::{FilterBarComponent, MenuComponent, ResultsListComponent};
use directorio::ui::core::{Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn group(id: &str, name: &str, district: &str) -> Group {
    Group {
        id: id.to_string(),
        name: name.to_string(),
        district: district.to_string(),
        address: Address {
            line1: "Calle 1".to_string(),
            neighborhood: "Centro".to_string(),
            city: "Guadalajara".to_string(),
            state: "Jalisco".to_string(),
            reference_notes: String::new(),
        },
        schedule: Vec::new(),
        map_query: format!("{}, Guadalajara", name),
    }
}

fn nav_entries() -> Vec<NavEntry> {
    vec![
        NavEntry {
            label: "Inicio".to_string(),
            destination: "/".to_string(),
        },
        NavEntry {
            label: "Directorio".to_string(),
            destination: "/directorio".to_string(),
        },
    ]
}

#[test]
fn test_filter_bar_slash_enters_edit_mode() {
    let mut bar = FilterBarComponent::new();
    assert!(!bar.is_editing());

    assert_eq!(bar.handle_key_events(key(KeyCode::Char('/'))), Action::None);
    assert!(bar.is_editing());
}

#[test]
fn test_filter_bar_typing_emits_search_text() {
    let mut bar = FilterBarComponent::new();
    bar.handle_key_events(key(KeyCode::Char('/')));

    let action = bar.handle_key_events(key(KeyCode::Char('e')));
    assert_eq!(action, Action::SetSearchText("e".to_string()));

    // The bar is a mirror: the dispatched text comes back via update_data
    bar.update_data("e".to_string(), String::new(), 0);
    let action = bar.handle_key_events(key(KeyCode::Char('s')));
    assert_eq!(action, Action::SetSearchText("es".to_string()));
}

#[test]
fn test_filter_bar_backspace_removes_a_character() {
    let mut bar = FilterBarComponent::new();
    bar.handle_key_events(key(KeyCode::Char('/')));
    bar.update_data("esp".to_string(), String::new(), 0);

    let action = bar.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(action, Action::SetSearchText("es".to_string()));
}

#[test]
fn test_filter_bar_enter_submits_and_stops_editing() {
    let mut bar = FilterBarComponent::new();
    bar.handle_key_events(key(KeyCode::Char('/')));

    let action = bar.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::SubmitSearch);
    assert!(!bar.is_editing());
}

#[test]
fn test_filter_bar_escape_leaves_edit_mode_without_submitting() {
    let mut bar = FilterBarComponent::new();
    bar.handle_key_events(key(KeyCode::Char('/')));

    let action = bar.handle_key_events(key(KeyCode::Esc));
    assert_eq!(action, Action::None);
    assert!(!bar.is_editing());
}

#[test]
fn test_filter_bar_district_cycle_wraps() {
    let mut bar = FilterBarComponent::new();

    // Forward from "no district" lands on the first code
    let action = bar.handle_key_events(key(KeyCode::Char('d')));
    assert_eq!(action, Action::SelectDistrict("1".to_string()));

    // From the last code, forward wraps back to "no district"
    bar.update_data(String::new(), "5".to_string(), 0);
    let action = bar.handle_key_events(key(KeyCode::Char('d')));
    assert_eq!(action, Action::SelectDistrict(String::new()));

    // Backward from "no district" lands on the last code
    bar.update_data(String::new(), String::new(), 0);
    let action = bar.handle_key_events(key(KeyCode::Char('D')));
    assert_eq!(action, Action::SelectDistrict("5".to_string()));
}

#[test]
fn test_filter_bar_show_all_requires_a_district() {
    let mut bar = FilterBarComponent::new();

    // Without a district the shortcut does nothing
    assert_eq!(bar.handle_key_events(key(KeyCode::Char('a'))), Action::None);

    bar.update_data(String::new(), "2".to_string(), 2);
    let action = bar.handle_key_events(key(KeyCode::Char('a')));
    assert_eq!(action, Action::SelectGroup(String::new()));
}

#[test]
fn test_results_list_navigation_wraps() {
    let mut list = ResultsListComponent::new(true, true);
    list.update_data(
        vec![group("a", "Grupo A", "1"), group("b", "Grupo B", "1")],
        true,
    );
    assert_eq!(list.highlighted_group().unwrap().id, "a");

    assert_eq!(list.handle_key_events(key(KeyCode::Char('j'))), Action::NextGroup);
    assert_eq!(list.update(Action::NextGroup), Action::None);
    assert_eq!(list.highlighted_group().unwrap().id, "b");

    list.update(Action::NextGroup);
    assert_eq!(list.highlighted_group().unwrap().id, "a");

    list.update(Action::PreviousGroup);
    assert_eq!(list.highlighted_group().unwrap().id, "b");
}

#[test]
fn test_results_list_enter_selects_the_highlighted_group() {
    let mut list = ResultsListComponent::new(true, true);
    list.update_data(
        vec![group("a", "Grupo A", "1"), group("b", "Grupo B", "1")],
        true,
    );
    list.update(Action::NextGroup);

    let action = list.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::SelectGroup("b".to_string()));
}

#[test]
fn test_results_list_m_requests_the_map() {
    let mut list = ResultsListComponent::new(true, true);
    list.update_data(vec![group("a", "Grupo A", "1")], true);

    let action = list.handle_key_events(key(KeyCode::Char('m')));
    assert_eq!(action, Action::ShowMap("a".to_string()));
}

#[test]
fn test_results_list_empty_list_ignores_selection_keys() {
    let mut list = ResultsListComponent::new(true, true);

    assert_eq!(list.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('m'))), Action::None);
}

#[test]
fn test_results_list_shrinking_data_resets_the_highlight() {
    let mut list = ResultsListComponent::new(true, true);
    list.update_data(
        vec![group("a", "Grupo A", "1"), group("b", "Grupo B", "1")],
        true,
    );
    list.update(Action::NextGroup);
    assert_eq!(list.highlighted_group().unwrap().id, "b");

    list.update_data(vec![group("c", "Grupo C", "2")], true);
    assert_eq!(list.highlighted_group().unwrap().id, "c");
}

#[test]
fn test_menu_open_close_symmetry() {
    let mut menu = MenuComponent::new(nav_entries());
    assert!(!menu.is_open());

    // Repeated cycles leave no residual state
    for _ in 0..3 {
        menu.update(Action::OpenMenu);
        assert!(menu.is_open());

        assert_eq!(menu.handle_key_events(key(KeyCode::Esc)), Action::CloseMenu);
        menu.update(Action::CloseMenu);
        assert!(!menu.is_open());
    }
}

#[test]
fn test_menu_consumes_unrelated_keys_while_open() {
    let mut menu = MenuComponent::new(nav_entries());
    menu.update(Action::OpenMenu);

    assert_eq!(menu.handle_key_events(key(KeyCode::Char('q'))), Action::None);
    assert_eq!(menu.handle_key_events(key(KeyCode::Char('/'))), Action::None);
    assert!(menu.is_open());
}

#[test]
fn test_menu_enter_navigates_and_closes() {
    let mut menu = MenuComponent::new(nav_entries());
    menu.update(Action::OpenMenu);

    menu.handle_key_events(key(KeyCode::Char('j')));
    let action = menu.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::Navigate("/directorio".to_string()));

    // Link activation closes the overlay and passes the action through
    let passed = menu.update(action);
    assert_eq!(passed, Action::Navigate("/directorio".to_string()));
    assert!(!menu.is_open());
}

#[test]
fn test_menu_reopening_resets_the_highlight() {
    let mut menu = MenuComponent::new(nav_entries());
    menu.update(Action::OpenMenu);
    menu.handle_key_events(key(KeyCode::Char('j')));
    menu.update(Action::CloseMenu);

    menu.update(Action::OpenMenu);
    let action = menu.handle_key_events(key(KeyCode::Enter));
    assert_eq!(action, Action::Navigate("/".to_string()));
}
