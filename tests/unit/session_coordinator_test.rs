use browsershell::managers::history_tracker::HistoryTrackerTrait;
use browsershell::managers::session_coordinator::{
    LoadDirective, SessionCoordinator, SessionCoordinatorTrait,
};
use browsershell::managers::tab_registry::TabRegistryTrait;
use browsershell::services::settings_store::{SettingsStore, SettingsStoreTrait};
use browsershell::types::settings::ShellSettings;
use browsershell::types::tab::Tab;
use rstest::rstest;
use url::Url;

fn loc(s: &str) -> Url {
    Url::parse(s).unwrap()
}

fn session() -> SessionCoordinator {
    let mut coordinator = SessionCoordinator::new(ShellSettings::default());
    coordinator.startup();
    coordinator
}

#[test]
fn test_startup_directs_the_view_to_the_start_page() {
    let mut coordinator = SessionCoordinator::new(ShellSettings {
        start_page: "https://example.com/".to_string(),
        log_history: true,
    });
    assert_eq!(
        coordinator.startup(),
        LoadDirective::Load(loc("https://example.com/"))
    );
}

#[test]
fn test_startup_with_an_unparsable_start_page_renders_blank() {
    let mut coordinator = SessionCoordinator::new(ShellSettings {
        start_page: "not a url".to_string(),
        log_history: false,
    });
    assert_eq!(coordinator.startup(), LoadDirective::RenderBlank);
}

#[test]
fn test_submitting_a_location_records_it_and_loads_it() {
    let mut coordinator = session();

    let directive = coordinator.location_submitted(loc("https://example.com"));

    assert_eq!(directive, LoadDirective::Load(loc("https://example.com")));
    assert_eq!(
        coordinator.history().current_location(),
        Some(&loc("https://example.com"))
    );
}

#[test]
fn test_page_loaded_updates_the_current_tab() {
    let mut coordinator = session();

    coordinator.page_loaded("Example", loc("https://example.com"));

    let current = coordinator.registry().current_tab().unwrap();
    assert_eq!(current.display_name(), "Example");
    assert_eq!(current.location(), Some(&loc("https://example.com/")));
}

#[test]
fn test_page_loaded_after_submit_does_not_double_count_history() {
    let mut coordinator = session();

    coordinator.location_submitted(loc("https://example.com"));
    coordinator.page_loaded("Example", loc("https://example.com"));

    assert_eq!(coordinator.history().visited().len(), 1);
}

#[test]
fn test_page_loaded_at_a_new_location_extends_history() {
    let mut coordinator = session();

    coordinator.location_submitted(loc("https://example.com"));
    // A redirect landed somewhere else than what was submitted.
    coordinator.page_loaded("Other", loc("https://other.example"));

    assert_eq!(
        coordinator.history().visited(),
        &[loc("https://example.com"), loc("https://other.example")]
    );
}

#[test]
fn test_back_and_forward_hand_locations_to_the_view() {
    let mut coordinator = session();
    coordinator.location_submitted(loc("https://a.example"));
    coordinator.location_submitted(loc("https://b.example"));

    assert_eq!(
        coordinator.back_requested(),
        LoadDirective::Load(loc("https://a.example"))
    );
    assert_eq!(
        coordinator.forward_requested(),
        LoadDirective::Load(loc("https://b.example"))
    );
}

#[test]
fn test_back_with_no_history_is_nothing_to_do() {
    let mut coordinator = session();
    assert_eq!(coordinator.back_requested(), LoadDirective::None);
    assert_eq!(coordinator.forward_requested(), LoadDirective::None);
}

#[test]
fn test_selecting_a_tab_yields_its_content_directive() {
    let mut coordinator = session();
    coordinator.page_loaded("Example", loc("https://example.com"));
    let first_id = coordinator.registry().tabs()[0].id.clone();

    let (new_id, directive) = coordinator.new_tab_requested();
    assert_eq!(directive, LoadDirective::RenderBlank);
    assert_eq!(coordinator.registry().current_tab().unwrap().id, new_id);

    let directive = coordinator.tab_selected(&first_id).unwrap();
    assert_eq!(directive, LoadDirective::Load(loc("https://example.com/")));
}

#[test]
fn test_selecting_an_unknown_tab_is_an_error() {
    let mut coordinator = session();
    let before = coordinator.registry().current_tab().unwrap().id.clone();

    assert!(coordinator.tab_selected("nonexistent").is_err());
    assert_eq!(coordinator.registry().current_tab().unwrap().id, before);
}

#[test]
fn test_view_layer_can_observe_switches_through_the_registry() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut coordinator = session();
    let switches = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&switches);
    coordinator
        .registry_mut()
        .set_switch_observer(move |_| *sink.borrow_mut() += 1);

    coordinator.new_tab_requested();
    let first_id = coordinator.registry().tabs()[0].id.clone();
    coordinator.tab_selected(&first_id).unwrap();

    assert_eq!(*switches.borrow(), 2);
}

#[test]
fn test_session_built_from_stored_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = SettingsStore::new(path.clone());
    store.load().unwrap();
    store
        .set(ShellSettings {
            start_page: "https://home.example/".to_string(),
            log_history: false,
        })
        .unwrap();

    // A later session picks the same settings back up from disk.
    let mut store = SettingsStore::new(path);
    let mut coordinator = SessionCoordinator::new(store.load().unwrap());
    assert_eq!(
        coordinator.startup(),
        LoadDirective::Load(loc("https://home.example/"))
    );
}

#[rstest]
#[case(Tab::new(), LoadDirective::RenderBlank)]
#[case(
    Tab::with_page("Example", loc("https://example.com")),
    LoadDirective::Load(loc("https://example.com"))
)]
fn test_directive_for_tab_content(#[case] tab: Tab, #[case] expected: LoadDirective) {
    assert_eq!(LoadDirective::for_tab(&tab), expected);
}
