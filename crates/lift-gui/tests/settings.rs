//! Settings persistence.

use lift_gui::settings::Settings;

#[test]
fn settings_survive_a_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let mut settings = Settings::default();
    settings.api.base_url = "https://lifts.example/api/".into();
    settings.display.page_size = 10;
    settings.display.show_closed_tickets = false;
    settings.general.last_email = Some("owner@example.com".into());
    settings.save_to(&path).unwrap();

    assert_eq!(Settings::load_from(&path), settings);
}

#[test]
fn missing_or_broken_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    assert_eq!(Settings::load_from(&path), Settings::default());

    std::fs::write(&path, "display = [not toml").unwrap();
    assert_eq!(Settings::load_from(&path), Settings::default());
}
