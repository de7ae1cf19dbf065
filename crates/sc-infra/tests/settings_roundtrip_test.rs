//! Overwriting an existing settings file through the public repository API.

use sc_core::ports::SettingsPort;
use sc_core::Settings;
use sc_infra::FileSettingsRepository;
use tempfile::TempDir;

#[tokio::test]
async fn second_save_replaces_previous_document() {
    let dir = TempDir::new().unwrap();
    let repo = FileSettingsRepository::new(dir.path().join("SuperCopy_config.json"));

    let mut first = Settings::default();
    first.history = vec!["old".into(), "older".into()];
    first.general.restore_history_on_start = true;
    repo.save(&first).await.unwrap();

    let mut second = repo.load().await.unwrap();
    second.history = vec!["new".into()];
    repo.save(&second).await.unwrap();

    let loaded = repo.load().await.unwrap();
    assert_eq!(loaded.history, vec!["new"]);
    assert!(loaded.general.restore_history_on_start);
}

#[tokio::test]
async fn unknown_fields_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("SuperCopy_config.json");
    std::fs::write(&path, r#"{ "history": ["kept"], "window": { "w": 700, "h": 300 } }"#)
        .unwrap();

    let loaded = FileSettingsRepository::new(&path).load().await.unwrap();
    assert_eq!(loaded.history, vec!["kept"]);
}
