use dirscope_core::{
    EntryInfo, EntryKind, ExplorerConfig, NO_SELECTION_TEXT, Selection, ThemeName, UserSettings,
    render_info,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_test_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("docs")).unwrap();
    fs::write(root.join("docs/readme.md"), "# hello\n").unwrap();
    fs::write(root.join("big.bin"), vec![0u8; 1_234_567]).unwrap();
    fs::write(root.join("empty.txt"), "").unwrap();

    dir
}

#[test]
fn test_info_for_file() {
    let dir = create_test_tree();
    let path = dir.path().join("big.bin");

    let text = render_info(Some(&path));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Selected: big.bin");
    assert_eq!(lines[1], "Type: File");
    assert_eq!(lines[2], "Size: 1,234,567 bytes");
    assert_eq!(lines[3], format!("Path: {}", path.display()));
}

#[test]
fn test_info_for_directory_uses_stat_size() {
    let dir = create_test_tree();
    let path = dir.path().join("docs");
    let expected = fs::metadata(&path).unwrap().len();

    let info = EntryInfo::inspect(&path).unwrap();
    assert_eq!(info.name, "docs");
    assert_eq!(info.kind, EntryKind::Directory);
    assert_eq!(info.size, expected);

    let text = render_info(Some(&path));
    assert!(text.contains("Type: Directory"));
}

#[test]
fn test_info_for_empty_file() {
    let dir = create_test_tree();
    let text = render_info(Some(&dir.path().join("empty.txt")));
    assert!(text.contains("Size: 0 bytes"));
}

#[cfg(unix)]
#[test]
fn test_info_for_root_uses_whole_path() {
    let info = EntryInfo::inspect(Path::new("/")).unwrap();
    assert_eq!(info.name, "/");
    assert_eq!(info.kind, EntryKind::Directory);
}

#[test]
fn test_info_for_stale_selection() {
    let dir = create_test_tree();
    let path = dir.path().join("empty.txt");

    let mut selection = Selection::new();
    selection.select(&path);
    fs::remove_file(&path).unwrap();

    assert_eq!(render_info(selection.current()), NO_SELECTION_TEXT);
    assert_eq!(selection.kind(), None);
}

#[test]
fn test_info_recomputed_after_change() {
    let dir = create_test_tree();
    let path = dir.path().join("empty.txt");

    assert!(render_info(Some(&path)).contains("Size: 0 bytes"));
    fs::write(&path, "12345").unwrap();
    assert!(render_info(Some(&path)).contains("Size: 5 bytes"));
}

#[test]
fn test_settings_file_roundtrip_through_config() {
    let dir = TempDir::new().unwrap();
    let settings_path = dir.path().join("settings.toml");
    fs::write(
        &settings_path,
        "show_hidden = false\ntheme = \"light\"\nnotification_timeout_ms = 500\n",
    )
    .unwrap();

    let settings = UserSettings::load_from(&settings_path).unwrap();
    let config = ExplorerConfig::from_settings(dir.path(), &settings);

    assert!(!config.show_hidden);
    assert!(config.show_info_panel);
    assert_eq!(config.theme, ThemeName::Light);
    assert_eq!(config.notification_timeout_ms, 500);
    assert_eq!(config.root, dir.path());
}
