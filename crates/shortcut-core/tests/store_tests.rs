//! Integration tests for loading and saving shortcut files.
//!
//! Fixtures are written byte by byte in the layout Steam uses so the tests
//! do not depend on the encoder under test.

use shortcut_core::{
    calculate_app_id, store, vdf, Shortcut, ShortcutError, Shortcuts, SteamDirs, VdfValue,
};
use std::fs;
use tempfile::TempDir;

/// Minimal writer for hand-built fixtures.
#[derive(Default)]
struct Fixture(Vec<u8>);

impl Fixture {
    fn object(mut self, key: &str) -> Self {
        self.0.push(0x00);
        self.cstr(key)
    }

    fn string(mut self, key: &str, value: &str) -> Self {
        self.0.push(0x01);
        self.cstr(key).cstr(value)
    }

    fn int(mut self, key: &str, value: u32) -> Self {
        self.0.push(0x02);
        let mut this = self.cstr(key);
        this.0.extend_from_slice(&value.to_le_bytes());
        this
    }

    fn end(mut self) -> Self {
        self.0.push(0x08);
        self
    }

    fn cstr(mut self, s: &str) -> Self {
        self.0.extend_from_slice(s.as_bytes());
        self.0.push(0x00);
        self
    }

    fn bytes(self) -> Vec<u8> {
        self.0
    }
}

fn insomnia_file() -> Vec<u8> {
    Fixture::default()
        .object("shortcuts")
        .object("0")
        .int("appid", 3_417_544_970)
        .string("AppName", "Insomnia")
        .string("Exe", "\"/usr/bin/flatpak\"")
        .string("StartDir", "\"/usr/bin/\"")
        .string("icon", "")
        .string(
            "ShortcutPath",
            "/var/lib/flatpak/exports/share/applications/rest.insomnia.Insomnia.desktop",
        )
        .string(
            "LaunchOptions",
            "run --branch=stable --arch=x86_64 --command=insomnia rest.insomnia.Insomnia",
        )
        .int("IsHidden", 0)
        .int("AllowDesktopConfig", 1)
        .int("AllowOverlay", 1)
        .int("OpenVR", 0)
        .int("Devkit", 0)
        .string("DevkitGameID", "")
        .int("DevkitOverrideAppID", 0)
        .int("LastPlayTime", 1_660_000_000)
        .string("FlatpakAppID", "")
        .object("tags")
        .string("0", "Development")
        .end()
        .end()
        .end()
        .end()
        .bytes()
}

/// Create a Steam root with one user holding `contents` as their store.
fn steam_with_store(contents: &[u8]) -> (TempDir, SteamDirs) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let steam = SteamDirs::new(temp_dir.path());
    let path = steam.shortcuts_path("12345");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    (temp_dir, steam)
}

#[test]
fn test_load_steam_written_file() {
    let (_temp_dir, steam) = steam_with_store(&insomnia_file());
    let shortcuts = store::load(&steam.shortcuts_path("12345")).unwrap();

    assert_eq!(shortcuts.len(), 1);
    let insomnia = shortcuts.lookup_by_name("Insomnia").unwrap();
    assert_eq!(insomnia.app_id, 3_417_544_970);
    assert_eq!(insomnia.last_play_time, 1_660_000_000);
    assert_eq!(insomnia.tags["0"], VdfValue::from("Development"));
    assert_eq!(shortcuts.lookup_by_id(3_417_544_970).unwrap().app_name, "Insomnia");
}

#[test]
fn test_resave_is_byte_identical() {
    let (_temp_dir, steam) = steam_with_store(&insomnia_file());
    let path = steam.shortcuts_path("12345");

    let shortcuts = store::load(&path).unwrap();
    store::save(&shortcuts, &path).unwrap();

    assert_eq!(fs::read(&path).unwrap(), insomnia_file());
}

#[test]
fn test_add_then_reload() {
    let (_temp_dir, steam) = steam_with_store(&insomnia_file());
    let path = steam.shortcuts_path("12345");

    let mut shortcuts = store::load(&path).unwrap();
    let key = shortcuts
        .add(Shortcut::builder("Firefox", "/usr/bin/firefox").build())
        .unwrap();
    assert_eq!(key, "1");
    store::save(&shortcuts, &path).unwrap();

    let reloaded = store::load(&path).unwrap();
    let keys: Vec<&str> = reloaded.keys().collect();
    assert_eq!(keys, vec!["0", "1"]);
    assert_eq!(
        reloaded.lookup_by_name("Firefox").unwrap().app_id,
        calculate_app_id("/usr/bin/firefox", "Firefox")
    );
    // Existing ids are read back, never recomputed.
    assert_eq!(reloaded.get("0").unwrap().app_id, 3_417_544_970);
}

#[test]
fn test_remove_then_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shortcuts.vdf");

    let mut shortcuts = Shortcuts::new();
    for name in ["A", "X", "B"] {
        shortcuts
            .add(Shortcut::builder(name, format!("/bin/{}", name)).build())
            .unwrap();
    }
    store::save(&shortcuts, &path).unwrap();

    let mut loaded = store::load(&path).unwrap();
    assert_eq!(loaded.remove("X"), 1);
    store::save(&loaded, &path).unwrap();

    let reloaded = store::load(&path).unwrap();
    let entries: Vec<(&str, &str)> = reloaded
        .iter()
        .map(|(k, s)| (k, s.app_name.as_str()))
        .collect();
    assert_eq!(entries, vec![("0", "A"), ("1", "B")]);
}

#[test]
fn test_truncated_file_is_format_error() {
    let mut bytes = insomnia_file();
    bytes.truncate(bytes.len() - 2);
    let (_temp_dir, steam) = steam_with_store(&bytes);

    let err = store::load(&steam.shortcuts_path("12345")).unwrap_err();
    assert!(matches!(err, ShortcutError::Format { .. }));
}

#[test]
fn test_wrong_field_type_is_schema_mismatch() {
    let bytes = Fixture::default()
        .object("shortcuts")
        .object("0")
        .string("appid", "3417544970")
        .end()
        .end()
        .end()
        .bytes();
    let (_temp_dir, steam) = steam_with_store(&bytes);

    let err = store::load(&steam.shortcuts_path("12345")).unwrap_err();
    match err {
        ShortcutError::SchemaMismatch { field, .. } => assert_eq!(field, "shortcuts.0.appid"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_empty_store_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shortcuts.vdf");

    store::save(&Shortcuts::new(), &path).unwrap();
    // An empty "shortcuts" object inside the root.
    assert_eq!(
        fs::read(&path).unwrap(),
        Fixture::default().object("shortcuts").end().end().bytes()
    );
    assert!(store::load(&path).unwrap().is_empty());
}

#[test]
fn test_codec_matches_fixture_writer() {
    let tree = vdf::decode(&insomnia_file()).unwrap();
    assert_eq!(vdf::encode(&tree).unwrap(), insomnia_file());
}

#[test]
fn test_users_with_stores() {
    let (_temp_dir, steam) = steam_with_store(&insomnia_file());
    fs::create_dir_all(steam.images_dir("67890")).unwrap();

    assert_eq!(steam.users().unwrap(), vec!["12345", "67890"]);
    assert!(steam.has_shortcuts("12345"));
    assert!(!steam.has_shortcuts("67890"));
    assert!(store::load_or_default(&steam.shortcuts_path("67890"))
        .unwrap()
        .is_empty());
}

#[test]
fn test_add_after_loading_max_key_is_error() {
    let bytes = Fixture::default()
        .object("shortcuts")
        .object("18446744073709551615")
        .string("AppName", "Last")
        .end()
        .end()
        .end()
        .bytes();
    let (_temp_dir, steam) = steam_with_store(&bytes);

    let mut shortcuts = store::load(&steam.shortcuts_path("12345")).unwrap();
    let err = shortcuts
        .add(Shortcut::builder("Firefox", "/usr/bin/firefox").build())
        .unwrap_err();
    assert!(matches!(err, ShortcutError::Configuration { .. }));
    assert_eq!(shortcuts.len(), 1);
    assert_eq!(shortcuts.get("18446744073709551615").unwrap().app_name, "Last");
}
