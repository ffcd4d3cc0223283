//! Conversion between the generic VDF tree and typed shortcut records.
//!
//! Decoding is strict about types: a field that is present with the wrong
//! kind of value is an error, never a silent default. Missing fields take
//! their zero value, and fields the record does not know are dropped.

use super::model::{Shortcut, Shortcuts};
use crate::config::SteamConfig;
use crate::error::{ShortcutError, Result};
use crate::vdf::{VdfMap, VdfValue};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Field names as Steam writes them.
mod field {
    pub const APP_ID: &str = "appid";
    pub const APP_NAME: &str = "AppName";
    pub const EXE: &str = "Exe";
    pub const START_DIR: &str = "StartDir";
    pub const ICON: &str = "icon";
    pub const SHORTCUT_PATH: &str = "ShortcutPath";
    pub const LAUNCH_OPTIONS: &str = "LaunchOptions";
    pub const IS_HIDDEN: &str = "IsHidden";
    pub const ALLOW_DESKTOP_CONFIG: &str = "AllowDesktopConfig";
    pub const ALLOW_OVERLAY: &str = "AllowOverlay";
    pub const OPEN_VR: &str = "OpenVR";
    pub const DEVKIT: &str = "Devkit";
    pub const DEVKIT_GAME_ID: &str = "DevkitGameID";
    pub const DEVKIT_OVERRIDE_APP_ID: &str = "DevkitOverrideAppID";
    pub const LAST_PLAY_TIME: &str = "LastPlayTime";
    pub const FLATPAK_APP_ID: &str = "FlatpakAppID";
    pub const TAGS: &str = "tags";

    /// Every known field, in the order Steam writes them.
    pub const ALL: [&str; 17] = [
        APP_ID,
        APP_NAME,
        EXE,
        START_DIR,
        ICON,
        SHORTCUT_PATH,
        LAUNCH_OPTIONS,
        IS_HIDDEN,
        ALLOW_DESKTOP_CONFIG,
        ALLOW_OVERLAY,
        OPEN_VR,
        DEVKIT,
        DEVKIT_GAME_ID,
        DEVKIT_OVERRIDE_APP_ID,
        LAST_PLAY_TIME,
        FLATPAK_APP_ID,
        TAGS,
    ];
}

/// Convert a decoded document into a shortcut collection.
///
/// A document without a `shortcuts` object yields an empty collection.
pub fn tree_to_shortcuts(root: &VdfMap) -> Result<Shortcuts> {
    let root_key = SteamConfig::SHORTCUTS_ROOT_KEY;
    let Some(value) = root.get(root_key) else {
        debug!("Document has no {:?} object, treating as empty", root_key);
        return Ok(Shortcuts::new());
    };
    let list = expect_map(root_key, value)?;

    let mut entries = IndexMap::with_capacity(list.len());
    for (key, value) in list {
        let path = format!("{}.{}", root_key, key);
        let shortcut = tree_to_shortcut(&path, expect_map(&path, value)?)?;
        entries.insert(key.clone(), shortcut);
    }

    Ok(Shortcuts::from_entries(entries))
}

/// Convert a shortcut collection into a document ready for encoding.
pub fn shortcuts_to_tree(shortcuts: &Shortcuts) -> VdfMap {
    let list: VdfMap = shortcuts
        .iter()
        .map(|(key, shortcut)| (key.to_string(), VdfValue::Map(shortcut_to_tree(shortcut))))
        .collect();

    let mut root = VdfMap::new();
    root.insert(SteamConfig::SHORTCUTS_ROOT_KEY.to_string(), VdfValue::Map(list));
    root
}

fn tree_to_shortcut(path: &str, map: &VdfMap) -> Result<Shortcut> {
    let reader = FieldReader { path, map };

    for key in map.keys() {
        if !field::ALL.contains(&key.as_str()) {
            debug!("Dropping unknown field {}.{}", path, key);
        }
    }

    Ok(Shortcut {
        allow_desktop_config: reader.int(field::ALLOW_DESKTOP_CONFIG)?,
        allow_overlay: reader.int(field::ALLOW_OVERLAY)?,
        app_name: reader.string(field::APP_NAME)?,
        devkit: reader.int(field::DEVKIT)?,
        devkit_game_id: reader.string(field::DEVKIT_GAME_ID)?,
        devkit_override_app_id: reader.int(field::DEVKIT_OVERRIDE_APP_ID)?,
        exe: reader.string(field::EXE)?,
        flatpak_app_id: reader.string(field::FLATPAK_APP_ID)?,
        is_hidden: reader.int(field::IS_HIDDEN)?,
        last_play_time: reader.int(field::LAST_PLAY_TIME)?,
        launch_options: reader.string(field::LAUNCH_OPTIONS)?,
        open_vr: reader.int(field::OPEN_VR)?,
        shortcut_path: reader.string(field::SHORTCUT_PATH)?,
        start_dir: reader.string(field::START_DIR)?,
        app_id: u64::from(reader.int(field::APP_ID)?),
        icon: reader.string(field::ICON)?,
        tags: reader.object(field::TAGS)?,
        images: None,
    })
}

fn shortcut_to_tree(shortcut: &Shortcut) -> VdfMap {
    let mut map = VdfMap::with_capacity(field::ALL.len());
    map.insert(field::APP_ID.into(), narrow_app_id(shortcut.app_id).into());
    map.insert(field::APP_NAME.into(), shortcut.app_name.clone().into());
    map.insert(field::EXE.into(), shortcut.exe.clone().into());
    map.insert(field::START_DIR.into(), shortcut.start_dir.clone().into());
    map.insert(field::ICON.into(), shortcut.icon.clone().into());
    map.insert(field::SHORTCUT_PATH.into(), shortcut.shortcut_path.clone().into());
    map.insert(field::LAUNCH_OPTIONS.into(), shortcut.launch_options.clone().into());
    map.insert(field::IS_HIDDEN.into(), shortcut.is_hidden.into());
    map.insert(field::ALLOW_DESKTOP_CONFIG.into(), shortcut.allow_desktop_config.into());
    map.insert(field::ALLOW_OVERLAY.into(), shortcut.allow_overlay.into());
    map.insert(field::OPEN_VR.into(), shortcut.open_vr.into());
    map.insert(field::DEVKIT.into(), shortcut.devkit.into());
    map.insert(field::DEVKIT_GAME_ID.into(), shortcut.devkit_game_id.clone().into());
    map.insert(field::DEVKIT_OVERRIDE_APP_ID.into(), shortcut.devkit_override_app_id.into());
    map.insert(field::LAST_PLAY_TIME.into(), shortcut.last_play_time.into());
    map.insert(field::FLATPAK_APP_ID.into(), shortcut.flatpak_app_id.clone().into());
    map.insert(field::TAGS.into(), VdfValue::Map(shortcut.tags.clone()));
    map
}

/// Narrow an app id to the file's 32-bit integer by dropping the high bits.
///
/// Ids produced by [`crate::calculate_app_id`] always fit.
fn narrow_app_id(app_id: u64) -> u32 {
    if app_id > u64::from(u32::MAX) {
        warn!(
            "App id {} does not fit in 32 bits, storing {}",
            app_id,
            app_id as u32
        );
    }
    app_id as u32
}

fn expect_map<'a>(path: &str, value: &'a VdfValue) -> Result<&'a VdfMap> {
    value.as_map().ok_or_else(|| mismatch(path, "object", value))
}

fn mismatch(path: &str, expected: &'static str, found: &VdfValue) -> ShortcutError {
    ShortcutError::SchemaMismatch {
        field: path.to_string(),
        expected,
        found: found.kind(),
    }
}

/// Typed access to the fields of one shortcut object.
struct FieldReader<'a> {
    path: &'a str,
    map: &'a VdfMap,
}

impl FieldReader<'_> {
    fn int(&self, name: &str) -> Result<u32> {
        match self.map.get(name) {
            None => Ok(0),
            Some(VdfValue::Int(n)) => Ok(*n),
            Some(other) => Err(mismatch(&self.field_path(name), "integer", other)),
        }
    }

    fn string(&self, name: &str) -> Result<String> {
        match self.map.get(name) {
            None => Ok(String::new()),
            Some(VdfValue::String(s)) => Ok(s.clone()),
            Some(other) => Err(mismatch(&self.field_path(name), "string", other)),
        }
    }

    fn object(&self, name: &str) -> Result<VdfMap> {
        match self.map.get(name) {
            None => Ok(VdfMap::new()),
            Some(VdfValue::Map(m)) => Ok(m.clone()),
            Some(other) => Err(mismatch(&self.field_path(name), "object", other)),
        }
    }

    fn field_path(&self, name: &str) -> String {
        format!("{}.{}", self.path, name)
    }
}
