//! Builder for new shortcuts.

use super::model::Shortcut;
use crate::appid::calculate_app_id;
use crate::vdf::{VdfMap, VdfValue};

impl Shortcut {
    /// Start building a new shortcut for `exe` shown as `name`.
    pub fn builder(name: impl Into<String>, exe: impl Into<String>) -> ShortcutBuilder {
        ShortcutBuilder::new(name, exe)
    }
}

/// Builder for shortcuts that are not yet in any file.
///
/// Overlay and desktop config default to enabled, matching what Steam does
/// when a game is added by hand. The app id is derived from the exe and name
/// in [`ShortcutBuilder::build`].
pub struct ShortcutBuilder {
    shortcut: Shortcut,
}

impl ShortcutBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>, exe: impl Into<String>) -> Self {
        Self {
            shortcut: Shortcut {
                app_name: name.into(),
                exe: exe.into(),
                allow_desktop_config: 1,
                allow_overlay: 1,
                ..Shortcut::default()
            },
        }
    }

    pub fn allow_desktop_config(mut self, allow: bool) -> Self {
        self.shortcut.allow_desktop_config = flag(allow);
        self
    }

    pub fn allow_overlay(mut self, allow: bool) -> Self {
        self.shortcut.allow_overlay = flag(allow);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.shortcut.is_hidden = flag(hidden);
        self
    }

    pub fn open_vr(mut self, open_vr: bool) -> Self {
        self.shortcut.open_vr = flag(open_vr);
        self
    }

    pub fn flatpak_app_id(mut self, id: impl Into<String>) -> Self {
        self.shortcut.flatpak_app_id = id.into();
        self
    }

    pub fn launch_options(mut self, options: impl Into<String>) -> Self {
        self.shortcut.launch_options = options.into();
        self
    }

    /// Set the path of the .desktop file this shortcut was created from.
    pub fn shortcut_path(mut self, path: impl Into<String>) -> Self {
        self.shortcut.shortcut_path = path.into();
        self
    }

    /// Set the working directory.
    pub fn start_dir(mut self, dir: impl Into<String>) -> Self {
        self.shortcut.start_dir = dir.into();
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.shortcut.icon = icon.into();
        self
    }

    /// Replace the tags with a list; Steam keys list tags "0", "1", ...
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shortcut.tags = tags
            .into_iter()
            .enumerate()
            .map(|(i, tag)| (i.to_string(), VdfValue::String(tag.into())))
            .collect::<VdfMap>();
        self
    }

    /// Set a single tag.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<VdfValue>) -> Self {
        self.shortcut.tags.insert(key.into(), value.into());
        self
    }

    /// Build the shortcut, computing its app id.
    pub fn build(mut self) -> Shortcut {
        self.shortcut.app_id = calculate_app_id(&self.shortcut.exe, &self.shortcut.app_name);
        self.shortcut
    }
}

/// 0/1 encoding of a boolean flag.
fn flag(value: bool) -> u32 {
    u32::from(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let shortcut = Shortcut::builder("Insomnia", "\"/usr/bin/flatpak\"").build();

        assert_eq!(shortcut.app_name, "Insomnia");
        assert_eq!(shortcut.exe, "\"/usr/bin/flatpak\"");
        assert_eq!(shortcut.allow_desktop_config, 1);
        assert_eq!(shortcut.allow_overlay, 1);
        assert_eq!(shortcut.is_hidden, 0);
        assert_eq!(shortcut.open_vr, 0);
        assert!(shortcut.tags.is_empty());
        assert!(shortcut.images.is_none());
    }

    #[test]
    fn test_builder_computes_app_id() {
        let shortcut = Shortcut::builder("Foo", "/usr/bin/foo").build();
        assert_eq!(shortcut.app_id, calculate_app_id("/usr/bin/foo", "Foo"));
    }

    #[test]
    fn test_builder_setters() {
        let shortcut = Shortcut::builder("Insomnia", "\"/usr/bin/flatpak\"")
            .allow_overlay(false)
            .hidden(true)
            .open_vr(true)
            .flatpak_app_id("rest.insomnia.Insomnia")
            .launch_options("run rest.insomnia.Insomnia")
            .start_dir("\"/usr/bin/\"")
            .icon("/tmp/icon.png")
            .tags(["Utilities", "Dev"])
            .build();

        assert_eq!(shortcut.allow_overlay, 0);
        assert_eq!(shortcut.is_hidden, 1);
        assert_eq!(shortcut.open_vr, 1);
        assert_eq!(shortcut.flatpak_app_id, "rest.insomnia.Insomnia");
        assert_eq!(shortcut.start_dir, "\"/usr/bin/\"");
        assert_eq!(shortcut.tags["0"], VdfValue::from("Utilities"));
        assert_eq!(shortcut.tags["1"], VdfValue::from("Dev"));
    }

    #[test]
    fn test_single_tag() {
        let shortcut = Shortcut::builder("A", "a").tag("favorite", 1u32).build();
        assert_eq!(shortcut.tags["favorite"], VdfValue::Int(1));
    }
}
