//! Shortcut records and their on-disk store.
//!
//! Load path: bytes -> [`crate::vdf::decode`] -> tree -> [`tree_to_shortcuts`].
//! Save path is the reverse, ending in an atomic file replace.

mod bridge;
mod builder;
mod model;
pub mod store;

pub use bridge::{shortcuts_to_tree, tree_to_shortcuts};
pub use builder::ShortcutBuilder;
pub use model::{Images, Shortcut, Shortcuts};
