//! Static content of the desktop. Nothing here changes at runtime.

mod dock_items;
mod media;
mod projects;

pub use dock_items::{DockAction, DockItem, DOCK_ITEMS};
pub use media::{
    Playlist, PlaylistName, ALBUM_SWATCHES, NOW_PLAYING_ALBUM, NOW_PLAYING_ARTIST,
    NOW_PLAYING_TITLE, PHOTOS, PLAYLISTS, SKILLS,
};
pub use projects::{project, Link, Project, ProjectContent, PROJECTS};
