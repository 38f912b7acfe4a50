use crate::i18n::TranslationKey;
use crate::Color;

pub static PHOTOS: [&str; 5] = [
    "/IMG_9444.jpeg",
    "/IMG_7281.jpeg",
    "/IMG_6406.jpeg",
    "/IMG_2267.jpeg",
    "/IMG_7307.jpg",
];

pub static SKILLS: [&str; 14] = [
    "AI & Data Engineering",
    "Software Pipeline Architecture",
    "Web Development (Next.js, React, TypeScript)",
    "Data Analysis & Visualization",
    "Python, SQL, Machine Learning",
    "API Development & Integration",
    "Mobile App Design",
    "Prototyping & Wireframing",
    "UI/UX Design",
    "Visual Storytelling",
    "Marketplace Visuals (App Store & Google Play)",
    "Brand Identity Design",
    "Social Media Design",
    "Photography",
];

/// Either a fixed playlist name or one that follows the locale.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PlaylistName {
    Fixed(&'static str),
    Localized(TranslationKey),
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Playlist {
    pub name: PlaylistName,
    pub from: Color,
    pub to: Color,
}

const fn fixed(name: &'static str, from: u32, to: u32) -> Playlist {
    return Playlist {
        name: PlaylistName::Fixed(name),
        from: Color::from_hex(from),
        to: Color::from_hex(to),
    };
}

const fn localized(key: TranslationKey, from: u32, to: u32) -> Playlist {
    return Playlist {
        name: PlaylistName::Localized(key),
        from: Color::from_hex(from),
        to: Color::from_hex(to),
    };
}

pub static PLAYLISTS: [Playlist; 8] = [
    fixed("Deadbeat", 0x2a2a2a, 0x4a4a4a),
    fixed("Daily Mix 3", 0x8b3a3a, 0xc45c3a),
    fixed("Hamilton (Original...)", 0x2a1a0a, 0x4a3a1a),
    localized(TranslationKey::SpotifyLikedSongs, 0x5b4a9e, 0x3a7bd5),
    fixed("Daily Mix 1", 0x1a3a1a, 0x2a5a2a),
    localized(TranslationKey::SpotifyTurkishPop, 0x5a2a4a, 0x8a3a5a),
    localized(TranslationKey::SpotifySpringInDesert, 0x4a3a2a, 0x6a5a3a),
    localized(TranslationKey::SpotifyCanozan, 0x6a2a1a, 0x9a4a2a),
];

/// Album tiles of the library sidebar and the "Made for" row.
pub static ALBUM_SWATCHES: [(Color, Color); 8] = [
    (Color::from_hex(0x3a2a1a), Color::from_hex(0x5a4a2a)),
    (Color::from_hex(0x1a2a1a), Color::from_hex(0x3a4a2a)),
    (Color::from_hex(0x2a1a2a), Color::from_hex(0x4a2a4a)),
    (Color::from_hex(0x1a1a3a), Color::from_hex(0x3a2a5a)),
    (Color::from_hex(0x3a1a1a), Color::from_hex(0x5a2a1a)),
    (Color::from_hex(0x2a2a1a), Color::from_hex(0x4a4a2a)),
    (Color::from_hex(0x1a2a3a), Color::from_hex(0x2a4a5a)),
    (Color::from_hex(0x3a2a2a), Color::from_hex(0x5a3a3a)),
];

pub const NOW_PLAYING_ALBUM: &str = "Hamilton (Original";
pub const NOW_PLAYING_TITLE: &str = "Farmer Refuted";
pub const NOW_PLAYING_ARTIST: &str = "Thayne Jasperson, Lin-Manuel Miran...";
