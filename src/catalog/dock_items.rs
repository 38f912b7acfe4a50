use crate::apps::AppKind;
use crate::i18n::TranslationKey;
use crate::Color;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DockAction {
    Launch(AppKind),
    /// Profile links are resolved from the configured profile when clicked.
    OpenInstagram,
    OpenMail,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct DockItem {
    pub id: &'static str,
    pub label: TranslationKey,
    pub glyph: &'static str,
    pub accent: Color,
    pub action: DockAction,
    pub separator_after: bool,
}

const fn item(
    id: &'static str,
    label: TranslationKey,
    glyph: &'static str,
    accent: u32,
    action: DockAction,
    separator_after: bool,
) -> DockItem {
    return DockItem {
        id,
        label,
        glyph,
        accent: Color::from_hex(accent),
        action,
        separator_after,
    };
}

pub static DOCK_ITEMS: [DockItem; 9] = [
    item(
        "app",
        TranslationKey::DockPortfolio,
        "</>",
        0x2f2f2f,
        DockAction::Launch(AppKind::Portfolio),
        false,
    ),
    item(
        "figma",
        TranslationKey::DockFigma,
        "✦",
        0xa259ff,
        DockAction::Launch(AppKind::Figma),
        false,
    ),
    item(
        "spotify",
        TranslationKey::DockSpotify,
        "♫",
        0x1db954,
        DockAction::Launch(AppKind::Music),
        true,
    ),
    item(
        "error",
        TranslationKey::DockAlerts,
        "!",
        0xf5c518,
        DockAction::Launch(AppKind::Alerts),
        false,
    ),
    item(
        "notes",
        TranslationKey::DockNotes,
        "✎",
        0xf7d774,
        DockAction::Launch(AppKind::Notes),
        false,
    ),
    item(
        "photos",
        TranslationKey::DockPhotos,
        "✿",
        0xf2f2f2,
        DockAction::Launch(AppKind::Photos),
        true,
    ),
    item(
        "instagram",
        TranslationKey::DockInstagram,
        "◎",
        0xd6249f,
        DockAction::OpenInstagram,
        false,
    ),
    item(
        "mail",
        TranslationKey::DockMail,
        "✉",
        0x2f8cf6,
        DockAction::OpenMail,
        false,
    ),
    item(
        "trash",
        TranslationKey::DockTrash,
        "♻",
        0x9aa0a6,
        DockAction::Launch(AppKind::Trash),
        false,
    ),
];

#[cfg(test)]
mod tests {
    use super::DOCK_ITEMS;

    #[test]
    fn separators_follow_music_and_photos() {
        let separated: Vec<&str> = DOCK_ITEMS
            .iter()
            .filter(|i| i.separator_after)
            .map(|i| i.id)
            .collect();

        assert_eq!(separated, vec!["spotify", "photos"]);
    }
}
