use crate::Color;
use serde::{Deserialize, Serialize};

/// Colours accept names, `r, g, b` triples or `#rrggbb`. Missing entries keep their default.
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Theme {
    pub desktop_background: Color,
    pub menu_bar_background: Color,
    pub menu_bar_text: Color,
    pub window_background: Color,
    pub title_bar: Color,
    pub title_text: Color,
    pub heading_text: Color,
    pub body_text: Color,
    pub muted_text: Color,
    pub sidebar_background: Color,
    pub sidebar_selected: Color,
    pub folder_row: Color,
    pub dialog_background: Color,
    pub dialog_title_bar: Color,
    pub dialog_text: Color,
    pub dialog_button: Color,
    pub music_background: Color,
    pub music_panel: Color,
    pub music_accent: Color,
    pub photos_background: Color,
    pub photos_title_bar: Color,
    pub close_light: Color,
    pub minimize_light: Color,
    pub maximize_light: Color,
    pub link: Color,
    pub check_mark: Color,
    pub icon_label: Color,
    pub icon_highlight: Color,
    pub dock_background: Color,
    pub dock_separator: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        return Self {
            desktop_background: Color::from_hex(0x4f5b52),
            menu_bar_background: Color::from_hex(0x2b302c),
            menu_bar_text: Color::from_hex(0xe6e6e6),
            window_background: Color::from_hex(0xf5f0eb),
            title_bar: Color::from_hex(0xe8e0d8),
            title_text: Color::from_hex(0x3d3329),
            heading_text: Color::from_hex(0x2c2419),
            body_text: Color::from_hex(0x4a3f34),
            muted_text: Color::from_hex(0x6b5d4f),
            sidebar_background: Color::from_hex(0xebe5de),
            sidebar_selected: Color::from_hex(0xd4cbc2),
            folder_row: Color::from_hex(0xf0ebe4),
            dialog_background: Color::from_hex(0x2d2d2d),
            dialog_title_bar: Color::from_hex(0x3a3a3a),
            dialog_text: Color::from_hex(0xe6e6e6),
            dialog_button: Color::from_hex(0x4a5ebd),
            music_background: Color::from_hex(0x121212),
            music_panel: Color::from_hex(0x1a1a1a),
            music_accent: Color::from_hex(0x1db954),
            photos_background: Color::from_hex(0x1e1e1e),
            photos_title_bar: Color::from_hex(0x2a2a2a),
            close_light: Color::from_hex(0xff5f57),
            minimize_light: Color::from_hex(0xfebc2e),
            maximize_light: Color::from_hex(0x28c840),
            link: Color::from_hex(0x3478f6),
            check_mark: Color::from_hex(0xf5a623),
            icon_label: Color::WHITE,
            icon_highlight: Color::from_hex(0x3478f6),
            dock_background: Color::from_hex(0x3b4540),
            dock_separator: Color::from_hex(0x77807a),
            tooltip_background: Color::from_hex(0x1f1f1f),
            tooltip_text: Color::WHITE,
        };
    }
}
