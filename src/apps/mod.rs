//! Content of every panel kind. Apps draw through a [Painter](crate::display::Painter) and
//! report clickable regions as hotspots; the desktop owns everything else.

mod dialog;
mod hello;
mod music;
mod notes;
mod photos;
mod project;

pub use dialog::{DialogKind, DialogView};
pub use hello::HelloView;
pub use music::MusicView;
pub use notes::{NotesTab, NotesView};
pub use photos::PhotosView;
pub use project::ProjectView;

use crate::catalog;
use crate::config::{Profile, Theme};
use crate::display::Painter;
use crate::geometry::{Rect, Size};
use crate::i18n::{TranslationKey, Translator};
use crate::Color;
use std::time::Instant;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AppKind {
    Portfolio,
    Figma,
    Music,
    Alerts,
    Notes,
    Photos,
    Trash,
}

/// Identity of a panel. At most one panel per identity is open.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PanelId {
    Project(&'static str),
    App(AppKind),
}

/// Window chrome draws traffic lights in the title row, dialogs only a centred title.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Chrome {
    Window,
    Dialog,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ContentAction {
    SelectTab(NotesTab),
    SelectPhoto(usize),
    ShowAllPhotos,
    Dismiss,
    OpenLink(String),
}

/// A clickable region in content coordinates.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Hotspot {
    pub rect: Rect,
    pub action: ContentAction,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Palette {
    pub background: Color,
    pub title_bar: Color,
    pub title_text: Color,
    pub text: Color,
}

/// Everything a view needs besides its own state.
pub struct ViewContext<'a> {
    pub translator: Translator,
    pub theme: &'a Theme,
    pub profile: &'a Profile,
    pub now: Instant,
}

pub enum PanelBody {
    Project(ProjectView),
    Notes(NotesView),
    Photos(PhotosView),
    Music(MusicView),
    Dialog(DialogView),
    Hello(HelloView),
}

impl AppKind {
    pub const ALL: [AppKind; 7] = [
        AppKind::Portfolio,
        AppKind::Figma,
        AppKind::Music,
        AppKind::Alerts,
        AppKind::Notes,
        AppKind::Photos,
        AppKind::Trash,
    ];

    pub fn name(&self) -> &'static str {
        return match self {
            AppKind::Portfolio => "portfolio",
            AppKind::Figma => "figma",
            AppKind::Music => "music",
            AppKind::Alerts => "alerts",
            AppKind::Notes => "notes",
            AppKind::Photos => "photos",
            AppKind::Trash => "trash",
        };
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            PanelId::Project(id) => write!(f, "project:{}", id),
            PanelId::App(kind) => write!(f, "app:{}", kind.name()),
        };
    }
}

impl PanelBody {
    /// Build the content for `id`. Unknown project identifiers have no content.
    pub fn for_id(id: PanelId, now: Instant) -> Option<Self> {
        return match id {
            PanelId::Project(project_id) => {
                catalog::project(project_id).map(|p| PanelBody::Project(ProjectView::new(p)))
            }
            PanelId::App(AppKind::Portfolio) => Some(PanelBody::Hello(HelloView::new(now))),
            PanelId::App(AppKind::Figma) => {
                Some(PanelBody::Dialog(DialogView::new(DialogKind::Figma)))
            }
            PanelId::App(AppKind::Music) => Some(PanelBody::Music(MusicView::new())),
            PanelId::App(AppKind::Alerts) => {
                Some(PanelBody::Dialog(DialogView::new(DialogKind::Error)))
            }
            PanelId::App(AppKind::Notes) => Some(PanelBody::Notes(NotesView::new())),
            PanelId::App(AppKind::Photos) => Some(PanelBody::Photos(PhotosView::new())),
            PanelId::App(AppKind::Trash) => {
                Some(PanelBody::Dialog(DialogView::new(DialogKind::Trash)))
            }
        };
    }

    pub fn chrome(&self) -> Chrome {
        return match self {
            PanelBody::Dialog(_) => Chrome::Dialog,
            _ => Chrome::Window,
        };
    }

    pub fn title(&self, ctx: &ViewContext) -> String {
        let t = ctx.translator;

        return match self {
            PanelBody::Project(view) => {
                format!("{} {}", t.t(TranslationKey::InformationAbout), view.project().name)
            }
            PanelBody::Notes(_) => format!(
                "{} {}, {}",
                t.t(TranslationKey::InformationAbout),
                ctx.profile.name_ref(),
                ctx.profile.email_ref()
            ),
            PanelBody::Photos(_) => t.t(TranslationKey::Photos).to_string(),
            PanelBody::Music(_) => t.t(TranslationKey::DockSpotify).to_string(),
            PanelBody::Dialog(view) => t.t(view.kind().title()).to_string(),
            PanelBody::Hello(_) => HelloView::TITLE.to_string(),
        };
    }

    pub fn palette(&self, theme: &Theme) -> Palette {
        return match self {
            PanelBody::Photos(_) => Palette {
                background: theme.photos_background,
                title_bar: theme.photos_title_bar,
                title_text: theme.dialog_text.mix(theme.photos_title_bar, 0.4),
                text: theme.dialog_text,
            },
            PanelBody::Music(_) => Palette {
                background: theme.music_background,
                title_bar: theme.music_panel,
                title_text: theme.dialog_text.mix(theme.music_panel, 0.4),
                text: theme.dialog_text,
            },
            PanelBody::Dialog(_) | PanelBody::Hello(_) => Palette {
                background: theme.dialog_background,
                title_bar: theme.dialog_title_bar,
                title_text: theme.dialog_text.mix(theme.dialog_title_bar, 0.3),
                text: theme.dialog_text,
            },
            _ => Palette {
                background: theme.window_background,
                title_bar: theme.title_bar,
                title_text: theme.title_text,
                text: theme.body_text,
            },
        };
    }

    /// The size the panel asks for before it is fitted to the desktop.
    pub fn preferred_size(&self) -> Size {
        return match self {
            PanelBody::Project(_) => Size::new(28, 72),
            PanelBody::Notes(_) => Size::new(24, 72),
            PanelBody::Photos(_) => Size::new(24, 66),
            PanelBody::Music(_) => Size::new(30, 100),
            PanelBody::Dialog(view) => view.preferred_size(),
            PanelBody::Hello(_) => Size::new(9, 44),
        };
    }

    pub fn view(&self, painter: &mut Painter, ctx: &ViewContext) {
        let palette = self.palette(ctx.theme);

        match self {
            PanelBody::Project(view) => view.view(painter, ctx, &palette),
            PanelBody::Notes(view) => view.view(painter, ctx, &palette),
            PanelBody::Photos(view) => view.view(painter, ctx, &palette),
            PanelBody::Music(view) => view.view(painter, ctx, &palette),
            PanelBody::Dialog(view) => view.view(painter, ctx, &palette),
            PanelBody::Hello(view) => view.view(painter, ctx, &palette),
        }
    }

    /// Apply an action that only changes this panel's own state. Returns true if anything
    /// changed.
    pub fn apply(&mut self, action: &ContentAction) -> bool {
        return match (self, action) {
            (PanelBody::Notes(view), ContentAction::SelectTab(tab)) => view.select(*tab),
            (PanelBody::Photos(view), ContentAction::SelectPhoto(index)) => {
                view.select(Some(*index))
            }
            (PanelBody::Photos(view), ContentAction::ShowAllPhotos) => view.select(None),
            _ => false,
        };
    }

    /// True while the content changes on its own between frames.
    pub fn is_animating(&self) -> bool {
        return matches!(self, PanelBody::Hello(_));
    }
}
