use chrono::NaiveDate;
use deskfolio::apps::{AppKind, PanelId};
use deskfolio::command::Command;
use deskfolio::event::{PointerEvent, PointerKind};
use deskfolio::geometry::{Position, Size};
use deskfolio::i18n::TranslationKey;
use deskfolio::{Config, Desktop, Locale};
use std::time::{Duration, Instant};

const NOTES: PanelId = PanelId::App(AppKind::Notes);
const PHOTOS: PanelId = PanelId::App(AppKind::Photos);

fn desktop() -> Desktop {
    return Desktop::with_seed(&Config::default(), Locale::En, Size::new(40, 140), 7);
}

fn pointer(desktop: &mut Desktop, kind: PointerKind, col: i32, row: i32, now: Instant) {
    desktop.handle_pointer(&PointerEvent::new(kind, Position::new(col, row)), now);
}

fn wall() -> chrono::NaiveDateTime {
    return NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
}

#[test]
fn refocusing_reorders_the_stack() {
    let mut desktop = desktop();
    let now = Instant::now();

    desktop.open(NOTES, now);
    desktop.open(PHOTOS, now);
    assert_eq!(desktop.depth_of(NOTES), Some(101));
    assert_eq!(desktop.depth_of(PHOTOS), Some(102));

    assert!(desktop.focus(NOTES));
    assert_eq!(desktop.depth_of(NOTES), Some(103));
    assert_eq!(desktop.stacking_order(), vec![NOTES, PHOTOS]);

    // Opening again raises instead of duplicating.
    desktop.open(PHOTOS, now);
    assert_eq!(desktop.open_count(), 2);
    assert_eq!(desktop.focused(), Some(PHOTOS));
}

#[test]
fn title_drag_moves_by_the_pointer_delta() {
    let mut desktop = desktop();
    let now = Instant::now();

    desktop.open(NOTES, now);
    let start = desktop.panel(NOTES).unwrap().position();
    assert_eq!(start, Position::new(34, 6));

    pointer(&mut desktop, PointerKind::Down, 60, 6, now);
    pointer(&mut desktop, PointerKind::Drag, 65, 9, now);
    pointer(&mut desktop, PointerKind::Up, 65, 9, now);

    assert_eq!(desktop.panel(NOTES).unwrap().position(), Position::new(39, 9));
    assert!(!desktop.capture_ref().is_captured());
}

#[test]
fn dragged_panels_keep_a_grip_inside_the_desktop() {
    let mut desktop = desktop();
    let now = Instant::now();

    desktop.open(NOTES, now);
    pointer(&mut desktop, PointerKind::Down, 60, 6, now);
    pointer(&mut desktop, PointerKind::Drag, -200, 90, now);

    let panel = desktop.panel(NOTES).unwrap();
    let area = desktop.desktop_area();

    assert_eq!(panel.position().column(), area.x() + 4 - 72);
    assert_eq!(panel.position().row(), area.bottom() - 1);
}

#[test]
fn dragged_icons_do_not_open() {
    let mut desktop = desktop();
    let now = Instant::now();
    let area = desktop.desktop_area();
    let start = desktop.icons_ref().get(0).unwrap().position(area);
    let index = desktop.icons_ref().icon_at(start, area).unwrap();
    let origin = desktop.icons_ref().get(index).unwrap().position(area);
    let project = desktop.icons_ref().get(index).unwrap().project().id;

    pointer(&mut desktop, PointerKind::Down, start.column(), start.row(), now);
    pointer(&mut desktop, PointerKind::Drag, start.column() + 6, start.row() + 3, now);
    pointer(&mut desktop, PointerKind::Up, start.column() + 6, start.row() + 3, now);

    assert_eq!(desktop.open_count(), 0);
    assert_eq!(
        desktop.icons_ref().get(index).unwrap().position(area),
        origin + Position::new(6, 3)
    );

    let moved = start + Position::new(6, 3);
    pointer(&mut desktop, PointerKind::Down, moved.column(), moved.row(), now);
    pointer(&mut desktop, PointerKind::Up, moved.column(), moved.row(), now);

    assert!(desktop.is_open(PanelId::Project(project)));
}

#[test]
fn closing_mid_drag_releases_the_capture() {
    let mut desktop = desktop();
    let now = Instant::now();

    desktop.open(NOTES, now);
    pointer(&mut desktop, PointerKind::Down, 60, 6, now);
    assert!(desktop.capture_ref().is_captured());

    desktop.close(NOTES);
    assert!(!desktop.capture_ref().is_captured());

    // Later drag events have nothing to move.
    pointer(&mut desktop, PointerKind::Drag, 70, 10, now);
    assert!(desktop.panel(NOTES).is_none());
}

#[test]
fn minimized_panels_come_back_after_the_delay() {
    let mut desktop = desktop();
    let now = Instant::now();

    desktop.open(NOTES, now);
    assert!(desktop.minimize(NOTES, now));
    assert!(!desktop.panel(NOTES).unwrap().is_visible());
    assert_eq!(desktop.focused(), None);

    desktop.tick(now + Duration::from_millis(100), &wall());
    assert!(!desktop.panel(NOTES).unwrap().is_visible());

    desktop.tick(now + Duration::from_millis(600), &wall());
    assert!(desktop.panel(NOTES).unwrap().is_visible());
    assert_eq!(desktop.focused(), Some(NOTES));
}

#[test]
fn maximized_panels_cannot_be_dragged() {
    let mut desktop = desktop();
    let now = Instant::now();

    desktop.open(NOTES, now);
    desktop.toggle_maximize(NOTES, now);

    let area = desktop.desktop_area();
    let panel = desktop.panel(NOTES).unwrap();
    assert_eq!(panel.frame(area), area);
    let before = panel.position();

    pointer(&mut desktop, PointerKind::Down, 60, area.y(), now);
    assert!(!desktop.capture_ref().is_captured());

    pointer(&mut desktop, PointerKind::Drag, 80, 12, now);
    assert_eq!(desktop.panel(NOTES).unwrap().position(), before);
}

#[test]
fn dock_clicks_launch_and_link() {
    let mut desktop = desktop();
    let now = Instant::now();
    let layout = desktop.dock_ref().layout();
    let click = |desktop: &mut Desktop, slot: usize| {
        let icon = layout.slots[slot].icon;
        pointer(desktop, PointerKind::Down, icon.x(), icon.y(), now);
        pointer(desktop, PointerKind::Up, icon.x(), icon.y(), now);
    };

    click(&mut desktop, 5);
    assert!(desktop.is_open(PHOTOS));

    click(&mut desktop, 6);
    click(&mut desktop, 7);

    let links = desktop.take_links();
    assert_eq!(links.len(), 2);
    assert_eq!(&links[0], desktop.profile_ref().instagram_url_ref());
    assert!(links[1].starts_with("mailto:"));
    assert!(desktop.take_links().is_empty());
}

#[test]
fn commands_drive_the_focused_panel() {
    let mut desktop = desktop();
    let now = Instant::now();

    desktop.handle_command(&Command::LaunchDockItemCommand(4), now);
    desktop.handle_command(&Command::LaunchDockItemCommand(5), now);
    assert_eq!(desktop.focused(), Some(PHOTOS));

    desktop.handle_command(&Command::FocusNextCommand, now);
    assert_eq!(desktop.focused(), Some(NOTES));

    desktop.handle_command(&Command::CloseFocusedCommand, now);
    assert!(!desktop.is_open(NOTES));
    assert_eq!(desktop.focused(), Some(PHOTOS));

    desktop.handle_command(&Command::QuitCommand, now);
    assert!(desktop.should_quit());
}

#[test]
fn focusing_a_closed_panel_does_nothing() {
    let mut desktop = desktop();

    assert!(!desktop.focus(PanelId::App(AppKind::Music)));
    assert_eq!(desktop.open_count(), 0);
    assert!(!desktop.open(PanelId::Project("no-such-project"), Instant::now()));
}

#[test]
fn turkish_desktops_translate_everything() {
    let desktop = Desktop::new(&Config::default(), Locale::Tr, Size::new(40, 140));

    assert_eq!(desktop.translator().t(TranslationKey::MenuFile), "Dosya");
    assert_eq!(desktop.translator().t(TranslationKey::DockPhotos), "Fotoğraflar");
    assert_eq!(Locale::detect(Some("en-US")), Locale::En);
    assert_eq!(Locale::detect(Some("tr-TR")), Locale::Tr);
    assert_eq!(Locale::detect(Some("de-DE")), Locale::En);
}

#[test]
fn shrinking_the_screen_refits_and_clamps_panels() {
    let mut desktop = desktop();
    let now = Instant::now();

    desktop.open(NOTES, now);
    assert!(desktop.move_panel(NOTES, Position::new(120, 30)));
    assert_eq!(desktop.panel(NOTES).unwrap().position(), Position::new(120, 30));

    desktop.resize(Size::new(20, 50), now);

    let area = desktop.desktop_area();
    let panel = desktop.panel(NOTES).unwrap();

    assert_eq!(area.size(), Size::new(15, 50));
    assert!(panel.size().get_rows() as i32 <= area.height());
    assert!(panel.size().get_cols() as i32 <= area.width());
    assert_eq!(
        panel.position(),
        Position::new(area.right() - 4, area.bottom() - 1)
    );
}

#[test]
fn pressing_the_desktop_clears_dock_hover() {
    let mut desktop = desktop();
    let now = Instant::now();
    let icon = desktop.dock_ref().layout().slots[0].icon;

    pointer(&mut desktop, PointerKind::Move, icon.x(), icon.y() + 1, now);
    assert_eq!(desktop.dock_ref().hovered(), Some(0));

    pointer(&mut desktop, PointerKind::Down, 70, 20, now);
    assert_eq!(desktop.dock_ref().hovered(), None);
}
