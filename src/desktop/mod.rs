//! Window management for the simulated desktop: stacking, dragging, the dock and the menu bar.

mod capture;
mod desktop;
mod dock;
mod icons;
mod menu_bar;
mod panel;
mod spring;
mod stacking;

pub use capture::{CaptureSlot, CaptureTarget, PointerCapture};
pub use desktop::Desktop;
pub use dock::{magnify, Dock, DockLayout, DockSlot, DOCK_BAND_ROWS, DOCK_BAR_ROWS};
pub use icons::{DesktopIcon, IconLayer, ICON_SIZE};
pub use menu_bar::{MenuBar, MenuSegment};
pub use panel::{clamp_position, fit_size, Lifecycle, PanelInstance, TitleControl};
pub use spring::{Spring, SpringParams};
pub use stacking::{Depth, StackingCoordinator, BASE_DEPTH};
