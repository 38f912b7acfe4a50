mod config;
mod dock;
mod environment;
mod keys;
mod profile;
mod serde_default_funcs;
mod theme;
mod windows;

pub use config::Config;
pub use dock::DockSettings;
pub use environment::Environment;
pub use keys::Keys;
pub use profile::Profile;
pub use theme::Theme;
pub use windows::WindowSettings;
