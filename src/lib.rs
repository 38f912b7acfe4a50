pub mod apps;
pub mod catalog;
mod channel_controller;
mod color;
pub mod command;
mod config;
pub mod desktop;
pub mod display;
mod error;
pub mod event;
pub mod geometry;
pub mod i18n;
mod input_manager;
mod links;
mod logic_manager;

pub use color::Color;
pub use config::Config;
pub use desktop::Desktop;
pub use error::{DeskfolioError, ErrorType};
pub use i18n::Locale;
pub use links::LinkOpener;
pub use logic_manager::LogicManager;
