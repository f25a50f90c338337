pub mod config;
pub mod models;
pub mod prefs;
pub mod route;
pub mod state;
pub mod tags;
pub mod text;

mod memory;
pub use memory::MemoryPreferences;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStoragePreferences;

pub use config::{BrowserConfig, ConfigError, DataSourceConfig, UiConfig};
pub use models::{Author, Content, ContentKind};
pub use prefs::{Preferences, Theme};
pub use route::{Tab, ViewRoute, TABS};
pub use state::{BrowserState, Listing, LoadError, Ticket, ViewData};
