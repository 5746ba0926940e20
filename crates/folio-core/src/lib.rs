//! Target-independent state for the portfolio page enhancement layer.
//!
//! Every decision the page makes (which theme, whether the menu is open,
//! which nav link is active, what a skill bar shows, whether the contact
//! form may be submitted) lives here as plain Rust so it can be unit tested
//! off the browser. The `folio-wasm` crate renders these decisions into the DOM.

pub mod config;
pub mod error;
pub mod form;
pub mod menu;
pub mod scroll;
pub mod skills;
pub mod store;
pub mod theme;

pub use config::FolioConfig;
pub use error::{FolioError, StoreError};
pub use form::{ContactForm, Field, FieldState, FormValues, SubmitOutcome};
pub use menu::{MenuController, MenuState};
pub use scroll::{RevealTracker, ScrollTracker, SectionDescriptor};
pub use skills::{SkillBoard, SkillLevel};
pub use store::{MemoryStore, PreferenceStore};
pub use theme::{Theme, ThemeController};
