//! Settings administration and public read-model composition.

pub mod composer;
pub mod service;

pub use composer::ContentComposer;
pub use service::SettingsService;
