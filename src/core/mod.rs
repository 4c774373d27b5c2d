pub mod config;
pub mod context;
pub mod debounce;
pub mod preferences;

pub use context::PageContext;
