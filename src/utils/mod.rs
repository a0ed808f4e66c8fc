pub mod browser;
pub mod format;
pub mod pagination;
pub mod panic_hook;
