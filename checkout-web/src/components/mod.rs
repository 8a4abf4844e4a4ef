pub mod daisy_ui;
pub mod locale_switcher;
pub mod stories;
pub mod summary;

pub use locale_switcher::LocaleSwitcher;
