pub mod toast;

pub use toast::{Toast, ToastItem, ToastProps};
