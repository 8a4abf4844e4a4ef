pub mod atoms;
pub mod foundation;
pub mod organisms;

pub use foundation::DaisyColor;

pub use atoms::*;
pub use organisms::*;
