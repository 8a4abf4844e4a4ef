pub mod alert;
pub mod select;
pub mod skeleton;

pub use alert::{Alert, AlertProps};
pub use select::{Select, SelectOption, SelectProps};
pub use skeleton::{Skeleton, SkeletonProps};
