//! Component stories rendered by the design showcase.

pub mod select;

pub use select::{SelectStories, SelectStory, SelectStoryFrame};
