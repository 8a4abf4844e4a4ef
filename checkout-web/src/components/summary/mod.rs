mod summary_line;
mod summary_view;

pub use summary_line::{SummaryLine, SummaryLineProps};
pub use summary_view::{Summary, SummaryProps, SummarySkeleton};
