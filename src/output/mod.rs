pub mod reporter;

pub use reporter::{print_error, print_report, render_error, render_report};
