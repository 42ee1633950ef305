// Adapters layer: concrete presenters for terminal output.

pub mod console;

pub use console::{JsonPresenter, TextPresenter};
