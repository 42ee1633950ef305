pub mod calculator;
pub mod form;
pub mod format;
pub mod session;

pub use crate::domain::model::{ContractInput, SspBreakdown};
pub use crate::domain::ports::Presenter;
pub use crate::utils::error::Result;
