use crate::domain::model::SspBreakdown;
use crate::utils::error::Result;

/// Where the form sends its output: the results panel and blocking notices.
pub trait Presenter {
    fn show_results(&mut self, breakdown: &SspBreakdown) -> Result<()>;

    /// Blocking user-facing message; the action that raised it performed no work.
    fn notify(&mut self, message: &str) -> Result<()>;

    /// The results panel was emptied.
    fn clear_results(&mut self) -> Result<()>;
}
