use crate::shared::Result;

/// Final destination of a rendered trend report (stdout or a file)
pub trait OutputPresenter {
    /// Hands over the fully rendered report; fails when the destination
    /// cannot be written.
    fn present(&self, content: &str) -> Result<()>;
}
