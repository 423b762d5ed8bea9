/// Receives user-facing status while snapshots are folded
///
/// Everything here goes to a side channel so stdout stays reserved for the
/// report itself.
pub trait ProgressReporter {
    fn report(&self, message: &str);

    /// `current` of `total` snapshots processed, optionally naming the
    /// document just folded
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Warnings as well as failures
    fn report_error(&self, message: &str);

    fn report_completion(&self, message: &str);
}
