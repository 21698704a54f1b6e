/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizProgress {
    /// Questions already passed: the current index, or `total` once complete.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    /// `position / total`, `1.0` once complete.
    pub fraction: f32,
    pub is_complete: bool,
}
