/// Errors surfaced when building or attaching a stage. Nothing fails mid-animation.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The timeline needs at least one card to animate.
    #[error("target list is empty; at least one card is required")]
    EmptyTargetList,

    /// Progress cannot be derived from a zero, negative or non-finite scroll budget.
    #[error("scroll budget must be positive and finite, got {0}")]
    MisconfiguredBudget(f32),
}

pub type Result<T> = core::result::Result<T, Error>;
