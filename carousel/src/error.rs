/// Caller-input and configuration conditions reported by the carousel.
///
/// None of these are fatal: the carousel logs the condition, leaves its state untouched and
/// keeps running (or stays inert).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// The scroll host was never attached, so setup cannot read geometry.
    #[error("scroll host reference is missing")]
    MissingScrollHost,
    #[error("no items found in the carousel content")]
    NoItems,
    #[error("invalid item index {index}, expected a value in 0..{count}")]
    InvalidIndex { index: usize, count: usize },
    /// Setup has not completed yet.
    #[error("carousel is not set up")]
    NotReady,
}
