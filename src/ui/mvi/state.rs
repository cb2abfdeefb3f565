/// Marker trait for UI state.
///
/// `Default` lets the owner `std::mem::take` the state into the reducer;
/// `PartialEq` lets callers skip redraws when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
