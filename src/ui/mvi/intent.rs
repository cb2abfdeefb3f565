/// Marker trait for intents: key-driven actions and background results
/// (such as the finished country load) fed to a reducer.
pub trait Intent: Send + 'static {}
