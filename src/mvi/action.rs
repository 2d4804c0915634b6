//! Base trait for actions in the data flow.

/// Marker trait for action objects.
///
/// Actions represent:
/// - View intents (reload, update)
/// - Effect results (records loaded)
///
/// Actions are consumed by the reducer and by effect matchers.
pub trait Action: Clone + std::fmt::Debug + Send + Sync + 'static {}
