//! Well-known names shared between the model and the runtime adapters.

/// Network that receives the logical address when a request names none.
///
/// This is the engine's conventional unnamed network.
pub const DEFAULT_NETWORK: &str = "bridge";
