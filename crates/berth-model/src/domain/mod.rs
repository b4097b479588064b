mod tags;
pub use tags::Tags;

mod id;
pub use id::{InstanceId, LogicalId};

mod constants;
pub use constants::DEFAULT_NETWORK;
