mod instance;
pub use instance::InstanceSpec;
