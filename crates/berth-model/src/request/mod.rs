mod create;
pub use create::CreateInstanceRequest;
