mod de;

mod domain;
pub use domain::{DEFAULT_NETWORK, InstanceId, LogicalId, Tags};

mod error;
pub use error::{ModelError, ModelResult};

mod properties;
pub use properties::Properties;

mod container;
pub use container::{ContainerConfig, EndpointSettings, HostConfig, NetworkingConfig};

mod spec;
pub use spec::InstanceSpec;

mod request;
pub use request::CreateInstanceRequest;

mod describe;
pub use describe::{DescribeRequest, InstanceDescription};

mod vendor;
pub use vendor::VendorInfo;
