use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{ModelError, ModelResult};

/// Opaque, provider-specific payload carried by an [`crate::InstanceSpec`].
///
/// The orchestrator never looks inside; each provider decodes it into its own request type
/// (for containers, [`crate::CreateInstanceRequest`]). Decoding is fallible and surfaces
/// [`ModelError::Decode`] rather than panicking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(Value);

impl Properties {
    /// Wrap an already parsed JSON document.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Serialize a typed request into an opaque payload.
    pub fn encode<T: Serialize>(value: &T) -> ModelResult<Self> {
        serde_json::to_value(value)
            .map(Self)
            .map_err(ModelError::Encode)
    }

    /// Decode the payload into the provider-specific record `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> ModelResult<T> {
        T::deserialize(&self.0).map_err(ModelError::Decode)
    }

    /// Parse a payload from raw JSON text.
    pub fn from_json(raw: &str) -> ModelResult<Self> {
        serde_json::from_str(raw)
            .map(Self)
            .map_err(ModelError::Decode)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::Properties;
    use crate::{CreateInstanceRequest, ModelError};

    #[test]
    fn decode_reports_type_errors() {
        let props = Properties::from_json(r#"{"Config": "not-an-object"}"#).unwrap();
        let err = props.decode::<CreateInstanceRequest>().unwrap_err();
        assert!(matches!(err, ModelError::Decode(_)), "got {err:?}");
        assert!(err.to_string().starts_with("invalid input formatting"));
    }

    #[test]
    fn from_json_rejects_malformed_text() {
        let err = Properties::from_json("{not json").unwrap_err();
        assert!(matches!(err, ModelError::Decode(_)));
    }

    #[test]
    fn encode_then_decode_keeps_image() {
        let req = CreateInstanceRequest::example();
        let props = Properties::encode(&req).unwrap();
        let back: CreateInstanceRequest = props.decode().unwrap();
        assert_eq!(back.config.unwrap().image, "docker/dind");
    }
}
