use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use berth_core::InstanceProvider;
use berth_model::{DescribeRequest, InstanceId, InstanceSpec, Properties, Tags};

use crate::{error::ApiError, extract::ApiJson};

/// HTTP API service builder.
pub struct HttpApi<P> {
    provider: Arc<P>,
}

impl<P> HttpApi<P>
where
    P: InstanceProvider + 'static,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - GET    /v1/info                  - vendor info
    /// - GET    /v1/example               - example properties
    /// - POST   /v1/instances/validate    - validate properties
    /// - POST   /v1/instances             - provision
    /// - DELETE /v1/instances/{id}        - destroy
    /// - POST   /v1/instances/describe    - describe group
    /// - PUT    /v1/instances/{id}/labels - label
    pub fn router(self) -> Router {
        Router::new()
            .route("/v1/info", get(vendor_info::<P>))
            .route("/v1/example", get(example_properties::<P>))
            .route("/v1/instances/validate", post(validate::<P>))
            .route("/v1/instances/describe", post(describe_instances::<P>))
            .route("/v1/instances", post(provision::<P>))
            .route("/v1/instances/{id}", delete(destroy::<P>))
            .route("/v1/instances/{id}/labels", put(label::<P>))
            .with_state(self.provider)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ProvisionResponse {
    #[serde(rename = "ID")]
    id: InstanceId,
}

fn instance_id(raw: String) -> Result<InstanceId, ApiError> {
    if raw.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "instance id cannot be empty".into(),
        ));
    }
    Ok(InstanceId::from(raw))
}

/// GET /v1/info
async fn vendor_info<P>(State(provider): State<Arc<P>>) -> impl IntoResponse
where
    P: InstanceProvider,
{
    Json(provider.vendor_info())
}

/// GET /v1/example
async fn example_properties<P>(
    State(provider): State<Arc<P>>,
) -> Result<impl IntoResponse, ApiError>
where
    P: InstanceProvider,
{
    Ok(Json(provider.example_properties()?))
}

/// POST /v1/instances/validate
async fn validate<P>(
    State(provider): State<Arc<P>>,
    ApiJson(properties): ApiJson<Properties>,
) -> Result<impl IntoResponse, ApiError>
where
    P: InstanceProvider,
{
    provider.validate(&properties).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/instances
async fn provision<P>(
    State(provider): State<Arc<P>>,
    ApiJson(spec): ApiJson<InstanceSpec>,
) -> Result<impl IntoResponse, ApiError>
where
    P: InstanceProvider,
{
    let id = provider.provision(spec).await?;
    debug!(id = %id, "provision request served");
    Ok((StatusCode::CREATED, Json(ProvisionResponse { id })))
}

/// DELETE /v1/instances/{id}
async fn destroy<P>(
    State(provider): State<Arc<P>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    P: InstanceProvider,
{
    let id = instance_id(id)?;
    provider.destroy(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/instances/describe
async fn describe_instances<P>(
    State(provider): State<Arc<P>>,
    ApiJson(req): ApiJson<DescribeRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    P: InstanceProvider,
{
    let descriptions = provider.describe_instances(&req.tags).await?;
    Ok(Json(descriptions))
}

/// PUT /v1/instances/{id}/labels
async fn label<P>(
    State(provider): State<Arc<P>>,
    Path(id): Path<String>,
    ApiJson(labels): ApiJson<Tags>,
) -> Result<impl IntoResponse, ApiError>
where
    P: InstanceProvider,
{
    let id = instance_id(id)?;
    provider.label(&id, labels).await?;
    Ok(StatusCode::NO_CONTENT)
}
