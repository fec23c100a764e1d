//! HTTP dispatch for the resource services.
//!
//! Every resource is mounted with the same four routes:
//!
//! | verb   | path              | success                 |
//! |--------|-------------------|-------------------------|
//! | GET    | `{base}/{id}`     | 200 with the resource   |
//! | POST   | `{base}`          | 201 with `Location`     |
//! | PUT    | `{base}/{id}`     | 204                     |
//! | DELETE | `{base}/{id}`     | 204                     |
//!
//! Malformed ids and bodies (including unknown v2 beer styles) are answered
//! with 400 before any service is invoked.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use brewery_core::domain::{Resource, ResourceId};
use brewery_core::errors::{ApplicationError, DomainError, InterfaceError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{error, warn};
use uuid::Uuid;

use crate::services::{ResourceIdOf, ResourceService, Services};

pub const BEER_V1_PATH: &str = "/api/v1/beer";
pub const BEER_V2_PATH: &str = "/api/v2/beer";
pub const CUSTOMER_PATH: &str = "/api/v1/customer";

pub fn router(services: &Services) -> Router {
    Router::new()
        .merge(resource_router(services.beer.clone(), BEER_V1_PATH))
        .merge(resource_router(services.beer_v2.clone(), BEER_V2_PATH))
        .merge(resource_router(services.customer.clone(), CUSTOMER_PATH))
}

pub fn resource_router<S>(service: Arc<S>, base_path: &'static str) -> Router
where
    S: ResourceService,
    S::Resource: Serialize + DeserializeOwned,
{
    Router::new()
        .route(base_path, post(create::<S>))
        .route(
            &format!("{base_path}/{{id}}"),
            get(fetch::<S>).put(replace::<S>).delete(remove::<S>),
        )
        .with_state(ResourceState { service, base_path })
}

struct ResourceState<S> {
    service: Arc<S>,
    base_path: &'static str,
}

impl<S> Clone for ResourceState<S> {
    fn clone(&self) -> Self {
        Self { service: Arc::clone(&self.service), base_path: self.base_path }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub correlation_id: String,
}

#[derive(Debug)]
pub struct ApiError(InterfaceError);

impl From<ApplicationError> for ApiError {
    fn from(value: ApplicationError) -> Self {
        Self(value.into_interface(Uuid::new_v4().to_string()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApplicationError::from(DomainError::InvalidInput(rejection.body_text())).into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApplicationError::from(DomainError::InvalidInput(rejection.body_text())).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            InterfaceError::NotFound { .. } => StatusCode::NOT_FOUND,
            InterfaceError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(
                event_name = "brewery.api.request_failed",
                correlation_id = self.0.correlation_id(),
                status = status.as_u16(),
                error = %self.0,
                "request failed"
            );
        } else {
            warn!(
                event_name = "brewery.api.request_rejected",
                correlation_id = self.0.correlation_id(),
                status = status.as_u16(),
                error = %self.0,
                "request rejected"
            );
        }

        let body = ErrorBody {
            error: self.0.user_message().to_string(),
            correlation_id: self.0.correlation_id().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

fn resource_id<S: ResourceService>(
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<ResourceIdOf<S>, ApiError> {
    let Path(id) = path?;
    Ok(<ResourceIdOf<S> as ResourceId>::from_uuid(id))
}

async fn fetch<S>(
    State(state): State<ResourceState<S>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<S::Resource>, ApiError>
where
    S: ResourceService,
    S::Resource: Serialize,
{
    let id = resource_id::<S>(path)?;
    Ok(Json(state.service.get_by_id(id).await?))
}

async fn create<S>(
    State(state): State<ResourceState<S>>,
    body: Result<Json<S::Resource>, JsonRejection>,
) -> Result<Response, ApiError>
where
    S: ResourceService,
    S::Resource: Serialize + DeserializeOwned,
{
    let Json(resource) = body?;
    let saved = state.service.save_new(resource).await?;
    let id = saved.id().ok_or_else(|| {
        let kind = <S::Resource as Resource>::KIND;
        ApplicationError::InvariantViolation(format!("{kind} was saved without an id"))
    })?;
    let location = format!("{}/{}", state.base_path, id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(saved)).into_response())
}

async fn replace<S>(
    State(state): State<ResourceState<S>>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<S::Resource>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
    S: ResourceService,
    S::Resource: DeserializeOwned,
{
    let id = resource_id::<S>(path)?;
    let Json(resource) = body?;
    state.service.update(id, resource).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn remove<S>(
    State(state): State<ResourceState<S>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    S: ResourceService,
{
    let id = resource_id::<S>(path)?;
    state.service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
