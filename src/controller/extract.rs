use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::error::Error;

/// JSON body extractor whose rejection is the standard error envelope.
///
/// Axum's stock `Json` rejection answers 422 with a plain-text body; the API
/// contract wants 400 with `{success: false, ...}` for any unparseable or
/// mismatched body, so controllers take `ApiJson<T>` instead.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(Error::MalformedBody(rejection.body_text())),
        }
    }
}
