//! Handlers and the decorator that binds request parameters in front of them
//!
//! [`Handler`] and [`make_handler`] are the async request handler contract of `micro-http`.
//!
//! [`BindHandler`] binds a `T` from every request it receives. On success the value is attached
//! to the request as [`Bound<T>`] and the request goes on to the wrapped handler; otherwise the
//! request is answered directly with the rejection status (`400 Bad Request` by default).
//!
//! # Example
//! ```
//! use bytes::Bytes;
//! use http::{Request, Response, StatusCode};
//! use http_body_util::Full;
//! use micro_bind::{Bind, BindHandler, Bound, Handler, make_handler};
//! use std::convert::Infallible;
//!
//! #[derive(Bind, Default, Clone)]
//! struct Params {
//!     #[bind("in=header,label=x-user-email")]
//!     email: String,
//! }
//!
//! # async fn run() {
//! let handler = make_handler(|mut req: Request<()>| async move {
//!     let params = Bound::<Params>::take(&mut req).unwrap_or_default();
//!     Ok::<_, Infallible>(Response::new(Full::<Bytes>::from(params.email)))
//! });
//! let handler = BindHandler::<Params, _>::new(handler).unwrap();
//!
//! let response = handler.call(Request::new(())).await.unwrap();
//! assert_eq!(response.status(), StatusCode::BAD_REQUEST);
//! # }
//! ```

use crate::binder::Binder;
use crate::bound::Bound;
use crate::error::{BindError, BuildError};
use crate::shape::Bindable;
use async_trait::async_trait;
use http::{Request, Response, StatusCode};
use http_body::Body;
use std::error::Error;
use std::future::Future;
use std::marker::PhantomData;
use tracing::{error, trace};

#[async_trait]
pub trait Handler<ReqBody> {
    type RespBody: Body;
    type Error: Into<Box<dyn Error + Send + Sync>>;

    async fn call(&self, req: Request<ReqBody>) -> Result<Response<Self::RespBody>, Self::Error>;
}

#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

#[async_trait]
impl<ReqBody, RespBody, Err, F, Fut> Handler<ReqBody> for HandlerFn<F>
where
    RespBody: Body,
    ReqBody: Send + 'static,
    F: Fn(Request<ReqBody>) -> Fut + Send + Sync,
    Err: Into<Box<dyn Error + Send + Sync>>,
    Fut: Future<Output = Result<Response<RespBody>, Err>> + Send,
{
    type RespBody = RespBody;
    type Error = Err;

    async fn call(&self, req: Request<ReqBody>) -> Result<Response<Self::RespBody>, Self::Error> {
        (self.f)(req).await
    }
}

pub fn make_handler<F, ReqBody, RespBody, Err, Ret>(f: F) -> HandlerFn<F>
where
    RespBody: Body,
    Err: Into<Box<dyn Error + Send + Sync>>,
    Ret: Future<Output = Result<Response<RespBody>, Err>>,
    F: Fn(Request<ReqBody>) -> Ret,
{
    HandlerFn { f }
}

/// A handler which binds `T` from the request before calling the wrapped handler.
#[derive(Debug)]
pub struct BindHandler<T, H> {
    binder: Binder<T>,
    handler: H,
    rejection_status: StatusCode,
}

impl<T: Bindable, H> BindHandler<T, H> {
    /// Wrap `handler`, rejecting unbindable requests with `400 Bad Request`.
    pub fn new(handler: H) -> Result<Self, BindError> {
        Ok(Self { binder: Binder::new()?, handler, rejection_status: StatusCode::BAD_REQUEST })
    }

    pub fn builder() -> BindHandlerBuilder<T, H> {
        BindHandlerBuilder::new()
    }

    #[inline]
    pub fn rejection_status(&self) -> StatusCode {
        self.rejection_status
    }

    #[inline]
    pub fn inner(&self) -> &H {
        &self.handler
    }
}

#[async_trait]
impl<T, H, ReqBody> Handler<ReqBody> for BindHandler<T, H>
where
    T: Bindable + Clone + Send + Sync + 'static,
    H: Handler<ReqBody> + Send + Sync,
    H::RespBody: Default,
    ReqBody: Send + 'static,
{
    type RespBody = H::RespBody;
    type Error = H::Error;

    async fn call(&self, mut req: Request<ReqBody>) -> Result<Response<Self::RespBody>, Self::Error> {
        let bound = match self.binder.bind_request(&req) {
            Ok(bound) => bound,
            Err(e) => {
                error!(cause = %e, shape = self.binder.type_name(), "failed to bind request parameters");
                let mut response = Response::new(H::RespBody::default());
                *response.status_mut() = self.rejection_status;
                return Ok(response);
            }
        };

        trace!(shape = self.binder.type_name(), "bound request parameters");
        Bound::insert(&mut req, bound);
        self.handler.call(req).await
    }
}

#[derive(Debug)]
pub struct BindHandlerBuilder<T, H> {
    handler: Option<H>,
    rejection_status: StatusCode,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: Bindable, H> BindHandlerBuilder<T, H> {
    fn new() -> Self {
        Self { handler: None, rejection_status: StatusCode::BAD_REQUEST, _phantom: PhantomData }
    }

    pub fn handler(mut self, handler: H) -> Self {
        self.handler = Some(handler);
        self
    }

    /// The status answered when binding fails.
    pub fn rejection_status(mut self, status: StatusCode) -> Self {
        self.rejection_status = status;
        self
    }

    pub fn build(self) -> Result<BindHandler<T, H>, BuildError> {
        let handler = self.handler.ok_or(BuildError::MissingHandler)?;
        let binder = Binder::new()?;
        Ok(BindHandler { binder, handler, rejection_status: self.rejection_status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Field, Shape};
    use bytes::Bytes;
    use http_body_util::{BodyExt, Full};
    use std::convert::Infallible;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct User {
        email: String,
        page: String,
    }

    impl Bindable for User {
        fn shape() -> Shape<Self> {
            Shape::record(
                "User",
                vec![
                    Field::new("email", Some("in=header,label=x-user-email"), |u: &mut User, v| u.email = v),
                    Field::new("page", None, |u: &mut User, v| u.page = v),
                ],
            )
        }
    }

    type Echo = HandlerFn<fn(Request<()>) -> std::future::Ready<Result<Response<Full<Bytes>>, Infallible>>>;

    fn echo_user(mut req: Request<()>) -> std::future::Ready<Result<Response<Full<Bytes>>, Infallible>> {
        let first = Bound::<User>::take(&mut req);
        let second = Bound::<User>::take(&mut req);
        let body = match (first, second) {
            (Some(user), None) => format!("{}:{}", user.email, user.page),
            (Some(_), Some(_)) => "taken twice".to_owned(),
            (None, _) => "not bound".to_owned(),
        };
        std::future::ready(Ok(Response::new(Full::from(body))))
    }

    fn echo() -> Echo {
        make_handler(echo_user as fn(_) -> _)
    }

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_bound_value_reaches_handler() {
        let handler = BindHandler::<User, _>::new(echo()).unwrap();
        let req = Request::builder().uri("/users?page=2").header("X-User-Email", "a@b.com").body(()).unwrap();

        let response = handler.call(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "a@b.com:2");
    }

    #[tokio::test]
    async fn test_missing_field_rejected_with_bad_request() {
        let handler = BindHandler::<User, _>::new(echo()).unwrap();
        let req = Request::builder().uri("/users?page=2").body(()).unwrap();

        let response = handler.call(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, "");
    }

    #[tokio::test]
    async fn test_custom_rejection_status() {
        let handler = BindHandler::<User, _>::builder()
            .handler(echo())
            .rejection_status(StatusCode::UNPROCESSABLE_ENTITY)
            .build()
            .unwrap();
        assert_eq!(handler.rejection_status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = handler.call(Request::new(())).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_builder_requires_handler() {
        let result = BindHandler::<User, Echo>::builder().build();
        assert!(matches!(result, Err(BuildError::MissingHandler)));
    }

    #[test]
    fn test_non_record_target_rejected_at_build() {
        let result = BindHandler::<String, _>::builder().handler(echo()).build();
        assert!(matches!(result, Err(BuildError::Bind { source: BindError::Shape { .. } })));
        assert!(matches!(BindHandler::<Vec<String>, _>::new(echo()), Err(BindError::Shape { .. })));
    }

    #[tokio::test]
    async fn test_closure_handler() {
        let handler = make_handler(|req: Request<()>| async move {
            let user = Bound::<User>::get(&req).cloned().unwrap_or_default();
            Ok::<_, Infallible>(Response::new(Full::<Bytes>::from(user.email)))
        });
        let handler = BindHandler::<User, _>::new(handler).unwrap();
        let req = Request::builder().uri("/?page=1").header("x-user-email", "c@d.com").body(()).unwrap();

        let response = handler.call(req).await.unwrap();
        assert_eq!(body_string(response).await, "c@d.com");
    }
}
