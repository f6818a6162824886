//! RequestAuthenticator의 요청 단위 처리
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::Identity;
use crate::errors::AppError;
use crate::middlewares::auth_middleware::{AuthOutcome, RequestAuthenticator};

/// 실제 인증 로직을 수행하는 서비스
pub struct RequestAuthenticatorService<S> {
    pub service: Rc<S>,
    pub authenticator: RequestAuthenticator,
}

impl<S, B> Service<ServiceRequest> for RequestAuthenticatorService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let authenticator = self.authenticator.clone();

        Box::pin(async move {
            let authorization = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .map(str::to_owned);
            let already_authenticated = req.extensions().contains::<Identity>();

            match authenticator
                .authenticate(authorization.as_deref(), already_authenticated)
                .await
            {
                AuthOutcome::Revoked => {
                    let response = AppError::InvalidToken("token has been revoked".to_string()).error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
                AuthOutcome::Authenticated(identity) => {
                    req.extensions_mut().insert(identity);
                }
                AuthOutcome::Anonymous | AuthOutcome::AlreadyAuthenticated => {}
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
