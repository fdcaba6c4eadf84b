//! SessionMiddleware 쿠키 검사 로직
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::AuthenticatedSession;
use crate::errors::AppError;
use crate::services::auth::SessionCookieStore;

/// 실제 쿠키 검사를 수행하는 서비스
pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
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

        Box::pin(async move {
            match SessionCookieStore::read_access_token(req.request()) {
                Some(access_token) => {
                    req.extensions_mut().insert(AuthenticatedSession::new(access_token));
                }
                None => {
                    log::debug!("액세스 토큰 쿠키 없음: {} {}", req.method(), req.path());
                    let response = AppError::AuthenticationError(
                        "액세스 토큰 쿠키가 없습니다".to_string(),
                    )
                    .error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
