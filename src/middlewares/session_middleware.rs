//! 쿠키 세션 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 세션 쿠키를 확인하고 요청 단위 세션을 만듭니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::session_inner::SessionMiddlewareService;

/// 액세스 토큰 쿠키를 요구하는 미들웨어
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionMiddleware;

impl SessionMiddleware {
    /// 쿠키가 없는 요청을 401 로 거부하는 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
