//! 에러 처리 모듈
//!
//! 모든 핸들러와 서비스가 공유하는 [`AppError`] 와 결과 타입을 제공합니다.

pub mod errors;

pub use errors::*;
