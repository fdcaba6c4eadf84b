//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`mime_types`] - 텍스트로 다룰 수 있는 MIME 타입 판별

pub mod mime_types;

pub use mime_types::is_text_like;
