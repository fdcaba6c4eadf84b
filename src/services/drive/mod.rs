//! Drive 파일 게이트웨이 서비스 모듈

pub mod drive_service;

pub use drive_service::*;
