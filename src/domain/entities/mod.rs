//! 도메인 엔티티 모듈
//!
//! MongoDB에 영구 저장되는 도메인 엔티티들을 정의합니다.

pub mod resources;
