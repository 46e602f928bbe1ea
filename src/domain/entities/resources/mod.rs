//! Resources Entity Module
//!
//! 권한 리소스 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::resources::AuthResource;
//!
//! let mut resource = AuthResource::from(request);
//! resource.mark_created(chrono::Utc::now());
//! ```

pub mod auth_resource;

pub use auth_resource::{AuthResource, DEFAULT_RESOURCE_STATUS};
