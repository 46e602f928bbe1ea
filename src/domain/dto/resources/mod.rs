//! 권한 리소스 DTO 모듈
//!
//! `/api/v1/resource` 엔드포인트의 요청/응답 데이터 구조를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::resources::{ResourceRequest, ResourceResponse};
//!
//! payload.validate()?;
//! let resource = AuthResource::from(payload.into_inner());
//! let response = ResourceResponse::from(resource);
//! ```

pub mod request;
pub mod response;

pub use request::{PageQuery, ResourceRequest};
pub use response::ResourceResponse;
