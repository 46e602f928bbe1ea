//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common/             # 공통 DTO
//! │   ├── message.rs      # 응답 봉투 (errorType / errorMsg / body)
//! │   └── page.rs         # PageRequest, Page<T>
//! └── resources/          # 권한 리소스 DTO
//!     ├── request.rs      # ResourceRequest, PageQuery
//!     └── response.rs     # ResourceResponse
//! ```
//!
//! 모든 JSON 필드는 camelCase로 직렬화됩니다.

pub mod common;
pub mod resources;

pub use common::{Message, Page, PageRequest};
pub use resources::{PageQuery, ResourceRequest, ResourceResponse};
