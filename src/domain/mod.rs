//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 영속 엔티티와 API 경계의 데이터 전송 객체를 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB에 저장되는 AuthResource
//! └── DTOs          - 요청/응답 객체, Message 봉투, Page 래퍼
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 영속 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `@Validated` | `validator` crate | 데이터 유효성 검사 |
//! | `org.springframework.data.domain.Page` | `dto::common::Page` | 페이지 결과 |

pub mod entities;
pub mod dto;

pub use entities::resources::{AuthResource, DEFAULT_RESOURCE_STATUS};
pub use dto::common::{Message, Page, PageRequest};
pub use dto::resources::{PageQuery, ResourceRequest, ResourceResponse};
