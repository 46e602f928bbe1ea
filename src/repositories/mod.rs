//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//! MongoDB를 주 저장소로 사용하고 Redis를 통한 캐싱을 지원합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::resources::ResourceRepository;
//!
//! let repo = ResourceRepository::instance()?;
//! let exists = repo.exists_by_uri_and_method("/api/v1/book", "GET").await?;
//! ```

pub mod resources;
