//! 권한 리소스 관리 서비스 백엔드
//!
//! API 엔드포인트 단위의 권한 리소스(URI + HTTP 메서드)를 등록, 수정, 삭제, 조회하는
//! 관리용 REST 서비스입니다.
//!
//! # Features
//!
//! - **리소스 관리**: `/api/v1/resource` CRUD 및 페이지 조회
//! - **응답 봉투**: 모든 응답을 `Message { errorType, errorMsg, body }` 형태로 통일
//! - **싱글톤 DI**: `ServiceLocator` + `inventory` 기반 리포지토리/서비스 등록
//! - **MongoDB**: 리소스 영구 저장, `(uri, method)` 유니크 인덱스
//! - **Redis**: 리소스 목록 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use auth_resource_service::services::resources::{AuthResourceService, ResourceService};
//!
//! let service = AuthResourceService::instance()?;
//! if !service.is_resource_exist(&resource).await {
//!     service.add_resource(&resource).await;
//! }
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
