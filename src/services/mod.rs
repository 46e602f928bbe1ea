//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 싱글톤으로 관리되는 서비스들을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::resources::AuthResourceService;
//!
//! let resource_service = AuthResourceService::instance()?;
//! let resources = resource_service.get_all_resource().await;
//! ```

pub mod resources;
