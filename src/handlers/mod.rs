//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 같은 역할을 수행합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 상태 코드/응답 봉투 변환      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - ResourceService 계약                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB + Redis                  ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 서비스를 싱글톤으로 직접 꺼내지 않고 `web::Data<dyn ResourceService>`로
//! 주입받습니다. 애플리케이션은 `AuthResourceService`를, 테스트는 메모리 기반
//! 구현을 등록합니다.
//!
//! ```rust,ignore
//! #[delete("/{resource_id}")]
//! pub async fn delete_resource(
//!     service: web::Data<dyn ResourceService>,
//!     resource_id: web::Path<i64>,
//! ) -> Result<HttpResponse, AppError> {
//!     // ...
//! }
//! ```

pub mod resources;
