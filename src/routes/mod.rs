//! API 라우트 설정 모듈
//!
//! 권한 리소스 관리 API와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `/api/v1/resource` - 권한 리소스 CRUD
//!
//! 리소스 스코프에는 JSON 본문, 경로, 쿼리 파라미터 추출 실패를
//! `AppError::ValidationError`(400)로 변환하는 설정이 함께 붙습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::from(resource_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_resource_routes(cfg);
}

/// 권한 리소스 라우트를 설정합니다
///
/// ```bash
/// curl -X GET http://localhost:8080/api/v1/resource/0/20
/// curl -X DELETE http://localhost:8080/api/v1/resource/12
/// ```
pub fn configure_resource_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/resource")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::ValidationError(format!("잘못된 요청 본문: {}", err)).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                AppError::ValidationError(format!("잘못된 경로 파라미터: {}", err)).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                AppError::ValidationError(format!("잘못된 쿼리 파라미터: {}", err)).into()
            }))
            .service(handlers::resources::add_resource)
            .service(handlers::resources::update_resource)
            .service(handlers::resources::get_all_resource)
            .service(handlers::resources::get_resource)
            .service(handlers::resources::delete_resource)
    );
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "auth_resource_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "ServiceLocator + inventory"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let request = test::TestRequest::get().uri("/health").to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "auth_resource_service");
    }
}
