//! # 권한 리소스 핸들러
//!
//! `/api/v1/resource` 아래의 리소스 관리 엔드포인트를 처리합니다.
//! 모든 비즈니스 판단은 [`ResourceService`]에 위임하고, 핸들러는 그 결과를
//! HTTP 상태 코드와 [`Message`] 응답 봉투로 변환합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | POST | `/api/v1/resource` | 201 | 409 (이미 존재), 429 |
//! | PUT | `/api/v1/resource` | 200 | 404 (없음), 429 |
//! | DELETE | `/api/v1/resource/{resourceId}` | 200 | 429 |
//! | GET | `/api/v1/resource/{currentPage}/{pageSize}` | 200 + 페이지 | 429 |
//! | GET | `/api/v1/resource?currentPage=&pageSize=` | 200 + 목록/페이지 | 429 |
//!
//! 서비스가 실패를 알리면 429 Too Many Requests와 함께 재시도를 권하는 메시지를 보냅니다.
//! 요청 본문 검증 실패는 `AppError::ValidationError`를 거쳐 400으로 응답합니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::common::Message;
use crate::domain::dto::resources::{PageQuery, ResourceRequest, ResourceResponse};
use crate::domain::entities::resources::AuthResource;
use crate::services::resources::ResourceService;

/// 재시도 가능한 실패의 에러 분류
const RESOURCE_ERROR_TYPE: &str = "resource";

/// 리소스 추가 핸들러
///
/// 같은 `(uri, method)` 리소스가 이미 있으면 추가를 시도하지 않고 409를 반환합니다.
/// 요청의 `id`는 무시되며 저장 시 새로 발급됩니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/resource \
///   -H "Content-Type: application/json" \
///   -d '{"name":"도서 조회","code":"BOOK_GET","uri":"/api/v1/book","type":"uri","method":"GET"}'
/// ```
///
/// ### 이미 존재 (409 Conflict)
/// ```json
/// { "errorType": "add resource fail", "errorMsg": "resource already exist" }
/// ```
#[post("")]
pub async fn add_resource(
    service: web::Data<dyn ResourceService>,
    payload: web::Json<ResourceRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let mut resource = AuthResource::from(payload.into_inner());
    resource.id = None;

    if service.is_resource_exist(&resource).await {
        log::debug!("이미 존재하는 리소스 추가 요청: {} {}", resource.method, resource.uri);
        return Ok(HttpResponse::Conflict()
            .json(Message::error("add resource fail", "resource already exist")));
    }

    if service.add_resource(&resource).await {
        log::debug!("리소스 추가 성공: {:?}", resource);
        Ok(HttpResponse::Created().finish())
    } else {
        log::error!("리소스 추가 실패: {:?}", resource);
        Ok(HttpResponse::TooManyRequests()
            .json(Message::error(RESOURCE_ERROR_TYPE, "add resource fail, please try again later")))
    }
}

/// 리소스 수정 핸들러
///
/// 요청 본문의 `id`가 가리키는 리소스를 수정합니다. `id`가 없으면 400입니다.
///
/// ### 존재하지 않음 (404 Not Found)
/// ```json
/// { "errorType": "update resource fail", "errorMsg": "resource not exist" }
/// ```
#[put("")]
pub async fn update_resource(
    service: web::Data<dyn ResourceService>,
    payload: web::Json<ResourceRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    payload.require_id()?;

    let resource = AuthResource::from(payload.into_inner());

    if !service.is_resource_exist(&resource).await {
        log::debug!("존재하지 않는 리소스 수정 요청: {:?}", resource);
        return Ok(HttpResponse::NotFound()
            .json(Message::error("update resource fail", "resource not exist")));
    }

    if service.update_resource(&resource).await {
        log::debug!("리소스 수정 성공: {:?}", resource);
        Ok(HttpResponse::Ok().finish())
    } else {
        log::error!("리소스 수정 실패: {:?}", resource);
        Ok(HttpResponse::TooManyRequests()
            .json(Message::error(RESOURCE_ERROR_TYPE, "update resource fail, please try again later")))
    }
}

/// 리소스 삭제 핸들러
///
/// `DELETE /api/v1/resource/{resourceId}`
#[delete("/{resource_id}")]
pub async fn delete_resource(
    service: web::Data<dyn ResourceService>,
    resource_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let resource_id = resource_id.into_inner();

    if service.delete_resource(resource_id).await {
        log::debug!("리소스 삭제 성공: #{}", resource_id);
        Ok(HttpResponse::Ok().finish())
    } else {
        log::error!("리소스 삭제 실패: #{}", resource_id);
        Ok(HttpResponse::TooManyRequests()
            .json(Message::error(RESOURCE_ERROR_TYPE, "delete resource fail, please try again later")))
    }
}

/// 리소스 페이지 조회 핸들러
///
/// `GET /api/v1/resource/{currentPage}/{pageSize}` (페이지는 0부터 시작)
///
/// ```json
/// {
///   "body": {
///     "content": [ { "id": 1, "name": "도서 조회", "uri": "/api/v1/book", "method": "GET" } ],
///     "currentPage": 0, "pageSize": 20, "totalElements": 1, "totalPages": 1
///   }
/// }
/// ```
#[get("/{current_page}/{page_size}")]
pub async fn get_resource(
    service: web::Data<dyn ResourceService>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, AppError> {
    let (current_page, page_size) = path.into_inner();

    Ok(list_resources(service.get_ref(), Some((current_page, page_size))).await)
}

/// 리소스 목록 조회 핸들러
///
/// `GET /api/v1/resource?currentPage=0&pageSize=20`
///
/// 두 쿼리 파라미터가 모두 있을 때만 페이지 조회를 하고,
/// 하나라도 없으면 전체 목록을 반환합니다.
#[get("")]
pub async fn get_all_resource(
    service: web::Data<dyn ResourceService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    Ok(list_resources(service.get_ref(), query.paging()).await)
}

async fn list_resources(service: &dyn ResourceService, paging: Option<(i32, i32)>) -> HttpResponse {
    match paging {
        None => match service.get_all_resource().await {
            Some(resources) => {
                log::debug!("리소스 목록 조회 성공: {}개", resources.len());
                let body: Vec<ResourceResponse> = resources.into_iter().map(ResourceResponse::from).collect();
                HttpResponse::Ok().json(Message::with_body(body))
            }
            None => {
                log::error!("리소스 목록 조회 실패");
                HttpResponse::TooManyRequests()
                    .json(Message::error(RESOURCE_ERROR_TYPE, "get all resource fail, please try again later"))
            }
        },
        Some((current_page, page_size)) => match service.get_page_resource(current_page, page_size).await {
            Some(page) => {
                log::debug!(
                    "리소스 페이지 조회 성공: page={} size={} total={}",
                    current_page, page_size, page.total_elements
                );
                HttpResponse::Ok().json(Message::with_body(page.map(ResourceResponse::from)))
            }
            None => {
                log::error!("리소스 페이지 조회 실패: page={} size={}", current_page, page_size);
                HttpResponse::TooManyRequests()
                    .json(Message::error(RESOURCE_ERROR_TYPE, "get resource page fail, please try again later"))
            }
        },
    }
}
