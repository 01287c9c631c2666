//! # User Resource HTTP Handlers
//!
//! `/api/users` 컬렉션에 대한 REST 엔드포인트입니다.
//! 각 핸들러는 별도의 비즈니스 계층 없이 [`UserRepository`]에 바로 위임합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/users` | 새 사용자 생성 | 201 Created / 400 (id 지정 시) |
//! | `PUT` | `/api/users` | 사용자 전체 교체 | 200 OK (id 없으면 생성으로 처리) |
//! | `GET` | `/api/users` | 전체 목록 | 200 OK |
//! | `GET` | `/api/users/{id}` | 단건 조회 | 200 OK / 404 Not Found |
//! | `DELETE` | `/api/users/{id}` | 삭제 | 200 OK |
//!
//! 변경 요청의 응답에는 `X-{app}-alert` / `X-{app}-params` 헤더가 붙습니다
//! ([`header_util`] 참고).
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/users \
//!   -H "Content-Type: application/json" \
//!   -d '{"firstName":"AAAAA","lastName":"AAAAA"}'
//! ```

use actix_web::http::header;
use actix_web::{delete, get, post, put, web, HttpResponse};
use log::{debug, warn};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::UserDto;
use crate::repositories::users::UserRepository;
use crate::utils::header_util;

const ENTITY_NAME: &str = "users";

/// 사용자 생성 핸들러
///
/// `POST /api/users`
///
/// 요청 본문에 `id`가 있으면 저장하지 않고 400과 failure alert 헤더를 반환합니다.
/// 성공 시 201, `Location: /api/users/{id}` 헤더, 식별자가 채워진 레코드를 반환합니다.
#[post("")]
pub async fn create_user(
    repo: web::Data<dyn UserRepository>,
    payload: web::Json<UserDto>,
) -> Result<HttpResponse, AppError> {
    let users = payload.into_inner();
    debug!("REST request to save Users : {:?}", users);

    create(repo.get_ref(), users).await
}

/// 사용자 수정 핸들러
///
/// `PUT /api/users`
///
/// 저장된 레코드를 요청 본문으로 통째로 교체합니다 (부분 수정 아님, 버전 검사 없음).
/// 본문에 `id`가 없으면 생성 요청과 동일하게 처리되어 201이 반환됩니다.
#[put("")]
pub async fn update_user(
    repo: web::Data<dyn UserRepository>,
    payload: web::Json<UserDto>,
) -> Result<HttpResponse, AppError> {
    let users = payload.into_inner();
    debug!("REST request to update Users : {:?}", users);

    let Some(id) = users.id else {
        // TODO: id 없는 PUT을 생성으로 처리할지 400으로 거절할지 API 사용처와 합의 후 결정
        warn!("id 없는 수정 요청을 생성으로 처리합니다");
        return create(repo.get_ref(), users).await;
    };

    let result = repo.save(users.into()).await?;

    let mut builder = HttpResponse::Ok();
    header_util::create_entity_update_alert(ENTITY_NAME, &id.to_string()).apply_to(&mut builder);

    Ok(builder.json(UserDto::from(result)))
}

/// 전체 사용자 목록 조회
///
/// `GET /api/users` — 필터링/페이징 없이 저장소 순서(식별자 오름차순)로 반환합니다.
#[get("")]
pub async fn get_all_users(repo: web::Data<dyn UserRepository>) -> Result<HttpResponse, AppError> {
    debug!("REST request to get all Users");

    let users: Vec<UserDto> = repo
        .find_all()
        .await?
        .into_iter()
        .map(UserDto::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 단건 조회
///
/// `GET /api/users/{id}` — 없으면 빈 본문의 404를 반환합니다.
#[get("/{id}")]
pub async fn get_user(
    repo: web::Data<dyn UserRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    debug!("REST request to get Users : {}", id);

    let user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Users {} not found", id)))?;

    Ok(HttpResponse::Ok().json(UserDto::from(user)))
}

/// 사용자 삭제
///
/// `DELETE /api/users/{id}` — 존재 여부와 무관하게 200을 반환합니다.
#[delete("/{id}")]
pub async fn delete_user(
    repo: web::Data<dyn UserRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    debug!("REST request to delete Users : {}", id);

    if !repo.delete_by_id(id).await? {
        debug!("삭제할 사용자 {} 없음", id);
    }

    let mut builder = HttpResponse::Ok();
    header_util::create_entity_deletion_alert(ENTITY_NAME, &id.to_string()).apply_to(&mut builder);

    Ok(builder.finish())
}

async fn create(repo: &dyn UserRepository, users: UserDto) -> AppResult<HttpResponse> {
    if users.id.is_some() {
        return Err(AppError::entity_alert(
            ENTITY_NAME,
            "idexists",
            "A new users cannot already have an ID",
        ));
    }

    let result = repo.save(users.into()).await?;
    let id = result
        .id
        .ok_or_else(|| AppError::InternalError("저장된 사용자에 식별자가 없습니다".to_string()))?;

    let mut builder = HttpResponse::Created();
    builder.insert_header((header::LOCATION, format!("/api/users/{}", id)));
    header_util::create_entity_creation_alert(ENTITY_NAME, &id.to_string()).apply_to(&mut builder);

    Ok(builder.json(UserDto::from(result)))
}
