//! # 커스텀 추출자(Extractor)
//!
//! Axum 기본 추출자(`Json`, `Path`)는 실패하면 일반 텍스트 응답을 돌려줍니다.
//! 여기의 추출자들은 실패를 `AppError`로 바꿔서 모든 에러가 같은 JSON 형식을 갖게 합니다.
//!
//! - `ValidJson<T>`: JSON 본문을 파싱한 뒤 `Validate::validate()`까지 실행
//! - `IdPath`: 경로의 `{id}`를 정수로 파싱

use crate::{error::AppError, models::Validate};
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};

/// 검증된 JSON 요청 본문
///
/// 핸들러가 `ValidJson(req): ValidJson<CreateRollerRequest>`를 받으면,
/// 핸들러 본문이 실행될 때 `req`는 이미 파싱과 검증을 통과한 상태입니다.
/// DB 계층에는 검증된 값만 전달됩니다.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Json 추출 실패(JsonRejection)는 `?`에서 From 구현으로 AppError가 됩니다.
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// 경로 파라미터 `{id}`: 정수가 아니면 400 `bad_request`
///
/// `#[derive(FromRequestParts)]`와 `via(Path)`는 axum의 "macros" feature가 제공합니다.
/// `Path<IdPath>`로 추출한 뒤 실패 시 `PathRejection`을 `AppError`로 변환합니다.
#[derive(Debug, Clone, Copy, Deserialize, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct IdPath(pub i64);
