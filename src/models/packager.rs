use super::{check_name, Validate};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 포장업자(Packager, paketçi): `paketciler` 테이블 한 행
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Packager {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackagerRequest {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Validate for CreatePackagerRequest {
    fn validate(&self) -> Result<(), AppError> {
        check_name("name", &self.name)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackagerRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Validate for UpdatePackagerRequest {
    fn validate(&self) -> Result<(), AppError> {
        match &self.name {
            Some(name) => check_name("name", name),
            None => Ok(()),
        }
    }
}
