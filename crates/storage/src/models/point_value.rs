use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Points awarded for finishing at `placement` in a group of `group_size` skaters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PointValue {
    pub group_size: i32,
    pub placement: i32,
    pub points: i32,
}
