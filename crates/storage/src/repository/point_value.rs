use sqlx::PgPool;

use crate::error::Result;
use crate::models::PointValue;

pub struct PointValueRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PointValueRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, group_size: i32, placement: i32) -> Result<Option<PointValue>> {
        let point_value = sqlx::query_as::<_, PointValue>(
            r#"
            SELECT group_size, placement, points
            FROM point_values
            WHERE group_size = $1 AND placement = $2
            "#,
        )
        .bind(group_size)
        .bind(placement)
        .fetch_optional(self.pool)
        .await?;

        Ok(point_value)
    }
}
