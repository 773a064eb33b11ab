use sqlx::PgPool;
use uuid::Uuid;

use crate::purchases::repo_types::{Course, Purchase};

impl Purchase {
    /// All purchases made by one user.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Purchase>> {
        let rows = sqlx::query_as::<_, Purchase>(
            r#"
            SELECT id, user_id, course_id, created_at
            FROM purchases
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}

impl Course {
    /// Course records for the given ids. Unknown ids are simply absent.
    pub async fn find_by_ids(db: &PgPool, ids: &[Uuid]) -> anyhow::Result<Vec<Course>> {
        let rows = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, price, image_url, created_at
            FROM courses
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
