//! Switching the active academic year.
//!
//! The schema allows at most one active year (partial unique index), so the
//! old year is cleared before the new one is set, inside one transaction.

use anyhow::bail;
use sqlx::PgPool;

use schoople_models::ids::AcademicYearId;

/// Makes `id` the only active academic year. Returns the id of the year that was active before, if any.
pub async fn activate_year(
    pool: &PgPool,
    id: AcademicYearId,
) -> anyhow::Result<Option<AcademicYearId>> {
    let mut tx = pool.begin().await?;

    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM academic_years WHERE id = $1)")
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    if !exists {
        bail!("academic year {id} does not exist");
    }

    let previous: Option<AcademicYearId> = sqlx::query_scalar(
        "UPDATE academic_years SET active = false WHERE active = true AND id <> $1 RETURNING id",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    sqlx::query("UPDATE academic_years SET active = true WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(previous)
}
