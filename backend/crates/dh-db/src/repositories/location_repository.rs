use crate::{DbError, Result as DbErrorResult};

use dh_core::{Coord, Location};

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const LOCATION_COLUMNS: &str = "id, name, paths, stroke_color, stroke_opacity, stroke_weight, \
                                fill_color, fill_opacity";

#[derive(FromRow)]
struct LocationRow {
    id: String,
    name: String,
    paths: String,
    stroke_color: Option<String>,
    stroke_opacity: Option<f64>,
    stroke_weight: Option<f64>,
    fill_color: Option<String>,
    fill_opacity: Option<f64>,
}

impl LocationRow {
    #[track_caller]
    fn into_location(self) -> DbErrorResult<Location> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| DbError::corrupt_row(&self.id, format!("invalid id: {e}")))?;
        let paths: Vec<Coord> = serde_json::from_str(&self.paths)
            .map_err(|e| DbError::corrupt_row(&self.id, format!("invalid paths: {e}")))?;

        Ok(Location {
            id,
            name: self.name,
            paths,
            stroke_color: self.stroke_color,
            stroke_opacity: self.stroke_opacity,
            stroke_weight: self.stroke_weight,
            fill_color: self.fill_color,
            fill_opacity: self.fill_opacity,
        })
    }
}

pub struct LocationRepository {
    pool: SqlitePool,
}

impl LocationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, location: &Location) -> DbErrorResult<()> {
        let paths = serde_json::to_string(&location.paths)?;

        sqlx::query(
            r#"
              INSERT INTO dh_locations (
                  id, name, paths,
                  stroke_color, stroke_opacity, stroke_weight, fill_color, fill_opacity,
                  created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(location.id.to_string())
        .bind(&location.name)
        .bind(paths)
        .bind(&location.stroke_color)
        .bind(location.stroke_opacity)
        .bind(location.stroke_weight)
        .bind(&location.fill_color)
        .bind(location.fill_opacity)
        .bind(chrono::Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns false when no location has this id
    pub async fn update(&self, location: &Location) -> DbErrorResult<bool> {
        let paths = serde_json::to_string(&location.paths)?;

        let result = sqlx::query(
            r#"
              UPDATE dh_locations
              SET name = ?, paths = ?,
                  stroke_color = ?, stroke_opacity = ?, stroke_weight = ?,
                  fill_color = ?, fill_opacity = ?
              WHERE id = ?
              "#,
        )
        .bind(&location.name)
        .bind(paths)
        .bind(&location.stroke_color)
        .bind(location.stroke_opacity)
        .bind(location.stroke_weight)
        .bind(&location.fill_color)
        .bind(location.fill_opacity)
        .bind(location.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Location>> {
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM dh_locations WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(LocationRow::into_location).transpose()
    }

    /// First location (oldest first) whose name contains `fragment`.
    /// Case-sensitive.
    pub async fn find_by_name(&self, fragment: &str) -> DbErrorResult<Option<Location>> {
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM dh_locations \
             WHERE instr(name, ?) > 0 \
             ORDER BY created_at ASC, rowid ASC LIMIT 1"
        ))
        .bind(fragment)
        .fetch_optional(&self.pool)
        .await?;

        row.map(LocationRow::into_location).transpose()
    }

    pub async fn list(&self) -> DbErrorResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationRow>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM dh_locations ORDER BY created_at ASC, rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(LocationRow::into_location).collect()
    }

    /// Returns false when no location has this id
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM dh_locations WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
