//! PostgreSQL implementation of BriefRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::db_error;
use crate::domain::brief::ProjectBrief;
use crate::domain::foundation::{BriefId, DeviceToken, DomainError, SessionId, Timestamp};
use crate::ports::BriefRepository;

/// PostgreSQL implementation of BriefRepository.
#[derive(Clone)]
pub struct PostgresBriefRepository {
    pool: PgPool,
}

impl PostgresBriefRepository {
    /// Creates a new PostgresBriefRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BriefRepository for PostgresBriefRepository {
    async fn save(&self, brief: &ProjectBrief) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO project_briefs (
                id, business_goal, audience, use_cases, data_sources, integrations,
                constraints, budget_range, timeline, device_token, session_id,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (id) DO UPDATE SET
                business_goal = EXCLUDED.business_goal,
                audience = EXCLUDED.audience,
                use_cases = EXCLUDED.use_cases,
                data_sources = EXCLUDED.data_sources,
                integrations = EXCLUDED.integrations,
                constraints = EXCLUDED.constraints,
                budget_range = EXCLUDED.budget_range,
                timeline = EXCLUDED.timeline,
                device_token = EXCLUDED.device_token,
                session_id = EXCLUDED.session_id,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(brief.id.as_uuid())
        .bind(&brief.business_goal)
        .bind(&brief.audience)
        .bind(serde_json::to_value(&brief.use_cases)?)
        .bind(serde_json::to_value(&brief.data_sources)?)
        .bind(serde_json::to_value(&brief.integrations)?)
        .bind(serde_json::to_value(&brief.constraints)?)
        .bind(&brief.budget_range)
        .bind(&brief.timeline)
        .bind(brief.device_token.as_ref().map(DeviceToken::as_str))
        .bind(brief.session_id.as_ref().map(SessionId::as_str))
        .bind(brief.created_at.as_datetime())
        .bind(brief.updated_at.as_ref().map(Timestamp::as_datetime))
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("save brief", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &BriefId) -> Result<Option<ProjectBrief>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, business_goal, audience, use_cases, data_sources, integrations,
                   constraints, budget_range, timeline, device_token, session_id,
                   created_at, updated_at
            FROM project_briefs
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch brief", e))?;

        row.map(row_to_brief).transpose()
    }
}

fn json_list(row: &sqlx::postgres::PgRow, column: &str) -> Result<Vec<String>, DomainError> {
    let value: serde_json::Value = row
        .try_get(column)
        .map_err(|e| db_error(&format!("get {}", column), e))?;
    Ok(serde_json::from_value(value)?)
}

fn row_to_brief(row: sqlx::postgres::PgRow) -> Result<ProjectBrief, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| db_error("get id", e))?;
    let device_token: Option<String> = row
        .try_get("device_token")
        .map_err(|e| db_error("get device_token", e))?;
    let session_id: Option<String> = row
        .try_get("session_id")
        .map_err(|e| db_error("get session_id", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| db_error("get created_at", e))?;
    let updated_at: Option<chrono::DateTime<chrono::Utc>> = row
        .try_get("updated_at")
        .map_err(|e| db_error("get updated_at", e))?;

    Ok(ProjectBrief {
        id: BriefId::from_uuid(id),
        business_goal: row
            .try_get("business_goal")
            .map_err(|e| db_error("get business_goal", e))?,
        audience: row
            .try_get("audience")
            .map_err(|e| db_error("get audience", e))?,
        use_cases: json_list(&row, "use_cases")?,
        data_sources: json_list(&row, "data_sources")?,
        integrations: json_list(&row, "integrations")?,
        constraints: json_list(&row, "constraints")?,
        budget_range: row
            .try_get("budget_range")
            .map_err(|e| db_error("get budget_range", e))?,
        timeline: row
            .try_get("timeline")
            .map_err(|e| db_error("get timeline", e))?,
        device_token: device_token.map(DeviceToken::new).transpose()?,
        session_id: session_id.map(SessionId::new).transpose()?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: updated_at.map(Timestamp::from_datetime),
    })
}
