//! PostgreSQL implementation of LeadRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::db_error;
use crate::domain::foundation::{BriefId, DomainError, ErrorCode, LeadId, Timestamp};
use crate::domain::lead::{Lead, LeadPriority, LeadStatus};
use crate::ports::LeadRepository;

/// PostgreSQL implementation of LeadRepository.
#[derive(Clone)]
pub struct PostgresLeadRepository {
    pool: PgPool,
}

impl PostgresLeadRepository {
    /// Creates a new PostgresLeadRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadRepository for PostgresLeadRepository {
    async fn save(&self, lead: &Lead) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO leads (
                id, brief_id, name, email, phone, company, contact_info, notes,
                status, priority, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE SET
                brief_id = EXCLUDED.brief_id,
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                company = EXCLUDED.company,
                contact_info = EXCLUDED.contact_info,
                notes = EXCLUDED.notes,
                status = EXCLUDED.status,
                priority = EXCLUDED.priority,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(lead.id.as_uuid())
        .bind(lead.brief_id.as_ref().map(BriefId::as_uuid))
        .bind(&lead.name)
        .bind(&lead.email)
        .bind(&lead.phone)
        .bind(&lead.company)
        .bind(&lead.contact_info)
        .bind(&lead.notes)
        .bind(lead.status.as_str())
        .bind(lead.priority.as_str())
        .bind(lead.created_at.as_datetime())
        .bind(lead.updated_at.as_ref().map(Timestamp::as_datetime))
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => DomainError::new(
                ErrorCode::BriefNotFound,
                format!(
                    "Brief not found: {}",
                    lead.brief_id.map(|id| id.to_string()).unwrap_or_default()
                ),
            ),
            other => db_error("save lead", other),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &LeadId) -> Result<Option<Lead>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, brief_id, name, email, phone, company, contact_info, notes,
                   status, priority, created_at, updated_at
            FROM leads
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch lead", e))?;

        row.map(row_to_lead).transpose()
    }
}

fn row_to_lead(row: sqlx::postgres::PgRow) -> Result<Lead, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| db_error("get id", e))?;
    let brief_id: Option<uuid::Uuid> = row
        .try_get("brief_id")
        .map_err(|e| db_error("get brief_id", e))?;
    let status: String = row.try_get("status").map_err(|e| db_error("get status", e))?;
    let priority: String = row
        .try_get("priority")
        .map_err(|e| db_error("get priority", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| db_error("get created_at", e))?;
    let updated_at: Option<chrono::DateTime<chrono::Utc>> = row
        .try_get("updated_at")
        .map_err(|e| db_error("get updated_at", e))?;

    Ok(Lead {
        id: LeadId::from_uuid(id),
        brief_id: brief_id.map(BriefId::from_uuid),
        name: row.try_get("name").map_err(|e| db_error("get name", e))?,
        email: row.try_get("email").map_err(|e| db_error("get email", e))?,
        phone: row.try_get("phone").map_err(|e| db_error("get phone", e))?,
        company: row
            .try_get("company")
            .map_err(|e| db_error("get company", e))?,
        contact_info: row
            .try_get("contact_info")
            .map_err(|e| db_error("get contact_info", e))?,
        notes: row.try_get("notes").map_err(|e| db_error("get notes", e))?,
        status: status
            .parse::<LeadStatus>()
            .map_err(|e| DomainError::database(format!("Invalid lead status: {}", e)))?,
        priority: priority
            .parse::<LeadPriority>()
            .map_err(|e| DomainError::database(format!("Invalid lead priority: {}", e)))?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: updated_at.map(Timestamp::from_datetime),
    })
}
