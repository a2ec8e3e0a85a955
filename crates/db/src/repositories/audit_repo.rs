//! Repository for the append-only `audit_logs` table.

use chrono::SubsecRound;
use maintrack_core::audit::{canonical_entry_data, compute_integrity_hash};
use maintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::audit::{AuditLog, CreateAuditLog};

/// Column list for `audit_logs` SELECT queries.
const COLUMNS: &str = "\
    id, timestamp, user_id, instance_id, action_type, \
    entity_type, entity_id, details_json, integrity_hash, created_at";

/// Advisory lock key serialising appends to the hash chain.
const CHAIN_LOCK_KEY: i64 = 0x6175_6469_745f_6c6f;

/// Provides append and query operations for audit logs.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append an entry within an existing transaction, extending the hash chain.
    ///
    /// Takes a transaction-scoped advisory lock so concurrent appends cannot
    /// both link to the same predecessor.
    pub async fn append(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        entry: &CreateAuditLog,
    ) -> Result<AuditLog, sqlx::Error> {
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(CHAIN_LOCK_KEY)
            .execute(&mut **tx)
            .await?;

        let prev_hash = sqlx::query_scalar::<_, Option<String>>(
            "SELECT integrity_hash FROM audit_logs ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(&mut **tx)
        .await?
        .flatten();

        // TIMESTAMPTZ stores microseconds; truncate so the stored value hashes
        // identically on re-read.
        let timestamp = chrono::Utc::now().trunc_subsecs(6);
        let entry_data = canonical_entry_data(
            &timestamp,
            entry.user_id,
            &entry.action_type,
            entry.entity_type.as_deref(),
            entry.entity_id,
        );
        let integrity_hash = compute_integrity_hash(prev_hash.as_deref(), &entry_data);

        let query = format!(
            "INSERT INTO audit_logs \
                (timestamp, user_id, instance_id, action_type, entity_type, \
                 entity_id, details_json, integrity_hash) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(timestamp)
            .bind(entry.user_id)
            .bind(entry.instance_id)
            .bind(&entry.action_type)
            .bind(&entry.entity_type)
            .bind(entry.entity_id)
            .bind(&entry.details_json)
            .bind(&integrity_hash)
            .fetch_one(&mut **tx)
            .await
    }

    /// List entries recorded against one entity, oldest first.
    pub async fn list_for_entity(
        pool: &PgPool,
        entity_type: &str,
        entity_id: DbId,
    ) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audit_logs \
             WHERE entity_type = $1 AND entity_id = $2 \
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(entity_type)
            .bind(entity_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch every entry in chain order for integrity verification.
    pub async fn list_chain(pool: &PgPool) -> Result<Vec<AuditLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM audit_logs ORDER BY id ASC");
        sqlx::query_as::<_, AuditLog>(&query).fetch_all(pool).await
    }

    /// Count all audit entries.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM audit_logs")
            .fetch_one(pool)
            .await
    }
}
