//! Integration tests for audit log appends and the integrity hash chain.

mod common;

use maintrack_core::audit::{action_types, canonical_entry_data, compute_integrity_hash};
use maintrack_core::maintenance::ENTITY_TYPE;
use maintrack_db::models::audit::CreateAuditLog;
use maintrack_db::repositories::AuditLogRepo;
use sqlx::PgPool;

fn entry(user_id: i64, instance_id: i64, entity_id: i64) -> CreateAuditLog {
    CreateAuditLog {
        user_id: Some(user_id),
        instance_id: Some(instance_id),
        action_type: action_types::UPDATE_QUANTITY.to_string(),
        entity_type: Some(ENTITY_TYPE.to_string()),
        entity_id: Some(entity_id),
        details_json: Some(serde_json::json!({ "quantity_in_maintenance": 3 })),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_append_links_hash_chain(pool: PgPool) {
    let inst = common::instance(&pool, "Audit").await;
    let user = common::user(&pool, "tech").await;

    for entity_id in [1, 2, 3] {
        let mut tx = pool.begin().await.unwrap();
        AuditLogRepo::append(&mut tx, &entry(user.id, inst.id, entity_id))
            .await
            .unwrap();
        tx.commit().await.unwrap();
    }

    let chain = AuditLogRepo::list_chain(&pool).await.unwrap();
    assert_eq!(chain.len(), 3);

    let mut prev: Option<String> = None;
    for log in &chain {
        let data = canonical_entry_data(
            &log.timestamp,
            log.user_id,
            &log.action_type,
            log.entity_type.as_deref(),
            log.entity_id,
        );
        let expected = compute_integrity_hash(prev.as_deref(), &data);
        assert_eq!(log.integrity_hash.as_deref(), Some(expected.as_str()));
        prev = log.integrity_hash.clone();
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rolled_back_append_leaves_no_entry(pool: PgPool) {
    let inst = common::instance(&pool, "Rollback").await;
    let user = common::user(&pool, "tech").await;

    let mut tx = pool.begin().await.unwrap();
    AuditLogRepo::append(&mut tx, &entry(user.id, inst.id, 9))
        .await
        .unwrap();
    tx.rollback().await.unwrap();

    assert_eq!(AuditLogRepo::count(&pool).await.unwrap(), 0);
    assert!(AuditLogRepo::list_for_entity(&pool, ENTITY_TYPE, 9)
        .await
        .unwrap()
        .is_empty());
}
