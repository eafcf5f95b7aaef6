// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::RunQueryDsl;

use crate::tests::create_test_identity;
use crate::{Persistence, PersistenceError, storage_key};
use promo_master_domain::{Catalog, ProgressRecord, PromotionId, UserIdentity};

#[test]
fn test_storage_key_uses_display_name_verbatim() {
    let identity: UserIdentity = create_test_identity("Alice");
    assert_eq!(storage_key(&identity), "progress:Alice");
}

#[test]
fn test_load_without_saved_state_synthesizes_zero_filled_record() {
    let catalog: Catalog = Catalog::standard();
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let identity: UserIdentity = create_test_identity("Alice");

    let record: ProgressRecord = persistence.load_record(&identity, &catalog).unwrap();

    assert_eq!(record.len(), catalog.list().len());
    for def in catalog.list() {
        assert_eq!(record.value(&def.id), 0.0);
    }
}

#[test]
fn test_save_then_load_round_trips() {
    let catalog: Catalog = Catalog::standard();
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let identity: UserIdentity = create_test_identity("Alice");
    let pack: PromotionId = PromotionId::new("pack");

    let mut record: ProgressRecord = ProgressRecord::zeroed(&catalog);
    record.set_value(pack.clone(), 150.0);
    persistence.save_record(&identity, &record).unwrap();

    let loaded: ProgressRecord = persistence.load_record(&identity, &catalog).unwrap();
    assert_eq!(loaded, record);
    assert_eq!(loaded.value(&pack), 150.0);
}

#[test]
fn test_save_replaces_prior_content_entirely() {
    let catalog: Catalog = Catalog::standard();
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let identity: UserIdentity = create_test_identity("Alice");
    let pack: PromotionId = PromotionId::new("pack");

    let mut first: ProgressRecord = ProgressRecord::zeroed(&catalog);
    first.set_value(pack.clone(), 150.0);
    persistence.save_record(&identity, &first).unwrap();

    // Second save carries a sparse record; the earlier full record must
    // not bleed through.
    let mut second: ProgressRecord = ProgressRecord::new();
    second.set_value(pack.clone(), 30.0);
    persistence.save_record(&identity, &second).unwrap();

    let loaded: ProgressRecord = persistence.load_record(&identity, &catalog).unwrap();
    assert_eq!(loaded, second);
    assert_eq!(loaded.len(), 1);
}

#[test]
fn test_sparse_record_reads_missing_entries_as_zero() {
    let catalog: Catalog = Catalog::standard();
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let identity: UserIdentity = create_test_identity("Alice");

    let mut sparse: ProgressRecord = ProgressRecord::new();
    sparse.set_value(PromotionId::new("pack"), 110.0);
    persistence.save_record(&identity, &sparse).unwrap();

    let loaded: ProgressRecord = persistence.load_record(&identity, &catalog).unwrap();
    assert_eq!(loaded.value(&PromotionId::new("phuket")), 0.0);
}

#[test]
fn test_identical_saves_produce_identical_bytes() {
    let catalog: Catalog = Catalog::standard();
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let identity: UserIdentity = create_test_identity("Alice");

    let mut record: ProgressRecord = ProgressRecord::zeroed(&catalog);
    record.set_value(PromotionId::new("pack"), 150.0);

    persistence.save_record(&identity, &record).unwrap();
    let first_bytes: String = persistence.raw_payload(&identity).unwrap().unwrap();

    persistence.save_record(&identity, &record).unwrap();
    let second_bytes: String = persistence.raw_payload(&identity).unwrap().unwrap();

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_identities_do_not_share_records() {
    let catalog: Catalog = Catalog::standard();
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let alice: UserIdentity = create_test_identity("Alice");
    let bob: UserIdentity = create_test_identity("Bob");
    let p1: PromotionId = PromotionId::new("pack");

    let mut record: ProgressRecord = ProgressRecord::zeroed(&catalog);
    record.set_value(p1.clone(), 150.0);
    persistence.save_record(&alice, &record).unwrap();

    // Bob is fresh: zero-filled, not Alice's record.
    let bob_record: ProgressRecord = persistence.load_record(&bob, &catalog).unwrap();
    assert_eq!(bob_record.value(&p1), 0.0);

    // Reloading Alice restores her saved record unchanged.
    let alice_record: ProgressRecord = persistence.load_record(&alice, &catalog).unwrap();
    assert_eq!(alice_record.value(&p1), 150.0);
}

#[test]
fn test_same_display_name_collides_on_one_record() {
    // Documented limitation: keying is exact string match on the
    // display name, so two "Alice" identities share stored state.
    let catalog: Catalog = Catalog::standard();
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let first_alice: UserIdentity = create_test_identity("Alice");
    let mut second_alice: UserIdentity = create_test_identity("Alice");
    second_alice.average_volume = 999;

    let mut record: ProgressRecord = ProgressRecord::zeroed(&catalog);
    record.set_value(PromotionId::new("pack"), 42.0);
    persistence.save_record(&first_alice, &record).unwrap();

    let loaded: ProgressRecord = persistence.load_record(&second_alice, &catalog).unwrap();
    assert_eq!(loaded.value(&PromotionId::new("pack")), 42.0);
}

#[test]
fn test_save_failure_surfaces_query_error() {
    let catalog: Catalog = Catalog::standard();
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let identity: UserIdentity = create_test_identity("Alice");
    let record: ProgressRecord = ProgressRecord::zeroed(&catalog);

    // Losing the table makes the next write fail at the storage layer.
    diesel::sql_query("DROP TABLE progress_records")
        .execute(&mut persistence.conn)
        .unwrap();

    let error = persistence.save_record(&identity, &record).unwrap_err();
    assert!(matches!(error, PersistenceError::QueryFailed(_)));
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let catalog: Catalog = Catalog::standard();
    let identity: UserIdentity = create_test_identity("Alice");

    let mut first: Persistence = Persistence::new_in_memory().unwrap();
    let mut record: ProgressRecord = ProgressRecord::zeroed(&catalog);
    record.set_value(PromotionId::new("pack"), 150.0);
    first.save_record(&identity, &record).unwrap();

    let mut second: Persistence = Persistence::new_in_memory().unwrap();
    assert!(second.raw_payload(&identity).unwrap().is_none());
}
