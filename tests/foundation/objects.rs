//! Integration tests for ObjectId

use std::collections::{BTreeSet, HashSet};

use mudlex_foundation::ObjectId;

#[test]
fn object_id_display_uses_hash_prefix() {
    assert_eq!(ObjectId::new(0).to_string(), "#0");
    assert_eq!(ObjectId::new(1234).to_string(), "#1234");
}

#[test]
fn object_id_is_hashable_and_ordered() {
    let ids = [ObjectId::new(3), ObjectId::new(1), ObjectId::new(3)];

    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 2);

    let sorted: Vec<_> = ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
    assert_eq!(sorted, vec![ObjectId::new(1), ObjectId::new(3)]);
}

#[test]
fn object_id_from_raw() {
    let id: ObjectId = 99.into();
    assert_eq!(id.raw(), 99);
}
