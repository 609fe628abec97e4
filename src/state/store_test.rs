use super::*;

#[test]
fn refcell_store_snapshot_is_a_copy() {
    let store = RefCell::new(vec![1, 2]);
    let mut snap = store.snapshot();
    snap.push(3);
    assert_eq!(*store.borrow(), vec![1, 2]);
}

#[test]
fn refcell_store_modify_mutates_in_place() {
    let store = RefCell::new(String::from("a"));
    store.modify(|s| s.push('b'));
    assert_eq!(store.snapshot(), "ab");
}
