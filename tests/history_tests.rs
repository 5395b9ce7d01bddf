use timepairs::core::history::{DEFAULT_LIMIT, History};

#[test]
fn test_round_trip() {
    let mut h = History::new(0);
    for v in 1..=5 {
        h.set(v);
    }

    for expected in (0..5).rev() {
        assert!(h.undo());
        assert_eq!(*h.present(), expected);
    }
    assert!(!h.can_undo());
    assert!(!h.undo());

    for expected in 1..=5 {
        assert!(h.redo());
        assert_eq!(*h.present(), expected);
    }
    assert!(!h.can_redo());
    assert!(!h.redo());
}

#[test]
fn test_coalesced_edits_are_one_undo_step() {
    let mut h = History::new(String::from("initial"));

    h.begin_change();
    h.set_unrecorded(String::from("initia"));
    h.set_unrecorded(String::from("initi"));
    h.commit_change();

    assert!(h.can_undo());
    assert!(h.undo());
    assert_eq!(h.present(), "initial");
    assert!(!h.can_undo());
}

#[test]
fn test_noop_commit_records_nothing() {
    let mut h = History::new(7);
    h.begin_change();
    h.commit_change();
    assert!(!h.can_undo());

    // unchanged value after edits counts as a no-op too
    h.begin_change();
    h.set_unrecorded(8);
    h.set_unrecorded(7);
    h.commit_change();
    assert!(!h.can_undo());
}

#[test]
fn test_begin_change_is_idempotent() {
    let mut h = History::new(1);
    h.begin_change();
    h.set_unrecorded(2);
    // a second begin inside the burst must not overwrite the snapshot
    h.begin_change();
    h.set_unrecorded(3);
    h.commit_change();

    assert!(h.undo());
    assert_eq!(*h.present(), 1);
}

#[test]
fn test_set_uses_pending_snapshot() {
    let mut h = History::new(10);
    h.begin_change();
    h.set_unrecorded(11);
    // a discrete action lands mid-burst: the recorded snapshot is the value
    // from before the burst started, not the uncommitted 11
    h.set(20);

    assert!(h.undo());
    assert_eq!(*h.present(), 10);
}

#[test]
fn test_undo_flushes_pending_edit() {
    let mut h = History::new(1);
    h.begin_change();
    h.set_unrecorded(5);

    // the in-flight edit is committed first, then undone
    assert!(h.undo());
    assert_eq!(*h.present(), 1);
    assert!(h.can_redo());
    assert!(h.redo());
    assert_eq!(*h.present(), 5);
}

#[test]
fn test_bounded_history_keeps_most_recent() {
    let mut h = History::new(0);
    for v in 1..=60 {
        h.set(v);
    }

    let mut undone = 0;
    while h.undo() {
        undone += 1;
    }
    assert_eq!(undone, DEFAULT_LIMIT);
    // snapshots 0..=9 were evicted, the oldest reachable state is 10
    assert_eq!(*h.present(), 10);
}

#[test]
fn test_new_edit_clears_future() {
    let mut h = History::new(0);
    h.set(1);
    h.set(2);

    assert!(h.undo());
    assert!(h.can_redo());

    h.set(99);
    assert!(!h.can_redo());
    assert!(!h.redo());
    assert_eq!(*h.present(), 99);
}

#[test]
fn test_commit_clears_future() {
    let mut h = History::new(0);
    h.set(1);
    assert!(h.undo());
    assert!(h.can_redo());

    h.begin_change();
    h.set_unrecorded(5);
    h.commit_change();
    assert!(!h.can_redo());
}

#[test]
fn test_reset_establishes_fresh_baseline() {
    let mut h = History::new(0);
    h.set(1);
    h.set(2);
    h.undo();
    h.begin_change();
    h.set_unrecorded(3);

    h.reset(42);
    assert_eq!(*h.present(), 42);
    assert!(!h.can_undo());
    assert!(!h.can_redo());

    // no stale pending snapshot survives a reset
    h.commit_change();
    assert!(!h.can_undo());
}

#[test]
fn test_custom_limit() {
    let mut h = History::with_limit(0, 3);
    for v in 1..=10 {
        h.set(v);
    }

    let mut undone = 0;
    while h.undo() {
        undone += 1;
    }
    assert_eq!(undone, 3);
    assert_eq!(*h.present(), 7);
}
