//! Tests for the pagination controller.

use super::*;
use crate::model::EntryId;
use std::cell::RefCell;
use std::rc::Rc;

fn store_of(n: usize) -> PageContentStore {
    let entries = (0..n)
        .map(|i| ContentEntry::new(EntryId::new(format!("page-{i}")).unwrap(), format!("body {i}")))
        .collect();
    PageContentStore::new(entries).unwrap()
}

fn recording_controller(n: usize) -> (PaginationController, Rc<RefCell<Vec<usize>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let controller =
        PaginationController::new(store_of(n)).on_change(move |i| sink.borrow_mut().push(i));
    (controller, calls)
}

// ===== Construction =====

#[test]
fn starts_at_first_page_by_default() {
    let controller = PaginationController::new(store_of(3));
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.total_pages(), 3);
}

#[test]
fn start_index_is_clamped_into_range() {
    let controller = PaginationController::new(store_of(4)).with_start_index(99);
    assert_eq!(controller.current_index(), 3);
}

#[test]
fn start_index_on_empty_store_is_zero() {
    let controller = PaginationController::new(PageContentStore::empty()).with_start_index(5);
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn debug_output_omits_callback_body() {
    let (controller, _) = recording_controller(2);
    let debug = format!("{controller:?}");
    assert!(debug.contains("total_pages: 2"));
    assert!(debug.contains("has_callback: true"));
}

// ===== go_to_page =====

#[test]
fn go_to_page_moves_and_fires_callback() {
    let (mut controller, calls) = recording_controller(6);
    assert!(controller.go_to_page(4));
    assert_eq!(controller.current_index(), 4);
    assert_eq!(*calls.borrow(), vec![4]);
}

#[test]
fn out_of_range_request_is_dropped() {
    let (mut controller, calls) = recording_controller(6);
    controller.go_to_page(2);
    calls.borrow_mut().clear();

    assert!(!controller.go_to_page(6));
    assert!(!controller.go_to_page(usize::MAX));
    assert_eq!(controller.current_index(), 2);
    assert!(calls.borrow().is_empty());
}

#[test]
fn same_index_does_not_refire_callback() {
    let (mut controller, calls) = recording_controller(6);
    controller.go_to_page(3);
    assert!(!controller.go_to_page(3));
    assert_eq!(*calls.borrow(), vec![3]);
}

#[test]
fn empty_store_drops_every_request() {
    let mut controller = PaginationController::new(PageContentStore::empty());
    assert!(!controller.go_to_page(0));
    assert!(!controller.go_to_next_page());
    assert!(!controller.go_to_prev_page());
    assert_eq!(controller.current_index(), 0);
}

// ===== Boundaries =====

#[test]
fn prev_on_first_page_is_noop_without_callback() {
    let (mut controller, calls) = recording_controller(6);
    assert!(!controller.go_to_prev_page());
    assert_eq!(controller.current_index(), 0);
    assert!(calls.borrow().is_empty());
}

#[test]
fn next_on_last_page_is_noop_without_callback() {
    let (mut controller, calls) = recording_controller(6);
    controller.go_to_page(5);
    calls.borrow_mut().clear();

    assert!(!controller.go_to_next_page());
    assert_eq!(controller.current_index(), 5);
    assert!(calls.borrow().is_empty());
}

#[test]
fn next_and_prev_step_by_one() {
    let (mut controller, calls) = recording_controller(3);
    assert!(controller.go_to_next_page());
    assert!(controller.go_to_next_page());
    assert!(controller.go_to_prev_page());
    assert_eq!(controller.current_index(), 1);
    assert_eq!(*calls.borrow(), vec![1, 2, 1]);
}

#[test]
fn boundary_flags_follow_index() {
    let mut controller = PaginationController::new(store_of(3));
    assert!(!controller.can_go_prev());
    assert!(controller.can_go_next());

    controller.go_to_page(1);
    assert!(controller.can_go_prev());
    assert!(controller.can_go_next());

    controller.go_to_page(2);
    assert!(controller.can_go_prev());
    assert!(!controller.can_go_next());
}

#[test]
fn single_page_store_cannot_move() {
    let controller = PaginationController::new(store_of(1));
    assert!(!controller.can_go_next());
    assert!(!controller.can_go_prev());
    assert_eq!(controller.progress(), 1.0);
}

// ===== Progress =====

#[test]
fn progress_is_one_based_fraction() {
    let mut controller = PaginationController::new(store_of(6));
    controller.go_to_page(2);
    assert_eq!(controller.progress(), 0.5);

    controller.go_to_page(5);
    assert_eq!(controller.progress(), 1.0);
}

#[test]
fn progress_is_zero_for_empty_store() {
    let controller = PaginationController::new(PageContentStore::empty());
    assert_eq!(controller.progress(), 0.0);
}

// ===== Entry lookups =====

#[test]
fn adjacent_entries_on_first_page() {
    let controller = PaginationController::new(store_of(3));
    assert_eq!(
        controller.current_entry().map(|e| e.id().as_str()),
        Some("page-0")
    );
    assert_eq!(controller.next_entry().map(|e| e.id().as_str()), Some("page-1"));
    assert!(controller.prev_entry().is_none());
}

#[test]
fn adjacent_entries_on_last_page() {
    let controller = PaginationController::new(store_of(3)).with_start_index(2);
    assert_eq!(controller.prev_entry().map(|e| e.id().as_str()), Some("page-1"));
    assert!(controller.next_entry().is_none());
}

#[test]
fn empty_store_has_no_entries() {
    let controller = PaginationController::new(PageContentStore::empty());
    assert!(controller.current_entry().is_none());
    assert!(controller.next_entry().is_none());
    assert!(controller.prev_entry().is_none());
}

// ===== Re-synchronization =====

#[test]
fn sync_start_index_bypasses_callback() {
    let (mut controller, calls) = recording_controller(6);
    controller.sync_start_index(4);
    assert_eq!(controller.current_index(), 4);
    assert!(calls.borrow().is_empty());
}

#[test]
fn sync_start_index_clamps_to_last_page() {
    let mut controller = PaginationController::new(store_of(6));
    controller.sync_start_index(40);
    assert_eq!(controller.current_index(), 5);
}

// ===== Snapshot =====

#[test]
fn snapshot_of_empty_store() {
    let controller = PaginationController::new(PageContentStore::empty());
    let snapshot = controller.snapshot();
    assert!(snapshot.is_empty());
    assert!(snapshot.current_entry.is_none());
    assert_eq!(snapshot.total_pages, 0);
    assert_eq!(snapshot.progress, 0.0);
    assert!(!snapshot.can_go_next);
    assert!(!snapshot.can_go_prev);
    assert!(!snapshot.is_animating);
}

#[test]
fn snapshot_mirrors_controller() {
    let controller = PaginationController::new(store_of(4)).with_start_index(1);
    let snapshot = controller.snapshot().with_animating(true);
    assert_eq!(snapshot.current_index, 1);
    assert_eq!(snapshot.total_pages, 4);
    assert_eq!(snapshot.progress, 0.5);
    assert!(snapshot.can_go_next);
    assert!(snapshot.can_go_prev);
    assert!(snapshot.is_animating);
    assert_eq!(
        snapshot.prev_entry.map(|e| e.id().as_str()),
        Some("page-0")
    );
    assert_eq!(
        snapshot.next_entry.map(|e| e.id().as_str()),
        Some("page-2")
    );
}
