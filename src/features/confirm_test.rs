use super::*;

#[test]
fn accepted_dialog_lets_delete_through() {
    assert!(!blocks_delete(Some(true)));
}

#[test]
fn declined_dialog_blocks_delete() {
    assert!(blocks_delete(Some(false)));
}

#[test]
fn unavailable_dialog_blocks_delete() {
    assert!(blocks_delete(None));
}
