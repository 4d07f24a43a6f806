use super::*;

#[test]
fn fragment_href_is_its_own_selector() {
    assert_eq!(fragment_selector("#post-42"), Some("#post-42"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(fragment_selector("#"), None);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(fragment_selector("  #top "), Some("#top"));
}

#[test]
fn non_fragment_href_has_no_target() {
    assert_eq!(fragment_selector("/threads/7#reply"), None);
    assert_eq!(fragment_selector(""), None);
}
