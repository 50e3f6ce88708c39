use super::*;

#[test]
fn only_clicked_link_is_active() {
    assert_eq!(active_flags(4, 2), vec![false, false, true, false]);
}

#[test]
fn first_and_last_links() {
    assert_eq!(active_flags(3, 0), vec![true, false, false]);
    assert_eq!(active_flags(3, 2), vec![false, false, true]);
}

#[test]
fn no_links_is_empty() {
    assert!(active_flags(0, 0).is_empty());
}

#[test]
fn clicking_again_keeps_single_marker() {
    let first = active_flags(3, 1);
    let second = active_flags(3, 1);
    assert_eq!(first, second);
    assert_eq!(second.iter().filter(|&&a| a).count(), 1);
}
