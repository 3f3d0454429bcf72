use crate::state::Timeline;

#[test]
fn starts_at_the_first_entry() {
    let tl = Timeline::new(5);
    assert_eq!(tl.active(), 0);
    assert_eq!(tl.fraction(), 0.0);
}

#[test]
fn random_access_within_range() {
    let mut tl = Timeline::new(5);
    tl.set_active(3);
    assert_eq!(tl.active(), 3);
    tl.set_active(1);
    assert_eq!(tl.active(), 1);
}

#[test]
fn five_entries_last_dot_fills_the_bar() {
    let mut tl = Timeline::new(5);
    tl.set_active(4);
    assert_eq!(tl.fraction(), 1.0);
    // Out of range: position unchanged.
    tl.set_active(10);
    assert_eq!(tl.active(), 4);
    assert_eq!(tl.fraction(), 1.0);
}

#[test]
fn mid_entry_fraction() {
    let mut tl = Timeline::new(5);
    tl.set_active(2);
    assert_eq!(tl.fraction(), 0.5);
}

#[test]
fn single_entry_timeline_has_zero_fraction() {
    let tl = Timeline::new(1);
    assert_eq!(tl.fraction(), 0.0);
}
