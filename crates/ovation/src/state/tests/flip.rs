use crate::state::FlipSet;

#[test]
fn cards_start_face_up() {
    let set = FlipSet::default();
    assert!(!set.is_flipped("myth-1"));
}

#[test]
fn toggle_flips_only_the_named_card() {
    let mut set = FlipSet::default();
    set.toggle("myth-1");
    assert!(set.is_flipped("myth-1"));
    assert!(!set.is_flipped("myth-2"));
    assert!(!set.is_flipped("myth-3"));
}

#[test]
fn toggle_twice_restores_the_front() {
    let mut set = FlipSet::default();
    set.toggle("myth-1");
    set.toggle("myth-1");
    assert!(!set.is_flipped("myth-1"));
}

#[test]
fn cards_flip_independently() {
    let mut set = FlipSet::default();
    set.toggle("a");
    set.toggle("b");
    set.toggle("a");
    assert!(!set.is_flipped("a"));
    assert!(set.is_flipped("b"));
}
