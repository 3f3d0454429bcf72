use crate::state::{BalanceScale, HubDiagram, Iceberg};

#[test]
fn iceberg_starts_hidden_and_toggles() {
    let mut berg = Iceberg::default();
    assert!(!berg.revealed());
    berg.toggle();
    assert!(berg.revealed());
    berg.toggle();
    assert!(!berg.revealed());
}

#[test]
fn scale_tilts_until_balanced() {
    let mut scale = BalanceScale::default();
    assert!(!scale.balanced());
    assert_ne!(scale.tilt_degrees(), 0.0);
    scale.toggle();
    assert!(scale.balanced());
    assert_eq!(scale.tilt_degrees(), 0.0);
}

#[test]
fn tilt_is_a_pure_function_of_the_boolean() {
    let mut scale = BalanceScale::default();
    let tilted = scale.tilt_degrees();
    scale.toggle();
    scale.toggle();
    assert_eq!(scale.tilt_degrees(), tilted);
}

#[test]
fn hub_expands_and_collapses() {
    let mut hub = HubDiagram::default();
    assert!(!hub.expanded());
    hub.toggle();
    assert!(hub.expanded());
    hub.toggle();
    assert!(!hub.expanded());
}
