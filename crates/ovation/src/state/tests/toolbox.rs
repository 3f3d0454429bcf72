use crate::state::Toolbox;

#[test]
fn no_tool_active_initially() {
    let tb = Toolbox::default();
    assert_eq!(tb.active(), None);
}

#[test]
fn enter_and_leave() {
    let mut tb = Toolbox::default();
    tb.set_active("notes");
    assert_eq!(tb.active(), Some("notes"));
    tb.clear("notes");
    assert_eq!(tb.active(), None);
}

#[test]
fn last_hovered_wins() {
    let mut tb = Toolbox::default();
    tb.set_active("notes");
    tb.set_active("files");
    assert_eq!(tb.active(), Some("files"));
}

#[test]
fn stale_leave_does_not_clear_the_new_tool() {
    // Pointer slides from one tool straight onto another: the old tool's
    // leave event may arrive after the new tool's enter.
    let mut tb = Toolbox::default();
    tb.set_active("notes");
    tb.set_active("files");
    tb.clear("notes");
    assert_eq!(tb.active(), Some("files"));
}
