//! Single-boolean machines: iceberg reveal, balance scale, hub expansion.

/// Iceberg reveal: hidden items are suppressed until revealed. Items are
/// hidden visually, never removed from the data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Iceberg {
    revealed: bool,
}

impl Iceberg {
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn toggle(&mut self) {
        self.revealed = !self.revealed;
    }
}

/// Tilt of the unbalanced beam, in degrees.
const SCALE_TILT_DEGREES: f32 = -12.0;

/// Balance scale: a boolean with a derived beam angle. No intermediate
/// states; the angle is purely a function of `balanced`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceScale {
    balanced: bool,
}

impl BalanceScale {
    pub fn balanced(&self) -> bool {
        self.balanced
    }

    pub fn toggle(&mut self) {
        self.balanced = !self.balanced;
    }

    pub fn tilt_degrees(&self) -> f32 {
        if self.balanced { 0.0 } else { SCALE_TILT_DEGREES }
    }
}

/// Diagram hub expansion: collapsed leaves sit on the hub, expanded leaves
/// sit at their declared positions with edges visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HubDiagram {
    expanded: bool,
}

impl HubDiagram {
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}
