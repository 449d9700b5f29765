use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named savings target with progressive contributions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub target: f64,
    pub saved: f64,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target,
            saved: 0.0,
        }
    }

    /// Fraction of the target reached, clamped to `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.target <= 0.0 {
            return 1.0;
        }
        (self.saved / self.target).clamp(0.0, 1.0)
    }

    pub fn is_reached(&self) -> bool {
        self.saved >= self.target
    }
}
