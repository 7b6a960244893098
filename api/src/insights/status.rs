use entity::employee::Model;
use serde::Serialize;

/// Retention classification for the heatmap. First matching rule wins.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Red,
    Amber,
    Green,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Red => "At Risk",
            Status::Amber => "Wisdom Gap",
            Status::Green => "Stable",
        }
    }
}

/// Red: a high performer (some skill above 8) stuck below level 4.
/// Amber: long tenure (over 15 years) still below level 4.
/// Everything else, including an empty skill map, is green.
pub fn classify(employee: &Model) -> Status {
    let stagnant = employee.level < 4;
    let high_performer = employee.skills.peak().is_some_and(|peak| peak > 8);
    if high_performer && stagnant {
        return Status::Red;
    }
    if employee.tenure > 15 && stagnant {
        return Status::Amber;
    }
    Status::Green
}
