use serde::{Deserialize, Serialize};

/// A movement contested at a competition. Display order is meaningful;
/// movements without one are shown last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionMovement {
    pub movement_name: String,
    pub is_required: bool,
    pub display_order: Option<i32>,
}
