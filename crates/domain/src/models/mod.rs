pub mod athlete;
pub mod competition;
pub mod competition_movement;
pub mod federation;

pub use athlete::Athlete;
pub use competition::{Competition, CompetitionStatus};
pub use competition_movement::CompetitionMovement;
pub use federation::Federation;
