pub mod athletes;
pub mod competitions;
pub mod github;
pub mod rankings;
