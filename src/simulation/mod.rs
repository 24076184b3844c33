pub mod states;
pub mod params;
pub mod physics;
pub mod trajectory;
pub mod scenario;
