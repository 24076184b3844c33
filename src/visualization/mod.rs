pub mod plot;
pub mod extent;
pub mod foucault_vis2d;
