pub mod calendar;
pub mod gate;
pub mod normalize;
pub mod render;
