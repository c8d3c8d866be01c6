pub mod control;
pub mod telephone;
pub mod voice;
