pub mod telephone;
pub mod voice;
