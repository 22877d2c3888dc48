pub mod button;
pub mod card;
pub mod section;
