pub mod checks;
pub mod section;
pub mod validate;
