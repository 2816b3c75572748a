pub mod course;
pub mod generic;
pub mod module;
pub mod validate;
