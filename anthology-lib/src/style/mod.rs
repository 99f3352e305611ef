pub mod escape;
pub mod selector;
pub mod sheet;
