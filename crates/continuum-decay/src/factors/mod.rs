pub mod diagnosticity;
pub mod temporal;
