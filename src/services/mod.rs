pub mod container;
pub mod demo;
