pub mod demo;
pub mod startup;
