pub mod cloud;
pub mod core;
pub mod gui;
