pub mod accuracy;
pub mod details;
pub mod predict;
