pub mod cli;
pub mod commands;
pub mod icon;
pub mod iconset;
pub mod rounding;
