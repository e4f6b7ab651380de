pub mod prepare;
pub mod round;
