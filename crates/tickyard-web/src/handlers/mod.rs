pub mod health;
pub mod hotdata;
pub mod prediction;
