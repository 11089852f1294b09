pub mod create;
pub mod invoke;
