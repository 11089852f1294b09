mod create;
mod invoke;
