pub mod calendar;
pub mod create;
pub mod naming;
pub mod send;
pub mod sync;
