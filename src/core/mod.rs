pub mod calculator;
pub mod history;
pub mod session;
