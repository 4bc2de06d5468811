pub mod health;
pub mod poll;
pub mod scheduler;
pub mod webhook;
