#[macro_use]
extern crate log;

pub mod engine;
pub mod models;
pub mod server;
pub mod storage;
