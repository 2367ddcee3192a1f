pub mod app;
pub mod cli;
pub mod compositor;
pub mod config;
pub mod error;
pub mod icon;
pub mod items;
pub mod process;
pub mod search;

#[cfg(test)]
pub mod test_utils;
