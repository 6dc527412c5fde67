// Calendar Grid Library
// Event store, slot storage, grid projection and export

pub mod models;
pub mod services;
pub mod utils;
pub mod views;
