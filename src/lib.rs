//! Interactive explorer for US bikeshare trip data (Chicago, New York City,
//! Washington): load a city file, filter by month and weekday, print
//! travel-time, station, duration and rider statistics.

pub mod config;
pub mod data;
pub mod error;
pub mod shell;
pub mod stats;
