pub mod db;
pub mod telemetry;
pub mod web;
