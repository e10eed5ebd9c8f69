//! Core business logic services

pub mod converter;
pub mod flight_plan_parser;
pub mod mission_writer;
pub mod navigation;
pub mod orbit;
