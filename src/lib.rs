//! EduAccess: an education loan EMI calculator and state-wise institution
//! explorer for the terminal.
//!
//! The calculator and directory logic live in plain modules with no
//! terminal dependency; `app` and `ui` wrap them in a ratatui front end.

pub mod app;
pub mod calculator;
pub mod chart;
pub mod emi;
pub mod explorer;
pub mod export;
pub mod format;
pub mod inputs;
pub mod states;
pub mod ui;
