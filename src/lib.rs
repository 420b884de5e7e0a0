//! Statquiz: a small web service that quizzes users on central tendency.
//!
//! Each round draws a random dataset from one of four distribution shapes,
//! estimates its probability density, and plots the curve with three
//! colored vertical markers at the mean, median and mode. The color of
//! each marker is shuffled per round; the user has to say which color is
//! which statistic, and the service checks the guess.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Sizes, plot text and styling, result messages |
//! | [`types`] | Distribution kinds, colors, density curve |
//! | [`generator`] | Random sample generation per shape |
//! | [`density`] | Gaussian KDE with Scott's rule bandwidth |
//! | [`stats`] | Mean, median and curve-peak mode |
//! | [`figure`] | Typed plot description for the frontend |
//! | [`quiz`] | Color shuffling and answer checking |
//! | [`server`] | Axum router and handlers |
//! | [`env_config`] | `QUIZ_BASE_PATH` / `QUIZ_PORT` reads |

pub mod constants;
pub mod density;
pub mod env_config;
pub mod figure;
pub mod generator;
pub mod quiz;
pub mod server;
pub mod stats;
pub mod types;
