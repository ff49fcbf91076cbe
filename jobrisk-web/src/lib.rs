//! AI Job Risk 2030 web front-end.
//!
//! Serves the scoring form, the upskilling simulator and the market
//! dashboard over a small JSON API.

pub mod api;
pub mod views;
