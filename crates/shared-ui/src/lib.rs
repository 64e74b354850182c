//! Presentational Dioxus components shared by the shell and the dashboard
//! views. Nothing here owns navigation state; callers pass it in as props.

pub mod components;

pub use components::*;
