//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board chrome while reading/writing shared state
//! from Leptos context providers; the page module owns orchestration.

pub mod editor_host;
pub mod post_card;
pub mod post_form;
pub mod post_list;
