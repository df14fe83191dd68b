//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the terminal host with key presses
//! and check the screen, the in-memory page and the effect transcript.

mod acceptance_form;
mod acceptance_list;
