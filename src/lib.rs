//! crudctl
//!
//! Controller for a single-URL CRUD screen: resolves list/edit mode from the
//! URL, tracks row selection, and turns user actions into navigations or
//! single-use form submissions. Ships with a terminal host.
//!
//! Pure core (`model`, `state`) / impure shell (`port`, `view`).

pub mod config;
pub mod logging;
pub mod model;
pub mod port;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
