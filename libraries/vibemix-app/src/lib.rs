//! VibeMix - Application Core
//!
//! The coordinating controller that ties the curation engine, the
//! favorites store, and the identity provider together:
//!
//! - [`AppState`]: one explicit state object (identity, session
//!   candidate, in-flight guard) instead of global mutable state
//! - [`FavoritesViewModel`]: the local favorites cache, reconciled by
//!   the mutate-then-refetch protocol — every mutation is followed by a
//!   wholesale re-fetch, so the rendered view always reflects
//!   server-confirmed state
//! - [`Controller`]: the user-facing operations (generate, save,
//!   delete, remove song, sign-in/out)
//! - [`view`]: a pure function from state to a render description, so
//!   the view layer stays swappable and headless-testable

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod favorites;
mod state;
mod telemetry;
mod view;

pub use controller::Controller;
pub use favorites::FavoritesViewModel;
pub use state::AppState;
pub use telemetry::init_tracing;
pub use view::{view, FavoriteView, GeneratorView, SongRow, View};
