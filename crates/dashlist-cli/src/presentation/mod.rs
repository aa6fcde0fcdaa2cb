//! # Presentation Layer
//!
//! MVVM split for everything the CLI prints or draws.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! The engine already hands back a fully translated `ListScreen`, so list
//! view models embed it as-is; presenters only add the CLI's own framing
//! (badges, tips, dispatched intents).
//!
//! For the interactive browser, `views/tui/components` own cursor and input
//! state and emit UI events; the TUI renderer routes them through the
//! controller and back into the session.
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to JSON output | `view_models/` |
//! | Decide when to show a tip | `presenters/` |
//! | Change text layout | `views/` |
//! | Handle a key in the browser | `views/tui/components/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
