// dashlist CLI
//
// The binary plays the caller of the list-page contract: it owns the data
// (a JSON fixture standing in for the API), the query state and the saved
// tabs, and feeds them to the engine as props. The engine never sees files
// or flags; everything it emits comes back here as intents.

mod args;
pub mod backend;
mod commands;
pub mod config;
pub mod context;
pub mod event_spec;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ListArgs, TabsCommand};
pub use commands::run;
