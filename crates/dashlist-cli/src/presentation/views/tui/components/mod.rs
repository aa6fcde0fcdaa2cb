pub mod browse;

pub use browse::{BrowseAction, BrowseComponent};
