pub mod browse;
pub mod context;
pub mod list;
pub mod tabs;

pub use context::HandlerContext;
