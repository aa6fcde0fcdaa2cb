use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::{OutputFormat, ViewStyle};
use anyhow::Result;
use serde::Serialize;

/// Output settings shared by the handlers of one invocation.
pub struct HandlerContext {
    pub format: OutputFormat,
    pub style: ViewStyle,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, style: ViewStyle) -> Self {
        Self { format, style }
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let renderer = ConsoleRenderer::new(self.format, self.style);
        renderer.render(view_model)
    }
}
