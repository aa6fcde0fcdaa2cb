use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use std::path::Path;

use super::list::{open_session, persist_tabs};
use crate::backend::FixtureVariant;
use crate::context::ExecutionContext;
use crate::presentation::renderers::TuiRenderer;

pub fn handle<V: FixtureVariant>(ctx: &ExecutionContext, fixture: &Path) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal");
    }

    let session = open_session::<V>(ctx, fixture, false, None)?;
    let catalog = ctx.catalog()?;

    let session = TuiRenderer::new(session, catalog).run()?;
    if session.tabs_dirty() {
        persist_tabs(ctx, &session)?;
    }
    Ok(())
}
