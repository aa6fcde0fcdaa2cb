//! TUI renderer for `dashlist browse`.
//!
//! The renderer is the router of the interactive list: the component turns
//! keys into UI events, the renderer hands them to the page controller and
//! applies the resulting intents to the session, then redraws from fresh
//! props. Nothing on screen is mutated directly.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dashlist_engine::{ListController, Translate, UiEvent};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::backend::{FixtureVariant, ListSession};
use crate::presentation::presenters::present_browse_status;
use crate::presentation::views::tui::components::{BrowseAction, BrowseComponent};

pub struct TuiRenderer<'a, V: FixtureVariant> {
    session: ListSession<V>,
    translator: &'a dyn Translate,
    component: BrowseComponent,
    notes: Vec<String>,
    should_quit: bool,
}

impl<'a, V: FixtureVariant> TuiRenderer<'a, V> {
    pub fn new(session: ListSession<V>, translator: &'a dyn Translate) -> Self {
        Self {
            session,
            translator,
            component: BrowseComponent::new(),
            notes: Vec::new(),
            should_quit: false,
        }
    }

    /// Run until the user quits and hand the session back.
    pub fn run(mut self) -> Result<ListSession<V>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result.map(|()| self.session)
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            let (props, total) = self.session.props();
            let screen = ListController::new(&props, self.translator).screen();
            let status = present_browse_status(&screen, total, &self.notes);

            terminal.draw(|f| {
                let area = f.area();
                self.component.render(f, area, &screen, &status);
            })?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match self.component.handle_input::<V::FilterKey>(key, &screen) {
                    Some(BrowseAction::Quit) => self.should_quit = true,
                    Some(BrowseAction::Event(event)) => self.route(event),
                    None => {}
                }
            }
        }

        Ok(())
    }

    fn route(&mut self, event: UiEvent<V::FilterKey>) {
        let (props, _) = self.session.props();
        let dispatch = ListController::new(&props, self.translator).handle(event);

        if dispatch.is_empty() {
            debug!(list = V::PAGE.list, "event produced no intents");
            self.notes = vec!["nothing to do".to_string()];
            return;
        }

        self.notes = dispatch
            .intents
            .iter()
            .map(|intent| self.session.apply(intent))
            .collect();
    }
}
