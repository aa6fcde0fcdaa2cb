use super::args::{Cli, Commands, TabsCommand};
use super::handlers;
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;
use crate::types::ListName;
use anyhow::Result;
use dashlist_engine::{ChannelsList, MenusList, StaffList};
use tracing::debug;

const DEFAULT_LOG_LEVEL: &str = "warn";

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir);

    let level = match cli.log_level {
        Some(level) => level.to_string(),
        None => ctx
            .config()?
            .log_level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    };
    init_logging(&level);
    debug!(data_dir = %ctx.data_dir().display(), "resolved data directory");

    let format = cli.format;
    match cli.command {
        Commands::Channels(args) => handlers::list::handle::<ChannelsList>(&ctx, &args, format),
        Commands::Staff(args) => handlers::list::handle::<StaffList>(&ctx, &args, format),
        Commands::Menus(args) => handlers::list::handle::<MenusList>(&ctx, &args, format),

        Commands::Tabs { command } => match command {
            TabsCommand::List { list } => match list {
                ListName::Channels => handlers::tabs::list::<ChannelsList>(&ctx, format),
                ListName::Staff => handlers::tabs::list::<StaffList>(&ctx, format),
                ListName::Menus => handlers::tabs::list::<MenusList>(&ctx, format),
            },
            TabsCommand::Save {
                list,
                name,
                filters,
                search,
            } => {
                let search = search.as_deref();
                match list {
                    ListName::Channels => {
                        handlers::tabs::save::<ChannelsList>(&ctx, &name, &filters, search, format)
                    }
                    ListName::Staff => {
                        handlers::tabs::save::<StaffList>(&ctx, &name, &filters, search, format)
                    }
                    ListName::Menus => {
                        handlers::tabs::save::<MenusList>(&ctx, &name, &filters, search, format)
                    }
                }
            }
            TabsCommand::Delete { list, id } => match list {
                ListName::Channels => handlers::tabs::delete::<ChannelsList>(&ctx, id, format),
                ListName::Staff => handlers::tabs::delete::<StaffList>(&ctx, id, format),
                ListName::Menus => handlers::tabs::delete::<MenusList>(&ctx, id, format),
            },
        },

        Commands::Browse { list, fixture } => match list {
            ListName::Channels => handlers::browse::handle::<ChannelsList>(&ctx, &fixture),
            ListName::Staff => handlers::browse::handle::<StaffList>(&ctx, &fixture),
            ListName::Menus => handlers::browse::handle::<MenusList>(&ctx, &fixture),
        },
    }
}

/// Logs go to stderr; stdout carries the rendered page.
fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
