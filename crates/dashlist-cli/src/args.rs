use crate::types::{ListName, LogLevel, OutputFormat, ViewStyle};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dashlist")]
#[command(about = "Render and drive admin list pages from fixtures", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml and tabs.toml
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Overrides `log_level` from config.toml
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the channels page
    Channels(ListArgs),

    /// Render the staff members page
    Staff(ListArgs),

    /// Render the navigation menus page
    Menus(ListArgs),

    /// Manage saved filter tabs
    Tabs {
        #[command(subcommand)]
        command: TabsCommand,
    },

    /// Browse a list interactively
    Browse {
        list: ListName,

        #[arg(long)]
        fixture: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// JSON file with limits and entities
    #[arg(long)]
    pub fixture: PathBuf,

    /// Render as if entities were still loading
    #[arg(long)]
    pub loading: bool,

    #[arg(long)]
    pub search: Option<String>,

    /// FIELD or FIELD:asc|desc
    #[arg(long)]
    pub sort: Option<String>,

    /// `all` or a saved tab id
    #[arg(long)]
    pub tab: Option<String>,

    /// KEY=VALUE[,VALUE...]
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    /// Cursor to start after
    #[arg(long, conflicts_with = "before")]
    pub after: Option<String>,

    /// Cursor to end before
    #[arg(long)]
    pub before: Option<String>,

    /// Rows per page, defaults to `rows_per_page` from config.toml
    #[arg(long)]
    pub rows: Option<u16>,

    /// Selected entity ids
    #[arg(long = "select", value_delimiter = ',')]
    pub selected: Vec<String>,

    #[arg(long)]
    pub disabled: bool,

    /// Upstream error to show on the page
    #[arg(long)]
    pub error: Option<String>,

    /// UI event to route through the page, e.g. `remove:1` or `tab:all`
    #[arg(long)]
    pub event: Option<String>,

    #[arg(long, default_value = "standard")]
    pub style: ViewStyle,
}

#[derive(Subcommand)]
pub enum TabsCommand {
    /// Show saved tabs of a list
    List { list: ListName },

    /// Save filters under a tab name, replacing a tab with the same name
    Save {
        list: ListName,

        name: String,

        #[arg(long = "filter")]
        filters: Vec<String>,

        #[arg(long)]
        search: Option<String>,
    },

    /// Delete a saved tab
    Delete { list: ListName, id: u32 },
}
