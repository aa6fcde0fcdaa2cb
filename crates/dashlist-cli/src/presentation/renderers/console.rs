use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, StatusLevel};
use crate::types::{OutputFormat, ViewStyle};

pub struct ConsoleRenderer {
    json_mode: bool,
    style: ViewStyle,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, style: ViewStyle) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            style,
            color: std::io::stdout().is_terminal(),
        }
    }

    fn badge_line(&self, level: StatusLevel, icon: &str, label: &str) -> String {
        if !self.color {
            return format!("{} {}", icon, label);
        }
        match level {
            StatusLevel::Success => format!("{} {}", icon, label.green().bold()),
            StatusLevel::Info => format!("{} {}", icon, label.bold()),
            StatusLevel::Warning => format!("{} {}", icon, label.yellow().bold()),
            StatusLevel::Error => format!("{} {}", icon, label.red().bold()),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        // Minimal output is meant for pipes: content only.
        if self.style == ViewStyle::Minimal {
            print!("{}", result.content.create_view(self.style));
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{}", self.badge_line(badge.level, badge.icon(), &badge.label));
            println!();
        }

        print!("{}", result.content.create_view(self.style));

        if !result.suggestions.is_empty() {
            if self.color {
                println!("\n{}", "💡 Tips:".yellow().bold());
            } else {
                println!("\n💡 Tips:");
            }
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    if self.color {
                        print!(": {}", cmd.cyan());
                    } else {
                        print!(": {}", cmd);
                    }
                }
                println!();
            }
        }

        Ok(())
    }
}
