//! CLI command implementations.

pub mod actions;
pub mod config;
pub mod render;
pub mod state;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use arezou_pdp::resolve_state;
use arezou_sdk::arezou_core::parse_query;
use arezou_sdk::arezou_state::{PageAction, PageState, StateError};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Query string describing the state (e.g. "size=50ml&insights=1").
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Action to apply after decoding the query (repeatable, e.g. "qty:inc").
    #[arg(short, long = "action")]
    pub actions: Vec<String>,

    /// Write the HTML to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print render metrics.
    #[arg(long)]
    pub metrics: bool,
}

/// Arguments for the state command.
#[derive(Args)]
pub struct StateArgs {
    /// Query string describing the starting state.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Action to apply after decoding the query (repeatable).
    #[arg(short, long = "action")]
    pub actions: Vec<String>,
}

/// Arguments for the actions command.
#[derive(Args)]
pub struct ActionsArgs {
    /// Only list actions whose text starts with this prefix.
    #[arg(short, long)]
    pub prefix: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Overwrite an existing config without asking.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// State reached from a query string and a list of actions.
#[derive(Debug)]
pub struct Resolved {
    pub state: PageState,
    /// Query fields that were ignored.
    pub rejected: Vec<StateError>,
    /// Actions applied, in order.
    pub applied: Vec<PageAction>,
}

/// Decode `query` leniently, then apply `actions` strictly.
///
/// An `action` parameter inside the query is honored like the page does.
/// Unknown action text given on the command line is an error.
pub fn resolve(query: &str, actions: &[String]) -> Result<Resolved> {
    let base = resolve_state(&parse_query(query.trim_start_matches('?')));
    let mut resolved = Resolved {
        state: base.state,
        rejected: base.rejected,
        applied: base.applied.into_iter().collect(),
    };

    for text in actions {
        let action: PageAction = text
            .parse()
            .with_context(|| format!("Invalid --action '{}'", text))?;
        resolved.state.apply(action);
        resolved.applied.push(action);
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arezou_sdk::arezou_state::SizeOption;

    #[test]
    fn test_resolve_applies_actions_in_order() {
        let actions = vec!["qty:inc".to_string(), "qty:inc".to_string(), "size:50ml".to_string()];
        let resolved = resolve("?qty=2", &actions).unwrap();
        assert_eq!(resolved.state.options.quantity.get(), 4);
        assert_eq!(resolved.state.options.size, SizeOption::Ml50);
        assert_eq!(resolved.applied.len(), 3);
    }

    #[test]
    fn test_resolve_keeps_query_action() {
        let resolved = resolve("action=zoom", &["zoom".to_string()]).unwrap();
        assert!(!resolved.state.gallery.zoomed);
        assert_eq!(resolved.applied, vec![PageAction::ToggleZoom, PageAction::ToggleZoom]);
    }

    #[test]
    fn test_resolve_rejects_unknown_action() {
        let err = resolve("", &["teleport".to_string()]).unwrap_err();
        assert!(format!("{:#}", err).contains("teleport"));
    }

    #[test]
    fn test_resolve_reports_bad_fields() {
        let resolved = resolve("view=mosaic", &[]).unwrap();
        assert_eq!(resolved.rejected.len(), 1);
        assert_eq!(resolved.state, PageState::default());
    }
}
