//! Command-line interface.

use crate::calculator::{Calculator, Snapshot, copy_to_clipboard, group_digits, parse_inputs};
use crate::config::Config;
use crate::history::HistoryLog;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Basic/scientific calculator with calculation history
#[derive(Parser)]
#[command(name = "zcalc")]
#[command(version)]
#[command(about = "Basic/scientific calculator with calculation history")]
pub struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/zcalc/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the calculator window (default)
    Gui,
    /// Press a sequence of keys and print the result
    Eval(EvalArgs),
}

#[derive(clap::Args)]
pub struct EvalArgs {
    /// Keys to press, e.g. `3 + 4 + 5 =` or `30 sin`
    #[arg(required = true, num_args = 1..)]
    pub keys: Vec<String>,

    /// Print the full state as JSON
    #[arg(long)]
    pub json: bool,

    /// Also print the calculation history
    #[arg(long)]
    pub history: bool,

    /// Copy the final display value to the clipboard
    #[arg(long)]
    pub copy: bool,
}

/// Run the keys through a fresh calculator and print the outcome.
pub fn run_eval(args: &EvalArgs, config: &Config) -> anyhow::Result<()> {
    let keys = args.keys.join(" ");
    let inputs = parse_inputs(&keys).with_context(|| format!("Invalid keys: {}", keys))?;

    let mut calculator =
        Calculator::with_history(HistoryLog::with_capacity(config.history.capacity));
    for input in &inputs {
        calculator.apply(input);
    }
    tracing::info!(inputs = inputs.len(), display = calculator.display(), "evaluated keys");

    let snapshot = calculator.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_text(&snapshot, args.history, config.display.group_digits));
    }

    if args.copy {
        copy_to_clipboard(calculator.committed_display())?;
    }

    Ok(())
}

/// Plain-text rendering of a snapshot.
pub fn render_text(snapshot: &Snapshot, with_history: bool, grouped: bool) -> String {
    let mut out = String::new();

    if let Some(expression) = &snapshot.running_expression {
        out.push_str(expression);
        out.push('\n');
    }

    if grouped && !snapshot.edit_mode {
        out.push_str(&group_digits(&snapshot.display));
    } else {
        out.push_str(&snapshot.display);
    }
    out.push('\n');

    if with_history {
        if snapshot.history.is_empty() {
            out.push_str("\nNo calculations yet\n");
        } else {
            out.push_str("\nHistory:\n");
            for entry in &snapshot.history {
                out.push_str(&format!(
                    "  [{}] {} = {}\n",
                    entry.time_label(),
                    entry.expression,
                    entry.result
                ));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(keys: &str) -> Snapshot {
        let mut calculator = Calculator::new();
        for input in parse_inputs(keys).unwrap() {
            calculator.apply(&input);
        }
        calculator.snapshot()
    }

    #[test]
    fn test_cli_parses_eval() {
        let cli = Cli::try_parse_from(["zcalc", "-vv", "eval", "--json", "3", "-", "4", "="]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Eval(args)) => {
                assert_eq!(args.keys, ["3", "-", "4", "="]);
                assert!(args.json);
                assert!(!args.copy);
            }
            _ => panic!("expected eval command"),
        }
    }

    #[test]
    fn test_cli_defaults_to_gui() {
        let cli = Cli::try_parse_from(["zcalc"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_render_text_result_only() {
        assert_eq!(render_text(&snapshot("3 + 4 + 5 ="), false, false), "12\n");
    }

    #[test]
    fn test_render_text_pending() {
        assert_eq!(render_text(&snapshot("1 2 ×"), false, false), "12 ×\n12\n");
    }

    #[test]
    fn test_render_text_grouped() {
        assert_eq!(render_text(&snapshot("1 0 0 0 0"), false, true), "10,000\n");
    }

    #[test]
    fn test_render_text_with_history() {
        let text = render_text(&snapshot("5 ÷ 0 ="), true, false);
        assert!(text.starts_with("0\n\nHistory:\n"));
        assert!(text.contains("5 ÷ 0 = 0"));
    }

    #[test]
    fn test_render_text_empty_history() {
        let text = render_text(&snapshot("7"), true, false);
        assert_eq!(text, "7\n\nNo calculations yet\n");
    }
}
