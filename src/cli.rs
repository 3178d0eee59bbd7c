//! CLI - Command-line argument parsing
//!
//! Without a subcommand the interactive calculator starts. `calc` runs the
//! same field logic once from flags, so raw values like `1,000` are accepted.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::calculator::{CalculatorState, Field, XpNeeded, XpNeededError};
use crate::data::DEFAULT_TABLE_PATH;
use crate::progression::XpTable;
use crate::ui::Theme;

/// Idle Clans XP calculator
#[derive(Parser, Debug)]
#[command(name = "icgrind")]
#[command(about = "ICGrind - XP needed to reach a target level", long_about = None)]
#[command(version)]
pub struct Cli {
    /// RON file with the 120 level thresholds (overrides assets/data/xp_table.ron)
    #[arg(long, global = true)]
    pub table: Option<PathBuf>,

    /// Colour theme for this run
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Subcommand (if not provided, starts interactive TUI)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the XP needed once and print it
    Calc(CalcArgs),

    /// Print the level/XP table
    Table,

    /// Write the built-in table to a RON file for editing
    ExportTable {
        #[arg(default_value = DEFAULT_TABLE_PATH)]
        path: PathBuf,
    },
}

/// Current and target positions, each given as a level or a total XP
#[derive(Args, Debug, Default)]
pub struct CalcArgs {
    #[arg(long, conflicts_with = "current_xp", allow_hyphen_values = true)]
    pub current_level: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub current_xp: Option<String>,

    #[arg(long, conflicts_with = "target_xp", allow_hyphen_values = true)]
    pub target_level: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub target_xp: Option<String>,
}

impl CalcArgs {
    /// Feed each given value through the field it names
    pub fn apply(&self, state: &mut CalculatorState) {
        let edits = [
            (Field::CurrentLevel, &self.current_level),
            (Field::CurrentXp, &self.current_xp),
            (Field::TargetLevel, &self.target_level),
            (Field::TargetXp, &self.target_xp),
        ];
        for (field, raw) in edits {
            if let Some(raw) = raw {
                state.edit(field, raw);
            }
        }
    }
}

/// Run a one-shot calculation on `table`
pub fn run_calc(args: &CalcArgs, table: XpTable) -> Result<XpNeeded, XpNeededError> {
    let mut state = CalculatorState::new(table);
    args.apply(&mut state);
    log::info!(
        "calc: current {:?}, target {:?}",
        state.current,
        state.target
    );
    state.xp_needed()
}

/// Render the table as aligned text, one level per line
pub fn format_table(table: &XpTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:>12}", "Level", "Total XP");
    for (level, xp) in table.levels() {
        let _ = writeln!(out, "{:>5}  {:>12}", level, xp);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn calc_args(args: &[&str]) -> CalcArgs {
        match parse(args).command {
            Some(Commands::Calc(calc)) => calc,
            other => panic!("expected calc, got {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_is_tui() {
        let cli = parse(&["icgrind"]);
        assert!(cli.command.is_none());
        assert!(cli.table.is_none());
    }

    #[test]
    fn test_theme_flag() {
        let cli = parse(&["icgrind", "--theme", "light"]);
        assert_eq!(cli.theme, Some(Theme::Light));
    }

    #[test]
    fn test_calc_by_levels() {
        let args = calc_args(&["icgrind", "calc", "--target-level", "11"]);
        let needed = run_calc(&args, XpTable::default()).unwrap();
        assert_eq!(needed, XpNeeded { xp_needed: 1141, target_level: 11 });
    }

    #[test]
    fn test_calc_sanitizes_raw_values() {
        let args = calc_args(&["icgrind", "calc", "--current-xp", "1,000", "--target-xp", "5k000"]);
        let needed = run_calc(&args, XpTable::default()).unwrap();
        assert_eq!(needed.xp_needed, 4000);
        assert_eq!(needed.target_level, 22);
    }

    #[test]
    fn test_calc_rejects_lower_target() {
        let args = calc_args(&["icgrind", "calc", "--current-xp", "1000", "--target-level", "10"]);
        assert!(run_calc(&args, XpTable::default()).is_err());
    }

    #[test]
    fn test_calc_strips_sign() {
        let args = calc_args(&["icgrind", "calc", "--current-level", "-5", "--target-level", "10"]);
        let needed = run_calc(&args, XpTable::default()).unwrap();
        assert_eq!(needed.xp_needed, 988 - 303);
    }

    #[test]
    fn test_level_and_xp_conflict() {
        let result = Cli::try_parse_from(["icgrind", "calc", "--current-level", "5", "--current-xp", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_default_path() {
        match parse(&["icgrind", "export-table"]).command {
            Some(Commands::ExportTable { path }) => assert_eq!(path, PathBuf::from(DEFAULT_TABLE_PATH)),
            other => panic!("expected export-table, got {:?}", other),
        }
    }

    #[test]
    fn test_format_table() {
        let text = format_table(XpTable::builtin());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 121);
        assert_eq!(lines[10], "   10           988");
    }
}
