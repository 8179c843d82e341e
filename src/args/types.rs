use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

use super::validation::{
    check_readable_file, check_readable_file_and_json, parse_entrant, parse_format, parse_hole,
};
use crate::handicap::Entrant;
use crate::model::Format;

#[derive(Parser, Debug)]
#[command(author, version, about = "Match-play scoring for golf matches", long_about = None)]
pub struct Args {
    /// TOML file with defaults. Flags given on the command line win.
    #[arg(long, global = true, value_name = "CONFIG_TOML", value_parser = check_readable_file)]
    pub config_toml: Option<PathBuf>,
    /// Sqlite file holding match documents.
    #[arg(long, global = true, value_name = "DATABASE_PATH")]
    pub db: Option<PathBuf>,
    /// Spread between worst-ball and best-ball totals that earns Jekyll & Hyde.
    #[arg(long, global = true)]
    pub jekyll_hyde_min_spread: Option<i32>,
    /// Strokes over par the weaker partner needs on a Ham & Egg hole.
    #[arg(long, global = true)]
    pub ham_and_egg_struggle_min: Option<i32>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a match document from a file and print its status and result.
    Summarize {
        #[arg(long, value_name = "MATCH_JSON", value_parser = check_readable_file_and_json)]
        file: Value,
    },
    /// Store a match document, scoring it on the way in.
    Import {
        #[arg(long)]
        match_id: String,
        #[arg(long, value_name = "MATCH_JSON", value_parser = check_readable_file_and_json)]
        file: Value,
    },
    /// Recompute stored matches from hole 1.
    Rescore {
        #[arg(long, required_unless_present = "all")]
        match_id: Option<String>,
        #[arg(long)]
        all: bool,
    },
    /// Write one hole's raw input and rescore the match.
    Hole {
        #[arg(long)]
        match_id: String,
        #[arg(long, value_parser = parse_hole)]
        hole: u8,
        /// Hole input as JSON, e.g. '{"teamAPlayerGross":4,"teamBPlayerGross":5}'.
        #[arg(long, required_unless_present = "clear")]
        input: Option<String>,
        /// Remove the hole's input instead of writing it.
        #[arg(long)]
        clear: bool,
    },
    /// Print a stored match document.
    Show {
        #[arg(long)]
        match_id: String,
    },
    /// Build a new match document with strokes allocated from handicap indexes.
    Setup {
        #[arg(long, value_parser = parse_format)]
        format: Format,
        #[arg(long, value_name = "COURSE_JSON", value_parser = check_readable_file_and_json)]
        course: Value,
        /// `playerId:handicapIndex`, repeat for each teammate.
        #[arg(long = "team-a", value_parser = parse_entrant, required = true)]
        team_a: Vec<Entrant>,
        #[arg(long = "team-b", value_parser = parse_entrant, required = true)]
        team_b: Vec<Entrant>,
        /// Store the new match under this id instead of printing it.
        #[arg(long)]
        match_id: Option<String>,
    },
    /// Course handicap for one player.
    Handicap {
        #[arg(long, allow_hyphen_values = true)]
        index: String,
        #[arg(long)]
        slope: Option<String>,
        #[arg(long)]
        rating: Option<String>,
        #[arg(long)]
        par: Option<String>,
    },
    /// Play every player or team against every other one.
    VsAll {
        #[arg(long, value_parser = parse_format)]
        format: Format,
        #[arg(long, value_name = "COURSE_JSON", value_parser = check_readable_file_and_json)]
        course: Value,
        #[arg(long, value_name = "ENTRANTS_JSON", value_parser = check_readable_file_and_json)]
        entrants: Value,
    },
    /// Check a course file for 18 holes with unique numbers and hcpIndex values.
    ValidateCourse {
        #[arg(long, value_name = "COURSE_JSON", value_parser = check_readable_file_and_json)]
        file: Value,
    },
}
