//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap.
//! The grammar flags are collected once into [`GrammarArgs`] and shared.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::grammar::{BinaryOpSpec, GrammarArgs};
use crate::commands::input::InputArgs;
use crate::commands::parse::ParseArgs;

pub struct ParseParams {
    pub expr: Option<String>,
    pub file: Option<PathBuf>,
    pub grammar: GrammarArgs,
    pub json: bool,
    pub color: ColorChoice,
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: m.get_one::<String>("expr").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            grammar: grammar_from_matches(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            input: InputArgs {
                expr: p.expr,
                file: p.file,
            },
            grammar: p.grammar,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub expr: Option<String>,
    pub file: Option<PathBuf>,
    pub grammar: GrammarArgs,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: m.get_one::<String>("expr").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            grammar: grammar_from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: InputArgs {
                expr: p.expr,
                file: p.file,
            },
            grammar: p.grammar,
            color: p.color.should_colorize(),
        }
    }
}

fn grammar_from_matches(m: &ArgMatches) -> GrammarArgs {
    GrammarArgs {
        binary_ops: m
            .get_many::<BinaryOpSpec>("binary_op")
            .map(|v| v.cloned().collect())
            .unwrap_or_default(),
        unary_ops: m
            .get_many::<String>("unary_op")
            .map(|v| v.cloned().collect())
            .unwrap_or_default(),
        ident_chars: m
            .get_many::<char>("ident_char")
            .map(|v| v.copied().collect())
            .unwrap_or_default(),
        no_defaults: m.get_flag("no_defaults"),
        plugins: m
            .get_many::<String>("plugin")
            .map(|v| v.cloned().collect())
            .unwrap_or_default(),
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
