//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so `parse` and `check` can share the
//! same input and grammar flags.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use crate::commands::grammar::BinaryOpSpec;

/// Inline expression text (positional).
pub fn expr_arg() -> Arg {
    Arg::new("expr")
        .value_name("EXPR")
        .conflicts_with("file")
        .help("Expression to parse")
}

/// Read the expression from a file, or stdin with `-` (-f/--file).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the expression from FILE (`-` for stdin)")
}

/// Extra binary operator (--binary-op, repeatable).
pub fn binary_op_arg() -> Arg {
    Arg::new("binary_op")
        .long("binary-op")
        .value_name("OP:PREC[:right]")
        .action(ArgAction::Append)
        .value_parser(|s: &str| s.parse::<BinaryOpSpec>())
        .help("Add a binary operator with the given precedence")
}

/// Extra unary operator (--unary-op, repeatable).
pub fn unary_op_arg() -> Arg {
    Arg::new("unary_op")
        .long("unary-op")
        .value_name("OP")
        .action(ArgAction::Append)
        .help("Add a prefix unary operator")
}

/// Extra identifier character (--ident-char, repeatable).
pub fn ident_char_arg() -> Arg {
    Arg::new("ident_char")
        .long("ident-char")
        .value_name("C")
        .action(ArgAction::Append)
        .value_parser(value_parser!(char))
        .help("Allow an additional character in identifiers")
}

/// Start from an empty operator table (--no-defaults).
pub fn no_defaults_arg() -> Arg {
    Arg::new("no_defaults")
        .long("no-defaults")
        .action(ArgAction::SetTrue)
        .help("Clear default operators and literals before applying flags")
}

/// Bundled plugin (--plugin, repeatable).
pub fn plugin_arg() -> Arg {
    Arg::new("plugin")
        .long("plugin")
        .value_name("NAME")
        .action(ArgAction::Append)
        .value_parser(["ternary", "comments"])
        .help("Enable a bundled plugin")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Emit JSON instead of the tree dump (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the AST as JSON")
}
