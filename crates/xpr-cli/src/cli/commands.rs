//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Input and grammar flags shared by every subcommand.
fn with_grammar_args(cmd: Command) -> Command {
    cmd.arg(expr_arg())
        .arg(file_arg())
        .arg(binary_op_arg())
        .arg(unary_op_arg())
        .arg(ident_char_arg())
        .arg(no_defaults_arg())
        .arg(plugin_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("xpr")
        .about("Parse expressions with a configurable grammar")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(parse_command())
        .subcommand(check_command())
}

/// Parse an expression and print its AST.
pub fn parse_command() -> Command {
    let cmd = Command::new("parse")
        .about("Parse an expression and print its AST")
        .override_usage(
            "\
  xpr parse <EXPR>
  xpr parse -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  xpr parse 'a + b * c'                     # tree dump
  xpr parse 'a.b(c)' --json                 # ESTree-style JSON
  xpr parse 'a ? b : c' --plugin ternary    # enable a plugin
  xpr parse '2 ** 3' --binary-op '**:11:right'
  echo 'x // note' | xpr parse -f - --plugin comments"#,
        )
        .arg(json_arg());

    with_grammar_args(cmd)
}

/// Validate an expression.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate an expression")
        .override_usage(
            "\
  xpr check <EXPR>
  xpr check -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  xpr check 'f(a, b)'                       # silent on success
  xpr check -f rule.xpr --unary-op not      # custom operator
  xpr check 'a and b' --no-defaults --binary-op and:1"#,
        );

    with_grammar_args(cmd)
}
