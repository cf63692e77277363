use super::grammar::GrammarArgs;
use super::input::{InputArgs, fail};

pub struct CheckArgs {
    pub input: InputArgs,
    pub grammar: GrammarArgs,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let input = args.input.load().unwrap_or_else(|e| fail(e));
    let engine = args.grammar.build_engine().unwrap_or_else(|e| fail(e));

    if let Err(e) = engine.parse(&input.text) {
        eprintln!("{}", input.render_error(&e, args.color));
        std::process::exit(1);
    }

    // Silent on success
}
