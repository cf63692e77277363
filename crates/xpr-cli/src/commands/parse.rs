use xpr_lib::AstPrinter;

use super::grammar::GrammarArgs;
use super::input::{InputArgs, fail};

pub struct ParseArgs {
    pub input: InputArgs,
    pub grammar: GrammarArgs,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: ParseArgs) {
    let input = args.input.load().unwrap_or_else(|e| fail(e));
    let engine = args.grammar.build_engine().unwrap_or_else(|e| fail(e));

    let ast = match engine.parse(&input.text) {
        Ok(ast) => ast,
        Err(e) => {
            eprintln!("{}", input.render_error(&e, args.color));
            std::process::exit(1);
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&ast).unwrap_or_else(|e| fail(e));
        println!("{json}");
    } else {
        print!("{}", AstPrinter::new(ast.as_ref()).dump());
    }
}
