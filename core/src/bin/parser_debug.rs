use std::env;
use tinycalc_core::parser;

fn main() {
    let Some(source) = env::args().nth(1) else {
        eprintln!("usage: parser_debug <expression>");
        return;
    };

    println!("Tokens:");
    for token in parser::tokenize(&source).tokens() {
        println!("  {:?} @ {}..{}", token.kind, token.span.0.start, token.span.0.end);
    }

    match parser::parse(&source) {
        Ok(expr) => {
            println!("Tree: {}", expr);
            println!("Infix: {}", expr.infix());
            println!("Parsed AST:\n{:#?}", expr);
        }
        Err(e) => eprintln!("Parse Error [{}]: {}", e.code(), e),
    }
}
