use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io::BufRead;
use std::io::BufReader;
use tinycalc::{Engine, EngineOptions, Environment, Outcome, render_error};
use tracing::debug;

/// The line that ends a session.
const QUIT: &str = "q";

/// tinycalc - An interactive single-character arithmetic evaluator
#[derive(Parser, Debug)]
#[command(name = "tinycalc")]
#[command(about = "Evaluate arithmetic expressions", long_about = None)]
struct Args {
    /// Print the parsed tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Maximum nesting depth for parsing and evaluation
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn engine_options(&self) -> EngineOptions {
        match self.max_depth {
            Some(depth) => EngineOptions {
                max_parse_depth: depth,
                max_eval_depth: depth,
            },
            None => EngineOptions::default(),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

fn interpret_input(
    engine: &Engine,
    env: &mut Environment,
    input: &str,
    debug_parse: bool,
) -> Flow {
    let input = input.trim();
    if input == QUIT {
        return Flow::Quit;
    }
    if input.is_empty() {
        return Flow::Continue;
    }

    let parsed = match engine.parse(input) {
        Ok(parsed) => parsed,
        Err(e) => {
            render_error(input, &e);
            return Flow::Continue;
        }
    };

    if debug_parse {
        println!("{}", parsed.expr);
    }

    match engine.execute_expr(env, &parsed) {
        Ok(Outcome::Value(value)) => println!("{}", value),
        Ok(Outcome::Assigned { name, value }) => debug!(%name, value, "stored"),
        Err(e) => render_error(input, &e),
    }

    Flow::Continue
}

fn run_interactive(engine: &Engine, env: &mut Environment, debug_parse: bool) -> Result<()> {
    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic(">>".to_string()),
        DefaultPromptSegment::Empty,
    );

    println!("tinycalc - Type expressions to evaluate ('{QUIT}', Ctrl+D or Ctrl+C to exit)");

    loop {
        let sig = line_editor
            .read_line(&prompt)
            .into_diagnostic()
            .wrap_err("reading input line failed")?;

        match sig {
            Signal::Success(buffer) => {
                if let Flow::Quit = interpret_input(engine, env, &buffer, debug_parse) {
                    return Ok(());
                }
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nGoodbye!");
                return Ok(());
            }
        }
    }
}

fn run_piped(engine: &Engine, env: &mut Environment, debug_parse: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());

    for line in reader.lines() {
        let line = line
            .into_diagnostic()
            .wrap_err("reading line from stdin failed")?;

        if let Flow::Quit = interpret_input(engine, env, &line, debug_parse) {
            break;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::new(args.engine_options());
    let mut env = Environment::new();

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        interpret_input(&engine, &mut env, expr, args.debug_parse);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    if atty::is(atty::Stream::Stdin) {
        run_interactive(&engine, &mut env, args.debug_parse)
    } else {
        run_piped(&engine, &mut env, args.debug_parse)
    }
}
