use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use reckon::repl::ReplSession;
use reckon::{format_result, Associativity, Calculator, Engine, EngineConfig, SessionConfig};

#[derive(Debug, Parser)]
#[command(
    name = "reckon",
    version,
    about = "Evaluate arithmetic expressions",
    long_about = "reckon evaluates arithmetic expressions with operators, functions and constants.\n\n\
        EXAMPLES:\n\
        \n  reckon eval '2 + 3 * 4'             Evaluate one expression\n\
        \n  reckon eval 'sqrt(16)' 'fact(5)'    Evaluate several expressions\n\
        \n  reckon                              Start the interactive calculator"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Args)]
struct EngineArgs {
    /// Group chained `^` from the right, so 2^3^2 is 2^(3^2)
    #[arg(long = "right-assoc-power", global = true)]
    right_assoc_power: bool,

    /// Deepest parenthesis nesting accepted (1-10)
    #[arg(
        long = "max-depth",
        value_name = "N",
        global = true,
        value_parser = clap::value_parser!(u8).range(1..=10)
    )]
    max_depth: Option<u8>,
}

impl EngineArgs {
    fn config(&self) -> EngineConfig {
        let mut config = EngineConfig::default();
        if self.right_assoc_power {
            config.power_associativity = Associativity::Right;
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = usize::from(depth);
        }
        config
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate each expression and print its result
    Eval {
        #[arg(value_name = "EXPR", required = true, allow_hyphen_values = true)]
        expressions: Vec<String>,
    },
    /// Start the interactive calculator
    #[command(
        long_about = "Start the interactive calculator.\n\n\
            Type an expression to evaluate it, or one of the commands\n\
            help, history, clear, m+, mr, mc, memory, stats, quit."
    )]
    Repl,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG, when set, takes precedence over -v
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.format_timestamp(None).init();
}

fn run_eval(engine: Engine, expressions: &[String]) -> i32 {
    let mut rc = 0;
    for expression in expressions {
        match engine.evaluate(expression) {
            Ok(value) => println!("{}", format_result(value)),
            Err(err) => {
                eprintln!("error: {expression}: {err}");
                rc = 1;
            }
        }
    }
    rc
}

fn run_repl(engine: EngineConfig) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;

    let calculator = match Calculator::new(engine, SessionConfig::from_env()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: invalid session configuration: {e}");
            return 2;
        }
    };

    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    println!("reckon {} (type 'help' for commands)", env!("CARGO_PKG_VERSION"));
    let mut session = ReplSession::new(calculator);
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let reply = session.handle_line(&line);
                for l in reply.lines {
                    println!("{l}");
                }
                if reply.exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.engine.config();
    log::debug!("engine configuration: {config:?}");

    match cli.command.unwrap_or(Command::Repl) {
        Command::Eval { expressions } => run_eval(Engine::new(config), &expressions),
        Command::Repl => run_repl(config),
    }
}

fn main() {
    std::process::exit(run_cli());
}
