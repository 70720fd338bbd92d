use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use arbor::frontends::{InfixFrontend, JsonFrontend};
use arbor::{evaluate_with, EvalContext, Frontend, Node};

#[derive(Parser, Debug)]
#[command(name = "arbor", version, about = "Evaluate arithmetic expression trees")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and evaluate an expression
    Eval {
        #[command(flatten)]
        source: SourceArgs,

        /// Log every binary operation as it is performed
        #[arg(long)]
        trace: bool,

        /// Reject trees nested deeper than this (unbounded by default)
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Print an expression's parenthesized form and JSON tree
    Show {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Evaluate the built-in example tree
    Demo,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Expression text (infix by default)
    expr: String,

    /// Read the expression as a JSON tree
    #[arg(long)]
    json: bool,
}

impl SourceArgs {
    fn frontend(&self) -> Box<dyn Frontend> {
        if self.json {
            Box::new(JsonFrontend::new())
        } else {
            Box::new(InfixFrontend::new())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let trace = matches!(cli.command, Command::Eval { trace: true, .. } | Command::Demo);
    setup_logging(cli.verbose, trace);

    match execute_command(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbosity: u8, trace: bool) {
    let level = match verbosity {
        0 if trace => LevelFilter::DEBUG,
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over the command-line verbosity
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Eval {
            source,
            trace,
            max_depth,
        } => {
            let frontend = source.frontend();
            let tree = frontend
                .parse(&source.expr)
                .with_context(|| format!("failed to parse {} expression", frontend.name()))?;
            tracing::info!(depth = tree.depth(), operations = tree.operation_count(), "parsed tree");

            let ctx = match max_depth {
                Some(limit) => EvalContext::with_max_depth(limit),
                None => EvalContext::new(),
            }
            .with_trace(trace);
            let value = evaluate_with(&tree, &ctx).map_err(|e| anyhow!(frontend.format_error(&e)))?;
            println!("{}", value);
        }
        Command::Show { source } => {
            let frontend = source.frontend();
            let tree = frontend
                .parse(&source.expr)
                .with_context(|| format!("failed to parse {} expression", frontend.name()))?;
            println!("{}", tree);
            println!("{}", JsonFrontend::pretty().render(&tree)?);
        }
        Command::Demo => {
            let tree = demo_tree();
            let ctx = EvalContext::new().with_trace(true);
            let value = evaluate_with(&tree, &ctx)?;
            println!("{} = {}", tree, value);
        }
    }
    Ok(())
}

/// `(2 + 3) * (77 - 55) / 2`
fn demo_tree() -> Node {
    Node::divide(
        Node::multiply(
            Node::add(Node::leaf(2), Node::leaf(3)),
            Node::subtract(Node::leaf(77), Node::leaf(55)),
        ),
        Node::leaf(2),
    )
}
