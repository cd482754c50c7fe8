use clap::{ArgAction, Parser as ClapParser, Subcommand, ValueEnum};
use choice_conditions::cli::{self, CheckOptions, CheckResult, CliError, ResolveOptions};
use choice_conditions::{TagPair, TagSet};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "choices")]
#[command(about = "Try out choice conditions: disable and hide dialog choices with expressions")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile and evaluate a single condition
    Check {
        /// The condition to evaluate
        expression: String,

        /// Variable table as JSON, e.g. '[0, 5]' or '{"3": 90}'
        #[arg(long)]
        vars: Option<String>,

        /// Only compile, print the grouped form
        #[arg(long)]
        syntax_only: bool,
    },

    /// Resolve a list of choice labels
    Resolve {
        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        #[command(flatten)]
        tags: TagArgs,
    },

    /// Show documentation, optionally for one category
    Docs {
        /// Category name (omit to list categories)
        category: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Convention {
    /// <dis>...</dis>
    Short,
    /// <disable>...</disable>
    Long,
}

#[derive(clap::Args)]
struct TagArgs {
    /// Disable marker convention
    #[arg(long, value_enum, default_value = "short")]
    convention: Convention,

    #[arg(long)]
    disable_open: Option<String>,

    #[arg(long)]
    disable_close: Option<String>,

    #[arg(long)]
    hide_open: Option<String>,

    #[arg(long)]
    hide_close: Option<String>,
}

impl TagArgs {
    fn into_tag_set(self) -> TagSet {
        let base = match self.convention {
            Convention::Short => TagSet::default(),
            Convention::Long => TagSet::long_form(),
        };
        let disable = TagPair::new(
            self.disable_open.unwrap_or(base.disable.open.clone()),
            self.disable_close.unwrap_or(base.disable.close.clone()),
        );
        let hide = TagPair::new(
            self.hide_open.unwrap_or(base.hide.open.clone()),
            self.hide_close.unwrap_or(base.hide.close.clone()),
        );
        base.with_disable(disable).with_hide(hide)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            expression,
            vars,
            syntax_only,
        } => run_check(expression, vars, syntax_only),
        Commands::Resolve {
            input,
            pretty,
            tags,
        } => run_resolve(input, pretty, tags.into_tag_set()),
        Commands::Docs { category: None } => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Docs {
            category: Some(category),
        } => cli::get_doc_category(&category).map(|content| print!("{}", content)),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(expression: String, vars: Option<String>, syntax_only: bool) -> Result<(), CliError> {
    let options = CheckOptions {
        expression,
        variables: vars,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid(grouped) => println!("{}", grouped),
        CheckResult::Success(output) => println!("{}", output),
    }
    Ok(())
}

fn run_resolve(input: Option<String>, pretty: bool, tags: TagSet) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let output = cli::execute_resolve(&ResolveOptions { input, tags })?;
    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);
    Ok(())
}
