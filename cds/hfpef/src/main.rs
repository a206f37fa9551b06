use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hfpef::{execute, Config, FormKind, Invocation, OutputMode};
use hfpef_type::ParseMode;
use log::debug;

#[derive(Debug, Parser)]
#[command(
    name = "hfpef",
    version,
    about = "HFpEF clinical decision-support calculators",
    long_about = "hfpef computes heuristic HFpEF diagnostic and prognostic risk scores and\n\
        suggests treatment optimizations from entered clinical, hemodynamic, and\n\
        imaging measurements. Blank fields contribute nothing to a score.\n\n\
        EXAMPLES:\n\
        \n  hfpef diagnostic patient.json                    Score a JSON record\n\
        \n  hfpef prognostic -s age=72 -s mean_ecv=29        Score field values\n\
        \n  hfpef treatment --format json - < baseline.json  Read stdin, print JSON\n\
        \n  hfpef fields treatment                           List accepted fields",
    after_help = "The scores are heuristics for decision support, not validated diagnostic instruments."
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ./hfpef.toml if present, or $HFPEF_CONFIG)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score the likelihood of HFpEF
    Diagnostic(AssessArgs),
    /// Score the risk of adverse outcome
    Prognostic(AssessArgs),
    /// Suggest therapy changes from baseline findings and current medications
    Treatment(AssessArgs),
    /// List the field names a form accepts
    Fields {
        #[arg(value_enum)]
        form: FormKind,
    },
}

#[derive(Debug, Args, Clone)]
struct AssessArgs {
    /// JSON record of field values ('-' reads stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Set a field, applied after the JSON record (repeatable)
    #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
    set: Vec<String>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputMode>,

    /// Reject unparseable values and unknown fields instead of skipping them
    #[arg(long)]
    strict: bool,
}

fn log_filter(verbose: u8, config: &Config) -> String {
    match verbose {
        0 => config.log_level.clone().unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn invocation(form: FormKind, args: AssessArgs, config: &Config) -> Invocation {
    Invocation {
        form,
        input: args.input,
        set: args.set,
        format: args.format.unwrap_or(config.format),
        mode: if args.strict || config.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        },
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();

    let config = match Config::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose, &config)),
    )
    .init();
    match Config::locate(cli.config.as_deref()) {
        Some(path) => debug!("loaded config from {}", path.display()),
        None => debug!("no config file; using defaults"),
    }

    let (form, args) = match cli.command {
        Command::Fields { form } => {
            for field in form.fields() {
                println!("{field}");
            }
            return 0;
        }
        Command::Diagnostic(args) => (FormKind::Diagnostic, args),
        Command::Prognostic(args) => (FormKind::Prognostic, args),
        Command::Treatment(args) => (FormKind::Treatment, args),
    };

    match execute(&invocation(form, args, &config)) {
        Ok(out) => {
            print!("{out}");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn main() {
    std::process::exit(run_cli());
}
