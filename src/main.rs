use clap::Parser;
use ipv4_subnet_calc::config::{self, OutputFormat, Settings};
use ipv4_subnet_calc::{calculate, read_inputs, validate_all};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::io;
use std::process::ExitCode;

/// Calculate IPv4 subnet properties from CIDR notation.
#[derive(Parser, Debug)]
#[command(name = "subnet-calc", version)]
struct Cli {
    /// CIDR notations such as 192.168.1.0/24; read from stdin when omitted.
    cidrs: Vec<String>,
    /// Output format [env: SUBNET_CALC_FORMAT]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
    /// Only report whether each input is valid.
    #[arg(short, long)]
    validate: bool,
    /// Use the built-in example CIDRs as input.
    #[arg(long)]
    examples: bool,
    /// Separator between octets of binary output [env: SUBNET_CALC_BINARY_SEPARATOR]
    #[arg(long)]
    separator: Option<String>,
    /// Disable coloured output [env: SUBNET_CALC_NO_COLOR]
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let (mut settings, ignored) = Settings::from_env();
    if let Some(format) = cli.format {
        settings.format = format;
    }
    if let Some(separator) = cli.separator {
        settings.binary_separator = separator;
    }
    if cli.no_color {
        settings.color = false;
    }
    init_logging(&settings.log_config)?;
    for message in &ignored {
        log::warn!("{message}");
    }
    log::info!("#Start main() {settings:?}");

    if !settings.color {
        colored::control::set_override(false);
    }

    let inputs: Vec<String> = if cli.examples {
        config::EXAMPLE_CIDRS.iter().map(|s| s.to_string()).collect()
    } else if cli.cidrs.is_empty() {
        read_inputs(io::stdin().lock())?
    } else {
        cli.cidrs
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let failed = if cli.validate {
        validate_all(&inputs, &settings, &mut stdout.lock())?
    } else {
        calculate(&inputs, &settings, &mut stdout.lock(), &mut stderr.lock())?
    };

    Ok(if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Initialize log4rs from `log_config`, or log warnings to stderr when the file is missing.
fn init_logging(log_config: &str) -> Result<(), Box<dyn Error>> {
    if std::path::Path::new(log_config).exists() {
        log4rs::init_file(log_config, Default::default())?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
