use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dummy_customers::config::Config;
use dummy_customers::error::Result;
use dummy_customers::faker::IdentityGenerator;
use dummy_customers::format::OutputFormat;
use dummy_customers::generator::{DummyCustomerGenerator, GenerateOptions};
use dummy_customers::store::JsonStore;
use dummy_customers::types::Locale;
use dummy_customers::website::WebsiteResolver;

const LOCALE_HELP: &str = "Supported Locales:

- cs_CZ
- ru_RU
- bg_BG
- en_US
- it_IT
- sr_RS
- sr_Cyrl_RS
- sr_Latn_RS
- pl_PL
- en_GB
- de_DE
- sk_SK
- fr_FR
- es_AR
- de_AT";

#[derive(Parser, Debug)]
#[command(name = "dummy-customers", version, about = "Storefront customer fixtures")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "DUMMY_CUSTOMERS_CONFIG")]
    config: Option<PathBuf>,

    /// JSON installation file (overrides `data_file` from the config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate dummy customers. You can specify a count and a locale.
    #[command(name = "customer:create:dummy", after_help = LOCALE_HELP)]
    CreateDummy(CreateDummyArgs),
}

#[derive(Args, Debug)]
struct CreateDummyArgs {
    /// Count
    count: u64,

    /// Locale
    locale: String,

    /// Website
    website: Option<String>,

    /// Generates random address information for generated customers
    #[arg(short, long)]
    address: bool,

    /// Sets all created customers to have the specified password
    #[arg(short, long, num_args = 0..=1, value_name = "PASSWORD")]
    password: Option<Option<String>>,

    #[arg(long, help = format_help(), value_parser = parse_format)]
    format: Option<OutputFormat>,
}

fn format_help() -> String {
    format!("Output Format. One of [{}]", OutputFormat::names())
}

fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse().map_err(|e: dummy_customers::error::DummyError| e.to_string())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("dummy-customers error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::CreateDummy(args) => create_dummy(args, &config, cli.data, cli.seed),
    }
}

fn create_dummy(
    args: CreateDummyArgs,
    config: &Config,
    data: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let locale: Locale = args.locale.parse()?;

    let data_path = data.unwrap_or_else(|| config.data_file.clone());
    let mut store = JsonStore::open(&data_path)?.with_hashing(config.password_hashing()?);

    let website = {
        let stdin = io::stdin();
        WebsiteResolver::new(store.websites()).resolve(
            args.website.as_deref(),
            stdin.lock(),
            io::stderr(),
        )?
    };
    let directory = store.directory().clone();

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let options = GenerateOptions {
        count: args.count,
        generate_address: args.address,
        // A bare `-p` behaves like no password at all.
        password: args.password.flatten(),
        format: args.format,
        batch_size: config.batch_size,
        password_length: config.password_length,
    };

    let stdout = io::stdout();
    let report = DummyCustomerGenerator::new(
        &mut store,
        &directory,
        IdentityGenerator::new(locale, rng),
        options,
    )
    .with_policy(config.region_policy())
    .run(&website, stdout.lock())?;

    info!(
        path = %store.path().display(),
        created = report.created,
        skipped = report.skipped,
        "installation updated"
    );
    Ok(())
}
