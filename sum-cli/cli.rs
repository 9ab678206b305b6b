use anyhow::Context as _;
use anyhow::Result;
use structopt::clap::AppSettings;
use structopt::StructOpt;
use sum_core::Addition;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(name = "sum", setting = AppSettings::AllowNegativeNumbers)]
struct Cli {
    /// Left operand
    #[structopt(parse(try_from_str = parse_operand))]
    a: i64,

    /// Right operand
    #[structopt(parse(try_from_str = parse_operand))]
    b: i64,

    /// Output as JSON
    #[structopt(long)]
    json: bool,

    /// Wrap around on overflow instead of failing
    #[structopt(long)]
    wrapping: bool,
}

fn parse_operand(s: &str) -> Result<i64> {
    s.parse::<i64>()
        .with_context(|| format!("`{}` is not a 64-bit integer", s))
}

fn evaluate(cli: &Cli) -> Result<Addition> {
    if cli.wrapping {
        return Ok(Addition {
            a: cli.a,
            b: cli.b,
            result: cli.a.wrapping_add(cli.b),
        });
    }
    Addition::checked(cli.a, cli.b).context("cannot add operands")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::from_args();
    debug!("arguments parsed: {:?}", cli);

    let addition = evaluate(&cli)?;
    info!(result = addition.result, "addition evaluated");

    if cli.json {
        let out = serde_json::to_string_pretty(&addition).context("failed to encode result")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}", addition);
    Ok(())
}
