use clap::Parser;
use pearson64::{
    parse_hex, pearson_64bit, pearson_64bit_with_table, HexCase, PearsonError, PearsonTable,
    DEMO_INPUT,
};
use tracing_subscriber::EnvFilter;

/// Print the 64-bit Pearson digest of a byte string.
#[derive(Parser, Debug)]
#[command(name = "pearson64", version, about)]
struct Cli {
    /// Input bytes as hex, e.g. "55 AA 02 03". Defaults to 55AA020307609004.
    #[arg(short, long)]
    input: Option<String>,

    /// Generate the table from this seed instead of a fresh random one.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print lowercase hex digits.
    #[arg(long)]
    lower: bool,
}

fn run(cli: &Cli) -> Result<String, PearsonError> {
    let input = match &cli.input {
        Some(hex) => parse_hex(hex)?,
        None => DEMO_INPUT.to_vec(),
    };

    let digest = match cli.seed {
        Some(seed) => pearson_64bit_with_table(&PearsonTable::from_seed(seed)?, &input)?,
        None => pearson_64bit(&input)?,
    };

    let case = if cli.lower { HexCase::Lower } else { HexCase::Upper };
    Ok(digest.to_hex_with(case))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(hex) => println!("{hex}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
