use clap::{Arg, ArgAction, ArgMatches, Command};
use intpoly::{Poly, PolyError};
use num_bigint::BigInt;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const DEFAULT_FACTORS: [&str; 3] = ["2x + 5", "x + 1", "x + 4"];
const DEFAULT_DIVISOR: &str = "x - 5";

fn cli() -> Command {
    Command::new("Integer polynomial toolkit")
        .version("1.0")
        .about("Multiplies polynomials, then divides the product and searches its rational roots")
        .arg(
            Arg::new("factors")
                .help("Polynomials to multiply, e.g. \"2x^2 - 3x + 1\" (use -- before a leading minus)")
                .num_args(1..)
                .action(ArgAction::Append)
                .default_values(DEFAULT_FACTORS),
        )
        .arg(
            Arg::new("divisor")
                .short('d')
                .long("divisor")
                .help("Polynomial to divide the product by")
                .value_name("POLY")
                .allow_hyphen_values(true)
                .default_value(DEFAULT_DIVISOR),
        )
        .arg(
            Arg::new("roots")
                .long("roots")
                .help("Search the rational roots of the product")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("at")
                .long("at")
                .help("Evaluate the product at this integer")
                .value_parser(clap::value_parser!(i64))
                .value_name("X")
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("sorted")
                .long("sorted")
                .help("Print terms by descending degree instead of construction order")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log division and root search steps (-vv for every candidate)")
                .action(ArgAction::Count),
        )
}

fn init_logging(verbosity: u8) {
    if verbosity == 0 {
        return;
    }
    let level = if verbosity > 1 { Level::TRACE } else { Level::DEBUG };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), PolyError> {
    let sorted = matches.get_flag("sorted");
    let show = |p: &Poly| {
        if sorted {
            p.sorted_by_degree().to_string()
        } else {
            p.to_string()
        }
    };

    let factors = matches
        .get_many::<String>("factors")
        .into_iter()
        .flatten()
        .map(|s| s.parse::<Poly>())
        .collect::<Result<Vec<_>, _>>()?;
    let divisor: Poly = matches
        .get_one::<String>("divisor")
        .map_or(DEFAULT_DIVISOR, String::as_str)
        .parse()?;

    let product = factors.iter().fold(Poly::one(), |acc, f| acc * f);
    let (quotient, remainder) = product.div_rem(&divisor)?;

    println!("{}", show(&product));
    println!("{}", show(&quotient));
    println!("{}", show(&remainder));

    if let Some(&x) = matches.get_one::<i64>("at") {
        println!("f({}) = {}", x, product.image(BigInt::from(x)));
    }

    if matches.get_flag("roots") {
        let factorization = product.roots()?;
        let roots: Vec<String> = factorization.roots.iter().map(|r| r.to_string()).collect();
        let factors: Vec<String> = factorization.factors.iter().map(|f| format!("({})", show(f))).collect();
        println!("roots: {}", roots.join(", "));
        println!("factors: {}", factors.join(""));
    }

    Ok(())
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
