//! Command-line front end: compiles a formula, runs the chosen solver, and
//! prints the iteration table plus a summary line.
//!
//! ```text
//! cargo run --example zof_cli -- --method bisection --function "x**2 - 2" --a 0 --b 2
//! cargo run --example zof_cli -- --method fixed-point --transform "cos(x)" --x0 0
//! ```

use clap::{Parser, ValueEnum};
use zof::expression::Formula;
use zof::render::{format_summary, format_trace};
use zof::root_finding::bisection::bisection;
use zof::root_finding::config::SolveCfg;
use zof::root_finding::fixed_point::fixed_point;
use zof::root_finding::modified_secant::{modified_secant, ModifiedSecantCfg};
use zof::root_finding::newton::newton;
use zof::root_finding::regula_falsi::regula_falsi;
use zof::root_finding::report::SolveReport;
use zof::root_finding::secant::secant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    Bisection,
    RegulaFalsi,
    Secant,
    Newton,
    FixedPoint,
    ModifiedSecant,
}

#[derive(Debug, Parser)]
#[command(name = "zof", about = "Zero of functions: classical root finding with iteration tables")]
struct Args {
    /// Iteration scheme to run
    #[arg(long, value_enum)]
    method: Method,

    /// Formula for f(x), e.g. "x**2 - 2"
    #[arg(long, default_value = "x")]
    function: String,

    /// Transform g(x) for fixed-point iteration, e.g. "cos(x)"
    #[arg(long)]
    transform: Option<String>,

    /// Left bracket endpoint (bisection, regula-falsi)
    #[arg(long)]
    a: Option<f64>,

    /// Right bracket endpoint (bisection, regula-falsi)
    #[arg(long)]
    b: Option<f64>,

    /// Initial estimate (secant, newton, fixed-point, modified-secant)
    #[arg(long)]
    x0: Option<f64>,

    /// Second initial estimate (secant)
    #[arg(long)]
    x1: Option<f64>,

    /// Perturbation fraction (modified-secant)
    #[arg(long)]
    delta: Option<f64>,

    /// Convergence tolerance
    #[arg(long, default_value_t = 1e-6)]
    tol: f64,

    /// Iteration cap
    #[arg(long, default_value_t = 100)]
    max_iter: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(report) => {
            print!("{}", format_trace(&report));
            println!("{}", format_summary(&report));
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<SolveReport, Box<dyn std::error::Error>> {
    let f = Formula::parse(&args.function)?;
    let cfg = SolveCfg::new().with_tol(args.tol).with_max_iter(args.max_iter);

    let report = match args.method {
        Method::Bisection => bisection(
            |x| f.eval(x),
            require(args.a, "--a")?,
            require(args.b, "--b")?,
            cfg,
        )?,
        Method::RegulaFalsi => regula_falsi(
            |x| f.eval(x),
            require(args.a, "--a")?,
            require(args.b, "--b")?,
            cfg,
        )?,
        Method::Secant => secant(
            |x| f.eval(x),
            require(args.x0, "--x0")?,
            require(args.x1, "--x1")?,
            cfg,
        )?,
        Method::Newton => newton(|x| f.eval(x), require(args.x0, "--x0")?, cfg)?,
        Method::FixedPoint => {
            let src = args
                .transform
                .as_deref()
                .ok_or("--transform is required for fixed-point")?;
            let g = Formula::parse(src)?;
            fixed_point(|x| g.eval(x), require(args.x0, "--x0")?, cfg)?
        }
        Method::ModifiedSecant => {
            let mut mcfg = ModifiedSecantCfg::new()
                .with_tol(args.tol)
                .with_max_iter(args.max_iter);
            if let Some(delta) = args.delta {
                mcfg = mcfg.with_delta(delta);
            }
            modified_secant(|x| f.eval(x), require(args.x0, "--x0")?, mcfg)?
        }
    };

    Ok(report)
}

fn require(value: Option<f64>, flag: &str) -> Result<f64, String> {
    value.ok_or_else(|| format!("{flag} is required for this method"))
}
