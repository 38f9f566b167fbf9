//! Bracketing driver: bisection and false position on the cubic
//! `3x^3 + x - 3` over `[0, 1]`, with per-iteration tables and an error
//! convergence chart.

use structopt::StructOpt;

use rootsweep::functions::cubic;
use rootsweep::logging::init_logging;
use rootsweep::plot::{Chart, ChartSink, GnuplotSink, Series};
use rootsweep::real::Real;
use rootsweep::root_finding::algorithms::BracketMethod;
use rootsweep::root_finding::bracket::{run_bracketing, BracketError};
use rootsweep::root_finding::config::IterationCfg;
use rootsweep::table::print_iteration_table;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "bracketing",
    about = "Bracketing root finders on 3x^3 + x - 3 over [0, 1]"
)]
struct Args {
    /// Desired precision, in percent of interval magnitude.
    precision: Real,
}

fn main() -> Result<(), BracketError> {
    if let Err(err) = init_logging() {
        eprintln!("logging unavailable: {err}");
    }

    let args = Args::from_args();
    let cfg = IterationCfg::new().with_precision(args.precision / 100.0);
    let (lower, upper) = (0.0, 1.0);

    println!(" Bi-section:");
    let bisection = run_bracketing(cubic, BracketMethod::Bisection, lower, upper, cfg)?;
    print_iteration_table(&bisection);

    println!(" False position:");
    let false_position =
        run_bracketing(cubic, BracketMethod::FalsePosition, lower, upper, cfg)?;
    print_iteration_table(&false_position);

    let chart = Chart::new("bracketing.png")
        .with_log_y()
        .with_grid()
        .with_labels("#iteration", "Error")
        .with_series(Series::new(
            BracketMethod::Bisection.name(),
            bisection.error_points(),
        ))
        .with_series(Series::new(
            BracketMethod::FalsePosition.name(),
            false_position.error_points(),
        ));

    if let Err(err) = GnuplotSink::new().emit(&chart) {
        log::warn!("failed to render {}: {err}", chart.output);
    }

    Ok(())
}
