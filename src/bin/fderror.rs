//! Finite-difference error analyzer on the quartic
//! `0.1x^4 - 0.15x^3 - 0.5x^2 - 0.25x + 1.2`.
//!
//! For each evaluation point on the command line, sweeps step sizes
//! `10^-14` through `10^0`, prints the error table and renders one chart
//! per point.

use structopt::StructOpt;

use rootsweep::diff::analyzer::analyze;
use rootsweep::functions::{quartic, quartic_deriv, quartic_third};
use rootsweep::logging::init_logging;
use rootsweep::plot::{Chart, ChartSink, GnuplotSink, Series};
use rootsweep::real::{Real, PRECISION_NAME};
use rootsweep::table::print_sweep_table;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "fderror",
    about = "Finite-difference truncation/round-off error sweep"
)]
struct Args {
    /// Evaluation points.
    #[structopt(required = true)]
    points: Vec<Real>,
}

fn main() {
    if let Err(err) = init_logging() {
        eprintln!("logging unavailable: {err}");
    }

    let args = Args::from_args();
    println!("Using {PRECISION_NAME} precision");

    let mut sink = GnuplotSink::new();
    for &x in &args.points {
        let report = analyze(quartic, quartic_deriv, quartic_third, x);
        println!(
            "x= {:.6e}, optimal step size= {:.6e}",
            report.x, report.optimal_step
        );
        println!("Best result at 10^{}", report.best_exponent);
        print_sweep_table(&report);

        let chart = Chart::new(format!("{x}.png"))
            .with_log_y()
            .with_series(Series::new("centered", report.centered_points()).with_color("red"))
            .with_series(Series::new("forward", report.forward_points()))
            .with_series(Series::new("backward", report.backward_points()));

        if let Err(err) = sink.emit(&chart) {
            log::warn!("failed to render {}: {err}", chart.output);
        }
    }
}
