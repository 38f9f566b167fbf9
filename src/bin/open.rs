//! Open-method driver: fixed-point iteration and Newton-Raphson on the
//! cubic `3x^3 + x - 3`, from a user-supplied starting guess.

use structopt::StructOpt;

use rootsweep::functions::{cubic, cubic_deriv, cubic_fixed_point, cubic_fixed_point_deriv};
use rootsweep::logging::init_logging;
use rootsweep::plot::{Chart, ChartSink, GnuplotSink, Series};
use rootsweep::real::Real;
use rootsweep::root_finding::config::IterationCfg;
use rootsweep::root_finding::open::{run_open, FixedPoint, NewtonRaphson, OpenError};
use rootsweep::table::print_iteration_table;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "open",
    about = "Open root finders on 3x^3 + x - 3 from a starting guess"
)]
struct Args {
    /// Starting guess.
    x0: Real,
    /// Desired relative precision, in percent.
    precision: Real,
}

fn main() -> Result<(), OpenError> {
    if let Err(err) = init_logging() {
        eprintln!("logging unavailable: {err}");
    }

    let args = Args::from_args();
    let cfg = IterationCfg::new().with_precision(args.precision / 100.0);

    println!(" Fixed-point:");
    let fixed_point = run_open(
        FixedPoint::new(cubic_fixed_point, cubic_fixed_point_deriv),
        args.x0,
        cfg,
    )?;
    print_iteration_table(&fixed_point);

    println!(" Newton-Raphson:");
    let newton = run_open(NewtonRaphson::new(cubic, cubic_deriv), args.x0, cfg)?;
    print_iteration_table(&newton);

    let chart = Chart::new("open.png")
        .with_log_y()
        .with_grid()
        .with_labels("#iteration", "Error")
        .with_series(Series::new("Fixed-point", fixed_point.error_points()))
        .with_series(Series::new("Newton-Raphson", newton.error_points()));

    if let Err(err) = GnuplotSink::new().emit(&chart) {
        log::warn!("failed to render {}: {err}", chart.output);
    }

    Ok(())
}
