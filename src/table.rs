//! Fixed-width console tables for the run reports.

use crate::diff::analyzer::SweepReport;
use crate::root_finding::report::{RunReport, Termination};

/// Prints the `#iteration | x | error` table for a driver run.
///
/// Row 0 shows the iteration-0 value twice (the sentinel magnitude for
/// bracketing runs, the starting guess for open runs). The terminating
/// iteration has no row; it is represented by the break annotation.
pub fn print_iteration_table(report: &RunReport) {
    println!(" ----------------------------------------------");
    println!(" | #iteration |       x       |     error     |");
    println!(" ----------------------------------------------");
    println!("            0 | {:.7e} | {:.7e} |", report.initial, report.initial);
    for record in &report.trace {
        println!(
            " | {:10} | {:.7e} | {:.7e} |",
            record.index + 1,
            record.value,
            record.error
        );
    }
    match report.termination {
        Termination::PrecisionReached => {
            println!(" |    **Break: Reached desired precision**    |");
        }
        Termination::ExactRoot => {
            println!(" | **Breaking as reached maximum precision**  |");
        }
        Termination::BudgetExhausted => {}
    }
    println!(" ----------------------------------------------");
    println!();
}

/// Prints the step-size sweep table of the finite-difference analyzer.
pub fn print_sweep_table(report: &SweepReport) {
    println!(" ---------------------------------------------------------------");
    println!(" | step-size | error-forward | error-backward | error-centered |");
    println!(" ---------------------------------------------------------------");
    for sample in &report.samples {
        println!(
            " | {:9} |  {:.6e} |   {:.6e} |   {:.6e} |",
            sample.exponent, sample.forward, sample.backward, sample.centered
        );
    }
    println!(" ---------------------------------------------------------------");
}
