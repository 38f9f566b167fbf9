//! Gnuplot subprocess adapter.
//!
//! Spawns `gnuplot`, streams the line protocol to its stdin and waits for
//! the process to finish. Charts are a convenience: if the binary is not
//! installed, emission is skipped and the run proceeds.

use std::io::{self, BufWriter, Write};
use std::process::{Command, Stdio};

use log::debug;

use super::{Chart, ChartSink};

/// Writes the gnuplot script for `chart` into `out`.
///
/// Setup directives (terminal, output file, log scale, grid, axis labels),
/// then a single `p` directive referencing one inline data block per
/// series, each terminated by a literal `e` line.
pub fn write_script<W: Write>(chart: &Chart, out: &mut W) -> io::Result<()> {
    writeln!(out, "set term png medium size {},{}", chart.size.0, chart.size.1)?;
    writeln!(out, "set output '{}'", chart.output)?;
    if chart.log_y {
        writeln!(out, "set logscale y 10")?;
    }
    if chart.grid {
        writeln!(out, "set grid")?;
    }
    if let Some(label) = &chart.y_label {
        writeln!(out, "set ylabel \"{label}\"")?;
    }
    if let Some(label) = &chart.x_label {
        writeln!(out, "set xlabel \"{label}\"")?;
    }

    write!(out, "p")?;
    for (k, series) in chart.series.iter().enumerate() {
        if k > 0 {
            write!(out, ",")?;
        }
        write!(out, " '-' w lp")?;
        if let Some(color) = series.color {
            write!(out, " lc rgb '{color}'")?;
        }
        write!(out, " title \"{}\"", series.title)?;
    }
    writeln!(out)?;

    for series in &chart.series {
        for (index, value) in &series.points {
            writeln!(out, "{index} {value:.6e}")?;
        }
        writeln!(out, "e")?;
    }

    Ok(())
}

/// Adapter spawning an external gnuplot process per chart.
pub struct GnuplotSink {
    program: String,
}

impl GnuplotSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "gnuplot".into(),
        }
    }

    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GnuplotSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSink for GnuplotSink {
    /// Renders one chart through gnuplot's stdin.
    ///
    /// If the process cannot be spawned the chart is skipped and `Ok(())`
    /// is returned; pipe I/O errors after a successful spawn do propagate.
    fn emit(&mut self, chart: &Chart) -> io::Result<()> {
        let mut child = match Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(err) => {
                debug!("gnuplot unavailable, skipping chart '{}': {err}", chart.output);
                return Ok(());
            }
        };

        if let Some(stdin) = child.stdin.take() {
            let mut pipe = BufWriter::new(stdin);
            write_script(chart, &mut pipe)?;
            pipe.flush()?;
        }
        child.wait()?;
        Ok(())
    }
}
