//! Chart model and the sink seam the drivers hand their series to.
//!
//! Core logic never depends on a sink being available; the gnuplot adapter
//! in [`gnuplot`] degrades to a no-op when the external process cannot be
//! spawned.

use std::io;

use crate::real::Real;

pub mod gnuplot;

pub use gnuplot::GnuplotSink;

/// One plotted series: a title and `(index, value)` points.
#[derive(Debug, Clone)]
pub struct Series {
    pub title: String,
    pub color: Option<&'static str>,
    pub points: Vec<(i32, Real)>,
}

impl Series {
    #[must_use]
    pub fn new(title: impl Into<String>, points: Vec<(i32, Real)>) -> Self {
        Self {
            title: title.into(),
            color: None,
            points,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }
}

/// One output chart: a PNG file plus the series to draw into it.
#[derive(Debug, Clone)]
pub struct Chart {
    pub output: String,
    pub size: (u32, u32),
    pub log_y: bool,
    pub grid: bool,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub series: Vec<Series>,
}

impl Chart {
    #[must_use]
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            size: (640, 480),
            log_y: false,
            grid: false,
            x_label: None,
            y_label: None,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    #[must_use]
    pub fn with_grid(mut self) -> Self {
        self.grid = true;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }
}

/// Renders charts. Implementations decide what unavailability means.
pub trait ChartSink {
    fn emit(&mut self, chart: &Chart) -> io::Result<()>;
}
