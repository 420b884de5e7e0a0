//! Typed description of the plot sent to the client.
//!
//! Models only the handful of scatter and layout attributes the frontend
//! renders: one `lines`-mode trace for the density curve and one two-point
//! vertical trace per statistic marker, plus titles and sizing.

use serde::Serialize;

use crate::constants::*;
use crate::stats::CentralTendency;
use crate::types::{Color, ColorAssignment, DensityCurve};

/// A complete figure: trace list plus layout.
#[derive(Debug, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One scatter trace.
#[derive(Debug, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub name: &'static str,
    pub line: Line,
}

/// Line styling of a trace. `dash` is omitted from the JSON when unset.
#[derive(Debug, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<&'static str>,
}

/// Figure or axis title, in the charting library's nested form.
#[derive(Debug, Serialize)]
pub struct Title {
    pub text: &'static str,
}

/// One axis.
#[derive(Debug, Serialize)]
pub struct Axis {
    pub title: Title,
}

/// Figure layout.
#[derive(Debug, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub showlegend: bool,
    pub height: u32,
}

fn marker_trace(value: f64, top: f64, name: &'static str, color: Color) -> Trace {
    Trace {
        trace_type: "scatter",
        x: vec![value, value],
        y: vec![0.0, top],
        mode: "lines",
        name,
        line: Line {
            color: color.name(),
            width: MARKER_LINE_WIDTH,
            dash: Some(MARKER_DASH),
        },
    }
}

/// Assemble the figure: the density curve plus one dashed vertical marker
/// per statistic, colored per `colors`.
///
/// Markers span `[0, MARKER_HEADROOM * peak]` so they always clear the
/// curve. Trace order is density, mean, median, mode.
pub fn build_figure(
    curve: &DensityCurve,
    stats: &CentralTendency,
    colors: ColorAssignment,
) -> Figure {
    let top = MARKER_HEADROOM * curve.peak();
    let density = Trace {
        trace_type: "scatter",
        x: curve.x.clone(),
        y: curve.y.clone(),
        mode: "lines",
        name: DENSITY_TRACE_NAME,
        line: Line {
            color: DENSITY_LINE_COLOR,
            width: DENSITY_LINE_WIDTH,
            dash: None,
        },
    };

    Figure {
        data: vec![
            density,
            marker_trace(stats.mean, top, MEAN_TRACE_NAME, colors.mean),
            marker_trace(stats.median, top, MEDIAN_TRACE_NAME, colors.median),
            marker_trace(stats.mode, top, MODE_TRACE_NAME, colors.mode),
        ],
        layout: Layout {
            title: Title { text: PLOT_TITLE },
            xaxis: Axis {
                title: Title { text: XAXIS_TITLE },
            },
            yaxis: Axis {
                title: Title { text: YAXIS_TITLE },
            },
            showlegend: false,
            height: PLOT_HEIGHT,
        },
    }
}
