//! Core constants: dataset and grid sizes, plot text and styling, and the
//! localized result messages.
//!
//! The UI strings are Russian, matching the statistics-course frontend
//! this service was built for. They are part of the wire contract, so
//! they are kept verbatim.

/// Number of values drawn per generated dataset.
pub const SAMPLE_SIZE: usize = 1000;

/// Number of evaluation points in the density grid.
pub const GRID_SIZE: usize = 1000;

/// Margin added below the sample minimum and above the maximum when
/// building the density grid.
pub const GRID_MARGIN: f64 = 1.0;

/// Statistic marker lines extend to this multiple of the curve peak, so
/// they always poke above the density line.
pub const MARKER_HEADROOM: f64 = 1.1;

// ── Plot text ───────────────────────────────────────────────────────

/// Plot title: "Identify the mode, median and mean".
pub const PLOT_TITLE: &str = "Определите моду, медиану и среднее";

/// X-axis title: "Value".
pub const XAXIS_TITLE: &str = "Значение";

/// Y-axis title: "Probability density".
pub const YAXIS_TITLE: &str = "Плотность вероятности";

/// Density trace name: "Density".
pub const DENSITY_TRACE_NAME: &str = "Плотность";

/// Mean marker trace name: "Mean".
pub const MEAN_TRACE_NAME: &str = "Среднее";

/// Median marker trace name: "Median".
pub const MEDIAN_TRACE_NAME: &str = "Медиана";

/// Mode marker trace name: "Mode".
pub const MODE_TRACE_NAME: &str = "Мода";

// ── Plot styling ────────────────────────────────────────────────────

/// Figure height in pixels.
pub const PLOT_HEIGHT: u32 = 500;

/// Line color of the density curve.
pub const DENSITY_LINE_COLOR: &str = "black";

/// Line width of the density curve.
pub const DENSITY_LINE_WIDTH: u32 = 2;

/// Line width of the statistic markers.
pub const MARKER_LINE_WIDTH: u32 = 3;

/// Dash style of the statistic markers.
pub const MARKER_DASH: &str = "dash";

// ── Result messages ─────────────────────────────────────────────────

/// Returned when all three guesses match: "Correct, well done!!".
pub const RESULT_CORRECT: &str = "Верно, молодец!!";

/// Returned on any mismatch: "Wrong :(( Refresh the page and try again!".
pub const RESULT_INCORRECT: &str = "Неверно:(( Обнови сайт и попробуй еще раз!";
