use pyo3::prelude::*;

use super::helpers::{parse_options, to_py_err};
use crate::platform::win32::Win32Platform;
use crate::resolver::RefreshRateResolver;

/// One-shot refresh rate query for the active window's display
///
/// Creates and drops the graphics device on every call.
/// For per-frame queries, keep a RefreshRateMonitor instead.
///
/// Args:
///     source: Which window to follow, "active" or "foreground"
///
/// Returns:
///     (numerator, denominator): exact refresh rate ratio, e.g. (60000, 1001)
#[pyfunction]
#[pyo3(signature = (source="active"))]
pub(crate) fn current_refresh_rate(source: &str) -> PyResult<(u32, u32)> {
    let options = parse_options(source, true)?;
    let mut resolver = RefreshRateResolver::with_options(Win32Platform, options);
    let rate = resolver.current_refresh_rate().map_err(to_py_err)?;
    Ok(rate.as_pair())
}
