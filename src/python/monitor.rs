use pyo3::prelude::*;

use super::helpers::{parse_options, to_py_err};
use crate::platform::win32::Win32Platform;
use crate::resolver::RefreshRateResolver;

/// Refresh rate monitor for the active window
///
/// Keeps the graphics device and the resolved display output between calls,
/// so calling `query()` once per frame is cheap:
///   mon = RefreshRateMonitor()
///   num, den = mon.query()
///
/// Args:
///     source: Which window to follow, "active" or "foreground"
///     primary_fallback: Use the primary monitor when the window has none
#[pyclass(unsendable)]
pub(crate) struct RefreshRateMonitor {
    resolver: RefreshRateResolver<Win32Platform>,
}

#[pymethods]
impl RefreshRateMonitor {
    #[new]
    #[pyo3(signature = (source="active", primary_fallback=true))]
    fn new(source: &str, primary_fallback: bool) -> PyResult<Self> {
        let options = parse_options(source, primary_fallback)?;
        Ok(Self {
            resolver: RefreshRateResolver::with_options(Win32Platform, options),
        })
    }

    /// Refresh rate as an exact (numerator, denominator) pair
    fn query(&mut self) -> PyResult<(u32, u32)> {
        let rate = self.resolver.current_refresh_rate().map_err(to_py_err)?;
        Ok(rate.as_pair())
    }

    /// Refresh rate in Hz
    fn hz(&mut self) -> PyResult<f64> {
        let rate = self.resolver.current_refresh_rate().map_err(to_py_err)?;
        Ok(rate.hz())
    }

    /// Current mode as (width, height, numerator, denominator)
    fn mode(&mut self) -> PyResult<(u32, u32, u32, u32)> {
        let mode = self.resolver.current_mode().map_err(to_py_err)?;
        Ok((
            mode.width,
            mode.height,
            mode.refresh_rate.numerator,
            mode.refresh_rate.denominator,
        ))
    }
}
