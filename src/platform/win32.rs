// DXGI / D3D11 display platform

use tracing::debug;
use windows::core::Interface;
use windows::Win32::Foundation::{E_FAIL, HMODULE, HWND};
use windows::Win32::Graphics::Direct3D::*;
use windows::Win32::Graphics::Direct3D11::*;
use windows::Win32::Graphics::Dxgi::*;
use windows::Win32::Graphics::Gdi::{
    MonitorFromWindow, HMONITOR, MONITOR_DEFAULTTONEAREST, MONITOR_DEFAULTTOPRIMARY,
};
use windows::Win32::UI::Input::KeyboardAndMouse::GetActiveWindow;
use windows::Win32::UI::WindowsAndMessaging::GetForegroundWindow;

use super::{DisplayPlatform, MonitorId, PlatformResult, WindowHandle};
use crate::config::{FeatureLevel, MonitorFallback, WindowSource};
use crate::error::PlatformCode;
use crate::rate::{DisplayMode, RefreshRate};

/// D3D11 device and the DXGI factory that owns its adapter
pub struct D3D11Context {
    pub device: ID3D11Device,
    pub factory: IDXGIFactory,
}

/// Stateless Win32 implementation of [`DisplayPlatform`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Platform;

impl DisplayPlatform for Win32Platform {
    type Device = D3D11Context;
    type Adapter = IDXGIAdapter;
    type Output = IDXGIOutput;

    fn current_window(&self, source: WindowSource) -> WindowHandle {
        // SAFETY: both calls take no arguments and return a possibly-null HWND.
        let hwnd = unsafe {
            match source {
                WindowSource::Active => GetActiveWindow(),
                WindowSource::Foreground => GetForegroundWindow(),
            }
        };
        WindowHandle(hwnd.0 as isize)
    }

    fn monitor_from_window(
        &self,
        window: WindowHandle,
        fallback: MonitorFallback,
    ) -> Option<MonitorId> {
        let flags = match fallback {
            MonitorFallback::Nearest => MONITOR_DEFAULTTONEAREST,
            MonitorFallback::Primary => MONITOR_DEFAULTTOPRIMARY,
        };
        // SAFETY: MonitorFromWindow accepts any HWND value, including null or stale
        // handles, and returns a null HMONITOR when it cannot find one.
        let hmonitor = unsafe { MonitorFromWindow(HWND(window.0 as *mut _), flags) };
        monitor_id(hmonitor)
    }

    fn create_device(&self, levels: &[FeatureLevel]) -> PlatformResult<D3D11Context> {
        create_device_context(levels)
    }

    fn enum_adapter(
        &self,
        device: &D3D11Context,
        index: u32,
    ) -> PlatformResult<Option<IDXGIAdapter>> {
        // SAFETY: EnumAdapters only reads the index and returns an owned COM pointer.
        not_found_as_none(unsafe { device.factory.EnumAdapters(index) })
    }

    fn enum_output(
        &self,
        adapter: &IDXGIAdapter,
        index: u32,
    ) -> PlatformResult<Option<IDXGIOutput>> {
        // SAFETY: as above.
        not_found_as_none(unsafe { adapter.EnumOutputs(index) })
    }

    fn output_monitor(&self, output: &IDXGIOutput) -> PlatformResult<MonitorId> {
        // SAFETY: GetDesc fills a DXGI_OUTPUT_DESC it owns and returns it by value.
        let desc = unsafe { output.GetDesc()? };
        Ok(monitor_id(desc.Monitor).unwrap_or(MonitorId::NONE))
    }

    fn current_mode(
        &self,
        output: &IDXGIOutput,
        device: &D3D11Context,
    ) -> PlatformResult<DisplayMode> {
        // An all-zero request leaves every field unconstrained, which makes
        // DXGI answer with the mode the output is currently running.
        let request = DXGI_MODE_DESC::default();
        let mut closest = DXGI_MODE_DESC::default();

        // SAFETY: both pointers refer to live locals for the duration of the call.
        unsafe { output.FindClosestMatchingMode(&request, &mut closest, &device.device)? };

        Ok(DisplayMode {
            width: closest.Width,
            height: closest.Height,
            refresh_rate: RefreshRate::new(
                closest.RefreshRate.Numerator,
                closest.RefreshRate.Denominator,
            ),
        })
    }
}

/// Create the D3D11 device and walk device → DXGI device → adapter → factory.
///
/// Any failing step returns its code and nothing is kept.
fn create_device_context(levels: &[FeatureLevel]) -> PlatformResult<D3D11Context> {
    let levels: Vec<D3D_FEATURE_LEVEL> = levels
        .iter()
        .map(|&level| D3D_FEATURE_LEVEL(level as i32))
        .collect();

    let mut device = None;
    let mut selected = D3D_FEATURE_LEVEL::default();
    // SAFETY: out-pointers refer to locals; the feature level slice outlives the call.
    unsafe {
        D3D11CreateDevice(
            None,
            D3D_DRIVER_TYPE_HARDWARE,
            HMODULE::default(),
            D3D11_CREATE_DEVICE_FLAG(0),
            (!levels.is_empty()).then_some(levels.as_slice()),
            D3D11_SDK_VERSION,
            Some(&mut device),
            Some(&mut selected),
            None,
        )?;
    }
    let device: ID3D11Device = device.ok_or(PlatformCode(E_FAIL.0))?;

    let dxgi_device: IDXGIDevice = device.cast()?;
    // SAFETY: plain COM getters on valid interfaces.
    let factory: IDXGIFactory = unsafe {
        let adapter = dxgi_device.GetAdapter()?;
        adapter.GetParent()?
    };

    debug!("D3D11 device created (feature level 0x{:x})", selected.0);

    Ok(D3D11Context { device, factory })
}

fn not_found_as_none<T>(result: windows::core::Result<T>) -> PlatformResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.code() == DXGI_ERROR_NOT_FOUND => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn monitor_id(hmonitor: HMONITOR) -> Option<MonitorId> {
    if hmonitor.is_invalid() {
        None
    } else {
        Some(MonitorId(hmonitor.0 as isize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FEATURE_LEVELS;

    #[test]
    fn test_device_creation() {
        // Fails with the driver's code on machines without a hardware adapter
        let ctx = Win32Platform.create_device(&DEFAULT_FEATURE_LEVELS);
        assert!(ctx.is_ok(), "device creation failed: {:?}", ctx.err());
    }

    #[test]
    fn test_first_adapter_exists() {
        let platform = Win32Platform;
        let ctx = platform.create_device(&DEFAULT_FEATURE_LEVELS).unwrap();

        let adapter = platform.enum_adapter(&ctx, 0).unwrap();
        assert!(adapter.is_some(), "factory reported no adapters");
    }

    #[test]
    fn test_adapter_index_past_end_is_none() {
        let platform = Win32Platform;
        let ctx = platform.create_device(&DEFAULT_FEATURE_LEVELS).unwrap();

        assert!(platform.enum_adapter(&ctx, 4096).unwrap().is_none());
    }

    #[test]
    fn test_null_window_primary_fallback() {
        // A null window has no monitor of its own; the primary fallback always yields one
        let monitor = Win32Platform.monitor_from_window(WindowHandle(0), MonitorFallback::Primary);
        assert!(monitor.is_some());
    }
}
