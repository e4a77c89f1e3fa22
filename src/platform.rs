// Display subsystem abstraction
//
// The resolver only talks to the OS through `DisplayPlatform`. The Win32
// implementation wraps DXGI/D3D11; tests drive the resolver with a scripted fake.

#[cfg(test)]
pub(crate) mod fake;
#[cfg(windows)]
pub mod win32;

use crate::config::{FeatureLevel, MonitorFallback, WindowSource};
use crate::error::PlatformCode;
use crate::rate::DisplayMode;

/// Window handle (stored as isize so it can cross threads)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(pub isize);

/// OS monitor identifier (an `HMONITOR` on Windows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MonitorId(pub isize);

impl MonitorId {
    /// No monitor. Never matches a real output.
    pub const NONE: MonitorId = MonitorId(0);

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

pub type PlatformResult<T> = std::result::Result<T, PlatformCode>;

/// Calls into the OS display subsystem
///
/// Enumeration calls report "no more items" as `Ok(None)`; any other failure
/// is returned as the raw platform code.
pub trait DisplayPlatform {
    /// Rendering device plus the factory used to enumerate adapters.
    /// Either fully constructed or not at all.
    type Device;
    type Adapter;
    type Output;

    /// The window currently considered active.
    fn current_window(&self, source: WindowSource) -> WindowHandle;

    /// Monitor containing `window`; `None` if the OS reports no monitor.
    fn monitor_from_window(&self, window: WindowHandle, fallback: MonitorFallback)
        -> Option<MonitorId>;

    /// Create the device context, trying `levels` in order.
    fn create_device(&self, levels: &[FeatureLevel]) -> PlatformResult<Self::Device>;

    fn enum_adapter(&self, device: &Self::Device, index: u32)
        -> PlatformResult<Option<Self::Adapter>>;

    fn enum_output(&self, adapter: &Self::Adapter, index: u32)
        -> PlatformResult<Option<Self::Output>>;

    /// Monitor identifier from the output's live descriptor.
    fn output_monitor(&self, output: &Self::Output) -> PlatformResult<MonitorId>;

    /// Mode closest to an unconstrained request, i.e. the output's current mode.
    fn current_mode(&self, output: &Self::Output, device: &Self::Device)
        -> PlatformResult<DisplayMode>;
}
