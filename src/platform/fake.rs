// Scripted display platform for resolver tests

use std::cell::{Cell, RefCell};

use super::{DisplayPlatform, MonitorId, PlatformResult, WindowHandle};
use crate::config::{FeatureLevel, MonitorFallback, WindowSource};
use crate::error::PlatformCode;
use crate::rate::{DisplayMode, RefreshRate};

pub(crate) const DEVICE_REMOVED: PlatformCode = PlatformCode(0x887A_0005_u32 as i32);
pub(crate) const INVALID_CALL: PlatformCode = PlatformCode(0x887A_0001_u32 as i32);

/// One scripted output: what its descriptor and mode queries return.
#[derive(Debug, Clone)]
pub(crate) struct FakeOutput {
    pub monitor: PlatformResult<MonitorId>,
    pub mode: PlatformResult<DisplayMode>,
}

impl FakeOutput {
    pub fn on(monitor: isize, numerator: u32, denominator: u32) -> Self {
        Self {
            monitor: Ok(MonitorId(monitor)),
            mode: Ok(DisplayMode {
                width: 1920,
                height: 1080,
                refresh_rate: RefreshRate::new(numerator, denominator),
            }),
        }
    }

    pub fn broken_descriptor() -> Self {
        Self {
            monitor: Err(INVALID_CALL),
            mode: Err(INVALID_CALL),
        }
    }
}

#[derive(Debug)]
pub(crate) struct FakeDevice {
    pub serial: u32,
}

/// Display topology plus call counters. All state is interior-mutable so a
/// test can rearrange monitors while the resolver owns the platform.
#[derive(Default)]
pub(crate) struct FakePlatform {
    pub window: Cell<WindowHandle>,
    pub nearest: Cell<Option<MonitorId>>,
    pub primary: Cell<Option<MonitorId>>,
    pub adapters: RefCell<Vec<Vec<FakeOutput>>>,

    pub device_error: Cell<Option<PlatformCode>>,
    pub adapter_error: Cell<Option<(u32, PlatformCode)>>,
    pub output_error: Cell<Option<((u32, u32), PlatformCode)>>,

    pub device_creations: Cell<u32>,
    pub adapter_calls: Cell<u32>,
    pub output_calls: Cell<u32>,
    pub descriptor_calls: Cell<u32>,
    pub requested_levels: RefCell<Vec<FeatureLevel>>,
    pub fallbacks_used: RefCell<Vec<MonitorFallback>>,
    pub last_source: Cell<Option<WindowSource>>,
}

impl FakePlatform {
    pub fn new(adapters: Vec<Vec<FakeOutput>>) -> Self {
        Self {
            window: Cell::new(WindowHandle(0x10)),
            adapters: RefCell::new(adapters),
            ..Default::default()
        }
    }

    /// Put the active window on `monitor`.
    pub fn move_window_to(&self, monitor: isize) {
        self.nearest.set(Some(MonitorId(monitor)));
    }

    pub fn set_output(&self, adapter: usize, output: usize, scripted: FakeOutput) {
        self.adapters.borrow_mut()[adapter][output] = scripted;
    }

    /// Enumeration calls (adapters + outputs) made so far.
    pub fn enumeration_calls(&self) -> u32 {
        self.adapter_calls.get() + self.output_calls.get()
    }

    fn output(&self, (adapter, output): (u32, u32)) -> FakeOutput {
        self.adapters.borrow()[adapter as usize][output as usize].clone()
    }
}

impl DisplayPlatform for FakePlatform {
    type Device = FakeDevice;
    type Adapter = u32;
    type Output = (u32, u32);

    fn current_window(&self, source: WindowSource) -> WindowHandle {
        self.last_source.set(Some(source));
        self.window.get()
    }

    fn monitor_from_window(
        &self,
        _window: WindowHandle,
        fallback: MonitorFallback,
    ) -> Option<MonitorId> {
        self.fallbacks_used.borrow_mut().push(fallback);
        match fallback {
            MonitorFallback::Nearest => self.nearest.get(),
            MonitorFallback::Primary => self.primary.get(),
        }
    }

    fn create_device(&self, levels: &[FeatureLevel]) -> PlatformResult<FakeDevice> {
        *self.requested_levels.borrow_mut() = levels.to_vec();
        if let Some(code) = self.device_error.get() {
            return Err(code);
        }
        let serial = self.device_creations.get() + 1;
        self.device_creations.set(serial);
        Ok(FakeDevice { serial })
    }

    fn enum_adapter(&self, _device: &FakeDevice, index: u32) -> PlatformResult<Option<u32>> {
        self.adapter_calls.set(self.adapter_calls.get() + 1);
        if let Some((at, code)) = self.adapter_error.get() {
            if at == index {
                return Err(code);
            }
        }
        Ok(((index as usize) < self.adapters.borrow().len()).then_some(index))
    }

    fn enum_output(&self, adapter: &u32, index: u32) -> PlatformResult<Option<(u32, u32)>> {
        self.output_calls.set(self.output_calls.get() + 1);
        if let Some((at, code)) = self.output_error.get() {
            if at == (*adapter, index) {
                return Err(code);
            }
        }
        let count = self.adapters.borrow()[*adapter as usize].len();
        Ok(((index as usize) < count).then_some((*adapter, index)))
    }

    fn output_monitor(&self, output: &(u32, u32)) -> PlatformResult<MonitorId> {
        self.descriptor_calls.set(self.descriptor_calls.get() + 1);
        self.output(*output).monitor
    }

    fn current_mode(&self, output: &(u32, u32), _device: &FakeDevice) -> PlatformResult<DisplayMode> {
        self.output(*output).mode
    }
}
