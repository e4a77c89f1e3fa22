// Window → display output resolution with a cached output
//
// Query flow:
//   current window → monitor id → cached output still on that monitor?
//     yes → mode query
//     no  → (create device context) → enumerate adapters/outputs → cache match → mode query
//
// The cached output is re-validated on every call by re-reading its
// descriptor; it is only ever replaced or cleared, never left half-written.

use tracing::{debug, trace};

use crate::config::{MonitorFallback, ResolverOptions};
use crate::error::{RefreshRateError, Result};
use crate::platform::{DisplayPlatform, MonitorId, WindowHandle};
use crate::rate::{DisplayMode, RefreshRate};

/// Output matched to a monitor during enumeration
#[derive(Debug)]
pub struct ResolvedOutput<O> {
    pub output: O,
    /// Monitor the output was bound to when it was found
    pub monitor: MonitorId,
    pub adapter_index: u32,
    pub output_index: u32,
}

/// Device context plus the output cached against it
///
/// The cache lives inside the context: an output can only be cached once a
/// device exists to query it with.
pub struct DeviceContext<P: DisplayPlatform> {
    pub device: P::Device,
    output: Option<ResolvedOutput<P::Output>>,
}

impl<P: DisplayPlatform> DeviceContext<P> {
    fn new(device: P::Device) -> Self {
        Self {
            device,
            output: None,
        }
    }

    pub fn cached_output(&self) -> Option<&ResolvedOutput<P::Output>> {
        self.output.as_ref()
    }
}

/// Device context and output resolved for one query
struct Resolved<'a, P: DisplayPlatform> {
    device: &'a P::Device,
    output: &'a ResolvedOutput<P::Output>,
}

/// Refresh rate resolver
///
/// Owns the device context (created on first use, kept until drop) and the
/// output cached for the last window's monitor. Not synchronized: call it
/// from one thread, typically the render thread.
pub struct RefreshRateResolver<P: DisplayPlatform> {
    platform: P,
    options: ResolverOptions,
    context: Option<DeviceContext<P>>,
}

impl<P: DisplayPlatform> RefreshRateResolver<P> {
    pub fn new(platform: P) -> Self {
        Self::with_options(platform, ResolverOptions::default())
    }

    pub fn with_options(platform: P, options: ResolverOptions) -> Self {
        Self {
            platform,
            options,
            context: None,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Device context, if one has been created.
    pub fn device_context(&self) -> Option<&DeviceContext<P>> {
        self.context.as_ref()
    }

    /// Create the device context if needed and return it.
    pub fn ensure_device_context(&mut self) -> Result<&mut DeviceContext<P>> {
        ensure_context(&self.platform, &mut self.context, &self.options)
    }

    /// Monitor the window is on, with the configured fallback.
    pub fn monitor_for_window(&self, window: WindowHandle) -> MonitorId {
        let nearest = self
            .platform
            .monitor_from_window(window, MonitorFallback::Nearest);

        let monitor = match nearest {
            Some(monitor) => Some(monitor),
            None if self.options.primary_fallback() => self
                .platform
                .monitor_from_window(window, MonitorFallback::Primary),
            None => None,
        };

        monitor.unwrap_or(MonitorId::NONE)
    }

    /// Resolve the display output currently showing `window`.
    pub fn resolve_output(&mut self, window: WindowHandle) -> Result<&ResolvedOutput<P::Output>> {
        let target = self.monitor_for_window(window);
        let resolved = resolve(&self.platform, &mut self.context, &self.options, target)?;
        Ok(resolved.output)
    }

    /// Current mode of the output showing `window`.
    pub fn mode_for_window(&mut self, window: WindowHandle) -> Result<DisplayMode> {
        let target = self.monitor_for_window(window);
        let resolved = resolve(&self.platform, &mut self.context, &self.options, target)?;
        current_mode(&self.platform, &resolved)
    }

    /// Current mode of the output showing the active window.
    pub fn current_mode(&mut self) -> Result<DisplayMode> {
        let window = self.platform.current_window(self.options.window_source());
        self.mode_for_window(window)
    }

    /// Refresh rate of the display showing the active window.
    pub fn current_refresh_rate(&mut self) -> Result<RefreshRate> {
        self.current_mode().map(|mode| mode.refresh_rate)
    }
}

fn ensure_context<'a, P: DisplayPlatform>(
    platform: &P,
    slot: &'a mut Option<DeviceContext<P>>,
    options: &ResolverOptions,
) -> Result<&'a mut DeviceContext<P>> {
    let ctx = match slot.take() {
        Some(ctx) => ctx,
        None => {
            let device = platform
                .create_device(options.feature_levels())
                .map_err(RefreshRateError::InitializationFailed)?;
            debug!("device context initialized");
            DeviceContext::new(device)
        }
    };
    Ok(slot.insert(ctx))
}

fn resolve<'a, P: DisplayPlatform>(
    platform: &P,
    slot: &'a mut Option<DeviceContext<P>>,
    options: &ResolverOptions,
    target: MonitorId,
) -> Result<Resolved<'a, P>> {
    if let Some(ctx) = slot.as_mut() {
        if let Some(cached) = &ctx.output {
            // A failing descriptor is an error, not a reason to re-enumerate
            let current = platform
                .output_monitor(&cached.output)
                .map_err(RefreshRateError::DescriptorQueryFailed)?;

            // A null monitor never matches, even against a null target
            if current.is_none() || current != target {
                debug!(
                    cached = ?cached.monitor,
                    current = ?current,
                    target = ?target,
                    "cached output no longer on target monitor"
                );
                ctx.output = None;
            }
        }
    }

    let ctx = ensure_context(platform, slot, options)?;
    let output = match ctx.output.take() {
        Some(cached) => cached,
        None => find_output(platform, &ctx.device, target)?.ok_or(RefreshRateError::NotFound)?,
    };
    let output = ctx.output.insert(output);

    Ok(Resolved {
        device: &ctx.device,
        output,
    })
}

/// Walk adapters then outputs in index order; the first output on `target` wins.
fn find_output<P: DisplayPlatform>(
    platform: &P,
    device: &P::Device,
    target: MonitorId,
) -> Result<Option<ResolvedOutput<P::Output>>> {
    for adapter_index in 0..u32::MAX {
        let Some(adapter) = platform
            .enum_adapter(device, adapter_index)
            .map_err(RefreshRateError::EnumerationFailed)?
        else {
            trace!(adapters = adapter_index, ?target, "no output on target monitor");
            return Ok(None);
        };

        for output_index in 0..u32::MAX {
            let Some(output) = platform
                .enum_output(&adapter, output_index)
                .map_err(RefreshRateError::EnumerationFailed)?
            else {
                break;
            };

            match platform.output_monitor(&output) {
                Ok(monitor) if !monitor.is_none() && monitor == target => {
                    debug!(adapter_index, output_index, ?monitor, "resolved display output");
                    return Ok(Some(ResolvedOutput {
                        output,
                        monitor,
                        adapter_index,
                        output_index,
                    }));
                }
                Ok(_) => {}
                Err(code) => {
                    trace!(adapter_index, output_index, %code, "skipping output without descriptor");
                }
            }
        }
    }

    Ok(None)
}

fn current_mode<P: DisplayPlatform>(platform: &P, resolved: &Resolved<'_, P>) -> Result<DisplayMode> {
    platform
        .current_mode(&resolved.output.output, resolved.device)
        .map_err(RefreshRateError::ModeQueryFailed)
}
