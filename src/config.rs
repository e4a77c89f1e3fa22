/// Direct3D feature level requested when creating the device.
///
/// Discriminants are the `D3D_FEATURE_LEVEL` values, so ordering follows capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum FeatureLevel {
    V9_1 = 0x9100,
    V9_2 = 0x9200,
    V9_3 = 0x9300,
    V10_0 = 0xa000,
    V10_1 = 0xa100,
    V11_0 = 0xb000,
    V11_1 = 0xb100,
}

/// Feature levels tried when none are configured, highest first.
pub const DEFAULT_FEATURE_LEVELS: [FeatureLevel; 3] =
    [FeatureLevel::V11_0, FeatureLevel::V10_1, FeatureLevel::V10_0];

/// Which window counts as "the current window".
///
/// - `Active`: the active window attached to the calling thread's message queue.
/// - `Foreground`: the window the user is currently working with, system-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowSource {
    #[default]
    Active,
    Foreground,
}

impl WindowSource {
    /// Parse from a name ("active", "foreground").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "active" => Some(Self::Active),
            "foreground" => Some(Self::Foreground),
            _ => None,
        }
    }
}

/// Fallback used when looking up the monitor a window is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorFallback {
    Nearest,
    Primary,
}

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    feature_levels: Vec<FeatureLevel>,
    window_source: WindowSource,
    primary_fallback: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            feature_levels: DEFAULT_FEATURE_LEVELS.to_vec(),
            window_source: WindowSource::default(),
            primary_fallback: true,
        }
    }
}

impl ResolverOptions {
    /// Feature levels to request, highest first
    pub fn feature_levels(&self) -> &[FeatureLevel] {
        &self.feature_levels
    }

    pub fn window_source(&self) -> WindowSource {
        self.window_source
    }

    /// Whether a window with no nearest monitor falls back to the primary monitor
    pub fn primary_fallback(&self) -> bool {
        self.primary_fallback
    }

    /// Set the feature levels to request.
    ///
    /// The list is sorted highest first and de-duplicated. An empty list
    /// lets the runtime pick its own defaults.
    pub fn with_feature_levels(mut self, levels: &[FeatureLevel]) -> Self {
        let mut levels = levels.to_vec();
        levels.sort_unstable_by(|a, b| b.cmp(a));
        levels.dedup();
        self.feature_levels = levels;
        self
    }

    pub fn with_window_source(mut self, source: WindowSource) -> Self {
        self.window_source = source;
        self
    }

    pub fn with_primary_fallback(mut self, enabled: bool) -> Self {
        self.primary_fallback = enabled;
        self
    }
}
