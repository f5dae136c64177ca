use super::{validate, ConfigError, DecoderLimits, LIMITS_STANDARD, LIMITS_UNBOUNDED};

/// Builder used to assemble validated [`DecoderLimits`].
///
/// | Field | `Standard` | `Unbounded` |
/// |-------|------------|-------------|
/// | `max_buffer_bytes` | `1 MiB` | `u32::MAX` |
/// | `max_orders` | `256` | `u16::MAX` |
/// | `max_rings` | `128` | `u16::MAX` |
/// | `max_pool_entries` | `4096` | `u16::MAX` |
/// | `max_blob_bytes` | `1024` | `u16::MAX` |
#[derive(Debug, Clone)]
pub struct DecoderLimitsBuilder {
    pub max_buffer_bytes: u32,
    pub max_orders: u16,
    pub max_rings: u16,
    pub max_pool_entries: u16,
    pub max_blob_bytes: u16,
}

impl DecoderLimitsBuilder {
    /// Starts from the standard profile.
    pub fn new() -> Self {
        Self::from_profile(LimitsProfile::Standard)
    }

    pub fn from_profile(profile: LimitsProfile) -> Self {
        let base = match profile {
            LimitsProfile::Standard => LIMITS_STANDARD,
            LimitsProfile::Unbounded => LIMITS_UNBOUNDED,
        };
        Self {
            max_buffer_bytes: base.max_buffer_bytes,
            max_orders: base.max_orders,
            max_rings: base.max_rings,
            max_pool_entries: base.max_pool_entries,
            max_blob_bytes: base.max_blob_bytes,
        }
    }

    pub fn max_buffer_bytes(mut self, value: u32) -> Self {
        self.max_buffer_bytes = value;
        self
    }

    pub fn max_orders(mut self, value: u16) -> Self {
        self.max_orders = value;
        self
    }

    pub fn max_rings(mut self, value: u16) -> Self {
        self.max_rings = value;
        self
    }

    pub fn max_pool_entries(mut self, value: u16) -> Self {
        self.max_pool_entries = value;
        self
    }

    pub fn max_blob_bytes(mut self, value: u16) -> Self {
        self.max_blob_bytes = value;
        self
    }

    /// Validates the fields and emits the limits.
    pub fn build(&self) -> Result<DecoderLimits, ConfigError> {
        let limits = DecoderLimits {
            max_buffer_bytes: self.max_buffer_bytes,
            max_orders: self.max_orders,
            max_rings: self.max_rings,
            max_pool_entries: self.max_pool_entries,
            max_blob_bytes: self.max_blob_bytes,
        };
        validate(&limits)?;
        Ok(limits)
    }
}

impl Default for DecoderLimitsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in limit profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitsProfile {
    Standard,
    Unbounded,
}
