//! The battery reader capability shared by every host.

use voltlink_protocol::{BatteryLevel, HostKind};

/// A named raw value observed while reading, shown by `voltlink debug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub name: &'static str,
    pub value: String,
}

impl Diagnostic {
    pub fn new(name: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// Trait for platform-specific battery readers.
///
/// Readers never fail: every OS-level absence or error is absorbed and
/// reported as [`BatteryLevel::Unavailable`].
pub trait BatteryReader {
    /// Which host style this reader implements.
    fn kind(&self) -> HostKind;

    /// Read the current battery level. Each call is an independent read.
    fn battery_level(&mut self) -> BatteryLevel;

    /// Raw touchpoint values, for troubleshooting.
    fn diagnostics(&mut self) -> Vec<Diagnostic> {
        Vec::new()
    }
}

impl<R: BatteryReader + ?Sized> BatteryReader for Box<R> {
    fn kind(&self) -> HostKind {
        (**self).kind()
    }

    fn battery_level(&mut self) -> BatteryLevel {
        (**self).battery_level()
    }

    fn diagnostics(&mut self) -> Vec<Diagnostic> {
        (**self).diagnostics()
    }
}
