//! Currency metadata: the ISO 4217 registry and symbol overrides.

mod iso4217;
pub mod overrides;
pub mod registry;

pub use iso4217::FALLBACK;
pub use overrides::{SymbolOverride, SymbolOverrideTable};
pub use registry::{CurrencyInfo, CurrencyRegistry, DEFAULT_DECIMAL_PLACES, DEFAULT_DIVISOR};
