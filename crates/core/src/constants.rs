use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fallback VND-per-USD rate used when no live rate is available
pub const DEFAULT_USD_VND_RATE: Decimal = dec!(24000);

/// Decimal precision for USD display
pub const USD_DISPLAY_PRECISION: u32 = 2;

/// Decimal precision for VND display (VND amounts are integral)
pub const VND_DISPLAY_PRECISION: u32 = 0;
