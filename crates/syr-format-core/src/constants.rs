// Numbers
pub const DEFAULT_PLACES: u32 = 2;
// f64 can't carry more significant fraction digits than this
pub const MAX_PLACES: u32 = 15;
pub const DEFAULT_DENOMINATORS: std::ops::RangeInclusive<u64> = 1..=20;
/// Scaled values closer than this to an integer are rounded instead of floored
pub const ROUNDING_TOLERANCE: f64 = 0.01;
/// Decimal places of the display fallback, if no denominator approximates a number
pub const FALLBACK_DECIMALS: i32 = 3;
pub const GROUP_SIZE: u64 = 1000;
/// Index of "thousand" in the large unit table, the only unit spoken without "one"
pub const THOUSAND_GROUP: usize = 1;
// digits per large fraction scale step (tenths, hundredths, thousandths)
pub const FRACTION_GROUP_DIGITS: u32 = 3;

// Relative time, in the unit of the step that produces it
pub const MAX_SECONDS: f64 = 90.0;
pub const MAX_MINUTES: u64 = 90;
pub const MAX_HOURS: u64 = 36;
