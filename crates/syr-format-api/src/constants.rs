use syr_format_core::SYRIAC_CODE;

pub const DEFAULT_LANG: &str = SYRIAC_CODE;

// Files inside <lang_dir>/<code>/
pub const PACK_FILE_NAME: &str = "pack.json";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Separators between the primary subtag and region or script subtags, e.g. "syr-SY"
pub const SUBTAG_SEPARATORS: [char; 2] = ['-', '_'];
