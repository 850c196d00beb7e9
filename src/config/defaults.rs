//! Default configuration values

/// Default build directory (current working directory)
pub const DEFAULT_BUILD_DIR: &str = ".";

/// Prefix of the JavaScript artifact name
pub const JS_ARTIFACT_PREFIX: &str = "Pete_";

/// Prefix of the CSS artifact name
pub const CSS_ARTIFACT_PREFIX: &str = "Pete_CSS_";

/// Suffix shared by both artifacts.
///
/// The CSS artifact keeps the `.min.js` suffix too; downstream consumers
/// load it by that exact name.
pub const ARTIFACT_SUFFIX: &str = ".min.js";

/// Product name written into the artifact banner
pub const BANNER_PRODUCT: &str = "PeteJS";

/// Extension of stylesheets picked up from the CSS source directory
pub const STYLESHEET_EXTENSION: &str = "css";

/// Exit status for usage errors (missing or unknown flags)
pub const USAGE_EXIT_CODE: i32 = 2;

/// Exit status for failures during compression
pub const FAILURE_EXIT_CODE: i32 = 1;
