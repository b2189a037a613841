//! Compilation constants and runtime configuration defaults

/// Fixed seed for reproducible random objectives
pub const DEFAULT_SEED: u64 = 42;

// Keeps the cube allocation within reach of ordinary machines
/// Maximum allowed board width or height
pub const MAX_BOARD_DIMENSION: usize = 10_000;

/// Name prefix of every decision variable handed to a solver
pub const VARIABLE_PREFIX: &str = "TileField";

/// Exclusive upper bound of randomly drawn objective coefficients
pub const RANDOM_WEIGHT_LIMIT: i64 = 1000;

// Problem and output file naming
/// Extension of catalog files picked up by the CLI
pub const CATALOG_EXTENSION: &str = "json";
/// Extension of written LP models
pub const LP_EXTENSION: &str = "lp";
/// Extension of solver solution listings read back by the CLI
pub const SOLUTION_EXTENSION: &str = "sol";
/// Suffix added to rendered result filenames
pub const OUTPUT_SUFFIX: &str = "_result";

/// Edge length in pixels of one rendered board cell
pub const CELL_PIXELS: u32 = 16;
/// Largest rendered image width or height in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
