/// Input file
pub const DEFAULT_INPUT_FILE: &str = "AB_NYC_2019.csv";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Cleaning thresholds (both exclusive)
pub const MIN_PRICE_EXCLUSIVE: f64 = 0.0;
pub const MAX_PRICE_EXCLUSIVE: f64 = 1000.0;

/// Neighbourhood groups
pub const MANHATTAN: &str = "Manhattan";
pub const BROOKLYN: &str = "Brooklyn";
pub const FOCUS_GROUPS: [&str; 2] = [MANHATTAN, BROOKLYN];

/// Stay length cap for the minimum nights figure
pub const MAX_MINIMUM_NIGHTS: u32 = 60;

/// Output file names
pub const FIGURE_1_FILE: &str = "figure_1_neighbourhood_group_distribution.png";
pub const FIGURE_2_FILE: &str = "figure_2_log_price_vs_reviews.png";
pub const FIGURE_3_FILE: &str = "figure_3_mean_price_by_room_type.png";
pub const FIGURE_4_FILE: &str = "figure_4_neighborhood_price_distribution.png";
pub const FIGURE_5_FILE: &str = "figure_5_minimum_nights_vs_price.png";

/// Figure sizes in pixels (100 px per inch)
pub const FIGURE_1_SIZE: (u32, u32) = (800, 600);
pub const FIGURE_2_SIZE: (u32, u32) = (1400, 600);
pub const FIGURE_3_SIZE: (u32, u32) = (800, 600);
pub const FIGURE_4_SIZE: (u32, u32) = (1000, 800);
pub const FIGURE_5_SIZE: (u32, u32) = (1000, 600);

/// Marker area range for the neighbourhood scatter, in square pixels
pub const MARKER_AREA_MIN: f64 = 20.0;
pub const MARKER_AREA_MAX: f64 = 400.0;

/// Scatter point transparency
pub const SCATTER_ALPHA: f64 = 0.3;
