// Sub-modules
mod core;
mod loader;
mod scoring;
mod thresholds;

pub use self::scoring::{
    default_byte_weight_curve, default_dom_size_curve, CurveParams, ScoringConfig,
};

pub use thresholds::{
    default_largest_requests, default_max_dom_depth, default_max_dom_nodes,
    default_max_dom_width, default_response_time_ms, ThresholdsConfig, MAX_LARGEST_REQUESTS,
};

pub use self::core::{default_max_chain_depth, ChainConfig, PageScoreConfig};

pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
