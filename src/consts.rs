pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event buffer size shared by the fetch tasks
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Backend endpoints, relative to the configured base URL
    pub mod endpoints {
        pub const BALANCE_BY_TYPE: &str = "oldata/balancebytype";
        pub const SUPPLY_LIQUIDITY: &str = "oldata/supplyliquidity";
        pub const TOKENOMICS: &str = "oldata/tokenomics";
    }

    /// Request configuration
    pub mod requests {
        use std::time::Duration;

        /// Base URL used when neither flag, environment nor config file supplies one
        pub const DEFAULT_API_URL: &str = "http://localhost:5000";

        /// Environment variable holding the backend base URL
        pub const API_URL_ENV: &str = "API_SERVICE_URL";

        /// Connect and request timeout (seconds)
        pub const TIMEOUT_SECS: u64 = 10;

        pub const fn timeout() -> Duration {
            Duration::from_secs(TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // CHART CONFIGURATION
    // =============================================================================

    pub mod charts {
        /// Segment colours, cycled by position
        pub const PALETTE: [&str; 6] = [
            "rgba(255, 99, 132, 0.8)",
            "rgba(54, 162, 235, 0.8)",
            "rgba(255, 206, 86, 0.8)",
            "rgba(75, 192, 192, 0.8)",
            "rgba(153, 102, 255, 0.8)",
            "rgba(255, 159, 64, 0.8)",
        ];

        /// Terminal equivalents of [`PALETTE`], same order
        pub const PALETTE_RGB: [(u8, u8, u8); 6] = [
            (255, 99, 132),
            (54, 162, 235),
            (255, 206, 86),
            (75, 192, 192),
            (153, 102, 255),
            (255, 159, 64),
        ];

        pub const BORDER_WIDTH: u32 = 1;

        pub const DATASET_LABEL: &str = "data";
    }

    // =============================================================================
    // VALIDATOR PANEL
    // =============================================================================

    /// Figure shown on every tile of the validator panel. Not backed by any endpoint yet.
    pub const VALIDATOR_PANEL_PLACEHOLDER: u64 = 426;
}
