pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! Fixed labels and limits of the packet dashboard, organized by widget.

    // =============================================================================
    // PAGE
    // =============================================================================

    /// Heading emitted at the start of every rendering pass.
    pub const DASHBOARD_HEADING: &str = "Real-Time Network Traffic Dashboard";

    /// Warning shown instead of any widget when the table has no rows.
    pub const NO_DATA_NOTICE: &str = "No data available yet. Waiting for packets...";

    /// Banner emitted once every applicable widget was produced.
    pub const SUCCESS_NOTICE: &str = "Dashboard updated successfully!";

    /// Prefix of the error banner when timestamps cannot be converted.
    pub const TIMESTAMP_FAILURE_PREFIX: &str = "Timestamp conversion failed";

    // =============================================================================
    // WIDGETS
    // =============================================================================

    pub mod protocol_distribution {
        pub const SUBHEADER: &str = "1. Protocol Distribution";
        pub const TITLE: &str = "Protocol Distribution (Live)";
    }

    pub mod packet_rate {
        pub const SUBHEADER: &str = "2. Packets per Second (Real-Time Trend)";
        pub const TITLE: &str = "Packets per Second (Real-Time)";
        pub const Y_TITLE: &str = "Packet Count";
    }

    pub mod average_size {
        pub const SUBHEADER: &str = "3. Average Packet Size by Protocol";
        pub const TITLE: &str = "Average Packet Size by Protocol";
        pub const X_TITLE: &str = "Protocol";
        pub const Y_TITLE: &str = "Average Size (bytes)";
    }

    pub mod top_talkers {
        pub const SUBHEADER: &str = "4. Top Source IPs (By Packet Count)";
        pub const TITLE: &str = "Top Source IPs";
        pub const ADDRESS_HEADER: &str = "Source IP";
        pub const COUNT_HEADER: &str = "Packet Count";

        /// Number of addresses listed.
        pub const LIMIT: usize = 10;
    }

    // =============================================================================
    // TERMINAL UI
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// Key event poll interval of the UI loop (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 100;

        /// Helper function to get the poll interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }
}
