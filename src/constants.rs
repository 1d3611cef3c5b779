use std::time::Duration;

/// Usage hook the probes post to unless overridden
pub const DEFAULT_ENDPOINT: &str = "https://api.claudecount.com/api/usage/hook";

/// Version header the receiving service checks before accepting a payload
pub const CLIENT_VERSION_HEADER: &str = "X-CLI-Version";
pub const DEFAULT_CLIENT_VERSION: &str = "0.2.9";

/// Deadline for a single request, connect through body
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Model stamped on generated events
pub const DEFAULT_MODEL: &str = "claude-opus-4-1-20250805";

// Synthetic actor used by the generator when no identity is supplied
pub const DEFAULT_HANDLE: &str = "@t_heavy";
pub const DEFAULT_USER_ID: &str = "5432109876";

// Batch mode defaults, matching the RUNS / DELAY environment knobs
pub const DEFAULT_RUNS: u32 = 10;
pub const DEFAULT_DELAY_SECS: u64 = 1;

/// Pause between the fixed debug cases
pub const SUITE_PAUSE: Duration = Duration::from_secs(1);
