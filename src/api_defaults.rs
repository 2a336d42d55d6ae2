// GitHub REST API root. Overridable through config or GISTR_API_BASE_URL.
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

// https://docs.github.com/en/rest/about-the-rest-api/api-versions
pub const GITHUB_API_VERSION: &str = "2022-11-28";

pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

// Github rejects requests without a User-Agent.
pub const DEFAULT_USER_AGENT: &str = "gistr";

// Covers connect, send and receive for the single outbound request.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

// Shown in place of a null or absent gist description.
pub const NO_DESCRIPTION: &str = "No description";

