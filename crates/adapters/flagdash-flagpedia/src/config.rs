/// Configuration for the flagpedia.net flag fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Base URL for flag images; `<code>.png` is appended per country.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://flagpedia.net/data/flags/normal".to_string(),
            request_timeout_secs: 10,
        }
    }
}
