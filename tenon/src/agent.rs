//! Synthetic browser user agents.
//!
//! A fixed catalog of realistic desktop/mobile agents plus a generator
//! that fabricates Android agents with incrementing browser versions.
//! Values are plain data; callers that need shared mutable state wrap
//! them in their own container.

/// One synthetic user agent with its client-hint companions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgent {
    /// The `User-Agent` header value.
    pub user_agent: String,
    /// The `Sec-CH-UA` header value.
    pub sec_ch_ua: String,
    /// The `Sec-CH-UA-Platform` header value.
    pub platform: String,
}

impl UserAgent {
    fn new(user_agent: &str, sec_ch_ua: &str, platform: &str) -> Self {
        Self {
            user_agent: user_agent.to_string(),
            sec_ch_ua: sec_ch_ua.to_string(),
            platform: platform.to_string(),
        }
    }
}

/// First Chrome version used by [`android_user_agents`].
pub const MIN_CHROME_VERSION: u32 = 110;

/// First Firefox version used by [`android_user_agents`].
pub const MIN_FIREFOX_VERSION: u32 = 115;

/// Returns the fixed catalog of default user agents.
#[must_use]
pub fn default_user_agents() -> Vec<UserAgent> {
    vec![
        UserAgent::new(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36",
            "\"Google Chrome\";v=\"117\", \"Not;A=Brand\";v=\"8\", \"Chromium\";v=\"117\"",
            "\"Windows\"",
        ),
        UserAgent::new(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/536.36",
            "\"Google Chrome\";v=\"116\", \"Not;A=Brand\";v=\"8\", \"Chromium\";v=\"116\"",
            "\"Windows\"",
        ),
        UserAgent::new(
            "Mozilla/5.0 (Linux; Android 15) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.555.100 Mobile Safari/537.36",
            "\"Google Chrome\";v=\"125\", \"Not;A=Brand\";v=\"8\", \"Chromium\";v=\"125\"",
            "\"Android\"",
        ),
        UserAgent::new(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/532.36",
            "\"Google Chrome\";v=\"114\", \"Not;A=Brand\";v=\"8\", \"Chromium\";v=\"114\"",
            "\"Windows\"",
        ),
        UserAgent::new(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/531.36",
            "\"Google Chrome\";v=\"113\", \"Not;A=Brand\";v=\"8\", \"Chromium\";v=\"113\"",
            "\"Windows\"",
        ),
        UserAgent::new(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/112.0.0.0 Safari/520.36",
            "\"Google Chrome\";v=\"112\", \"Not;A=Brand\";v=\"8\", \"Chromium\";v=\"112\"",
            "\"Windows\"",
        ),
        UserAgent::new(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/111.0.0.0 Safari/510.10",
            "\"Google Chrome\";v=\"111\", \"Not;A=Brand\";v=\"8\", \"Chromium\";v=\"111\"",
            "\"Windows\"",
        ),
        UserAgent::new(
            "Mozilla/5.0 (Linux; Android 15) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.6668.100 Mobile Safari/537.36",
            "\"Google Chrome\";v=\"129\", \"Not;A=Brand\";v=\"8\", \"Chromium\";v=\"129\"",
            "\"Android\"",
        ),
    ]
}

/// Generates `count` Android user agents, alternating between Chrome
/// and Firefox templates with incrementing versions.
///
/// # Examples
///
/// ```
/// use tenon::agent::android_user_agents;
///
/// let agents = android_user_agents(10);
/// assert_eq!(agents.len(), 10);
/// assert!(agents.iter().all(|a| !a.user_agent.is_empty()));
/// ```
#[must_use]
pub fn android_user_agents(count: usize) -> Vec<UserAgent> {
    let mut agents = Vec::with_capacity(count);
    let mut chrome_version = MIN_CHROME_VERSION;
    let mut firefox_version = MIN_FIREFOX_VERSION;

    for index in 0..count {
        if index % 2 == 0 {
            agents.push(UserAgent::new(
                &format!(
                    "Mozilla/5.0 (Linux; Android 15) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{chrome_version}.0.555.100 Mobile Safari/537.36"
                ),
                &format!(
                    "\"Google Chrome\";v=\"{chrome_version}\", \"Not;A=Brand\";v=\"8\", \"Chromium\";v=\"{chrome_version}\""
                ),
                "\"Android\"",
            ));
            chrome_version += 1;
        } else {
            agents.push(UserAgent::new(
                &format!(
                    "Mozilla/5.0 (Android 10; Mobile; rv:62.0) Gecko/68.0 Firefox/{firefox_version}.0"
                ),
                &format!(
                    "\"Firefox\";v=\"{firefox_version}\", \"Not;A=Brand\";v=\"8\", \"Gecko\";v=\"68\""
                ),
                "\"Android\"",
            ));
            firefox_version += 1;
        }
    }

    agents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let agents = default_user_agents();
        assert_eq!(agents.len(), 8);
        for agent in &agents {
            assert!(!agent.user_agent.is_empty());
            assert!(!agent.sec_ch_ua.is_empty());
            assert!(!agent.platform.is_empty());
        }
    }

    #[test]
    fn test_android_generation_count() {
        let agents = android_user_agents(10);
        assert_eq!(agents.len(), 10);
        for agent in &agents {
            assert!(!agent.user_agent.is_empty());
        }
    }

    #[test]
    fn test_android_alternation_and_versions() {
        let agents = android_user_agents(4);
        assert!(agents[0].user_agent.contains("Chrome/110."));
        assert!(agents[1].user_agent.contains("Firefox/115."));
        assert!(agents[2].user_agent.contains("Chrome/111."));
        assert!(agents[3].user_agent.contains("Firefox/116."));
    }

    #[test]
    fn test_android_zero_count() {
        assert!(android_user_agents(0).is_empty());
    }
}
