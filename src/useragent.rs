use rand::Rng;

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

/// One plausible desktop-browser User-Agent, picked fresh for each run.
pub fn random() -> &'static str {
    let mut rng = rand::rng();
    USER_AGENTS[rng.random_range(0..USER_AGENTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_comes_from_the_pool() {
        for _ in 0..20 {
            assert!(USER_AGENTS.contains(&random()));
        }
    }

    #[test]
    fn test_pool_entries_look_like_browsers() {
        for agent in USER_AGENTS {
            assert!(agent.starts_with("Mozilla/5.0 "));
        }
    }
}
