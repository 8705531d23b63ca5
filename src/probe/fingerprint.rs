//! Randomized request fingerprints.
//!
//! Each probe attempt presents itself as a plausible browser request drawn
//! from fixed candidate pools. The pools are plain static data; selection is
//! an independent uniform draw per field.

use rand::seq::SliceRandom;

/// Browser user-agent candidates. Desktop Chrome/Firefox/Safari/Edge plus
/// two mobile WebKit variants.
static USER_AGENTS: [&str; 8] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (iPad; CPU OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1",
];

static ACCEPT_HEADERS: [&str; 3] = [
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
];

static ACCEPT_LANGUAGE_HEADERS: [&str; 4] = [
    "en-US,en;q=0.9",
    "en-GB,en;q=0.9",
    "en-US,en;q=0.8",
    "en,en-US;q=0.9",
];

/// Referer candidates. `None` is a first-class option: organic traffic
/// often arrives with no referer at all, so omission must be drawn with the
/// same weight as any concrete value.
static REFERERS: [Option<&str>; 4] = [
    Some("https://www.google.com/"),
    Some("https://www.google.com/search?q=example"),
    Some("https://www.bing.com/"),
    None,
];

/// An immutable outbound request identity, drawn once per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub user_agent: &'static str,
    pub accept: &'static str,
    pub accept_language: &'static str,
    /// `None` means the request carries no `Referer` header at all.
    pub referer: Option<&'static str>,
}

/// Draw a fingerprint, each field independently and uniformly from its pool.
pub fn generate() -> Fingerprint {
    let mut rng = rand::thread_rng();
    Fingerprint {
        // the pools are non-empty, choose cannot return None
        user_agent: USER_AGENTS.choose(&mut rng).copied().unwrap_or(USER_AGENTS[0]),
        accept: ACCEPT_HEADERS.choose(&mut rng).copied().unwrap_or(ACCEPT_HEADERS[0]),
        accept_language: ACCEPT_LANGUAGE_HEADERS
            .choose(&mut rng)
            .copied()
            .unwrap_or(ACCEPT_LANGUAGE_HEADERS[0]),
        referer: REFERERS.choose(&mut rng).copied().unwrap_or(REFERERS[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_always_from_pool() {
        for _ in 0..1_000 {
            let fp = generate();
            assert!(USER_AGENTS.contains(&fp.user_agent));
            assert!(ACCEPT_HEADERS.contains(&fp.accept));
            assert!(ACCEPT_LANGUAGE_HEADERS.contains(&fp.accept_language));
        }
    }

    #[test]
    fn referer_omission_is_a_real_branch() {
        let mut absent = 0usize;
        let mut present = 0usize;
        for _ in 0..4_000 {
            match generate().referer {
                None => absent += 1,
                Some(r) => {
                    // omission is modelled as None, never as an empty string
                    assert!(!r.is_empty());
                    present += 1;
                }
            }
        }
        // each branch should land well clear of zero at p = 1/4
        assert!(absent > 500, "absent referer drawn only {} times", absent);
        assert!(present > 1_500, "present referer drawn only {} times", present);
    }

    #[test]
    fn pools_meet_minimum_variety() {
        assert!(USER_AGENTS.len() >= 8);
        assert!(ACCEPT_HEADERS.len() >= 3);
        assert!(ACCEPT_LANGUAGE_HEADERS.len() >= 4);
        assert!(REFERERS.contains(&None));
    }
}
