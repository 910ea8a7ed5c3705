//! Grouping of tracker URLs by hostname.
//!
//! Groups come back in random order so consumers that pick the first few
//! trackers don't always hit the same host.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use url::{Host, Url};

use crate::error::TrackerError;

/// URLs sharing one hostname. An empty `domain` holds URLs without a
/// parseable host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainGroup {
    pub domain: String,
    pub urls: Vec<String>,
}

/// Extract the hostname of a URL.
///
/// IPv6 literals are returned without brackets.
pub fn extract_domain(raw: &str) -> Result<String, TrackerError> {
    let parsed =
        Url::parse(raw).map_err(|e| TrackerError::Parse(format!("{}: {}", raw, e)))?;

    let host = match parsed.host() {
        Some(Host::Domain(domain)) => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        None => String::new(),
    };

    if host.is_empty() {
        return Err(TrackerError::Parse(format!("{}: no hostname", raw)));
    }
    Ok(host)
}

/// Partition `urls` by hostname and shuffle the resulting groups.
///
/// URLs keep their input order within a group. URLs without a hostname are
/// collected under the empty domain instead of being dropped.
pub fn group_by_domain<R>(urls: &[String], rng: &mut R) -> Vec<DomainGroup>
where
    R: Rng + ?Sized,
{
    let mut groups: Vec<DomainGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut no_domain: Vec<String> = Vec::new();

    for url in urls {
        let domain = match extract_domain(url) {
            Ok(domain) => domain,
            Err(_) => {
                no_domain.push(url.clone());
                continue;
            }
        };

        match index.get(&domain) {
            Some(&i) => groups[i].urls.push(url.clone()),
            None => {
                index.insert(domain.clone(), groups.len());
                groups.push(DomainGroup {
                    domain,
                    urls: vec![url.clone()],
                });
            }
        }
    }

    if !no_domain.is_empty() {
        groups.push(DomainGroup {
            domain: String::new(),
            urls: no_domain,
        });
    }

    groups.shuffle(rng);
    groups
}
