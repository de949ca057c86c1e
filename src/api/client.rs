use std::error::Error;
use std::time::Duration;

use tracing::debug;

use crate::api::models::{MatchDetails, MatchSummary};

/// Errors crossing task boundaries must be Send + Sync.
pub type FeedError = Box<dyn Error + Send + Sync>;

/// Read-only client for the match feed. The dashboard core never sees this
/// type; fetch results arrive through the app-event channel.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(base_url: String) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(FeedClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the scoreboard for a league (all leagues when `None`).
    pub async fn scoreboard(&self, league: Option<&str>) -> Result<Vec<MatchSummary>, FeedError> {
        let url = format!("{}/matches", self.base_url);
        debug!(url = %url, league = ?league, "fetching scoreboard");
        let mut request = self.http.get(&url);
        if let Some(league) = league {
            request = request.query(&[("league", league)]);
        }
        let response = request.send().await?.error_for_status()?;
        let matches: Vec<MatchSummary> = response.json().await?;
        debug!(count = matches.len(), "scoreboard fetched");
        Ok(matches)
    }

    /// Fetch finished and upcoming matches over a trailing window of `days`.
    pub async fn stats(
        &self,
        league: Option<&str>,
        days: u8,
    ) -> Result<Vec<MatchSummary>, FeedError> {
        let url = format!("{}/matches", self.base_url);
        debug!(url = %url, league = ?league, days, "fetching stats window");
        let mut request = self.http.get(&url).query(&[("days", days.to_string())]);
        if let Some(league) = league {
            request = request.query(&[("league", league)]);
        }
        let response = request.send().await?.error_for_status()?;
        let matches: Vec<MatchSummary> = response.json().await?;
        debug!(count = matches.len(), "stats window fetched");
        Ok(matches)
    }

    /// Fetch the full detail record for one match.
    pub async fn details(&self, id: u64) -> Result<MatchDetails, FeedError> {
        let url = format!("{}/matches/{id}", self.base_url);
        debug!(url = %url, "fetching match details");
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = FeedClient::new("https://feed.example/v1/".to_string()).unwrap();
        assert_eq!(client.base_url, "https://feed.example/v1");
    }
}
