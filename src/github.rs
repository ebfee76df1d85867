//! Client for GitHub's contribution-calendar GraphQL query.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::error::SourceError;
use crate::level::LevelThresholds;
use crate::models::{ContributionSeries, DailyRecord};

pub const GITHUB_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

const CONTRIBUTION_CALENDAR_QUERY: &str = "\
query($username: String!) {
  user(login: $username) {
    contributionsCollection {
      contributionCalendar {
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

pub struct GithubClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GithubClient {
    pub fn new() -> Result<Self, SourceError> {
        Self::with_endpoint(GITHUB_GRAPHQL_ENDPOINT)
    }

    /// Client against a non-default endpoint (used by tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("github-breakout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| {
                SourceError::UpstreamUnavailable(format!("failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Request the trailing-year calendar for `username` and flatten it into
    /// a series, classifying each day on the way. One attempt, no retries.
    pub async fn fetch_calendar(
        &self,
        username: &str,
        token: &str,
        thresholds: &LevelThresholds,
    ) -> Result<ContributionSeries, SourceError> {
        let body = json!({
            "query": CONTRIBUTION_CALENDAR_QUERY,
            "variables": { "username": username },
        });

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|err| SourceError::UpstreamUnavailable(format!("request failed: {err}")))?;

        let status = response.status();
        let text = response.text().await.map_err(|err| {
            SourceError::UpstreamUnavailable(format!("failed to read response body: {err}"))
        })?;

        if !status.is_success() {
            return Err(SourceError::UpstreamUnavailable(format!(
                "calendar request failed ({status}): {}",
                text.trim()
            )));
        }

        parse_calendar(&text, thresholds)
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    user: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Deserialize)]
struct ContributionCalendar {
    weeks: Vec<CalendarWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarWeek {
    contribution_days: Vec<CalendarDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarDay {
    contribution_count: u32,
    date: String,
}

/// Flatten a raw GraphQL response body into a series.
///
/// Any shape problem — unparseable JSON, missing user, a bad date string —
/// is an upstream error; the resolver treats it like any other fetch failure.
pub fn parse_calendar(
    body: &str,
    thresholds: &LevelThresholds,
) -> Result<ContributionSeries, SourceError> {
    let response: GraphQlResponse = serde_json::from_str(body).map_err(|err| {
        SourceError::UpstreamUnavailable(format!("malformed calendar response: {err}"))
    })?;

    let user = response.data.and_then(|data| data.user).ok_or_else(|| {
        SourceError::UpstreamUnavailable("no user data in calendar response".into())
    })?;

    let mut records = Vec::new();
    for week in user.contributions_collection.contribution_calendar.weeks {
        for day in week.contribution_days {
            let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d").map_err(|err| {
                SourceError::UpstreamUnavailable(format!(
                    "bad date '{}' in calendar response: {err}",
                    day.date
                ))
            })?;
            records.push(DailyRecord::new(date, day.contribution_count, thresholds));
        }
    }

    Ok(ContributionSeries::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: LevelThresholds = LevelThresholds {
        light_max: 2,
        moderate_max: 5,
        heavy_max: 8,
    };

    fn calendar_body(days: &str) -> String {
        format!(
            r#"{{"data":{{"user":{{"contributionsCollection":{{"contributionCalendar":{{"weeks":[{{"contributionDays":[{days}]}}]}}}}}}}}}}"#
        )
    }

    #[test]
    fn well_formed_response_flattens_in_order() {
        let body = calendar_body(
            r#"{"contributionCount":0,"date":"2026-08-02"},
               {"contributionCount":4,"date":"2026-08-03"},
               {"contributionCount":12,"date":"2026-08-04"}"#,
        );
        let series = parse_calendar(&body, &THRESHOLDS).unwrap();
        assert_eq!(series.len(), 3);
        let records = series.records();
        assert_eq!(records[0].count, 0);
        assert_eq!(records[0].level, 0);
        assert_eq!(records[1].level, 2);
        assert_eq!(records[2].level, 4);
        assert!(records[0].date < records[2].date);
    }

    #[test]
    fn unparseable_json_is_upstream_error() {
        let err = parse_calendar("not json at all", &THRESHOLDS).unwrap_err();
        assert!(matches!(err, SourceError::UpstreamUnavailable(_)));
    }

    #[test]
    fn missing_user_is_upstream_error() {
        let err = parse_calendar(r#"{"data":{"user":null}}"#, &THRESHOLDS).unwrap_err();
        assert!(matches!(err, SourceError::UpstreamUnavailable(_)));
    }

    #[test]
    fn bad_date_string_is_upstream_error() {
        let body = calendar_body(r#"{"contributionCount":1,"date":"yesterday"}"#);
        let err = parse_calendar(&body, &THRESHOLDS).unwrap_err();
        assert!(matches!(err, SourceError::UpstreamUnavailable(_)));
    }
}
