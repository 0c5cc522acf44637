pub mod invite_repository;
pub mod round_repository;

pub use invite_repository::*;
pub use round_repository::*;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{Config, REQUEST_TIMEOUT};
use crate::error::{AppError, Result};
use crate::models::{AirtableRecord, FieldsBody, RecordPage};

/// Airtable's cap on records per create request
pub const MAX_RECORDS_PER_WRITE: usize = 10;

/// Thin client for one Airtable base
#[derive(Clone)]
pub struct AirtableClient {
    client: Client,
    api_url: String,
    base_id: String,
    token: String,
}

/// Query for a list request
#[derive(Debug, Default, Clone)]
pub struct ListQuery<'a> {
    pub filter_by_formula: Option<&'a str>,
    pub max_records: Option<u32>,
    pub offset: Option<&'a str>,
}

impl AirtableClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::HttpClient(format!("Failed to build Airtable client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.airtable_api_url.clone(),
            base_id: config.base_id.clone(),
            token: config.token.clone(),
        })
    }

    /// `{api_url}/{base_id}/{table}[/{record_id}]` with each segment escaped
    fn table_url(&self, table: &str, record_id: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| AppError::HttpClient(format!("Invalid Airtable API URL: {}", e)))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| AppError::HttpClient("Airtable API URL cannot be a base".to_string()))?;
            segments.pop_if_empty().push(&self.base_id).push(table);
            if let Some(id) = record_id {
                segments.push(id);
            }
        }

        Ok(url)
    }

    /// Fetch a single page of records
    pub async fn list<F>(&self, table: &str, query: &ListQuery<'_>) -> Result<RecordPage<F>>
    where
        F: DeserializeOwned,
    {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(formula) = query.filter_by_formula {
            params.push(("filterByFormula", formula.to_string()));
        }
        if let Some(max) = query.max_records {
            params.push(("maxRecords", max.to_string()));
        }
        if let Some(offset) = query.offset {
            params.push(("offset", offset.to_string()));
        }

        let res = self
            .client
            .get(self.table_url(table, None)?)
            .bearer_auth(&self.token)
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::RemoteRead(e.to_string()))?;

        let res = ensure_success(res).await.map_err(AppError::RemoteRead)?;
        let body = res
            .text()
            .await
            .map_err(|e| AppError::RemoteRead(e.to_string()))?;

        Ok(serde_json::from_str::<RecordPage<F>>(&body)?)
    }

    /// Fetch every record of a table, following `offset` until exhausted
    pub async fn list_all<F>(&self, table: &str) -> Result<Vec<AirtableRecord<F>>>
    where
        F: DeserializeOwned,
    {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let query = ListQuery {
                offset: offset.as_deref(),
                ..ListQuery::default()
            };
            let page = self.list::<F>(table, &query).await?;
            records.extend(page.records);

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        Ok(records)
    }

    /// Merge `fields` into the record identified by `record_id`
    pub async fn update<F: Serialize>(&self, table: &str, record_id: &str, fields: &F) -> Result<()> {
        let res = self
            .client
            .patch(self.table_url(table, Some(record_id))?)
            .bearer_auth(&self.token)
            .json(&FieldsBody { fields })
            .send()
            .await
            .map_err(|e| AppError::RemoteWrite(e.to_string()))?;

        ensure_success(res).await.map_err(AppError::RemoteWrite)?;
        Ok(())
    }

    /// Create up to [`MAX_RECORDS_PER_WRITE`] records in one request
    pub async fn create<F: Serialize>(&self, table: &str, rows: &[F]) -> Result<()> {
        #[derive(Serialize)]
        struct Payload<'a, F> {
            records: Vec<FieldsBody<&'a F>>,
        }

        let payload = Payload {
            records: rows.iter().map(|fields| FieldsBody { fields }).collect(),
        };

        let res = self
            .client
            .post(self.table_url(table, None)?)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::RemoteWrite(e.to_string()))?;

        ensure_success(res).await.map_err(AppError::RemoteWrite)?;
        Ok(())
    }
}

/// Pass successful responses through, otherwise describe them as `"{status}: {body}"`
async fn ensure_success(res: Response) -> std::result::Result<Response, String> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    Err(format!("{}: {}", status.as_u16(), body))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio_test::assert_ok;

    use super::*;
    use crate::config::{test_config, Config};
    use crate::test_support::StubServer;

    fn config_with_url(api_url: &str) -> Config {
        Config {
            base_id: "appBase".to_string(),
            airtable_api_url: api_url.to_string(),
            ..test_config()
        }
    }

    #[test]
    fn test_table_url() {
        let client = AirtableClient::new(&config_with_url("https://api.airtable.com/v0"))
            .expect("Should build client");

        let url = client.table_url("Interview_Rounds", None).expect("Should build url");
        assert_eq!(url.as_str(), "https://api.airtable.com/v0/appBase/Interview_Rounds");

        let url = client
            .table_url("Interview_Rounds", Some("rec123"))
            .expect("Should build url");
        assert_eq!(
            url.as_str(),
            "https://api.airtable.com/v0/appBase/Interview_Rounds/rec123"
        );
    }

    #[test]
    fn test_table_url_escapes_and_trailing_slash() {
        let client = AirtableClient::new(&config_with_url("https://api.airtable.com/v0/"))
            .expect("Should build client");

        let url = client.table_url("Raw Import", None).expect("Should build url");
        assert_eq!(url.as_str(), "https://api.airtable.com/v0/appBase/Raw%20Import");
    }

    #[test]
    fn test_invalid_api_url() {
        let client = AirtableClient::new(&config_with_url("not a url")).expect("Should build client");
        assert!(client.table_url("Interview_Rounds", None).is_err());
    }

    #[tokio::test]
    async fn test_list_all_follows_offset() {
        let server = StubServer::start(vec![
            (200, r#"{"records":[{"id":"rec1","fields":{"n":1}},{"id":"rec2","fields":{"n":2}}],"offset":"itr2/rec2"}"#),
            (200, r#"{"records":[{"id":"rec3","fields":{"n":3}}]}"#),
        ])
        .await;
        let client = assert_ok!(AirtableClient::new(&config_with_url(&server.base_url)));

        let rows = assert_ok!(client.list_all::<serde_json::Value>("Raw_Import").await);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rec1", "rec2", "rec3"]);

        let requests = server.requests();
        assert_eq!(requests.len(), 2);
        assert!(!requests[0].target.contains("offset="));
        assert_eq!(requests[1].target, "/appBase/Raw_Import?offset=itr2%2Frec2");
    }
}
