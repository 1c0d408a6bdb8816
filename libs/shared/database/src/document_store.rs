use anyhow::{anyhow, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tracing::{debug, error};

use shared_config::AppConfig;

/// Client for the document database's HTTP data API. Every call posts a JSON
/// action envelope naming the data source, database and collection; the store
/// itself enforces unique indexes and write ordering.
pub struct DocumentStoreClient {
    client: Client,
    base_url: String,
    api_key: String,
    data_source: String,
    database: String,
}

impl DocumentStoreClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.document_store_url.clone(),
            api_key: config.document_store_api_key.clone(),
            data_source: config.document_store_data_source.clone(),
            database: config.document_store_database.clone(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&self.api_key) {
            headers.insert("api-key", value);
        }
        headers
    }

    fn envelope(&self, collection: &str, extra: Map<String, Value>) -> Value {
        let mut body = Map::new();
        body.insert("dataSource".to_string(), json!(self.data_source));
        body.insert("database".to_string(), json!(self.database));
        body.insert("collection".to_string(), json!(collection));
        body.extend(extra);
        Value::Object(body)
    }

    async fn action(&self, action: &str, body: Value) -> Result<Value> {
        let url = format!("{}/action/{}", self.base_url, action);
        debug!("Document store request: {} on {}", action, url);

        let response = self
            .client
            .post(&url)
            .headers(self.get_headers())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Document store error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authentication error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                _ => anyhow!("Document store error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<Value>().await?;
        Ok(data)
    }

    /// Insert a document and return the store-assigned id.
    pub async fn insert_one(&self, collection: &str, document: Value) -> Result<String> {
        let mut extra = Map::new();
        extra.insert("document".to_string(), document);

        let result = self.action("insertOne", self.envelope(collection, extra)).await?;

        result["insertedId"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("insertOne returned no insertedId"))
    }

    /// Fetch the first document matching `filter`, or None.
    pub async fn find_one<T>(&self, collection: &str, filter: Value) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let mut extra = Map::new();
        extra.insert("filter".to_string(), filter);

        let result = self.action("findOne", self.envelope(collection, extra)).await?;

        match &result["document"] {
            Value::Null => Ok(None),
            document => Ok(Some(serde_json::from_value(document.clone())?)),
        }
    }

    /// Fetch all documents matching `filter`, optionally sorted and limited.
    pub async fn find<T>(
        &self,
        collection: &str,
        filter: Value,
        sort: Option<Value>,
        limit: Option<i64>,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut extra = Map::new();
        extra.insert("filter".to_string(), filter);
        if let Some(sort) = sort {
            extra.insert("sort".to_string(), sort);
        }
        if let Some(limit) = limit {
            extra.insert("limit".to_string(), json!(limit));
        }

        let result = self.action("find", self.envelope(collection, extra)).await?;

        let documents = result["documents"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        documents
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(Into::into))
            .collect()
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }
}
