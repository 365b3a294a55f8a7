use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;
use varinsight_core::EutilsClient;
use varinsight_core::source::omim::{self, SummaryDatabase};
use varinsight_core::tool::{Error as ToolError, Tool, ToolResult};

/// Arguments of [`OmimTool`].
#[derive(Deserialize, JsonSchema)]
pub struct OmimParameters {
    #[schemars(description = "A single record id in the chosen database.")]
    id: String,
    #[schemars(description = "The database to read from, default to `omim`.")]
    #[serde(default)]
    database: SummaryDatabase,
}

/// A tool for reading OMIM, MeSH or MedGen records by id.
pub struct OmimTool {
    client: EutilsClient,
    parameter_schema: Value,
}

impl OmimTool {
    /// Creates a new OMIM tool sending requests through `client`.
    #[inline]
    pub fn new(client: EutilsClient) -> Self {
        OmimTool {
            client,
            parameter_schema: schema_for!(OmimParameters).to_value(),
        }
    }
}

impl Tool for OmimTool {
    type Input = OmimParameters;

    fn name(&self) -> &str {
        "omim"
    }

    fn description(&self) -> &str {
        r#"
Fetches the summary of one record by id from OMIM, MeSH or MedGen, and returns the raw JSON answer of the service.
Use a single id per call to keep the answer small."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn execute(
        &self,
        input: OmimParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        let client = self.client.clone();
        async move {
            let id = input.id.trim();
            if id.is_empty() {
                return Err(
                    ToolError::invalid_input().with_reason("`id` must not be empty")
                );
            }
            let envelope =
                omim::fetch_summary(&client, id, input.database).await?;
            serde_json::to_string(&envelope).map_err(|err| {
                ToolError::execution_error().with_reason(err.to_string())
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use varinsight_test_eutils::TestTransport;

    use super::*;

    #[test]
    fn test_parameters() {
        let input: OmimParameters =
            serde_json::from_value(json!({ "id": "D009069", "database": "MeSH" }))
                .unwrap();
        assert_eq!(input.database, SummaryDatabase::Mesh);

        let input: OmimParameters =
            serde_json::from_value(json!({ "id": "607208" })).unwrap();
        assert_eq!(input.database, SummaryDatabase::Omim);

        let tool = OmimTool::new(EutilsClient::new(TestTransport::default()));
        let schema = tool.parameter_schema().to_string();
        assert!(schema.contains("medgen"));
    }

    #[tokio::test]
    async fn test_execute() {
        let record = json!({ "uid": "607208", "title": "DRAVET SYNDROME" });
        let transport = TestTransport::default();
        transport.add_summary_records(&[("607208", record.clone())]);
        let tool = OmimTool::new(EutilsClient::new(transport.clone()));

        let output = tool
            .execute(OmimParameters {
                id: "607208".to_owned(),
                database: SummaryDatabase::Omim,
            })
            .await
            .unwrap();
        let envelope: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(envelope["result"]["607208"], record);
        assert_eq!(transport.calls()[0].request.param("db"), Some("omim"));
    }
}
