use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;
use varinsight_core::EutilsClient;
use varinsight_core::source::clinvar;
use varinsight_core::tool::{Error as ToolError, Tool, ToolResult};

/// Arguments of [`ClinVarTool`].
#[derive(Deserialize, JsonSchema)]
pub struct ClinVarParameters {
    #[schemars(
        description = "The variant as a cDNA or protein change, e.g. `c.1187G>A` or `p.Arg396Gln`."
    )]
    variant: String,
    #[schemars(description = "The gene symbol, e.g. `CMTR1`.")]
    gene: String,
}

/// A tool for looking up a variant in ClinVar.
pub struct ClinVarTool {
    client: EutilsClient,
    parameter_schema: Value,
}

impl ClinVarTool {
    /// Creates a new ClinVar tool sending requests through `client`.
    #[inline]
    pub fn new(client: EutilsClient) -> Self {
        ClinVarTool {
            client,
            parameter_schema: schema_for!(ClinVarParameters).to_value(),
        }
    }
}

impl Tool for ClinVarTool {
    type Input = ClinVarParameters;

    fn name(&self) -> &str {
        "clinvar"
    }

    fn description(&self) -> &str {
        r#"
Looks up a genetic variant within a gene in ClinVar and reports, per matching record, its title, accession, supporting submissions, clinical significance, record status and trait set.
Returns "No results found." when nothing matches. Long reports are cut to 3000 characters."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn execute(
        &self,
        input: ClinVarParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        let client = self.client.clone();
        async move {
            let variant = input.variant.trim();
            let gene = input.gene.trim();
            if variant.is_empty() || gene.is_empty() {
                return Err(ToolError::invalid_input()
                    .with_reason("`variant` and `gene` must not be empty"));
            }
            Ok(clinvar::lookup(&client, variant, gene).await?)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use varinsight_core::tool::ErrorKind;
    use varinsight_test_eutils::TestTransport;

    use super::*;

    #[test]
    fn test_parameter_schema() {
        let tool = ClinVarTool::new(EutilsClient::new(TestTransport::default()));
        let schema = tool.parameter_schema();
        assert!(schema["properties"]["variant"].is_object());
        assert!(schema["properties"]["gene"].is_object());
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("variant")));
        assert!(required.contains(&json!("gene")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute() {
        let transport = TestTransport::default();
        transport.add_search_ids(&["123456"]);
        transport.add_summary_records(&[(
            "123456",
            json!({ "title": "Likely pathogenic" }),
        )]);
        let tool = ClinVarTool::new(EutilsClient::new(transport.clone()));

        let report = tool
            .execute(ClinVarParameters {
                variant: " c.1187G>A ".to_owned(),
                gene: "CMTR1".to_owned(),
            })
            .await
            .unwrap();
        assert!(report.contains("Likely pathogenic"));
        assert_eq!(
            transport.calls()[0].request.param("term"),
            Some("c.1187G>A + CMTR1")
        );
    }

    #[tokio::test]
    async fn test_input_validation() {
        let transport = TestTransport::default();
        let tool = ClinVarTool::new(EutilsClient::new(transport.clone()));

        let err = tool
            .execute(ClinVarParameters {
                variant: "c.1187G>A".to_owned(),
                gene: "  ".to_owned(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_pipeline_failure_is_an_execution_error() {
        let transport = TestTransport::default();
        let tool = ClinVarTool::new(EutilsClient::new(transport));

        // The script is empty, so the search fails.
        let err = tool
            .execute(ClinVarParameters {
                variant: "c.1187G>A".to_owned(),
                gene: "CMTR1".to_owned(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExecutionError);
        assert!(err.reason().contains("Network error"));
    }
}
