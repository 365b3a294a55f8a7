use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;
use varinsight_core::EutilsClient;
use varinsight_core::source::pubmed;
use varinsight_core::tool::{Error as ToolError, Tool, ToolResult};

/// What [`PubMedTool`] does with its `term`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, JsonSchema)]
pub enum PubMedMethod {
    /// Treat `term` as a query and list matching article ids.
    #[serde(alias = "search")]
    Search,
    /// Treat `term` as one article id and fetch its summary.
    #[serde(alias = "fetch")]
    Fetch,
}

/// Arguments of [`PubMedTool`].
#[derive(Deserialize, JsonSchema)]
pub struct PubMedParameters {
    #[schemars(
        description = "For `Search`, the query, e.g. `c.1187G>A AND CMTR1[gene]`. For `Fetch`, a single PubMed id from a previous search."
    )]
    term: String,
    #[schemars(description = "`Search` or `Fetch`.")]
    method: PubMedMethod,
}

/// A tool for finding literature in PubMed.
pub struct PubMedTool {
    client: EutilsClient,
    parameter_schema: Value,
}

impl PubMedTool {
    /// Creates a new PubMed tool sending requests through `client`.
    #[inline]
    pub fn new(client: EutilsClient) -> Self {
        PubMedTool {
            client,
            parameter_schema: schema_for!(PubMedParameters).to_value(),
        }
    }
}

impl Tool for PubMedTool {
    type Input = PubMedParameters;

    fn name(&self) -> &str {
        "pubmed"
    }

    fn description(&self) -> &str {
        r#"
Finds literature about a variant in PubMed. `Search` returns up to 5 article ids for a query, `Fetch` returns the summary of one article id.
Both return the raw JSON answer of the service."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn execute(
        &self,
        input: PubMedParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        let client = self.client.clone();
        async move {
            let envelope = match input.method {
                PubMedMethod::Search => {
                    pubmed::search(&client, &input.term).await?
                }
                PubMedMethod::Fetch => {
                    pubmed::fetch_summary(&client, input.term.trim()).await?
                }
            };
            serde_json::to_string(&envelope).map_err(|err| {
                ToolError::execution_error().with_reason(err.to_string())
            })
        }
    }
}
