use serde_json::Value;
use varinsight_core::EutilsClient;
use varinsight_core::tool::{
    Registry, ToolCallRequest, ToolDefinition, ToolResult,
};
use varinsight_eutils::Transport;
use varinsight_http_eutils::{EutilsConfig, HttpTransport};

use crate::tools::*;

/// A toolbox builder.
///
/// See [`Toolbox`].
pub struct ToolboxBuilder {
    client: EutilsClient,
    with_pubmed: bool,
}

impl ToolboxBuilder {
    /// Creates a toolbox builder sending requests through `transport`.
    #[inline]
    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self::with_client(EutilsClient::new(transport))
    }

    /// Creates a toolbox builder talking to E-utilities over HTTP.
    #[inline]
    pub fn with_config(config: EutilsConfig) -> Self {
        Self::with_transport(HttpTransport::new(config))
    }

    /// Creates a toolbox builder sharing an existing client.
    #[inline]
    pub fn with_client(client: EutilsClient) -> Self {
        Self {
            client,
            with_pubmed: true,
        }
    }

    /// Sets whether the PubMed tool is registered (it is by default).
    #[inline]
    pub fn with_pubmed(mut self, enabled: bool) -> Self {
        self.with_pubmed = enabled;
        self
    }

    /// Builds a new toolbox.
    pub fn build(self) -> Toolbox {
        let mut registry = Registry::default();
        registry.add_tool(ClinVarTool::new(self.client.clone()));
        registry.add_tool(OmimTool::new(self.client.clone()));
        if self.with_pubmed {
            registry.add_tool(PubMedTool::new(self.client.clone()));
        }

        Toolbox {
            client: self.client,
            registry,
        }
    }
}

/// The built-in tools, ready to be handed to an orchestration layer.
///
/// Every tool shares one client, so they also share the transport's
/// connection pool and rate limiter. The toolbox is basically a wrapper
/// around a [`Registry`].
pub struct Toolbox {
    client: EutilsClient,
    registry: Registry,
}

impl Toolbox {
    /// Returns the client shared by the tools.
    #[inline]
    pub fn client(&self) -> &EutilsClient {
        &self.client
    }

    /// Returns the definitions of all tools, sorted by name.
    #[inline]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    /// Calls the tool named `name` with `arguments`.
    #[inline]
    pub async fn call(&self, name: &str, arguments: Value) -> ToolResult {
        self.registry.call(name, arguments).await
    }

    /// Calls the tool named in `request`.
    #[inline]
    pub async fn handle(&self, request: ToolCallRequest) -> ToolResult {
        debug!("handling tool call {}", request.id);
        self.call(&request.name, request.arguments).await
    }

    /// Returns the underlying registry.
    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
