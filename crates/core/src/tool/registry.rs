use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::tool::object::{ToolObject, ToolObjectImpl};
use crate::tool::{Error, Tool, ToolCallRequest, ToolDefinition, ToolResult};

type BoxedToolFuture = Pin<Box<dyn Future<Output = ToolResult> + Send>>;

/// An object that manages a toolset and dispatches calls to it.
#[derive(Default)]
pub struct Registry {
    tools: HashMap<String, Arc<dyn ToolObject>>,
}

impl Registry {
    /// Registers a tool, replacing any tool with the same name.
    pub fn add_tool<T: Tool>(&mut self, tool: T) {
        let name = tool.name().to_owned();
        if self.tools.contains_key(&name) {
            warn!("replacing tool: {name}");
        }
        self.tools.insert(name, Arc::new(ToolObjectImpl(tool)));
    }

    /// Returns `true` if a tool named `name` is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Returns the definitions of all registered tools, sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<_> =
            self.tools.values().map(|tool| tool.definition()).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Calls the tool named `name` with `arguments`.
    ///
    /// The returned future is independent of the registry.
    pub fn call(&self, name: &str, arguments: Value) -> BoxedToolFuture {
        let Some(tool) = self.tools.get(name) else {
            warn!("tool not found: {name}");
            return Box::pin(std::future::ready(ToolResult::Err(
                Error::not_found().with_reason(format!("no tool named `{name}`")),
            )));
        };
        trace!("calling tool {name} with args: {arguments:?}");
        Arc::clone(tool).execute(arguments)
    }

    /// Dispatches a batch of requests, handing each call future to
    /// `spawner` along with its request id.
    ///
    /// Requests naming unknown tools are skipped.
    pub fn handle_requests<S>(&self, requests: Vec<ToolCallRequest>, spawner: S)
    where
        S: FnMut(String, BoxedToolFuture),
    {
        let mut spawner = spawner;

        let span = debug_span!("tool registry");
        let _enter = span.enter();

        for req in requests {
            let Some(tool) = self.tools.get(&req.name) else {
                warn!("tool not found: {}", req.name);
                continue;
            };

            let id = req.id;
            let arguments = req.arguments;
            trace!("spawning a tool ({id}) with args: {arguments:?}");
            spawner(id, Arc::clone(tool).execute(arguments));
        }
    }
}
