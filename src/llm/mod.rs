//! Decision oracle abstraction and the hosted-proxy client

mod oracle;
mod proxy;
mod types;

pub use oracle::{AssistantReply, DecisionOracle};
pub use proxy::ProxyProvider;
pub use types::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatTool, FunctionDeclaration,
    ToolDescriptor, WireFunctionCall, WireToolCall,
};
