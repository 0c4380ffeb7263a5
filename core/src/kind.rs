//! Known node kinds and the categories rules classify them into.

use crate::{CoreError, CoreResult, NodeType, BASE_PACKAGE, LANGCHAIN_PACKAGE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A node type the standard connection rules know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    ChainRetrievalQa,
    Agent,
    ChainLlm,
    OpenAiAssistant,
    ChatTrigger,
    MemoryBufferWindow,
    MemoryMotorhead,
    MemoryPostgresChat,
    MemoryRedisChat,
    MemoryXata,
    MemoryZep,
    Start,
}

impl NodeKind {
    /// Every known kind, in declaration order.
    pub const ALL: [NodeKind; 12] = [
        NodeKind::ChainRetrievalQa,
        NodeKind::Agent,
        NodeKind::ChainLlm,
        NodeKind::OpenAiAssistant,
        NodeKind::ChatTrigger,
        NodeKind::MemoryBufferWindow,
        NodeKind::MemoryMotorhead,
        NodeKind::MemoryPostgresChat,
        NodeKind::MemoryRedisChat,
        NodeKind::MemoryXata,
        NodeKind::MemoryZep,
        NodeKind::Start,
    ];

    /// The bare type name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::ChainRetrievalQa => "chainRetrievalQa",
            NodeKind::Agent => "agent",
            NodeKind::ChainLlm => "chainLlm",
            NodeKind::OpenAiAssistant => "openAiAssistant",
            NodeKind::ChatTrigger => "chatTrigger",
            NodeKind::MemoryBufferWindow => "memoryBufferWindow",
            NodeKind::MemoryMotorhead => "memoryMotorhead",
            NodeKind::MemoryPostgresChat => "memoryPostgresChat",
            NodeKind::MemoryRedisChat => "memoryRedisChat",
            NodeKind::MemoryXata => "memoryXata",
            NodeKind::MemoryZep => "memoryZep",
            NodeKind::Start => "start",
        }
    }

    /// The package that ships this kind.
    pub fn package(self) -> &'static str {
        match self {
            NodeKind::Start => BASE_PACKAGE,
            _ => LANGCHAIN_PACKAGE,
        }
    }

    /// The fully qualified type identifier of this kind.
    pub fn node_type(self) -> NodeType {
        NodeType::qualified(self.package(), self.name())
    }

    /// Classify a type identifier by its bare name.
    pub fn from_type(node_type: &NodeType) -> Option<NodeKind> {
        let bare = node_type.bare_name();
        Self::ALL.iter().copied().find(|kind| kind.name() == bare)
    }

    /// The category this kind belongs to in the standard tables.
    pub fn category(self) -> Option<NodeCategory> {
        NodeCategory::ALL
            .iter()
            .copied()
            .find(|category| category.standard_kinds().contains(&self))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of node types used by rule predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeCategory {
    /// Chains and agents that consume a prompt.
    AiChain,
    /// Nodes that supply prompt or chat input downstream.
    PromptProvider,
    /// Nodes that supply conversational memory.
    Memory,
}

/// Chain and agent nodes.
pub const AI_CHAIN_KINDS: &[NodeKind] = &[
    NodeKind::ChainRetrievalQa,
    NodeKind::Agent,
    NodeKind::ChainLlm,
    NodeKind::OpenAiAssistant,
];

/// Nodes that provide the prompt themselves.
pub const PROMPT_PROVIDER_KINDS: &[NodeKind] = &[NodeKind::ChatTrigger];

/// Conversational memory nodes.
pub const MEMORY_KINDS: &[NodeKind] = &[
    NodeKind::MemoryBufferWindow,
    NodeKind::MemoryMotorhead,
    NodeKind::MemoryPostgresChat,
    NodeKind::MemoryRedisChat,
    NodeKind::MemoryXata,
    NodeKind::MemoryZep,
];

impl NodeCategory {
    /// Every category, in declaration order.
    pub const ALL: [NodeCategory; 3] = [
        NodeCategory::AiChain,
        NodeCategory::PromptProvider,
        NodeCategory::Memory,
    ];

    /// The category name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            NodeCategory::AiChain => "aiChain",
            NodeCategory::PromptProvider => "promptProvider",
            NodeCategory::Memory => "memory",
        }
    }

    /// The kinds this category contains in the standard tables.
    pub fn standard_kinds(self) -> &'static [NodeKind] {
        match self {
            NodeCategory::AiChain => AI_CHAIN_KINDS,
            NodeCategory::PromptProvider => PROMPT_PROVIDER_KINDS,
            NodeCategory::Memory => MEMORY_KINDS,
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
