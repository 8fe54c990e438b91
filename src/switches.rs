use crate::error::{Result, SdkError};
use std::collections::BTreeMap;

/// Known search toggles a caller can flip per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SwitchId {
    VectorSearch,
    HybridSearch,
    KnowledgeGraphSearch,
}

impl SwitchId {
    pub fn as_str(self) -> &'static str {
        match self {
            SwitchId::VectorSearch => "vector_search",
            SwitchId::HybridSearch => "hybrid_search",
            SwitchId::KnowledgeGraphSearch => "kg_search",
        }
    }
}

/// One toggle: its state plus the display strings a UI needs.
#[derive(Debug, Clone)]
pub struct SwitchSpec {
    pub checked: bool,
    pub label: String,
    pub tooltip: String,
}

/// Tagged mapping of switch specs, constructed through validation only.
#[derive(Debug, Clone, Default)]
pub struct SwitchMap {
    entries: BTreeMap<SwitchId, SwitchSpec>,
}

impl SwitchMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default toggle set: vector search on, the rest off.
    pub fn defaults() -> Self {
        let mut map = Self::new();
        // Labels are fixed strings so insertion cannot fail here.
        let _ = map.insert(
            SwitchId::VectorSearch,
            SwitchSpec {
                checked: true,
                label: "Vector Search".to_string(),
                tooltip: "Semantic search over embedded documents".to_string(),
            },
        );
        let _ = map.insert(
            SwitchId::HybridSearch,
            SwitchSpec {
                checked: false,
                label: "Hybrid Search".to_string(),
                tooltip: "Combine vector and keyword search".to_string(),
            },
        );
        let _ = map.insert(
            SwitchId::KnowledgeGraphSearch,
            SwitchSpec {
                checked: false,
                label: "Knowledge Graph".to_string(),
                tooltip: "Search the extracted entity graph".to_string(),
            },
        );
        map
    }

    /// Insert a spec, rejecting empty labels and duplicate ids.
    pub fn insert(&mut self, id: SwitchId, spec: SwitchSpec) -> Result<()> {
        if spec.label.trim().is_empty() {
            return Err(SdkError::InvalidRequest(format!(
                "switch {} has an empty label",
                id.as_str()
            )));
        }
        if self.entries.contains_key(&id) {
            return Err(SdkError::InvalidRequest(format!(
                "switch {} registered twice",
                id.as_str()
            )));
        }
        self.entries.insert(id, spec);
        Ok(())
    }

    pub fn set_checked(&mut self, id: SwitchId, checked: bool) -> Result<()> {
        match self.entries.get_mut(&id) {
            Some(spec) => {
                spec.checked = checked;
                Ok(())
            }
            None => Err(SdkError::InvalidRequest(format!(
                "unknown switch {}",
                id.as_str()
            ))),
        }
    }

    /// Unregistered switches read as off.
    pub fn is_checked(&self, id: SwitchId) -> bool {
        self.entries.get(&id).is_some_and(|spec| spec.checked)
    }

    pub fn get(&self, id: SwitchId) -> Option<&SwitchSpec> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SwitchId, &SwitchSpec)> {
        self.entries.iter().map(|(id, spec)| (*id, spec))
    }
}
