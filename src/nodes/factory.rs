//! Node factory system with rich metadata
//!
//! The host builds sockets and menu entries from the metadata declared here;
//! the plugin itself never draws anything.

/// Data types that can flow through ports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Floating point number
    Float,
    /// 3D vector (x, y, z)
    Vector3,
    /// 4x4 transform matrix
    Matrix4,
    /// Text string
    String,
    /// Boolean value
    Boolean,
    /// Any type (for generic ports)
    Any,
}

impl DataType {
    /// Check if this data type can connect to another
    pub fn can_connect_to(&self, other: &DataType) -> bool {
        self == other || *self == DataType::Any || *other == DataType::Any
    }

    /// Get a human-readable name for this data type
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Float => "Float",
            DataType::Vector3 => "Vector3",
            DataType::Matrix4 => "Matrix4",
            DataType::String => "String",
            DataType::Boolean => "Boolean",
            DataType::Any => "Any",
        }
    }
}

/// Hierarchical category system for organizing nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeCategory {
    path: Vec<String>,
}

impl NodeCategory {
    /// Create a new category from path components
    pub fn new(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Get the full path as a slice
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Get the category name (last component)
    pub fn name(&self) -> &str {
        self.path.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Get display string for menus
    pub fn display_string(&self) -> String {
        self.path.join(" > ")
    }
}

// Standard categories
impl NodeCategory {
    /// Get standard matrix category
    pub fn matrix() -> Self {
        Self::new(&["Matrix"])
    }
}

/// Port definition for node creation
#[derive(Debug, Clone)]
pub struct PortDefinition {
    pub name: String,
    pub data_type: DataType,
    pub optional: bool,
    pub description: Option<String>,
}

impl PortDefinition {
    /// Create a required port
    pub fn required(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            optional: false,
            description: None,
        }
    }

    /// Create an optional port
    pub fn optional(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            optional: true,
            description: None,
        }
    }

    /// Add description to port
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Processing cost hint for scheduling
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingCost {
    Minimal, // < 1ms
    Low,     // 1-10ms
    Medium,  // 10-100ms
    High,    // 100ms-1s
}

/// Rich metadata for nodes - the single source of truth the host reads
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    // Core identity
    pub node_type: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub version: &'static str,

    // Organization & categorization
    pub category: NodeCategory,
    pub tags: Vec<&'static str>,

    // Connectivity
    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,

    // Execution behavior
    pub processing_cost: ProcessingCost,
}

impl NodeMetadata {
    /// Create node metadata with sensible defaults
    pub fn new(
        node_type: &'static str,
        display_name: &'static str,
        category: NodeCategory,
        description: &'static str,
    ) -> Self {
        Self {
            node_type,
            display_name,
            description,
            version: "1.0",
            category,
            tags: vec![],
            inputs: vec![],
            outputs: vec![],
            processing_cost: ProcessingCost::Low,
        }
    }

    /// Set input ports
    pub fn with_inputs(mut self, inputs: Vec<PortDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Set output ports
    pub fn with_outputs(mut self, outputs: Vec<PortDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Set search tags
    pub fn with_tags(mut self, tags: Vec<&'static str>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the processing cost hint
    pub fn with_processing_cost(mut self, cost: ProcessingCost) -> Self {
        self.processing_cost = cost;
        self
    }
}

/// Trait implemented by every node this plugin exposes to the host
pub trait NodeFactory: Default {
    /// Static metadata the host uses to build sockets and menus
    fn metadata() -> NodeMetadata;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_connectivity() {
        assert!(DataType::Vector3.can_connect_to(&DataType::Vector3));
        assert!(DataType::Vector3.can_connect_to(&DataType::Any));
        assert!(DataType::Any.can_connect_to(&DataType::Matrix4));
        assert!(!DataType::Vector3.can_connect_to(&DataType::Matrix4));
    }

    #[test]
    fn test_category_paths() {
        let category = NodeCategory::matrix();
        assert_eq!(category.name(), "Matrix");
        assert_eq!(category.display_string(), "Matrix");
        assert_eq!(category.path().len(), 1);
    }
}
