use super::label::{deserialize_program_label, ProgramLabel};
use super::{lenient, lenient_list, present};
use serde::Deserialize;
use serde_json::Value;

/// Label given to variable declarations without a `name` key
pub const ANONYMOUS_VARIABLE: &str = "<anon>";

/// Node type of the container holding the program's function definitions
pub const FUNCTIONS_NODE_TYPE: &str = "ur-functions";

/// Root of a parsed `.urpx` archive
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgramDocument {
    #[serde(deserialize_with = "lenient")]
    pub application: Application,
    #[serde(deserialize_with = "lenient")]
    pub program: Program,
}

impl ProgramDocument {
    /// Non-empty program name from `application.applicationInfo.name`
    pub fn application_name(&self) -> Option<&str> {
        self.application
            .application_info
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    /// Embedded URScript body, empty when absent
    pub fn script(&self) -> &str {
        self.application.urscript.script.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Application {
    #[serde(deserialize_with = "lenient")]
    pub application_info: ApplicationInfo,
    #[serde(deserialize_with = "lenient")]
    pub urscript: UrScript,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApplicationInfo {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UrScript {
    #[serde(deserialize_with = "lenient")]
    pub script: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Program {
    #[serde(deserialize_with = "lenient_list")]
    pub variable_declarations: Vec<VariableDeclaration>,
    #[serde(deserialize_with = "lenient")]
    pub program_content: ProgramContent,
}

impl Program {
    /// The first top-level node whose contributed type is `ur-functions`
    pub fn functions_container(&self) -> Option<&Node> {
        self.program_content
            .children
            .iter()
            .find(|node| node.node_type() == Some(FUNCTIONS_NODE_TYPE))
    }

    /// Body of the program's entry-point function: the children of the first
    /// function under the functions container
    pub fn entry_point_body(&self) -> &[Node] {
        self.functions_container()
            .and_then(|container| container.children.first())
            .map(|main| main.children.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VariableDeclaration {
    /// Raw `name` value; `None` only when the key is missing
    #[serde(deserialize_with = "present")]
    pub name: Option<Value>,
}

impl VariableDeclaration {
    /// Synthetic outline leaf whose label source is the variable's name.
    /// A name that is not a string is used as a label as-is, so `null`
    /// resolves to `Unknown` and a list is read as a composite label.
    pub fn label_node(&self) -> Node {
        match &self.name {
            None => Node::labeled(ANONYMOUS_VARIABLE),
            Some(name) => Node {
                program_label: ProgramLabel::from_json(name.clone()),
                ..Node::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProgramContent {
    #[serde(deserialize_with = "lenient_list")]
    pub children: Vec<Node>,
}

/// One element of the program tree
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Node {
    #[serde(deserialize_with = "deserialize_program_label")]
    pub program_label: Option<ProgramLabel>,
    #[serde(deserialize_with = "lenient")]
    pub contributed_node: Option<ContributedNode>,
    #[serde(deserialize_with = "lenient_list")]
    pub children: Vec<Node>,
}

impl Node {
    /// A childless node whose only naming information is a plain label
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            program_label: Some(ProgramLabel::Plain(label.into())),
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// `contributedNode.type`, if present
    pub fn node_type(&self) -> Option<&str> {
        self.contributed_node
            .as_ref()
            .and_then(|contributed| contributed.node_type.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContributedNode {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub node_type: Option<String>,
}
