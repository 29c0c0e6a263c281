use serde_derive::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/* A native type exactly as the parser spelled it, e.g. "const String&" */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Hash)]
#[serde(transparent)]
pub struct NativeType(pub String);

impl NativeType {
    pub fn new(spelling: impl Into<String>) -> Self {
        Self(spelling.into())
    }

    pub fn void() -> Self {
        Self("void".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NativeType {
    fn default() -> Self {
        Self::void()
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Parameter {
    /* May be empty for unnamed parameters */
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: NativeType,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MethodRole {
    #[default]
    Method,
    Constructor,
    Destructor,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ClassDecl {
    /* True when a generated wrapper subclass (`<Class>Ex`) exists for this class */
    #[serde(default)]
    pub wrapper: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct FunctionDecl {
    #[serde(default)]
    pub returns: NativeType,
    #[serde(default)]
    pub params: Vec<Parameter>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct MethodDecl {
    #[serde(default)]
    pub returns: NativeType,
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
    #[serde(default)]
    pub role: MethodRole,
}

impl MethodDecl {
    pub fn is_constructor_or_destructor(&self) -> bool {
        matches!(self.role, MethodRole::Constructor | MethodRole::Destructor)
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct VariableDecl {
    #[serde(rename = "type")]
    pub ty: NativeType,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Declaration {
    Namespace,
    Class(ClassDecl),
    FreeFunction(FunctionDecl),
    MemberFunction(MethodDecl),
    MemberVariable(VariableDecl),
    /* Enums, typedefs, templates and anything else the parser reports */
    #[serde(other)]
    Other,
}

impl Declaration {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Declaration::Namespace => "namespace",
            Declaration::Class(_) => "class",
            Declaration::FreeFunction(_) => "free-function",
            Declaration::MemberFunction(_) => "member-function",
            Declaration::MemberVariable(_) => "member-variable",
            Declaration::Other => "other",
        }
    }

    /* Namespaces and classes open a scope that contributes to qualified names */
    pub fn is_scope(&self) -> bool {
        matches!(self, Declaration::Namespace | Declaration::Class(_))
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Entity {
    pub name: String,
    #[serde(flatten)]
    pub decl: Declaration,
    #[serde(default)]
    pub access: Visibility,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Entity>,
}

impl Entity {
    pub fn new(name: impl Into<String>, decl: Declaration) -> Self {
        Self {
            name: name.into(),
            decl,
            access: Visibility::Public,
            children: Vec::new(),
        }
    }

    pub fn with_access(mut self, access: Visibility) -> Self {
        self.access = access;
        self
    }

    pub fn with_children(mut self, children: Vec<Entity>) -> Self {
        self.children = children;
        self
    }
}
