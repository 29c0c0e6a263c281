use super::names::NameRegistry;
use super::wrapper::CParam;
use crate::config::GeneratorOptions;
use crate::error::{GenError, GenResult};
use crate::model::{EntityNode, EntityTree, MetadataTable};
use crate::type_map::{TypeMapper, is_void};
use capi_types::{Declaration, NativeType, Parameter};

/* Name of the leading instance-pointer parameter on every member wrapper */
pub const INSTANCE_PARAM: &str = "cls";

pub const GETTER_PREFIX: &str = "get_";
pub const SETTER_PREFIX: &str = "set_";

/* Unnamed parameters are spelled arg0, arg1, ... by position */
pub fn param_name(index: usize, param: &Parameter) -> String {
    if param.name.is_empty() {
        format!("arg{}", index)
    } else {
        param.name.clone()
    }
}

pub fn instance_param(class_name: &str) -> CParam {
    CParam::new(format!("{}*", class_name), INSTANCE_PARAM)
}

/// State shared by the entity handlers for the duration of one pass.
pub struct EmitContext<'a> {
    pub tree: &'a EntityTree,
    pub type_mapper: &'a dyn TypeMapper,
    pub options: &'a GeneratorOptions,
    pub names: NameRegistry,
    pub metadata: MetadataTable,
}

impl<'a> EmitContext<'a> {
    pub fn new(
        tree: &'a EntityTree,
        type_mapper: &'a dyn TypeMapper,
        options: &'a GeneratorOptions,
    ) -> Self {
        Self {
            tree,
            type_mapper,
            options,
            names: NameRegistry::new(),
            metadata: MetadataTable::new(),
        }
    }

    pub fn c_type(&self, ty: &NativeType, node: &EntityNode) -> GenResult<String> {
        self.type_mapper
            .type_map(ty)
            .map(|map| map.c_type)
            .ok_or_else(|| GenError::UnmappedType {
                ty: ty.to_string(),
                entity: self.tree.qualified_name(node.id),
            })
    }

    pub fn c_params(&self, params: &[Parameter], node: &EntityNode) -> GenResult<Vec<CParam>> {
        params
            .iter()
            .enumerate()
            .map(|(index, param)| {
                Ok(CParam::new(
                    self.c_type(&param.ty, node)?,
                    param_name(index, param),
                ))
            })
            .collect()
    }

    pub fn to_foreign(&self, expr: &str) -> String {
        format!("{}({})", self.options.to_foreign, expr)
    }

    pub fn from_foreign(&self, expr: &str) -> String {
        format!("{}({})", self.options.from_foreign, expr)
    }

    /* "FromForeign(a), FromForeign(b)" */
    pub fn forward_args(&self, params: &[Parameter]) -> String {
        params
            .iter()
            .enumerate()
            .map(|(index, param)| self.from_foreign(&param_name(index, param)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /* Wrap a forwarding call so non-void results leave through the outbound conversion */
    pub fn return_statement(&self, returns: &NativeType, call: &str) -> String {
        if is_void(returns) {
            format!("{};", call)
        } else {
            format!("return {};", self.to_foreign(call))
        }
    }

    pub fn parent_class(&self, node: &EntityNode) -> GenResult<&'a EntityNode> {
        let tree: &'a EntityTree = self.tree;
        match tree.parent(node.id) {
            Some(parent) if matches!(parent.decl, Declaration::Class(_)) => Ok(parent),
            _ => Err(GenError::MissingParentClass {
                entity: tree.qualified_name(node.id),
            }),
        }
    }

    /* Class spelling used for instance pointers, wrapper subclass when present */
    pub fn class_name(&mut self, class: &EntityNode) -> String {
        if self.metadata.get_or_create(class).has_wrapper_class {
            format!("{}{}", class.name, self.options.wrapper_suffix)
        } else {
            class.name.clone()
        }
    }

    pub fn assign_function_name(&mut self, node: &EntityNode, base_name: &str) -> String {
        let name = self.names.reserve(base_name);
        self.metadata.get_or_create(node).c_function_name = Some(name.clone());
        name
    }

    /* Base name for a field; get_<name> and set_<name> are reserved along with it */
    pub fn assign_accessor_name(&mut self, node: &EntityNode, base_name: &str) -> String {
        let name = self
            .names
            .reserve_with_prefixes(base_name, &[GETTER_PREFIX, SETTER_PREFIX]);
        self.metadata.get_or_create(node).c_function_name = Some(name.clone());
        name
    }
}
