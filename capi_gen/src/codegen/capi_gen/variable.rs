use super::helpers::{EmitContext, GETTER_PREFIX, SETTER_PREFIX, instance_param};
use super::wrapper::{CParam, WrapperFn};
use crate::error::GenResult;
use crate::model::EntityNode;
use capi_types::{VariableDecl, Visibility};

/// Emits the getter/setter pair for a field.
///
/// Protected fields are not reachable from a free function, so their bodies go
/// through the `__get_<field>` / `__set_<field>` accessors the wrapper
/// generation step adds to the class. Public fields are read and written
/// directly.
pub fn emit_member_variable(
    ctx: &mut EmitContext<'_>,
    node: &EntityNode,
    var: &VariableDecl,
) -> GenResult<[WrapperFn; 2]> {
    let class = ctx.parent_class(node)?;
    let class_name = ctx.class_name(class);
    let c_type = ctx.c_type(&var.ty, node)?;

    let base_name = format!("{}_{}", ctx.tree.qualified_name(class.id), node.name);
    let c_function_name = ctx.assign_accessor_name(node, &base_name);

    let options = ctx.options;
    let value = ctx.from_foreign("value");
    let (read, write) = match node.access {
        Visibility::Protected => (
            format!("cls->{}{}()", options.getter_prefix, node.name),
            format!("cls->{}{}({});", options.setter_prefix, node.name, value),
        ),
        _ => (
            format!("cls->{}", node.name),
            format!("cls->{} = {};", node.name, value),
        ),
    };

    let getter = WrapperFn::new(c_type.as_str(), format!("{}{}", GETTER_PREFIX, c_function_name))
        .param(instance_param(&class_name))
        .statement(format!("return {};", ctx.to_foreign(&read)));

    let setter = WrapperFn::new("void", format!("{}{}", SETTER_PREFIX, c_function_name))
        .param(instance_param(&class_name))
        .param(CParam::new(c_type, "value"))
        .statement(write);

    Ok([getter, setter])
}
