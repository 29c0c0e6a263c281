use super::helpers::{EmitContext, instance_param};
use super::wrapper::{CParam, WrapperFn};
use crate::config::OverrideStyle;
use crate::error::GenResult;
use crate::model::EntityNode;
use capi_types::MethodDecl;
use tracing::debug;

/* Forwarding wrapper for an instance method, plus the override setter when the
 * method is virtual. Constructors and destructors yield nothing: instances are
 * created and released by the factory layer. */
pub fn emit_member_function(
    ctx: &mut EmitContext<'_>,
    node: &EntityNode,
    method: &MethodDecl,
) -> GenResult<Vec<WrapperFn>> {
    if method.is_constructor_or_destructor() {
        debug!(entity = %node.name, role = ?method.role, "skipping special member");
        return Ok(Vec::new());
    }

    let class = ctx.parent_class(node)?;
    let class_name = ctx.class_name(class);
    let return_type = ctx.c_type(&method.returns, node)?;
    let params = ctx.c_params(&method.params, node)?;

    let symbol_name = ctx.tree.qualified_name(node.id);
    let c_function_name = ctx.assign_function_name(node, &symbol_name);

    let call = format!("cls->{}({})", node.name, ctx.forward_args(&method.params));
    let mut wrappers = vec![
        WrapperFn::new(return_type, c_function_name.as_str())
            .param(instance_param(&class_name))
            .params(params)
            .statement(ctx.return_statement(&method.returns, &call)),
    ];

    if method.is_virtual {
        wrappers.push(emit_override_setter(ctx, node, &class_name, &c_function_name));
    }
    Ok(wrappers)
}

/* void set_<Class>_fn<Method>(<Class>* cls, void* fn) */
fn emit_override_setter(
    ctx: &mut EmitContext<'_>,
    node: &EntityNode,
    class_name: &str,
    slot: &str,
) -> WrapperFn {
    let setter_name = ctx
        .names
        .reserve(&format!("set_{}_fn{}", class_name, node.name));

    let statement = match ctx.options.override_style {
        OverrideStyle::Table => {
            format!("cls->{}[\"{}\"] = fn;", ctx.options.override_table, slot)
        }
        OverrideStyle::Slot => format!("cls->fn{0} = (decltype(cls->fn{0}))fn;", node.name),
    };

    WrapperFn::new("void", setter_name)
        .param(instance_param(class_name))
        .param(CParam::new("void*", "fn"))
        .statement(statement)
}
