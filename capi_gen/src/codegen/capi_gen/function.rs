use super::helpers::EmitContext;
use super::wrapper::WrapperFn;
use crate::error::GenResult;
use crate::model::EntityNode;
use capi_types::FunctionDecl;

/* int Add(int a, int b) { return ToForeign(Add(FromForeign(a), FromForeign(b))); } */
pub fn emit_free_function(
    ctx: &mut EmitContext<'_>,
    node: &EntityNode,
    func: &FunctionDecl,
) -> GenResult<WrapperFn> {
    let return_type = ctx.c_type(&func.returns, node)?;
    let params = ctx.c_params(&func.params, node)?;

    let symbol_name = ctx.tree.qualified_name(node.id);
    let c_function_name = ctx.assign_function_name(node, &symbol_name);

    let call = format!("{}({})", symbol_name, ctx.forward_args(&func.params));
    Ok(WrapperFn::new(return_type, c_function_name)
        .params(params)
        .statement(ctx.return_statement(&func.returns, &call)))
}
