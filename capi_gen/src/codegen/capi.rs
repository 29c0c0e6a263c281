use crate::codegen::capi_gen::{
    CodePrinter, EmitContext, WrapperFn, emit_free_function, emit_member_function,
    emit_member_variable,
};
use crate::config::GeneratorOptions;
use crate::error::{GenError, GenResult};
use crate::model::{EntityNode, EntityTree, MetadataTable, VisitEvent};
use crate::type_map::TypeMapper;
use capi_types::{Declaration, Visibility};
use serde_derive::Serialize;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, error, info};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    FreeFunction,
    MemberFunction,
    VirtualMemberFunction,
    MemberVariable,
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExportKind::FreeFunction => "free-function",
            ExportKind::MemberFunction => "member-function",
            ExportKind::VirtualMemberFunction => "virtual-member-function",
            ExportKind::MemberVariable => "member-variable",
        };
        f.write_str(label)
    }
}

/* One exported entity and the flat symbols emitted for it, in emission order */
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ExportedSymbol {
    pub entity: String,
    pub kind: ExportKind,
    pub symbols: Vec<String>,
}

/// Result of a completed pass. Nothing touches the filesystem until
/// [`GenerationOutput::commit`] is called.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    pub source: String,
    pub symbols: Vec<ExportedSymbol>,
    pub metadata: MetadataTable,
    pub artifact_path: PathBuf,
}

impl GenerationOutput {
    pub fn wrapper_count(&self) -> usize {
        self.symbols.iter().map(|export| export.symbols.len()).sum()
    }

    pub fn manifest_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.symbols)
    }

    pub fn commit(&self) -> GenResult<&Path> {
        self.commit_to(&self.artifact_path)?;
        Ok(&self.artifact_path)
    }

    /// Writes the artifact in one step: a temporary file next to `path` is
    /// filled and then renamed over it, so a failure leaves no partial file.
    pub fn commit_to(&self, path: &Path) -> GenResult<()> {
        write_atomically(path, &self.source).map_err(|source| {
            error!(path = %path.display(), error = %source, "failed saving generated C API");
            GenError::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(path = %path.display(), bytes = self.source.len(), "wrote generated C API");
        Ok(())
    }
}

fn write_atomically(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// One walk over an entity tree emitting flat-linkage wrappers.
///
/// Driven as `start`, `visit` per traversal event, then `stop`. Container exit
/// events are ignored so every entity is handled exactly once.
pub struct CApiPass<'a> {
    ctx: EmitContext<'a>,
    printer: CodePrinter,
    symbols: Vec<ExportedSymbol>,
}

impl<'a> CApiPass<'a> {
    pub fn new(
        tree: &'a EntityTree,
        type_mapper: &'a dyn TypeMapper,
        options: &'a GeneratorOptions,
    ) -> Self {
        Self {
            ctx: EmitContext::new(tree, type_mapper, options),
            printer: CodePrinter::new(options.indent.as_str()),
            symbols: Vec::new(),
        }
    }

    pub fn start(&mut self) {
        let options = self.ctx.options;
        for line in &options.preamble {
            self.printer.line(line);
        }
        if !options.preamble.is_empty() {
            self.printer.blank();
        }
        self.printer.line("extern \"C\"");
        self.printer.line("{");
        self.printer.blank();
    }

    pub fn visit(&mut self, node: &EntityNode, event: VisitEvent) -> GenResult<()> {
        if event == VisitEvent::ContainerExit {
            return Ok(());
        }
        self.ctx.metadata.get_or_create(node);

        let exportable = matches!(
            node.decl,
            Declaration::FreeFunction(_)
                | Declaration::MemberFunction(_)
                | Declaration::MemberVariable(_)
        );
        if exportable && node.access == Visibility::Private {
            debug!(entity = %node.name, "skipping private member");
            return Ok(());
        }

        let (kind, wrappers) = match &node.decl {
            Declaration::FreeFunction(func) => (
                ExportKind::FreeFunction,
                vec![emit_free_function(&mut self.ctx, node, func)?],
            ),
            Declaration::MemberFunction(method) => {
                let wrappers = emit_member_function(&mut self.ctx, node, method)?;
                if wrappers.is_empty() {
                    return Ok(());
                }
                let kind = if method.is_virtual {
                    ExportKind::VirtualMemberFunction
                } else {
                    ExportKind::MemberFunction
                };
                (kind, wrappers)
            }
            Declaration::MemberVariable(var) => (
                ExportKind::MemberVariable,
                Vec::from(emit_member_variable(&mut self.ctx, node, var)?),
            ),
            Declaration::Namespace | Declaration::Class(_) => return Ok(()),
            Declaration::Other => {
                debug!(entity = %node.name, "skipping unsupported entity kind");
                return Ok(());
            }
        };

        self.emit(node, kind, &wrappers);
        Ok(())
    }

    fn emit(&mut self, node: &EntityNode, kind: ExportKind, wrappers: &[WrapperFn]) {
        let options = self.ctx.options;
        let export_macro = options.export_macro();
        for wrapper in wrappers {
            self.printer.emit_wrapper(wrapper, export_macro);
        }

        let entity = self.ctx.tree.qualified_name(node.id);
        let symbols: Vec<String> = wrappers.iter().map(|wrapper| wrapper.name.clone()).collect();
        debug!(entity = %entity, %kind, symbols = ?symbols, "emitted wrappers");
        self.symbols.push(ExportedSymbol {
            entity,
            kind,
            symbols,
        });
    }

    pub fn stop(mut self) -> GenerationOutput {
        self.printer.line("}");
        GenerationOutput {
            source: self.printer.into_string(),
            symbols: self.symbols,
            metadata: self.ctx.metadata,
            artifact_path: self.ctx.options.artifact_path(),
        }
    }
}

/// Runs [`CApiPass`] over a whole tree.
pub struct CApiGenerator<'a> {
    tree: &'a EntityTree,
    type_mapper: &'a dyn TypeMapper,
    options: GeneratorOptions,
}

impl<'a> CApiGenerator<'a> {
    pub fn new(
        tree: &'a EntityTree,
        type_mapper: &'a dyn TypeMapper,
        options: GeneratorOptions,
    ) -> Self {
        Self {
            tree,
            type_mapper,
            options,
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn generate(&self) -> GenResult<GenerationOutput> {
        let mut pass = CApiPass::new(self.tree, self.type_mapper, &self.options);
        pass.start();
        self.tree.visit(|node, event| pass.visit(node, event))?;
        let output = pass.stop();

        info!(
            entities = output.symbols.len(),
            wrappers = output.wrapper_count(),
            "generated C API"
        );
        Ok(output)
    }

    /* Generate and write the artifact to the configured path */
    pub fn run(&self) -> GenResult<GenerationOutput> {
        let output = self.generate()?;
        output.commit()?;
        Ok(output)
    }
}
