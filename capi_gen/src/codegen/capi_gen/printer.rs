use super::wrapper::WrapperFn;

/// Line buffer for generated source with an explicit indentation depth.
///
/// Nothing is written anywhere until the caller takes the contents; a pass
/// that fails simply drops the printer.
#[derive(Debug, Clone)]
pub struct CodePrinter {
    lines: Vec<String>,
    depth: usize,
    unit: String,
}

impl CodePrinter {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
            unit: unit.into(),
        }
    }

    /* Blank lines are never indented */
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", self.unit.repeat(self.depth), text));
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /* Render one wrapper: declaration, braced body, trailing blank line */
    pub fn emit_wrapper(&mut self, wrapper: &WrapperFn, export_macro: Option<&str>) {
        self.line(wrapper.declaration(export_macro));
        self.line("{");
        self.indent();
        for statement in &wrapper.body {
            self.line(statement);
        }
        self.dedent();
        self.line("}");
        self.blank();
    }

    pub fn contents(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    pub fn into_string(self) -> String {
        self.contents()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::capi_gen::wrapper::CParam;

    #[test]
    fn test_indent_shifts_following_lines() {
        let mut printer = CodePrinter::new("    ");
        printer.line("a");
        printer.indent();
        printer.line("b");
        printer.indent();
        printer.line("c");
        printer.dedent();
        printer.line("d");
        printer.dedent();
        printer.line("e");

        assert_eq!(printer.contents(), "a\n    b\n        c\n    d\ne\n");
    }

    #[test]
    fn test_blank_lines_carry_no_indentation() {
        let mut printer = CodePrinter::new("\t");
        printer.indent();
        printer.line("");
        printer.blank();
        printer.line("x");
        assert_eq!(printer.lines(), &["", "", "\tx"]);
    }

    #[test]
    fn test_dedent_never_underflows() {
        let mut printer = CodePrinter::new("  ");
        printer.dedent();
        assert_eq!(printer.depth(), 0);
        printer.line("top");
        assert_eq!(printer.contents(), "top\n");
    }

    #[test]
    fn test_emit_wrapper_layout() {
        let wrapper = WrapperFn::new("int", "Add")
            .param(CParam::new("int", "a"))
            .statement("return ToForeign(Add(FromForeign(a)));");

        let mut printer = CodePrinter::new("    ");
        printer.emit_wrapper(&wrapper, Some("EXPORT_API"));

        assert_eq!(
            printer.contents(),
            "EXPORT_API int Add(int a)\n{\n    return ToForeign(Add(FromForeign(a)));\n}\n\n"
        );
        assert_eq!(printer.depth(), 0);
    }
}
