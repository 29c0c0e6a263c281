/* Typed description of one flat-linkage function before it is rendered */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CParam {
    pub c_type: String,
    pub name: String,
}

impl CParam {
    pub fn new(c_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            c_type: c_type.into(),
            name: name.into(),
        }
    }

    pub fn render(&self) -> String {
        format!("{} {}", self.c_type, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperFn {
    pub return_type: String,
    pub name: String,
    pub params: Vec<CParam>,
    pub body: Vec<String>,
}

impl WrapperFn {
    pub fn new(return_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            return_type: return_type.into(),
            name: name.into(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: CParam) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = CParam>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn statement(mut self, statement: impl Into<String>) -> Self {
        self.body.push(statement.into());
        self
    }

    pub fn declaration(&self, export_macro: Option<&str>) -> String {
        let params = self
            .params
            .iter()
            .map(CParam::render)
            .collect::<Vec<_>>()
            .join(", ");
        match export_macro {
            Some(prefix) if !prefix.is_empty() => {
                format!("{} {} {}({})", prefix, self.return_type, self.name, params)
            }
            _ => format!("{} {}({})", self.return_type, self.name, params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_without_params() {
        let wrapper = WrapperFn::new("float", "get_Shape_radius").param(CParam::new("Shape*", "cls"));
        assert_eq!(wrapper.declaration(None), "float get_Shape_radius(Shape* cls)");

        let bare = WrapperFn::new("void", "Reset");
        assert_eq!(bare.declaration(None), "void Reset()");
    }

    #[test]
    fn test_declaration_with_export_macro() {
        let wrapper = WrapperFn::new("int", "Add")
            .params([CParam::new("int", "a"), CParam::new("int", "b")]);
        assert_eq!(
            wrapper.declaration(Some("URHO3D_EXPORT_API")),
            "URHO3D_EXPORT_API int Add(int a, int b)"
        );
        assert_eq!(wrapper.declaration(Some("")), "int Add(int a, int b)");
    }
}
