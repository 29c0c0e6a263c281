use indexmap::IndexSet;

/* Turn a qualified native name into a C identifier: "::" becomes "_", and
 * anything outside [A-Za-z0-9_] becomes "_" */
pub fn sanitize_symbol(name: &str) -> String {
    name.replace("::", "_")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Issues external symbol names that are unique within one generation pass.
///
/// A registry is created per pass and dropped with it; two independent passes
/// never see each other's names.
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    used: IndexSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a symbol derived from `base_name` and returns it.
    ///
    /// The sanitized base is returned as-is when unused. Otherwise the
    /// candidates `<base>0`, `<base>1`, ... are probed in order and the first
    /// free one wins, so a fixed sequence of calls always yields the same
    /// names.
    pub fn reserve(&mut self, base_name: &str) -> String {
        let sanitized = sanitize_symbol(base_name);
        let mut candidate = sanitized.clone();
        let mut index = 0u32;
        while self.used.contains(&candidate) {
            candidate = format!("{}{}", sanitized, index);
            index += 1;
        }

        self.used.insert(candidate.clone());
        candidate
    }

    /// Like [`reserve`](Self::reserve), but the chosen name must also be free
    /// with each of `prefixes` prepended, and those forms are reserved too.
    /// Field accessors use this so `get_<name>` / `set_<name>` stay unique.
    pub fn reserve_with_prefixes(&mut self, base_name: &str, prefixes: &[&str]) -> String {
        let sanitized = sanitize_symbol(base_name);
        let is_free = |used: &IndexSet<String>, name: &str| {
            !used.contains(name)
                && prefixes
                    .iter()
                    .all(|prefix| !used.contains(&format!("{}{}", prefix, name)))
        };

        let mut candidate = sanitized.clone();
        let mut index = 0u32;
        while !is_free(&self.used, &candidate) {
            candidate = format!("{}{}", sanitized, index);
            index += 1;
        }

        self.used.insert(candidate.clone());
        for prefix in prefixes {
            self.used.insert(format!("{}{}", prefix, candidate));
        }
        candidate
    }

    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /* Names in the order they were issued */
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.used.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sanitize_symbol() {
        assert_eq!(sanitize_symbol("Add"), "Add");
        assert_eq!(sanitize_symbol("Urho3D::Node::GetName"), "Urho3D_Node_GetName");
        assert_eq!(sanitize_symbol("Vector<int>::operator+"), "Vector_int__operator_");
        assert_eq!(sanitize_symbol("set_Shape_fnDraw"), "set_Shape_fnDraw");
    }

    #[test]
    fn test_reserve_unused_name_is_returned_sanitized() {
        let mut names = NameRegistry::new();
        assert_eq!(names.reserve("Shape::Area"), "Shape_Area");
        assert!(names.contains("Shape_Area"));
    }

    #[test]
    fn test_reserve_probes_numeric_suffixes_from_zero() {
        let mut names = NameRegistry::new();
        assert_eq!(names.reserve("Add"), "Add");
        assert_eq!(names.reserve("Add"), "Add0");
        assert_eq!(names.reserve("Add"), "Add1");
        assert_eq!(names.reserve("Add"), "Add2");
    }

    #[test]
    fn test_reserve_skips_suffix_already_taken() {
        let mut names = NameRegistry::new();
        assert_eq!(names.reserve("Add0"), "Add0");
        assert_eq!(names.reserve("Add"), "Add");
        /* "Add0" is taken by an unrelated function, so the probe moves on */
        assert_eq!(names.reserve("Add"), "Add1");
    }

    #[test]
    fn test_suffix_applies_to_sanitized_base() {
        let mut names = NameRegistry::new();
        assert_eq!(names.reserve("ns::Add"), "ns_Add");
        assert_eq!(names.reserve("ns::Add"), "ns_Add0");
    }

    #[test]
    fn test_reserved_names_are_pairwise_distinct() {
        let mut names = NameRegistry::new();
        let bases = ["a", "a", "a0", "b::c", "b_c", "a", "b::c", "a1", "a"];
        let issued: Vec<String> = bases.iter().map(|base| names.reserve(base)).collect();

        let distinct: HashSet<&String> = issued.iter().collect();
        assert_eq!(distinct.len(), issued.len(), "duplicates in {:?}", issued);
        assert_eq!(names.len(), issued.len());
    }

    #[test]
    fn test_reserve_is_deterministic() {
        let bases = ["Draw", "Draw", "Shape::Draw", "Draw", "Shape_Draw"];
        let run = || {
            let mut names = NameRegistry::new();
            bases.iter().map(|base| names.reserve(base)).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_reserve_with_prefixes_blocks_prefixed_forms() {
        let mut names = NameRegistry::new();
        assert_eq!(names.reserve("get_Shape_radius"), "get_Shape_radius");

        let base = names.reserve_with_prefixes("Shape::radius", &["get_", "set_"]);
        assert_eq!(base, "Shape_radius0");
        assert!(names.contains("get_Shape_radius0"));
        assert!(names.contains("set_Shape_radius0"));

        /* A later function spelled like the accessor is pushed aside */
        assert_eq!(names.reserve("set_Shape_radius0"), "set_Shape_radius00");
    }

    #[test]
    fn test_registries_are_independent() {
        let mut first = NameRegistry::new();
        let mut second = NameRegistry::new();
        assert_eq!(first.reserve("Add"), "Add");
        assert_eq!(second.reserve("Add"), "Add");
        assert_eq!(first.iter().collect::<Vec<_>>(), vec!["Add"]);
    }
}
