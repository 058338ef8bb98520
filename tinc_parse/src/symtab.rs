use rustc_hash::FxHashMap;
use std::fmt;

/// The declarable types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ty {
    Int,
    Float,
    Bool,
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Ty::Int => "int",
            Ty::Float => "float",
            Ty::Bool => "bool",
        };
        write!(f, "{}", name)
    }
}

/// Maps variable names to their declared types for a single parse run.
/// There is exactly one scope: entries are created when a declaration
/// is recognized and never removed. The table is only touched through
/// store/retrieve/contains, so growing this into a scope stack later
/// would not change any caller.
#[derive(Debug, Default)]
pub struct SymTab {
    tab: FxHashMap<String, Ty>,
}

impl SymTab {
    pub fn new() -> SymTab {
        SymTab {
            tab: FxHashMap::default(),
        }
    }

    /// Store a symbol with its declared type. An existing entry is
    /// overwritten; callers that want redeclaration to be an error must
    /// check `contains` first.
    pub fn store(&mut self, key: &str, ty: Ty) {
        self.tab.insert(String::from(key), ty);
    }

    /// Get the declared type of a symbol, if any.
    pub fn retrieve(&self, key: &str) -> Option<Ty> {
        self.tab.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tab.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
    }
}
