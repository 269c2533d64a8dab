use std::fmt;

use syn::Path;

#[derive(Copy, Clone)]
pub struct Symbol(&'static str);

pub const SMART_ENUM: Symbol = Symbol("smart_enum");
pub const REPR: Symbol = Symbol("repr");
pub const CFG: Symbol = Symbol("cfg");
pub const NAME: Symbol = Symbol("name");
pub const DESCRIPTION: Symbol = Symbol("description");
pub const CRATE: Symbol = Symbol("crate");
pub const UNKNOWN: Symbol = Symbol("unknown");
pub const UNKNOWN_NAME: Symbol = Symbol("unknown_name");

impl PartialEq<Symbol> for Path {
    fn eq(&self, word: &Symbol) -> bool {
        self.is_ident(word.0)
    }
}

impl PartialEq<Symbol> for &Path {
    fn eq(&self, word: &Symbol) -> bool {
        self.is_ident(word.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.0)
    }
}
