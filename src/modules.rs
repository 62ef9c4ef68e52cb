use serde::{Deserialize, Serialize};
use std::fmt;

/// A lecture module a question can be answered against. Each module maps to
/// one source PDF configured at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Module {
    Ctse,
    Iup,
}

impl Module {
    pub const ALL: [Module; 2] = [Module::Ctse, Module::Iup];

    /// Parses the wire name. Matching is exact: "CTSE" or "IUP".
    pub fn parse(name: &str) -> Option<Module> {
        match name {
            "CTSE" => Some(Module::Ctse),
            "IUP" => Some(Module::Iup),
            _ => None,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Module::Ctse => "CTSE",
            Module::Iup => "IUP",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            Module::Ctse => "Current Trends in Software Engineering",
            Module::Iup => "Image Understanding and Processing",
        }
    }

    pub fn module_code(&self) -> &'static str {
        match self {
            Module::Ctse => "SE4010",
            Module::Iup => "IT4130",
        }
    }
}

impl Default for Module {
    fn default() -> Self {
        Module::Ctse
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modules() {
        assert_eq!(Module::parse("CTSE"), Some(Module::Ctse));
        assert_eq!(Module::parse("IUP"), Some(Module::Iup));
    }

    #[test]
    fn rejects_unknown_and_wrong_case() {
        assert_eq!(Module::parse("ctse"), None);
        assert_eq!(Module::parse("SE4010"), None);
        assert_eq!(Module::parse(""), None);
    }

    #[test]
    fn defaults_to_ctse() {
        assert_eq!(Module::default(), Module::Ctse);
    }

    #[test]
    fn catalogue_metadata() {
        assert_eq!(Module::Ctse.module_code(), "SE4010");
        assert_eq!(Module::Iup.long_name(), "Image Understanding and Processing");
    }
}
