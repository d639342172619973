/// The SQL dialects tabula speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Embedded, single-file engine
    Sqlite,

    /// Client/server engine
    Mysql,
}

impl Dialect {
    /// Resolve a dialect from its name token, ignoring case. Unrecognized
    /// names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match &name.to_ascii_lowercase()[..] {
            "sqlite" => Some(Self::Sqlite),
            "mysql" => Some(Self::Mysql),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Mysql => "mysql",
        }
    }

    pub fn is_embedded(self) -> bool {
        matches!(self, Self::Sqlite)
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
