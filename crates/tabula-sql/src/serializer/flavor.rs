use super::Serializer;

use tabula_core::Dialect;

#[derive(Debug)]
pub(super) enum Flavor {
    Sqlite,
    Mysql,
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }

    pub fn for_dialect(dialect: Dialect) -> Serializer {
        match dialect {
            Dialect::Sqlite => Self::sqlite(),
            Dialect::Mysql => Self::mysql(),
        }
    }
}
