/// Coarse classification of a declared column type.
///
/// Only used to decide whether two type names are interchangeable when
/// comparing schemas across dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    Integer,
    Real,
    Other,
}

impl TypeFamily {
    pub fn of(ty: &str) -> Self {
        let base = base_name(ty);

        match &base[..] {
            "int" | "integer" | "tinyint" | "smallint" | "mediumint" | "bigint" => Self::Integer,
            "real" | "double" | "float" => Self::Real,
            _ => Self::Other,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Real)
    }
}

/// Lowercased type name without its length/precision suffix or modifiers:
/// `INT(11) UNSIGNED` becomes `int`.
fn base_name(ty: &str) -> String {
    let first = ty.split_whitespace().next().unwrap_or("");
    let end = first.find('(').unwrap_or(first.len());
    first[..end].to_ascii_lowercase()
}

/// Returns `true` when two declared types are equal, ignoring case, or when
/// one is an integer type and the other a real type.
pub(crate) fn types_match(a: &str, b: &str) -> bool {
    if a.eq_ignore_ascii_case(b) {
        return true;
    }

    let (a, b) = (TypeFamily::of(a), TypeFamily::of(b));
    a.is_numeric() && b.is_numeric() && a != b
}
