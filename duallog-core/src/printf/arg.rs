use std::fmt;

/// One runtime argument for the printf engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(String),
}

impl Arg {
    /// Name used in `%T` and in mismatch markers.
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Bool(_) => "bool",
            Arg::Int(_) => "i64",
            Arg::Uint(_) => "u64",
            Arg::Float(_) => "f64",
            Arg::Char(_) => "char",
            Arg::Str(_) => "str",
        }
    }

    pub(super) fn default_verb(&self) -> char {
        match self {
            Arg::Bool(_) => 't',
            Arg::Int(_) | Arg::Uint(_) => 'd',
            Arg::Float(_) => 'g',
            Arg::Char(_) => 'c',
            Arg::Str(_) => 's',
        }
    }
}

/// Renders the argument the way `%v` does.
impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        super::render(&mut out, 'v', &super::Spec::default(), self);
        f.write_str(&out)
    }
}

macro_rules! impl_from_lossless {
    ($variant:ident, $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Arg {
                fn from(value: $source) -> Self {
                    Arg::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from_lossless!(Int, i64: i8, i16, i32, i64);
impl_from_lossless!(Uint, u64: u8, u16, u32, u64);
impl_from_lossless!(Float, f64: f32, f64);

impl From<isize> for Arg {
    fn from(value: isize) -> Self {
        Arg::Int(value as i64)
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Arg::Uint(value as u64)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}
