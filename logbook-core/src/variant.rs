//! Dumping experiment variants, i.e., the hyper-parameters of a run.
//!
//! Values without a plain-data representation, such as types, enum members
//! and functions, are written as tagged [`Descriptor`]s:
//!
//! ```json
//! {"$class": "<module>.<name>"}
//! {"$enum": "<module>.<EnumType>.<member>"}
//! {"$function": "<module>.<name>"}
//! ```
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    any::type_name,
    fmt::Debug,
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Identity of a type, an enum member or a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Descriptor {
    /// A type.
    #[serde(rename = "$class")]
    Class(String),

    /// A member of an enum.
    #[serde(rename = "$enum")]
    Enum(String),

    /// A function.
    #[serde(rename = "$function")]
    Function(String),
}

impl Descriptor {
    /// Describes type `T`.
    pub fn class<T: ?Sized>() -> Self {
        Self::Class(dotted(type_name::<T>()))
    }

    /// Describes a fieldless enum member, named by its `Debug` output.
    pub fn enum_member<E: Debug>(member: &E) -> Self {
        Self::Enum(format!("{}.{:?}", dotted(type_name::<E>()), member))
    }

    /// Describes a function item.
    pub fn function<F>(_f: &F) -> Self {
        Self::Function(dotted(type_name::<F>()))
    }
}

/// `a::b::C` -> `a.b.C`
fn dotted(path: &str) -> String {
    path.replace("::", ".")
}

/// Writes `variant` to `path` as pretty JSON with sorted keys.
///
/// Missing parent directories are created and an existing file is replaced.
pub fn dump_variant<T: Serialize + ?Sized>(path: impl AsRef<Path>, variant: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    // Going through `Value` sorts the keys of every map.
    let value = serde_json::to_value(variant)?;
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &value)?;
    writer.flush()?;
    Ok(())
}
