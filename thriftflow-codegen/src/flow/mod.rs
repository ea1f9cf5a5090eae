//! Flow declaration rendering modules.

pub mod consts;
pub mod enums;
pub mod services;
pub mod structs;
pub mod typedefs;
pub mod types;

pub use consts::ConstGenerator;
pub use enums::EnumGenerator;
pub use services::ServiceGenerator;
pub use structs::StructGenerator;
pub use typedefs::TypedefGenerator;
pub use types::{DefIndex, TypeMapper};
