//! Petstore tools module.
//!
//! - `register`: create a pet in the core service
//! - `list`: list every registered pet
//! - `find_by_name`: list the pets with an exact name
//!
//! Each tool has handlers for both HTTP and STDIO/TCP transports.

pub mod common;
pub mod find_by_name;
pub mod list;
pub mod register;

pub use find_by_name::{FindPetsByNameParams, FindPetsByNameTool};
pub use list::{ListPetsParams, ListPetsTool};
pub use register::{RegisterPetParams, RegisterPetTool};
