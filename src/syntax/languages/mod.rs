//! Built-in language grammars
//!
//! One constructor per language. Rule order matters everywhere:
//! comments and strings come before keywords and calls so that tokens
//! inside literals are claimed first (first match wins), and keyword
//! rules come before the call rule so `if (...)` stays a keyword.

mod c;
mod data;
mod go;
mod java;
mod javascript;
mod markdown;
mod php;
mod python;
mod ruby;
mod rust;
mod shell;
mod sql;
mod swift;
mod web;

pub use self::c::{c, cpp, csharp};
pub use self::data::{json, yaml};
pub use self::go::go;
pub use self::java::{java, kotlin};
pub use self::javascript::{javascript, typescript};
pub use self::markdown::markdown;
pub use self::php::php;
pub use self::python::python;
pub use self::ruby::{perl, ruby};
pub use self::rust::rust;
pub use self::shell::shell;
pub use self::sql::sql;
pub use self::swift::swift;
pub use self::web::{css, html, xml};
