//! # Módulo de Headers
//!
//! Transformación bidireccional de headers HTTP/1.x:
//!
//! - Normalización de nombres al formato canónico `Title-Case`
//! - Parsing de bloques crudos a una colección ordenada + start line
//! - Construcción de bloques de texto para el wire
//!
//! ### Formato de un bloque de headers
//!
//! ```text
//! GET / HTTP/1.1\r\n
//! Host: www.google.com\r\n
//! Accept: */*\r\n
//! ```
//!
//! El parser tolera LF y CR sueltos en la entrada; el builder siempre
//! produce CRLF estricto.

pub mod builder;
pub mod map;
pub mod name;
pub mod parser;

// Re-exportamos los tipos principales para facilitar su uso
pub use builder::{BlockBuilder, BuildError, HeaderEntry, HeadersBuilder};
pub use map::HeaderMap;
pub use name::NormalizeError;
pub use parser::{BlockParser, HeadersParser, StartLine};
