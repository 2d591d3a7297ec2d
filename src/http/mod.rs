//! # Módulo HTTP
//!
//! Este módulo implementa el lado request del protocolo HTTP/1.x, sin
//! usar librerías de alto nivel. Incluye:
//!
//! - El conjunto de métodos del RFC 2616
//! - Decodificación de bodies de formulario (URL-encoded y multipart)
//! - Validación y ensamblado de requests completos
//!
//! ### Formato de request
//!
//! ```text
//! GET /path?query=value HTTP/1.1\r\n
//! Host: localhost:8888\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! No hay I/O acá: el transporte entrega el bloque de bytes crudo y
//! recibe de vuelta una entidad [`Request`] inmutable.

pub mod body;
pub mod method;
pub mod request;

// Re-exportamos los tipos principales para facilitar su uso
pub use body::FormData;
pub use method::Method;
pub use request::{ParseError, Request, RequestParser};
