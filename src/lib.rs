//! # Web Tools
//! src/lib.rs
//!
//! Herramientas HTTP/1.x implementadas desde cero: convierten un
//! bloque crudo de bytes en una representación estructurada e
//! inmutable del request, y hacen la operación inversa de normalizar
//! y serializar una colección de headers al wire format.
//!
//! ## Arquitectura
//!
//! La librería está dividida en módulos especializados:
//! - `headers`: normalización de nombres, parsing y construcción de
//!   bloques de headers
//! - `http`: métodos, decodificación de bodies de formulario y
//!   ensamblado de requests
//! - `validate`: guarda de valores requeridos para la construcción de
//!   entidades
//!
//! Todas las operaciones son transformaciones puras sobre buffers en
//! memoria: no hay I/O de red, ni estado compartido, ni bloqueos. El
//! transporte (socket, cliente HTTP) queda a cargo del consumidor.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use web_tools::http::Request;
//!
//! let raw = "GET /index.html?name=Sean HTTP/1.1\r\n\
//!            Host: localhost:8888\r\n\
//!            \r\n";
//!
//! let request = Request::parse(raw).unwrap();
//! assert_eq!(request.method(), "GET");
//! assert_eq!(request.host(), "localhost:8888");
//! assert_eq!(request.param("name"), Some("Sean"));
//! ```

pub mod headers;
pub mod http;
pub mod validate;
