//! # Métodos HTTP
//! src/http/method.rs
//!
//! Conjunto fijo de métodos HTTP/1.x según el RFC 2616. El parser de
//! headers usa estos tokens para reconocer la request line dentro de
//! un bloque crudo.

use serde::Serialize;

/// Métodos de request definidos por el RFC 2616
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Method {
    /// GET - Obtener el recurso identificado por la Request-URI
    GET,

    /// POST - Enviar una entidad al recurso identificado por la Request-URI
    POST,

    /// PUT - Almacenar la entidad bajo la Request-URI
    PUT,

    /// DELETE - Eliminar el recurso identificado por la Request-URI
    DELETE,

    /// HEAD - Como GET pero sin body en la response
    HEAD,

    /// OPTIONS - Consultar las opciones de comunicación disponibles
    OPTIONS,

    /// TRACE - Loop-back de la request a nivel de aplicación
    TRACE,

    /// CONNECT - Reservado para túneles vía proxy
    CONNECT,
}

/// Todos los métodos, en el orden del RFC
static METHODS: [Method; 8] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::HEAD,
    Method::OPTIONS,
    Method::TRACE,
    Method::CONNECT,
];

impl Method {
    /// Convierte el método a su token en el wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::TRACE => "TRACE",
            Method::CONNECT => "CONNECT",
        }
    }

    /// Parsea un token exacto (case-sensitive)
    ///
    /// # Ejemplo
    /// ```
    /// use web_tools::http::Method;
    ///
    /// assert_eq!(Method::from_token("POST"), Some(Method::POST));
    /// assert_eq!(Method::from_token("post"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Method> {
        METHODS.iter().copied().find(|m| m.as_str() == token)
    }

    /// Lista completa de métodos conocidos
    pub fn values() -> &'static [Method] {
        &METHODS
    }

    /// Indica si una línea comienza con un token de método
    ///
    /// La comparación es case-insensitive y exige un límite de token:
    /// el carácter siguiente (si existe) no puede ser alfanumérico ni
    /// guión bajo. "GET /" y "get /" coinciden; "GETX /" no.
    pub fn matches_line(line: &str) -> bool {
        let bytes = line.as_bytes();
        for method in METHODS.iter() {
            let token = method.as_str().as_bytes();
            if bytes.len() < token.len() {
                continue;
            }
            if !bytes[..token.len()].eq_ignore_ascii_case(token) {
                continue;
            }
            match bytes.get(token.len()) {
                Some(&next) if next.is_ascii_alphanumeric() || next == b'_' => continue,
                _ => return true,
            }
        }
        false
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trip() {
        for method in Method::values() {
            assert_eq!(Method::from_token(method.as_str()), Some(*method));
        }
    }

    #[test]
    fn test_from_token_is_case_sensitive() {
        assert_eq!(Method::from_token("GET"), Some(Method::GET));
        assert_eq!(Method::from_token("get"), None);
        assert_eq!(Method::from_token("Get"), None);
    }

    #[test]
    fn test_matches_line_request_lines() {
        assert!(Method::matches_line("GET / HTTP/1.1"));
        assert!(Method::matches_line("POST /index.html HTTP/1.1"));
        assert!(Method::matches_line("DELETE /item/3 HTTP/1.0"));
        // La detección es case-insensitive
        assert!(Method::matches_line("get / HTTP/1.1"));
    }

    #[test]
    fn test_matches_line_requires_token_boundary() {
        assert!(!Method::matches_line("GETX / HTTP/1.1"));
        assert!(!Method::matches_line("POSTAL: code"));
        // El token al final de línea también es un límite válido
        assert!(Method::matches_line("GET"));
    }

    #[test]
    fn test_matches_line_rejects_headers() {
        assert!(!Method::matches_line("Host: localhost"));
        assert!(!Method::matches_line("Content-Type: text/html"));
        assert!(!Method::matches_line(""));
    }
}
