//! # Parsing de Requests HTTP/1.x
//! src/http/request.rs
//!
//! Este módulo valida un request crudo completo y construye la entidad
//! [`Request`], inmutable una vez creada.
//!
//! ## Formato de un request
//!
//! ```text
//! GET /path?param1=value1&param2=value2 HTTP/1.1\r\n
//! Host: localhost:8888\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! ## Flujo de parsing
//!
//! 1. Separar headers y body en el primer salto de línea doble
//! 2. Parsear el bloque de headers (colección + start line)
//! 3. Validar la presencia del header `Host`
//! 4. Separar la start line en método, target y versión
//! 5. POST: decodificar el body según `Content-Type`;
//!    otros métodos: decodificar la query string del target
//!
//! Cada error estructural nombra el punto exacto que falló.

use crate::headers::parser::{split_double_break, BlockParser, HeadersParser};
use crate::headers::HeaderMap;
use crate::http::body::{self, FormData};
use crate::http::method::Method;
use crate::validate::{validate_required, ValidationError};
use serde::Serialize;
use std::collections::HashMap;

/// Campos que todo request debe tener con contenido no vacío
static REQUIRED: [&str; 4] = ["method", "version", "host", "path"];

/// Errores que pueden ocurrir durante el parsing de un request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Falta el salto doble que separa headers de body
    MissingSeparator,

    /// Falta el header `Host` (o está vacío)
    MissingHost,

    /// Start line ausente o sin los tres tokens método/target/versión
    InvalidStartLine,

    /// La entidad no pasó la guarda de construcción
    Invalid(ValidationError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingSeparator => {
                write!(f, "Malformed HTTP request at headers and body")
            }
            ParseError::MissingHost => write!(f, "Malformed HTTP request at host"),
            ParseError::InvalidStartLine => write!(f, "Malformed HTTP request at options"),
            ParseError::Invalid(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ValidationError> for ParseError {
    fn from(err: ValidationError) -> Self {
        ParseError::Invalid(err)
    }
}

/// Representa un request HTTP/1.x parseado
///
/// Inmutable: se construye una sola vez a partir de campos validados y
/// solo expone getters.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// Método HTTP tal como vino en el wire (ej: "GET")
    method: String,

    /// Versión HTTP (ej: "HTTP/1.1")
    version: String,

    /// Valor del header `Host`
    host: String,

    /// Path de la petición, sin query string
    path: String,

    /// Headers en orden de aparición
    headers: HeaderMap,

    /// Body crudo, recortado
    body: String,

    /// Parámetros GET/POST decodificados
    params: HashMap<String, String>,

    /// Archivos subidos, por nombre de campo
    files: HashMap<String, Vec<u8>>,
}

impl Request {
    /// Parsea un request crudo con el parser de headers por defecto
    ///
    /// # Ejemplo
    /// ```
    /// use web_tools::http::Request;
    ///
    /// let raw = "GET /index.html?name=Sean HTTP/1.1\r\nHost: localhost:8888\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/index.html");
    /// assert_eq!(request.param("name"), Some("Sean"));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        RequestParser::new().parse(raw)
    }

    /// Guarda de construcción: valida los campos requeridos
    fn from_parts(
        method: String,
        version: String,
        host: String,
        path: String,
        headers: HeaderMap,
        body: String,
        form: FormData,
    ) -> Result<Self, ValidationError> {
        let values = HashMap::from([
            ("method".to_string(), method.clone()),
            ("version".to_string(), version.clone()),
            ("host".to_string(), host.clone()),
            ("path".to_string(), path.clone()),
        ]);
        validate_required(&values, &REQUIRED)?;

        Ok(Self {
            method,
            version,
            host,
            path,
            headers,
            body,
            params: form.params,
            files: form.files,
        })
    }

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene la versión HTTP (ej: "HTTP/1.1")
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene el host pedido
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Obtiene un header específico por nombre canónico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Obtiene todos los parámetros GET/POST
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Obtiene un parámetro específico
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|v| v.as_str())
    }

    /// Obtiene los archivos subidos
    pub fn files(&self) -> &HashMap<String, Vec<u8>> {
        &self.files
    }

    /// Obtiene un archivo específico
    pub fn file(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(|v| v.as_slice())
    }
}

/// Parser de requests crudos
///
/// Genérico sobre el parser de headers para permitir variantes
/// alternativas; por defecto usa [`BlockParser`].
#[derive(Debug, Clone, Default)]
pub struct RequestParser<P = BlockParser> {
    headers_parser: P,
}

impl RequestParser<BlockParser> {
    /// Crea un parser con el parser de headers por defecto
    pub fn new() -> Self {
        Self {
            headers_parser: BlockParser::new(),
        }
    }
}

impl<P: HeadersParser> RequestParser<P> {
    /// Crea un parser con un parser de headers específico
    pub fn with_headers_parser(headers_parser: P) -> Self {
        Self { headers_parser }
    }

    /// Valida y parsea un request crudo completo
    ///
    /// Falla con [`ParseError`] nombrando el punto estructural exacto:
    /// separador headers/body, header `Host` o start line.
    pub fn parse(&self, raw: &str) -> Result<Request, ParseError> {
        // (a) separar headers y body
        let (head, raw_body) =
            split_double_break(raw).ok_or(ParseError::MissingSeparator)?;

        // (b) parsear el bloque de headers
        let (headers, start_line) = self.headers_parser.parse(head);
        let host = match headers.get("Host") {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(ParseError::MissingHost),
        };

        // (c) separar la start line en exactamente tres tokens
        let start_line = start_line.ok_or(ParseError::InvalidStartLine)?;
        let mut tokens = start_line.as_str().splitn(3, ' ');
        let method = tokens.next().unwrap_or("").to_string();
        let target = tokens.next().unwrap_or("").to_string();
        let version = tokens.next().unwrap_or("").to_string();
        if method.is_empty() || target.is_empty() || version.is_empty() {
            return Err(ParseError::InvalidStartLine);
        }

        let body = raw_body.trim().to_string();

        // (d) POST decodifica el body; el resto decodifica la query
        let mut path = target.clone();
        let form = if method == Method::POST.as_str() {
            body::decode(&body, headers.get("Content-Type"))
        } else {
            let mut form = FormData::default();
            // El fragmento (#...) no forma parte del path ni de la query
            let stripped = target.split_once('#').map_or(target.as_str(), |(t, _)| t);
            let (target_path, query) = match stripped.split_once('?') {
                Some((p, q)) => (p, Some(q)),
                None => (stripped, None),
            };
            if !target_path.is_empty() {
                path = target_path.to_string();
            }
            if let Some(query) = query {
                body::decode_query(query, &mut form.params);
            }
            form
        };

        // (e) construir la entidad inmutable
        Ok(Request::from_parts(
            method, version, host, path, headers, body, form,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let raw = "GET / HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), "GET");
        assert_eq!(request.path(), "/");
        assert_eq!(request.version(), "HTTP/1.1");
        assert_eq!(request.host(), "localhost");
        assert_eq!(request.body(), "");
        assert!(request.params().is_empty());
        assert!(request.files().is_empty());
    }

    #[test]
    fn test_parse_get_with_query_params() {
        let raw =
            "GET /index.html?name=Sean&job=programmer HTTP/1.1\r\nHost: localhost:8888\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.path(), "/index.html");
        assert_eq!(request.param("name"), Some("Sean"));
        assert_eq!(request.param("job"), Some("programmer"));
        assert_eq!(request.body(), "");
    }

    #[test]
    fn test_parse_get_decodes_query_escapes() {
        let raw = "GET /search?q=hello%20world&lang=es HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.param("q"), Some("hello world"));
        assert_eq!(request.param("lang"), Some("es"));
    }

    #[test]
    fn test_parse_missing_separator() {
        let raw = "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: keep-alive";
        let err = Request::parse(raw).unwrap_err();

        assert_eq!(err, ParseError::MissingSeparator);
        assert!(err.to_string().contains("at headers and body"));
    }

    #[test]
    fn test_parse_missing_host() {
        let raw = "GET / HTTP/1.1\r\nConnection: keep-alive\r\n\r\n";
        let err = Request::parse(raw).unwrap_err();

        assert_eq!(err, ParseError::MissingHost);
        assert!(err.to_string().contains("at host"));
    }

    #[test]
    fn test_parse_empty_host_fails() {
        let raw = "GET / HTTP/1.1\r\nHost:\r\n\r\n";
        let err = Request::parse(raw).unwrap_err();
        assert_eq!(err, ParseError::MissingHost);
    }

    #[test]
    fn test_parse_malformed_start_line() {
        // "GET HTTP/1.1" solo tiene dos tokens
        let raw = "GET HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let err = Request::parse(raw).unwrap_err();

        assert_eq!(err, ParseError::InvalidStartLine);
        assert!(err.to_string().contains("at options"));
    }

    #[test]
    fn test_parse_missing_start_line() {
        let raw = "Host: localhost\r\nConnection: keep-alive\r\n\r\n";
        let err = Request::parse(raw).unwrap_err();
        assert_eq!(err, ParseError::InvalidStartLine);
    }

    #[test]
    fn test_parse_post_urlencoded() {
        let raw = "POST /form HTTP/1.1\r\n\
                   Host: localhost\r\n\
                   Content-Type: application/x-www-form-urlencoded\r\n\
                   \r\n\
                   name=Sean&job=programmer";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), "POST");
        assert_eq!(request.param("name"), Some("Sean"));
        assert_eq!(request.param("job"), Some("programmer"));
        assert_eq!(request.body(), "name=Sean&job=programmer");
    }

    #[test]
    fn test_parse_post_without_content_type_keeps_raw_body() {
        let raw = "POST /form HTTP/1.1\r\nHost: localhost\r\n\r\nname=Sean";
        let request = Request::parse(raw).unwrap();

        assert!(request.params().is_empty());
        assert_eq!(request.body(), "name=Sean");
    }

    #[test]
    fn test_parse_lowercase_post_is_not_a_form() {
        // El match del método POST es case-sensitive: "post" cae en la
        // rama de query string
        let raw = "post /form?a=1 HTTP/1.1\r\nHost: localhost\r\n\r\nname=Sean";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), "post");
        assert_eq!(request.path(), "/form");
        assert_eq!(request.param("a"), Some("1"));
    }

    #[test]
    fn test_parse_target_fragment_is_dropped() {
        let raw = "GET /page?x=1#section HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.path(), "/page");
        assert_eq!(request.param("x"), Some("1"));
    }

    #[test]
    fn test_parse_headers_are_normalized() {
        let raw = "GET / HTTP/1.1\r\nhost: localhost\r\nuser_agent: test\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Host"), Some("localhost"));
        assert_eq!(request.header("User-Agent"), Some("test"));
    }

    #[test]
    fn test_request_serializes_to_json() {
        let raw = "GET /index.html?name=Sean HTTP/1.1\r\nHost: localhost:8888\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["method"], "GET");
        assert_eq!(json["path"], "/index.html");
        assert_eq!(json["headers"]["Host"], "localhost:8888");
        assert_eq!(json["params"]["name"], "Sean");
    }
}
