use axum::{
    body::to_bytes,
    extract::{FromRequest, Multipart, Request},
    http::header,
};
use crate::errors::WikiError;

/// Largest urlencoded body read when looking up a form field
const MAX_FORM_BYTES: usize = 10 << 20;

/// Decode one `application/x-www-form-urlencoded` component to raw bytes
///
/// `+` is a space. Escapes that are not valid hex are kept literally.
pub fn decode_component(raw: &[u8]) -> Vec<u8> {
    let spaced: Vec<u8> = raw.iter().map(|&b| if b == b'+' { b' ' } else { b }).collect();
    urlencoding::decode_binary(&spaced).into_owned()
}

/// First value of `name` in an urlencoded byte string
pub fn urlencoded_field(input: &[u8], name: &str) -> Option<Vec<u8>> {
    input
        .split(|&b| b == b'&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = match pair.iter().position(|&b| b == b'=') {
                Some(i) => (&pair[..i], &pair[i + 1..]),
                None => (pair, &[][..]),
            };
            (decode_component(key) == name.as_bytes()).then(|| decode_component(value))
        })
}

/// Look up a submitted form field as bytes
///
/// A urlencoded or multipart body is searched first, then the query string.
/// A field found nowhere reads as empty. A body that claims to be a form
/// but cannot be read is an error rather than an empty value.
pub async fn form_value(req: Request, name: &str) -> Result<Vec<u8>, WikiError> {
    let query = req.uri().query().map(str::to_owned);
    let mime = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default();

    let from_body = match mime.as_str() {
        "application/x-www-form-urlencoded" => {
            let bytes = to_bytes(req.into_body(), MAX_FORM_BYTES)
                .await
                .map_err(|e| WikiError::BadRequest(format!("reading form body: {}", e)))?;
            urlencoded_field(&bytes, name)
        }
        "multipart/form-data" => multipart_field(req, name).await?,
        _ => None,
    };

    Ok(from_body
        .or_else(|| query.and_then(|q| urlencoded_field(q.as_bytes(), name)))
        .unwrap_or_default())
}

async fn multipart_field(req: Request, name: &str) -> Result<Option<Vec<u8>>, WikiError> {
    let mut multipart = Multipart::from_request(req, &())
        .await
        .map_err(|e| WikiError::BadRequest(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WikiError::BadRequest(e.body_text()))?
    {
        if field.name() == Some(name) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| WikiError::BadRequest(e.body_text()))?;
            return Ok(Some(bytes.to_vec()));
        }
    }
    Ok(None)
}
