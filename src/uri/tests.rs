#![cfg(test)]

use super::*;
use crate::result::{Error, Open, TypeError};

fn type_err(message: &str) -> Error {
    TypeError::new(message.to_owned()).into()
}

#[test]
fn test_http_endpoint() {
    let endpoint = HttpEndpoint::from_string("http://localhost:8080/path?q=1").open();
    assert_eq!(endpoint.value().host_str(), Some("localhost"));
    assert_eq!(endpoint.value().port(), Some(8080));
    assert_eq!(endpoint.as_str(), "http://localhost:8080/path?q=1");

    let endpoint = HttpEndpoint::from_string("https://Example.COM").open();
    assert_eq!(endpoint.to_string(), "https://example.com/", "The URL should be normalised.");
}

#[test]
fn test_invalid() {
    assert_eq!(HttpEndpoint::from_string(""), Err(type_err("expect an URL")));
    assert_eq!(HttpEndpoint::from_string("example.com/path"), Err(type_err("expect an URL")));
    assert_eq!(
        HttpEndpoint::from_string("ftp://example.com"),
        Err(type_err("expect protocol http or https"))
    );
    assert_eq!(
        HttpEndpoint::from_string("mailto:someone@example.com"),
        Err(type_err("expect protocol http or https"))
    );
}
