use std::fmt::{self, Display, Formatter};

use url::Url;

use crate::result::{Result, type_error};
use crate::validator::Instance;

/// An absolute URL with the `http` or `https` scheme.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HttpEndpoint {
    value: Url,
}

impl HttpEndpoint {
    /// # Examples
    /// ```
    /// # use minitype::uri::HttpEndpoint;
    /// assert!(HttpEndpoint::from_string("https://example.com/api").is_ok());
    /// assert_eq!(
    ///     HttpEndpoint::from_string("example.com").unwrap_err().message(),
    ///     "expect an URL"
    /// );
    /// ```
    pub fn from_string(value: &str) -> Result<HttpEndpoint> {
        let Ok(url) = Url::parse(value) else {
            return type_error("expect an URL");
        };
        match url.scheme() {
            "http" | "https" => Ok(HttpEndpoint { value: url }),
            _ => type_error("expect protocol http or https"),
        }
    }

    pub const fn value(&self) -> &Url {
        &self.value
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

impl Display for HttpEndpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl Instance for HttpEndpoint {
    const NAME: &'static str = "HttpEndpoint";
}
