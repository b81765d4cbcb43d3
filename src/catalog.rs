//! The compiled-in catalog of HTTP status codes.
//!
//! Entries are kept in ascending code order. The table never changes at
//! runtime; `validate` guards its shape at startup and in tests.

use std::collections::HashSet;

use crate::errors::{Result, StatusLensError};
use crate::types::{StatusClass, StatusEntry};

/// Number of codes the catalog ships with.
pub const CATALOG_SIZE: usize = 37;

static ENTRIES: [StatusEntry; CATALOG_SIZE] = [
    StatusEntry {
        code: "100",
        reason_phrase: "Continue",
        summary: "The server has received the request headers, and that the client should proceed to send the request body",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.2.1",
    },
    StatusEntry {
        code: "101",
        reason_phrase: "Switching Protocols",
        summary: "The requester has asked the server to switch protocols and the server is acknowledging that it will do so",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.2.2",
    },
    StatusEntry {
        code: "200",
        reason_phrase: "OK",
        summary: "Standard response for successful HTTP requests",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.3.1",
    },
    StatusEntry {
        code: "201",
        reason_phrase: "Created",
        summary: "The request has been fulfilled and resulted in a new resource being created",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.3.2",
    },
    StatusEntry {
        code: "204",
        reason_phrase: "No Content",
        summary: "The server has successfully fulfilled the request and that there is no additional content to send in the response payload body",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.3.5",
    },
    StatusEntry {
        code: "206",
        reason_phrase: "Partial Content",
        summary: "The server is successfully fulfilling a range request for the target resource",
        rfc_url: "http://tools.ietf.org/html/rfc7233#section-4.1",
    },
    StatusEntry {
        code: "301",
        reason_phrase: "Moved Permanently",
        summary: "The resource has been moved permanently to a different URI",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.4.2",
    },
    StatusEntry {
        code: "302",
        reason_phrase: "Found",
        summary: "The server is redirecting to a different URI, as indicated by the Location header",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.4.3",
    },
    StatusEntry {
        code: "303",
        reason_phrase: "See Other",
        summary: "The server is redirecting to a different URI which accesses the same resource",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.4.4",
    },
    StatusEntry {
        code: "304",
        reason_phrase: "Not Modified",
        summary: "There is no need to retransmit the resource, since the client still has a previously-downloaded copy",
        rfc_url: "http://tools.ietf.org/html/rfc7232#section-4.1",
    },
    StatusEntry {
        code: "305",
        reason_phrase: "Use Proxy",
        summary: "The requested resource is only available through a proxy, whose address is provided in the response",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.4.5",
    },
    StatusEntry {
        code: "307",
        reason_phrase: "Temporary Redirect",
        summary: "Subsequent requests should use the specified proxy",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.4.7",
    },
    StatusEntry {
        code: "400",
        reason_phrase: "Bad Request",
        summary: "The request could not be understood by the server due to malformed syntax",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.1",
    },
    StatusEntry {
        code: "401",
        reason_phrase: "Unauthorized",
        summary: "Authentication is required and has failed or has not yet been provided",
        rfc_url: "http://tools.ietf.org/html/rfc7235#section-3.1",
    },
    StatusEntry {
        code: "402",
        reason_phrase: "Payment Required",
        summary: "The 402 (Payment Required) status code is reserved for future use",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.2",
    },
    StatusEntry {
        code: "403",
        reason_phrase: "Forbidden",
        summary: "The server understood the request but refuses to authorize it",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.3",
    },
    StatusEntry {
        code: "404",
        reason_phrase: "Not Found",
        summary: "The requested resource could not be found but may be available again in the future",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.4",
    },
    StatusEntry {
        code: "405",
        reason_phrase: "Method Not Allowed",
        summary: "A request was made of a resource using a request method not supported by that resource",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.5",
    },
    StatusEntry {
        code: "406",
        reason_phrase: "Not Acceptable",
        summary: "The requested resource is only capable of generating content not acceptable according to the Accept headers sent in the request",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.6",
    },
    StatusEntry {
        code: "407",
        reason_phrase: "Proxy Authentication Required",
        summary: "The client must first authenticate itself with the proxy",
        rfc_url: "http://tools.ietf.org/html/rfc7235#section-3.2",
    },
    StatusEntry {
        code: "408",
        reason_phrase: "Request Timeout",
        summary: "The server timed out waiting for the request",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.7",
    },
    StatusEntry {
        code: "409",
        reason_phrase: "Conflict",
        summary: "The request could not be processed because of conflict in the request",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.8",
    },
    StatusEntry {
        code: "410",
        reason_phrase: "Gone",
        summary: "The resource requested is no longer available and will not be available again",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.9",
    },
    StatusEntry {
        code: "411",
        reason_phrase: "Length Required",
        summary: "The request did not specify the length of its content, which is required by the requested resource",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.10",
    },
    StatusEntry {
        code: "412",
        reason_phrase: "Precondition Failed",
        summary: "The server does not meet one of the preconditions that the requester put on the request",
        rfc_url: "http://tools.ietf.org/html/rfc7232#section-4.2",
    },
    StatusEntry {
        code: "413",
        reason_phrase: "Payload Too Large",
        summary: "The request is larger than the server is willing or able to process",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.11",
    },
    StatusEntry {
        code: "414",
        reason_phrase: "URI Too Long",
        summary: "The URI provided was too long for the server to process",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.12",
    },
    StatusEntry {
        code: "415",
        reason_phrase: "Unsupported Media Type",
        summary: "The request entity has a media type which the server or resource does not support",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.13",
    },
    StatusEntry {
        code: "416",
        reason_phrase: "Range Not Satisfiable",
        summary: "The client has asked for a portion of the file (byte serving), but the server cannot supply that portion",
        rfc_url: "http://tools.ietf.org/html/rfc7233#section-4.4",
    },
    StatusEntry {
        code: "417",
        reason_phrase: "Expectation Failed",
        summary: "The server cannot meet the requirements of the Expect request-header field",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.14",
    },
    StatusEntry {
        code: "426",
        reason_phrase: "Upgrade Required",
        summary: "The client should switch to a different protocol",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.5.15",
    },
    StatusEntry {
        code: "500",
        reason_phrase: "Internal Server Error",
        summary: "The server encountered an unexpected condition that prevented it from fulfilling the request",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.6.1",
    },
    StatusEntry {
        code: "501",
        reason_phrase: "Not Implemented",
        summary: "The server does not support the functionality required to fulfill the request",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.6.2",
    },
    StatusEntry {
        code: "502",
        reason_phrase: "Bad Gateway",
        summary: "The server, while acting as a gateway or proxy, received an invalid response from an inbound server it accessed while attempting to fulfill the request",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.6.3",
    },
    StatusEntry {
        code: "503",
        reason_phrase: "Service Unavailable",
        summary: "The server is currently unable to handle the request due to a temporary overload or scheduled maintenance",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.6.4",
    },
    StatusEntry {
        code: "504",
        reason_phrase: "Gateway Timeout",
        summary: "The server, while acting as a gateway or proxy, did not receive a timely response from an upstream server",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.6.5",
    },
    StatusEntry {
        code: "505",
        reason_phrase: "HTTP Version Not Supported",
        summary: "The server does not support, or refuses to support, the major version of HTTP that was used in the request",
        rfc_url: "http://tools.ietf.org/html/rfc7231#section-6.6.6",
    },
];

/// Finds the entry whose code is exactly `code`.
///
/// No trimming or normalization is applied: `" 404"` and `"404 "` miss.
pub fn lookup(code: &str) -> Option<&'static StatusEntry> {
    ENTRIES.iter().find(|entry| entry.code == code)
}

/// Returns every entry in ascending code order.
pub fn entries() -> &'static [StatusEntry] {
    &ENTRIES
}

/// Returns every known code in ascending order.
pub fn codes() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|entry| entry.code)
}

/// Returns the entries belonging to one response class.
pub fn entries_in_class(class: StatusClass) -> impl Iterator<Item = &'static StatusEntry> {
    ENTRIES
        .iter()
        .filter(move |entry| entry.class() == Some(class))
}

/// Checks that every code is a unique three-digit string and that no
/// descriptive field is empty.
pub fn validate() -> Result<()> {
    validate_entries(&ENTRIES)
}

pub(crate) fn validate_entries(entries: &[StatusEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.code.len() != 3 || !entry.code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(catalog_error("code is not three ASCII digits", entry));
        }
        if entry.class().is_none() {
            return Err(catalog_error("code is outside the 1xx-5xx range", entry));
        }
        if !seen.insert(entry.code) {
            return Err(catalog_error("duplicate code", entry));
        }
        if entry.reason_phrase.is_empty() {
            return Err(catalog_error("empty reason phrase", entry));
        }
        if entry.summary.is_empty() {
            return Err(catalog_error("empty summary", entry));
        }
        if entry.rfc_url.is_empty() {
            return Err(catalog_error("empty RFC url", entry));
        }
    }
    Ok(())
}

fn catalog_error(message: &str, entry: &StatusEntry) -> StatusLensError {
    StatusLensError::Catalog {
        message: message.to_string(),
        code: entry.code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &'static str) -> StatusEntry {
        StatusEntry {
            code,
            reason_phrase: "Teapot",
            summary: "Short and stout",
            rfc_url: "http://tools.ietf.org/html/rfc2324",
        }
    }

    #[test]
    fn test_rejects_duplicate_code() {
        let err = validate_entries(&[entry("418"), entry("418")]).unwrap_err();
        assert!(err.to_string().contains("duplicate code"));
    }

    #[test]
    fn test_rejects_malformed_code() {
        assert!(validate_entries(&[entry("41")]).is_err());
        assert!(validate_entries(&[entry("4a8")]).is_err());
        assert!(validate_entries(&[entry("999")]).is_err());
    }

    #[test]
    fn test_rejects_empty_fields() {
        let mut bad = entry("418");
        bad.summary = "";
        let err = validate_entries(&[bad]).unwrap_err();
        assert!(err.to_string().contains("empty summary"));
    }

    #[test]
    fn test_entries_are_sorted() {
        let codes: Vec<&str> = codes().collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }
}
