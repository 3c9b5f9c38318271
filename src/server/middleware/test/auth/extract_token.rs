use super::*;

#[test]
fn reads_bearer_header() {
    let headers = headers(&[(AUTHORIZATION, "Bearer abc.def.ghi")]);

    assert_eq!(extract_token(&headers), Some("abc.def.ghi"));
}

#[test]
fn bearer_scheme_is_case_insensitive() {
    let headers = headers(&[(AUTHORIZATION, "bearer abc")]);

    assert_eq!(extract_token(&headers), Some("abc"));
}

#[test]
fn reads_auth_cookie() {
    let headers = headers(&[(COOKIE, "theme=dark; auth_token=abc; other=1")]);

    assert_eq!(extract_token(&headers), Some("abc"));
}

/// Tests that the header takes priority over the cookie.
#[test]
fn prefers_header_over_cookie() {
    let headers = headers(&[
        (AUTHORIZATION, "Bearer from-header"),
        (COOKIE, "auth_token=from-cookie"),
    ]);

    assert_eq!(extract_token(&headers), Some("from-header"));
}

/// Tests that a non-bearer `Authorization` header is not treated as a token.
#[test]
fn ignores_other_schemes() {
    let headers = headers(&[
        (AUTHORIZATION, "Basic dXNlcjpwYXNz"),
        (COOKIE, "auth_token=abc"),
    ]);

    assert_eq!(extract_token(&headers), None);
}

#[test]
fn returns_none_without_credentials() {
    let headers = headers(&[(COOKIE, "session=xyz; auth_token=")]);

    assert_eq!(extract_token(&headers), None);
    assert_eq!(extract_token(&HeaderMap::new()), None);
}
