use super::*;

#[test]
fn read_cookie_finds_named_value() {
    let cookies = "theme=dark; token=abc.def.ghi; lang=en";
    assert_eq!(read_cookie(cookies, TOKEN_COOKIE), Some("abc.def.ghi".to_owned()));
}

#[test]
fn read_cookie_requires_exact_name() {
    assert_eq!(read_cookie("xtoken=1; tokens=2", TOKEN_COOKIE), None);
}

#[test]
fn read_cookie_treats_empty_value_as_absent() {
    assert_eq!(read_cookie("token=; theme=dark", TOKEN_COOKIE), None);
    assert_eq!(read_cookie("", TOKEN_COOKIE), None);
}

#[test]
fn read_cookie_keeps_equals_inside_value() {
    assert_eq!(read_cookie("token=a=b==", TOKEN_COOKIE), Some("a=b==".to_owned()));
}

#[test]
fn session_cookie_is_site_wide_without_expiry() {
    let cookie = session_cookie(TOKEN_COOKIE, "abc");
    assert_eq!(cookie, "token=abc; path=/");
    assert!(!cookie.contains("expires"));
}

#[test]
fn expired_cookie_is_in_the_past() {
    assert_eq!(expired_cookie(TOKEN_COOKIE), "token=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT");
}

#[test]
fn memory_store_set_get_clear() {
    let store = MemorySessionStore::default();
    assert!(!store.has_token());
    store.set("tok");
    assert_eq!(store.get(), Some("tok".to_owned()));
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_ignores_empty_token() {
    let store = MemorySessionStore::with_token("old");
    store.set("");
    assert!(!store.has_token());
}
