use super::*;

const PROTECTED: [&str; 4] = ["/dashboard", "/dashboard/", "/dashboard/profile", "/dashboard/a/b"];

#[test]
fn protected_paths_without_token_redirect_to_login() {
    for path in PROTECTED {
        assert_eq!(evaluate(path, false), GuardDecision::Redirect(LOGIN_PATH), "path {path}");
    }
}

#[test]
fn protected_paths_with_token_are_allowed() {
    for path in PROTECTED {
        assert_eq!(evaluate(path, true), GuardDecision::Allow, "path {path}");
    }
}

#[test]
fn login_with_token_redirects_to_dashboard() {
    assert_eq!(evaluate(LOGIN_PATH, true), GuardDecision::Redirect(DASHBOARD_PATH));
}

#[test]
fn login_without_token_is_allowed() {
    assert_eq!(evaluate(LOGIN_PATH, false), GuardDecision::Allow);
}

#[test]
fn root_always_redirects_to_login() {
    assert_eq!(evaluate(ROOT_PATH, false), GuardDecision::Redirect(LOGIN_PATH));
    assert_eq!(evaluate(ROOT_PATH, true), GuardDecision::Redirect(LOGIN_PATH));
}

#[test]
fn lookalike_prefixes_are_not_protected() {
    assert!(!is_protected("/dashboardx"));
    assert!(!is_protected("/dash"));
    assert_eq!(evaluate("/dashboardx", false), GuardDecision::Allow);
}

#[test]
fn unrelated_paths_are_allowed() {
    assert_eq!(evaluate("/healthz", false), GuardDecision::Allow);
    assert_eq!(evaluate("/pkg/dashboard.js", true), GuardDecision::Allow);
}
