use super::*;

fn identity(expires_at: Option<i64>) -> Identity {
    Identity {
        id: "u-1".to_owned(),
        name: "Admin Demo".to_owned(),
        email: "admin@demo.com".to_owned(),
        role: "admin".to_owned(),
        token: "tok".to_owned(),
        expires_at,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_anonymous() {
    let state = AuthState::default();
    assert!(state.identity.is_none());
    assert!(!state.is_authenticated());
    assert_eq!(state.token(), None);
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn auth_state_token_comes_from_identity() {
    let state = AuthState { identity: Some(identity(None)), loading: false };
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("tok".to_owned()));
}

// =============================================================
// Identity expiry
// =============================================================

#[test]
fn identity_without_expiry_never_expires() {
    assert!(!identity(None).is_expired(i64::MAX));
}

#[test]
fn identity_expiry_boundary() {
    let id = identity(Some(1_000));
    assert!(!id.is_expired(999));
    assert!(id.is_expired(1_000));
    assert!(id.is_expired(1_001));
}

// =============================================================
// Persistence record shape
// =============================================================

#[test]
fn identity_round_trips_through_json_with_camel_case_fields() {
    let id = identity(Some(42));
    let json = serde_json::to_string(&id).expect("serialize");
    assert!(json.contains("\"expiresAt\":42"));

    let back: Identity = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, id);
}
