use super::*;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use futures::executor::block_on;

use crate::auth::store::MemorySessionStore;
use crate::net::gateway::TransportError;
use crate::net::testing::StubTransport;

fn token_with_exp(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u-1","exp":{exp}}}"#));
    format!("{header}.{payload}.sig")
}

struct Fixture {
    session: AuthSession<StubTransport>,
    store: Rc<MemorySessionStore>,
    log: Rc<RefCell<Vec<crate::net::gateway::HttpRequest>>>,
    seen: Rc<RefCell<Vec<AuthState>>>,
}

fn fixture(transport: StubTransport) -> Fixture {
    let log = transport.log();
    let store = Rc::new(MemorySessionStore::new());
    let session = AuthSession::new("/api", transport, Rc::clone(&store) as Rc<dyn SessionStore>);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&seen);
    session.set_observer(move |state: &AuthState| recorder.borrow_mut().push(state.clone()));

    Fixture { session, store, log, seen }
}

fn login_body(token: &str) -> String {
    format!(r#"{{"user":{{"id":1,"name":"Admin Demo","email":"admin@demo.com","role":"admin"}},"token":"{token}"}}"#)
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_authenticates_and_persists() {
    let exp = 1_900_000_000_i64;
    let token = token_with_exp(exp);
    let fx = fixture(StubTransport::new().respond(200, &login_body(&token)));

    let outcome = block_on(fx.session.login("admin@demo.com", "password"));

    let LoginOutcome::Authenticated(identity) = outcome else {
        panic!("expected authenticated outcome");
    };
    assert_eq!(identity.id, "1");
    assert_eq!(identity.name, "Admin Demo");
    assert_eq!(identity.token, token);
    assert_eq!(identity.expires_at, Some(exp * 1000 - 60_000));

    let state = fx.session.state();
    assert!(state.is_authenticated());
    assert!(!state.loading);

    // The store mirrors the in-memory identity exactly.
    assert_eq!(fx.store.load(), Some(identity));
}

#[test]
fn login_with_unreadable_token_claims_still_authenticates() {
    let fx = fixture(StubTransport::new().respond(200, &login_body("opaque-token")));

    let outcome = block_on(fx.session.login("admin@demo.com", "password"));

    let LoginOutcome::Authenticated(identity) = outcome else {
        panic!("expected authenticated outcome");
    };
    assert_eq!(identity.token, "opaque-token");
    assert_eq!(identity.expires_at, None);
}

#[test]
fn login_missing_token_stays_anonymous_and_store_untouched() {
    let fx = fixture(StubTransport::new().respond(
        200,
        r#"{"user":{"id":1,"name":"Admin Demo"},"message":"token service unavailable"}"#,
    ));

    let outcome = block_on(fx.session.login("admin@demo.com", "password"));

    assert_eq!(
        outcome,
        LoginOutcome::Rejected { message: "token service unavailable".to_owned() }
    );
    assert!(!fx.session.state().is_authenticated());
    assert_eq!(fx.store.load(), None);
    assert_eq!(fx.store.raw(), None);
}

#[test]
fn login_missing_user_uses_generic_message() {
    let fx = fixture(StubTransport::new().respond(200, r#"{"token":"abc"}"#));

    let outcome = block_on(fx.session.login("admin@demo.com", "password"));

    let LoginOutcome::Rejected { message } = outcome else {
        panic!("expected rejected outcome");
    };
    assert_eq!(message, "login response missing user or token");
}

#[test]
fn login_rejected_credentials_surface_server_error() {
    let fx = fixture(
        StubTransport::new().respond(401, r#"{"error":"invalid email or password"}"#),
    );

    let outcome = block_on(fx.session.login("admin@demo.com", "wrong"));

    assert_eq!(
        outcome,
        LoginOutcome::Rejected { message: "invalid email or password".to_owned() }
    );
}

#[test]
fn login_transport_failure_reports_connectivity_message() {
    let fx = fixture(
        StubTransport::new().fail(TransportError::Unreachable("refused".to_owned())),
    );

    let outcome = block_on(fx.session.login("admin@demo.com", "password"));

    assert_eq!(
        outcome,
        LoginOutcome::Rejected { message: "cannot reach server".to_owned() }
    );
    assert!(!fx.session.state().is_authenticated());
}

#[test]
fn login_replaces_previous_identity_wholesale() {
    let first = token_with_exp(1_900_000_000);
    let second = token_with_exp(2_000_000_000);
    let fx = fixture(
        StubTransport::new()
            .respond(200, &login_body(&first))
            .respond(
                200,
                &format!(r#"{{"user":{{"id":"u-2","name":"Second"}},"token":"{second}"}}"#),
            ),
    );

    let _ = block_on(fx.session.login("admin@demo.com", "password"));
    let _ = block_on(fx.session.login("second@demo.com", "password"));

    let identity = fx.session.state().identity.expect("identity");
    assert_eq!(identity.id, "u-2");
    assert_eq!(identity.token, second);
    assert_eq!(fx.store.load().map(|stored| stored.id), Some("u-2".to_owned()));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_state_and_store() {
    let token = token_with_exp(1_900_000_000);
    let fx = fixture(StubTransport::new().respond(200, &login_body(&token)));

    let _ = block_on(fx.session.login("admin@demo.com", "password"));
    fx.session.logout();

    assert!(!fx.session.state().is_authenticated());
    assert!(!fx.session.state().loading);
    assert_eq!(fx.store.load(), None);
}

#[test]
fn logout_from_anonymous_is_a_no_op_that_never_fails() {
    let fx = fixture(StubTransport::new());
    fx.session.logout();
    assert!(!fx.session.state().is_authenticated());
}

// =============================================================
// rehydrate
// =============================================================

#[test]
fn rehydrate_restores_persisted_identity() {
    let token = token_with_exp(1_900_000_000);
    let first = fixture(StubTransport::new().respond(200, &login_body(&token)));
    let _ = block_on(first.session.login("admin@demo.com", "password"));

    // A fresh session over the same store, as after a page reload.
    let session = AuthSession::new("/api", StubTransport::new(), first.store.clone() as Rc<dyn SessionStore>);
    session.rehydrate(0);

    assert!(session.state().is_authenticated());
    assert_eq!(session.state().token(), Some(token));
}

#[test]
fn rehydrate_discards_expired_record() {
    let store = Rc::new(MemorySessionStore::new());
    store.save(Some(&Identity {
        id: "u-1".to_owned(),
        name: "Admin Demo".to_owned(),
        email: "admin@demo.com".to_owned(),
        role: "admin".to_owned(),
        token: "tok".to_owned(),
        expires_at: Some(1_000),
    }));

    let session =
        AuthSession::new("/api", StubTransport::new(), Rc::clone(&store) as Rc<dyn SessionStore>);
    session.rehydrate(2_000);

    assert!(!session.state().is_authenticated());
    assert_eq!(store.load(), None);
}

#[test]
fn rehydrate_tolerates_corrupted_record() {
    let store = Rc::new(MemorySessionStore::new());
    store.set_raw("{not json");

    let session =
        AuthSession::new("/api", StubTransport::new(), Rc::clone(&store) as Rc<dyn SessionStore>);
    session.rehydrate(0);

    assert!(!session.state().is_authenticated());
}

// =============================================================
// reset flows
// =============================================================

#[test]
fn send_reset_code_reports_server_outcome() {
    let fx = fixture(
        StubTransport::new().respond(200, r#"{"success":true,"message":"code emailed"}"#),
    );

    let outcome = block_on(fx.session.send_reset_code("admin@demo.com"));
    assert_eq!(outcome, OpOutcome { ok: true, message: "code emailed".to_owned() });
}

#[test]
fn send_reset_code_unexpected_shape_is_structured_failure() {
    let fx = fixture(StubTransport::new().respond(200, r#"{"weird":"shape"}"#));

    let outcome = block_on(fx.session.send_reset_code("admin@demo.com"));
    assert!(!outcome.ok);
    assert_eq!(outcome.message, "could not send a reset code to that email");
}

#[test]
fn send_reset_code_transport_failure_is_structured_not_thrown() {
    let fx = fixture(
        StubTransport::new().fail(TransportError::Unreachable("refused".to_owned())),
    );

    let outcome = block_on(fx.session.send_reset_code("admin@demo.com"));
    assert_eq!(outcome, OpOutcome { ok: false, message: "cannot reach server".to_owned() });
}

#[test]
fn confirm_reset_success_returns_server_message() {
    let fx = fixture(StubTransport::new().respond(200, r#"{"message":"password updated"}"#));

    let message =
        block_on(fx.session.confirm_reset("admin@demo.com", "123456", "hunter2")).expect("ok");
    assert_eq!(message, "password updated");
}

#[test]
fn confirm_reset_failure_is_an_error_with_server_message() {
    let fx = fixture(StubTransport::new().respond(400, r#"{"error":"bad otp"}"#));

    let error = block_on(fx.session.confirm_reset("admin@demo.com", "000000", "hunter2"))
        .expect_err("error");
    assert_eq!(
        error,
        ApiError::Rejected { status: 400, message: Some("bad otp".to_owned()) }
    );
}

#[test]
fn confirm_reset_failure_without_server_message_uses_generic_one() {
    let fx = fixture(StubTransport::new().respond(400, "nope"));

    let error = block_on(fx.session.confirm_reset("admin@demo.com", "000000", "hunter2"))
        .expect_err("error");
    assert_eq!(error.to_string(), "reset failed, the OTP or email may be invalid");
}

// =============================================================
// loading flag
// =============================================================

fn assert_loading_scoped(seen: &[AuthState], final_state: &AuthState) {
    assert!(!final_state.loading, "loading leaked past the operation");
    // The operation announced itself, and the last notification cleared it.
    assert!(seen.iter().any(|state| state.loading), "loading was never set");
    assert!(!seen.last().expect("notifications").loading);
}

#[test]
fn loading_is_scoped_across_every_login_path() {
    let token = token_with_exp(1_900_000_000);
    let fx = fixture(
        StubTransport::new()
            .respond(200, &login_body(&token))
            .respond(401, r#"{"error":"invalid"}"#)
            .fail(TransportError::TimedOut),
    );

    for _ in 0..3 {
        assert!(!fx.session.state().loading);
        fx.seen.borrow_mut().clear();
        let _ = block_on(fx.session.login("admin@demo.com", "password"));
        assert_loading_scoped(&fx.seen.borrow(), &fx.session.state());
    }
}

#[test]
fn loading_is_scoped_across_reset_paths() {
    let fx = fixture(
        StubTransport::new()
            .respond(200, r#"{"success":true,"message":"sent"}"#)
            .fail(TransportError::Unreachable("down".to_owned()))
            .respond(400, r#"{"error":"bad otp"}"#),
    );

    let _ = block_on(fx.session.send_reset_code("admin@demo.com"));
    assert_loading_scoped(&fx.seen.borrow(), &fx.session.state());

    fx.seen.borrow_mut().clear();
    let _ = block_on(fx.session.send_reset_code("admin@demo.com"));
    assert_loading_scoped(&fx.seen.borrow(), &fx.session.state());

    fx.seen.borrow_mut().clear();
    let _ = block_on(fx.session.confirm_reset("admin@demo.com", "000000", "x"));
    assert_loading_scoped(&fx.seen.borrow(), &fx.session.state());
}

// =============================================================
// gateway wiring
// =============================================================

#[test]
fn requests_after_login_carry_the_bearer_token() {
    let token = token_with_exp(1_900_000_000);
    let fx = fixture(
        StubTransport::new()
            .respond(200, &login_body(&token))
            .respond(200, "[]"),
    );

    // The login request itself goes out unauthenticated.
    let outcome = block_on(fx.session.login("admin@demo.com", "password"));
    assert!(outcome.is_authenticated());

    let gateway = fx.session.gateway();
    let _ = block_on(crate::net::api::fetch_vehicles(gateway.as_ref()));

    let log = fx.log.borrow();
    assert_eq!(log[0].header("Authorization"), None);
    assert_eq!(
        log[1].header("Authorization"),
        Some(format!("Bearer {token}").as_str())
    );
}

#[test]
fn requests_after_logout_drop_the_bearer_token() {
    let token = token_with_exp(1_900_000_000);
    let fx = fixture(
        StubTransport::new()
            .respond(200, &login_body(&token))
            .respond(200, "[]"),
    );

    let _ = block_on(fx.session.login("admin@demo.com", "password"));
    fx.session.logout();

    let gateway = fx.session.gateway();
    let _ = block_on(crate::net::api::fetch_vehicles(gateway.as_ref()));

    assert_eq!(fx.log.borrow()[1].header("Authorization"), None);
}
