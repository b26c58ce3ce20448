use turnstile::store::MemoryStore;
use turnstile::{AuthGate, Error, SessionId};

fn gate() -> AuthGate<MemoryStore> {
    AuthGate::new(MemoryStore::new(), MemoryStore::new())
}

#[tokio::test]
async fn signup_then_login_yields_a_distinct_session() {
    let gate = gate();

    let first = gate.signup("alice", "pw1").await.unwrap();
    let second = gate.login("alice", "pw1").await.unwrap();

    assert_ne!(first, second);

    // Both sessions stay valid.
    for id in [first, second] {
        let session = gate
            .require_session(Some(&id.to_string()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.username, "alice");
    }
}

#[tokio::test]
async fn duplicate_signup_is_rejected_and_leaves_the_record_intact() {
    let gate = gate();

    gate.signup("carol", "pw1").await.unwrap();
    let second = gate.signup("carol", "pw2").await;
    assert!(matches!(second, Err(Error::UsernameTaken)));

    // The original credentials still work; the rejected ones never took.
    assert!(gate.login("carol", "pw1").await.is_ok());
    assert!(matches!(
        gate.login("carol", "pw2").await,
        Err(Error::InvalidCredentials)
    ));
}

#[tokio::test]
async fn login_without_signup_fails() {
    let gate = gate();

    let result = gate.login("nobody", "pw1").await;
    assert!(matches!(result, Err(Error::InvalidCredentials)));
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let gate = gate();

    gate.signup("alice", "pw1").await.unwrap();
    let result = gate.login("alice", "wrong").await;
    assert!(matches!(result, Err(Error::InvalidCredentials)));

    assert!(gate.login("alice", "pw1").await.is_ok());
}

#[tokio::test]
async fn empty_fields_fail_validation() {
    let gate = gate();

    assert!(matches!(
        gate.signup("", "pw1").await,
        Err(Error::Validation)
    ));
    assert!(matches!(gate.signup("bob", "").await, Err(Error::Validation)));
    assert!(matches!(gate.login("", "pw1").await, Err(Error::Validation)));
    assert!(matches!(gate.login("bob", "").await, Err(Error::Validation)));
}

#[tokio::test]
async fn never_issued_session_id_does_not_pass_the_gate() {
    let gate = gate();
    gate.signup("alice", "pw1").await.unwrap();

    // A perfectly well-formed id that was never stored.
    let forged = SessionId::default().to_string();
    let session = gate.require_session(Some(&forged)).await.unwrap();
    assert!(session.is_none());
}

#[tokio::test]
async fn missing_or_malformed_cookie_does_not_pass_the_gate() {
    let gate = gate();

    assert!(gate.require_session(None).await.unwrap().is_none());
    assert!(
        gate.require_session(Some("garbage"))
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        gate.require_session(Some("s1755000000000"))
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn issued_session_resolves_to_its_user() {
    let gate = gate();

    let id = gate.issue_session("dave").await.unwrap();
    let session = gate
        .require_session(Some(&id.to_string()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session.username, "dave");
}
