use super::*;

#[test]
fn endpoint_and_dismiss_window_match_the_contract() {
    assert_eq!(CONTACT_ENDPOINT, "/api/contact");
    assert_eq!(STATUS_DISMISS_MS, 5_000);
}

#[test]
fn request_and_response_shapes_are_constructible() {
    let message = ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello".into(),
        message: "Hi there".into(),
    };
    assert_eq!(message.name, "Ada");

    let response = ContactResponse { ok: true };
    assert!(response.ok);
}

#[test]
fn begin_enters_sending_and_blocks_reentry() {
    let mut state = SubmitState::default();

    assert!(state.begin());
    assert!(state.is_sending());
    assert!(!state.begin());
    assert!(state.is_sending());
}

#[test]
fn control_recovers_after_success_and_failure_alike() {
    for outcome in [Ok(()), Err(SubmitError::Rejected), Err(SubmitError::Status(502))] {
        let mut state = SubmitState::default();
        assert!(state.begin());
        state.settle(outcome);
        assert!(!state.is_sending());
    }
}

#[test]
fn settle_raises_the_matching_message() {
    let mut state = SubmitState::default();

    state.begin();
    state.settle(Ok(()));
    let status = state.status().unwrap();
    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(status.text, "Message sent successfully!");

    state.begin();
    state.settle(Err(SubmitError::Rejected));
    let status = state.status().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, "Failed to send message. Please try again.");
}

#[test]
fn begin_clears_any_previous_message() {
    let mut state = SubmitState::default();
    state.begin();
    state.settle(Err(SubmitError::Status(500)));
    assert!(state.status().is_some());

    state.begin();
    assert!(state.status().is_none());
}

#[test]
fn dismiss_clears_only_its_own_settle() {
    let mut state = SubmitState::default();

    state.begin();
    let first = state.settle(Ok(()));

    // a second submission settles before the first message would expire
    state.begin();
    let second = state.settle(Err(SubmitError::Rejected));

    state.dismiss(first);
    assert!(state.status().is_some(), "stale dismiss must not clear a newer message");

    state.dismiss(second);
    assert!(state.status().is_none());
}

#[test]
fn status_kinds_map_to_css_classes() {
    assert_eq!(StatusKind::Success.css_class(), "success");
    assert_eq!(StatusKind::Error.css_class(), "error");
}
