use super::*;
use crate::contact::ContactMessage;
use pretty_assertions::assert_eq;

fn on_contact() -> ConsoleState {
    let mut state = state();
    run_user(&mut state, UserAction::Navigate(Section::Contact));
    state
}

fn submit_filled(state: &mut ConsoleState) -> u64 {
    fill_contact(state, ["Ada", "ada@example.com", "Hello", "Let's talk."]);
    let effects = run_user(state, UserAction::ContactSubmit);
    match effects.first() {
        Some(ConsoleEffect::SubmitContact { submission_id, .. }) => *submission_id,
        other => panic!("expected a submission, got {other:?}"),
    }
}

#[test]
fn empty_required_field_never_dispatches() {
    for blank in 0..4 {
        let mut state = on_contact();
        let mut values = ["Ada", "ada@example.com", "Hello", "Let's talk."];
        values[blank] = " ";
        fill_contact(&mut state, values);

        let effects = run_user(&mut state, UserAction::ContactSubmit);

        assert!(!effects
            .iter()
            .any(|effect| matches!(effect, ConsoleEffect::SubmitContact { .. })));
        assert!(matches!(state.contact.status, ContactStatus::Failed { .. }));
    }
}

#[test]
fn missing_field_takes_focus_and_is_named() {
    let mut state = on_contact();
    fill_contact(&mut state, ["Ada", "ada@example.com", "", "body"]);
    run_user(&mut state, UserAction::ContactSubmit);
    assert_eq!(state.contact.focus, ContactField::Subject);
    assert_eq!(
        state.contact.status,
        ContactStatus::Failed {
            reason: "Subject is required".to_string()
        }
    );
}

#[test]
fn submission_carries_delivery_settings() {
    let mut state = on_contact();
    state.delivery = DeliveryMode::Mailto;
    fill_contact(&mut state, ["Ada", " ada@example.com ", "Hello", "Let's talk.\n"]);
    let effects = run_user(&mut state, UserAction::ContactSubmit);
    assert_eq!(
        effects[0],
        ConsoleEffect::SubmitContact {
            submission_id: 1,
            message: ContactMessage {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: "Hello".to_string(),
                message: "Let's talk.".to_string(),
            },
            mode: DeliveryMode::Mailto,
            recipient: state.contact_recipient.clone(),
        }
    );
    assert!(state.contact.is_sending());
}

#[test]
fn submit_is_disabled_while_sending() {
    let mut state = on_contact();
    submit_filled(&mut state);
    assert!(run_user(&mut state, UserAction::ContactSubmit).is_empty());
}

#[test]
fn success_clears_fields_and_notifies() {
    let mut state = on_contact();
    let submission_id = submit_filled(&mut state);
    run_runtime(
        &mut state,
        RuntimeAction::ContactResolved {
            submission_id,
            outcome: Ok(()),
        },
    );
    assert_eq!(state.contact.status, ContactStatus::Sent);
    assert!(state.contact.name.is_empty());
    assert!(state.contact.message.is_empty());
    assert_eq!(messages(&state)[0], CONTACT_SENT);
    assert_eq!(
        state.notifications.get(0).map(|n| n.kind),
        Some(NotificationKind::Success)
    );
}

#[test]
fn failure_keeps_fields_and_can_be_dismissed() {
    let mut state = on_contact();
    let submission_id = submit_filled(&mut state);
    run_runtime(
        &mut state,
        RuntimeAction::ContactResolved {
            submission_id,
            outcome: Err("relay answered 500".to_string()),
        },
    );
    assert_eq!(
        state.contact.status,
        ContactStatus::Failed {
            reason: "relay answered 500".to_string()
        }
    );
    assert_eq!(state.contact.name, "Ada");
    assert_eq!(messages(&state)[0], CONTACT_FAILED);

    run_user(&mut state, UserAction::DismissContactStatus);
    assert_eq!(state.contact.status, ContactStatus::Idle);
}

#[test]
fn result_for_abandoned_submission_is_dropped() {
    let mut state = on_contact();
    let submission_id = submit_filled(&mut state);
    run_user(&mut state, UserAction::Navigate(Section::Dashboard));
    run_user(&mut state, UserAction::Navigate(Section::Contact));
    let before = messages(&state);

    run_runtime(
        &mut state,
        RuntimeAction::ContactResolved {
            submission_id,
            outcome: Ok(()),
        },
    );

    assert_eq!(state.contact.status, ContactStatus::Idle);
    assert_eq!(messages(&state), before);
    assert_eq!(submit_filled(&mut state), submission_id + 1);
}

#[test]
fn newline_advances_single_line_fields_only() {
    let mut state = on_contact();
    run_user(&mut state, UserAction::ContactInput('A'));
    run_user(&mut state, UserAction::ContactNewline);
    assert_eq!(state.contact.focus, ContactField::Email);

    run_user(&mut state, UserAction::ContactFocusPrev);
    run_user(&mut state, UserAction::ContactFocusPrev);
    assert_eq!(state.contact.focus, ContactField::Message);
    run_user(&mut state, UserAction::ContactPaste("line one\r\nline two".to_string()));
    run_user(&mut state, UserAction::ContactNewline);
    assert_eq!(state.contact.message, "line one\nline two\n");
    assert_eq!(state.contact.name, "A");
}
