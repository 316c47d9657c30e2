use super::*;
use crate::terminal::TerminalOutput;
use pretty_assertions::assert_eq;

fn last_text(state: &ConsoleState) -> String {
    state
        .transcript
        .last()
        .and_then(|entry| entry.output.as_ref())
        .map(TerminalOutput::plain_text)
        .unwrap_or_default()
}

#[test]
fn help_lists_all_eight_commands() {
    let mut state = state();
    submit(&mut state, "help");
    let text = last_text(&state);
    for name in [
        "help", "clear", "about", "skills", "projects", "contact", "github", "linkedin",
    ] {
        assert!(text.contains(name), "missing {name} in {text}");
    }
    assert_eq!(state.transcript.len(), 4);
}

#[test]
fn input_is_echoed_raw_before_the_result() {
    let mut state = state();
    submit(&mut state, "  HeLp ");
    let entries = state.transcript.entries();
    assert_eq!(entries[2].input.as_deref(), Some("  HeLp "));
    assert!(entries[3].output.is_some());
    assert!(!entries[3].is_error);
}

#[test]
fn unknown_command_reports_normalized_input() {
    let mut state = state();
    submit(&mut state, "  FooBar ");
    let last = state.transcript.last().cloned().unwrap();
    assert!(last.is_error);
    assert_eq!(
        last_text(&state),
        "Command not found: foobar. Type 'help' for available commands."
    );
}

#[test]
fn clear_leaves_single_system_entry() {
    let mut state = state();
    submit(&mut state, "about");
    submit(&mut state, "clear");
    assert_eq!(
        state.transcript.entries(),
        &[TerminalEntry::system(CLEARED_BANNER)]
    );
}

#[test]
fn blank_submission_is_ignored() {
    let mut state = state();
    type_text(&mut state, "   ");
    let effects = run_user(&mut state, UserAction::TerminalSubmit);
    assert!(effects.is_empty());
    assert_eq!(state.transcript.len(), 2);
    assert_eq!(state.terminal.input, "   ");
}

#[test]
fn github_opens_profile_link() {
    let mut state = state();
    let effects = submit(&mut state, "github");
    assert_eq!(
        effects,
        vec![
            ConsoleEffect::OpenUrl(state.profile.github_url.clone()),
            ConsoleEffect::RequestFrame,
        ]
    );
    assert_eq!(last_text(&state), "Opening GitHub profile...");
}

#[test]
fn run_command_matches_interactive_submission() {
    let mut typed = state();
    submit(&mut typed, "skills");
    let mut scripted = state();
    run_runtime(&mut scripted, RuntimeAction::RunCommand("skills".to_string()));
    assert_eq!(typed.transcript, scripted.transcript);
}

#[test]
fn entries_append_without_bound() {
    let mut state = state();
    for index in 0..200 {
        run_runtime(
            &mut state,
            RuntimeAction::AddTerminalEntry(TerminalEntry::text(format!("line {index}"))),
        );
    }
    assert_eq!(state.transcript.len(), 202);
    run_runtime(&mut state, RuntimeAction::ClearTerminal);
    assert_eq!(state.transcript.len(), 1);
}

#[test]
fn paste_drops_line_breaks_and_scroll_is_bounded() {
    let mut state = state();
    run_user(&mut state, UserAction::TerminalPaste("ab\nout\r".to_string()));
    assert_eq!(state.terminal.input, "about");
    for _ in 0..10 {
        run_user(&mut state, UserAction::TerminalScrollUp);
    }
    assert_eq!(state.terminal.scroll_back, 1);
}
