use super::*;
use crate::content::SKILL_CATEGORIES;
use pretty_assertions::assert_eq;

#[test]
fn set_active_section_switches_and_remounts() {
    let mut state = state();
    let effects = run_runtime(
        &mut state,
        RuntimeAction::SetActiveSection("skills".to_string()),
    );
    assert_eq!(state.active_section(), Section::Skills);
    assert_eq!(
        effects,
        vec![
            ConsoleEffect::Unmount(Section::Dashboard),
            ConsoleEffect::Mount(Section::Skills),
        ]
    );
}

#[test]
fn bogus_section_id_is_ignored() {
    let mut state = state();
    let before = messages(&state);
    let effects = run_runtime(
        &mut state,
        RuntimeAction::SetActiveSection("bogus".to_string()),
    );
    assert!(effects.is_empty());
    assert_eq!(state.active_section(), Section::Dashboard);
    assert_eq!(messages(&state), before);
}

#[test]
fn same_section_does_not_remount() {
    let mut state = state();
    let effects = run_runtime(
        &mut state,
        RuntimeAction::SetActiveSection("dashboard".to_string()),
    );
    assert!(effects.is_empty());
}

#[test]
fn sidebar_navigation_posts_a_notice() {
    let mut state = state();
    run_user(&mut state, UserAction::Navigate(Section::Terminal));
    assert_eq!(state.active_section(), Section::Terminal);
    assert_eq!(messages(&state)[0], "Navigated to terminal");
}

#[test]
fn tab_cycles_through_every_section() {
    let mut state = state();
    let mut visited = vec![state.active_section()];
    for _ in 0..6 {
        run_user(&mut state, UserAction::NextSection);
        visited.push(state.active_section());
    }
    assert_eq!(
        visited,
        vec![
            Section::Dashboard,
            Section::Skills,
            Section::Projects,
            Section::ProjectsList,
            Section::Terminal,
            Section::Contact,
            Section::Dashboard,
        ]
    );
    run_user(&mut state, UserAction::PrevSection);
    assert_eq!(state.active_section(), Section::Contact);
}

#[test]
fn entering_the_network_posts_loading_notice() {
    let mut state = state();
    run_runtime(
        &mut state,
        RuntimeAction::SetActiveSection("projects".to_string()),
    );
    assert_eq!(messages(&state)[0], NETWORK_LOADING);
}

#[test]
fn dashboard_view_all_goes_to_projects_without_notice() {
    let mut state = state();
    for _ in 0..3 {
        run_user(&mut state, UserAction::DashboardMoveDown);
    }
    assert!(state.dashboard.on_view_all());

    let effects = run_user(&mut state, UserAction::DashboardActivate);

    assert_eq!(state.active_section(), Section::Projects);
    assert!(effects.contains(&ConsoleEffect::Mount(Section::Projects)));
    assert!(!messages(&state).iter().any(|m| m.starts_with("Navigated")));
}

#[test]
fn dashboard_project_opens_live_link() {
    let mut state = state();
    run_user(&mut state, UserAction::DashboardMoveDown);
    let effects = run_user(&mut state, UserAction::DashboardActivate);
    assert_eq!(
        effects,
        vec![
            ConsoleEffect::OpenUrl("https://vocalo.ai".to_string()),
            ConsoleEffect::RequestFrame,
        ]
    );
    assert_eq!(messages(&state)[0], "Opening Vocalo AI");
}

#[test]
fn leaving_a_view_drops_its_local_state() {
    let mut state = state();
    run_user(&mut state, UserAction::Navigate(Section::Skills));
    run_user(&mut state, UserAction::SkillsNextCategory);
    run_user(&mut state, UserAction::SkillsMoveDown);
    assert_eq!(state.skills.category, 1);

    run_user(&mut state, UserAction::Navigate(Section::Terminal));
    run_user(&mut state, UserAction::Navigate(Section::Skills));
    assert_eq!(state.skills.category, 0);
    assert_eq!(state.skills.cursor, 0);
}

#[test]
fn selecting_category_and_skill_posts_notices() {
    let mut state = state();
    run_user(&mut state, UserAction::Navigate(Section::Skills));
    run_user(&mut state, UserAction::SelectCategory(3));
    assert_eq!(
        messages(&state)[..2],
        ["Loading DevOps & Cloud skill data", "Selected category: DevOps & Cloud"]
    );
    run_user(&mut state, UserAction::SkillsMoveDown);
    run_user(&mut state, UserAction::SelectSkill);
    assert_eq!(state.skills.selected, Some((3, 1)));
    assert_eq!(messages(&state)[0], "Selected skill: Kubernetes");

    let effects = run_user(&mut state, UserAction::SelectCategory(99));
    assert!(effects.is_empty());
    assert_eq!(state.skills.category, 3);
}

#[test]
fn reselecting_the_active_category_loads_nothing() {
    let mut state = state();
    run_user(&mut state, UserAction::Navigate(Section::Skills));
    run_user(&mut state, UserAction::SelectCategory(0));
    let category = SKILL_CATEGORIES[0].name;
    assert_eq!(messages(&state)[0], format!("Selected category: {category}"));
    assert!(!messages(&state)
        .iter()
        .any(|message| message.starts_with("Loading ")));

    run_user(&mut state, UserAction::SkillsNextCategory);
    assert_eq!(
        messages(&state)[0],
        format!("Loading {} skill data", SKILL_CATEGORIES[1].name)
    );
}

#[test]
fn network_auto_select_only_fills_an_empty_selection() {
    let mut state = state();
    run_user(&mut state, UserAction::Navigate(Section::Projects));
    run_runtime(&mut state, RuntimeAction::NetworkAutoSelect(2));
    assert_eq!(state.network.selected, Some(2));
    assert!(state.network.auto_selected);

    run_user(&mut state, UserAction::NetworkSelectNext);
    assert_eq!(state.network.selected, Some(3));
    assert!(!state.network.auto_selected);

    run_runtime(&mut state, RuntimeAction::NetworkAutoSelect(0));
    assert_eq!(state.network.selected, Some(3));
}

#[test]
fn network_auto_select_is_ignored_off_screen() {
    let mut state = state();
    run_runtime(&mut state, RuntimeAction::NetworkAutoSelect(1));
    assert_eq!(state.network.selected, None);
}

#[test]
fn booting_console_ignores_navigation_but_honors_quit() {
    let mut state = booting_state();
    assert!(run_user(&mut state, UserAction::NextSection).is_empty());
    assert_eq!(state.active_section(), Section::Dashboard);
    assert_eq!(run_user(&mut state, UserAction::Quit), vec![ConsoleEffect::Quit]);
}

#[test]
fn projects_list_details_toggle() {
    let mut state = state();
    run_user(&mut state, UserAction::Navigate(Section::ProjectsList));
    run_user(&mut state, UserAction::ProjectsMoveUp);
    assert_eq!(state.projects_list.cursor, 2);

    run_user(&mut state, UserAction::ViewProjectDetails);
    assert_eq!(state.projects_list.details, Some(2));
    assert_eq!(messages(&state)[0], "Viewing SketchToImage details");

    run_user(&mut state, UserAction::ViewProjectDetails);
    assert_eq!(state.projects_list.details, None);

    let effects = run_user(&mut state, UserAction::OpenLiveDemo);
    assert!(effects.contains(&ConsoleEffect::OpenUrl(
        "https://sketchtoimage.com".to_string()
    )));
}
