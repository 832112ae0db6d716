//! Session state machine tests: paging, toggles, animation guards, and
//! the start-once contract.

use ratatui::layout::Size;

use barscope::core::Series;
use barscope::sort::SortKind;
use barscope::theme::Theme;
use barscope::ui::{default_legend, App, Command, SessionError};

fn app_with(pages: &[&[u64]]) -> App {
    let series = pages.iter().map(|v| Series::new(v.to_vec())).collect();
    let mut app = App::new(series, SortKind::default(), default_legend(), Theme::default())
        .expect("non-empty collection");
    app.start(Size::new(120, 35)).expect("first start");
    app
}

/// Run an animation to completion, bounded so a stuck algorithm fails
/// the test instead of hanging it.
fn run_animation(app: &mut App) {
    app.apply(Command::StartAnimation).unwrap();
    assert!(app.is_animating());
    for _ in 0..10_000 {
        if !app.is_animating() {
            return;
        }
        app.apply(Command::Step).unwrap();
    }
    panic!("animation did not complete");
}

#[test]
fn empty_collection_is_rejected() {
    let err = App::new(
        Vec::new(),
        SortKind::default(),
        default_legend(),
        Theme::default(),
    )
    .unwrap_err();
    assert_eq!(err, SessionError::NoCharts);
}

#[test]
fn commands_before_start_fail_loudly() {
    let mut app = App::new(
        vec![Series::new(vec![1, 2])],
        SortKind::default(),
        default_legend(),
        Theme::default(),
    )
    .unwrap();
    assert_eq!(
        app.apply(Command::NextPage).unwrap_err(),
        SessionError::NotStarted
    );
    assert_eq!(
        app.render_snapshot().unwrap_err(),
        SessionError::NotStarted
    );
}

#[test]
fn starting_twice_fails_loudly() {
    let mut app = app_with(&[&[1, 2]]);
    assert_eq!(
        app.start(Size::new(120, 35)).unwrap_err(),
        SessionError::AlreadyStarted
    );
}

#[test]
fn paging_wraps_forward() {
    let mut app = app_with(&[&[1], &[2], &[3]]);
    assert_eq!(app.page(), 0);
    app.apply(Command::NextPage).unwrap();
    assert_eq!(app.page(), 1);
    app.apply(Command::NextPage).unwrap();
    assert_eq!(app.page(), 2);
    app.apply(Command::NextPage).unwrap();
    assert_eq!(app.page(), 0);
}

#[test]
fn paging_wraps_backward() {
    let mut app = app_with(&[&[1], &[2], &[3]]);
    app.apply(Command::PrevPage).unwrap();
    assert_eq!(app.page(), 2);
    app.apply(Command::PrevPage).unwrap();
    assert_eq!(app.page(), 1);
}

#[test]
fn toggle_sorted_switches_the_snapshot() {
    let mut app = app_with(&[&[3, 1, 2]]);
    assert_eq!(app.render_snapshot().unwrap(), vec![3, 1, 2]);

    app.apply(Command::ToggleSorted).unwrap();
    assert!(app.sorted_view());
    assert_eq!(app.render_snapshot().unwrap(), vec![1, 2, 3]);

    app.apply(Command::ToggleSorted).unwrap();
    assert_eq!(app.render_snapshot().unwrap(), vec![3, 1, 2]);
}

#[test]
fn algorithm_selection_cycles() {
    let mut app = app_with(&[&[1]]);
    assert_eq!(app.kind(), SortKind::Bubble);
    app.apply(Command::NextAlgorithm).unwrap();
    assert_eq!(app.kind(), SortKind::Selection);
    app.apply(Command::NextAlgorithm).unwrap();
    assert_eq!(app.kind(), SortKind::Insertion);
    app.apply(Command::NextAlgorithm).unwrap();
    assert_eq!(app.kind(), SortKind::Bubble);
}

#[test]
fn commands_are_ignored_while_animating() {
    let mut app = app_with(&[&[5, 3, 8, 1], &[2, 1]]);
    app.apply(Command::StartAnimation).unwrap();
    assert!(app.is_animating());

    app.apply(Command::NextPage).unwrap();
    app.apply(Command::PrevPage).unwrap();
    app.apply(Command::ToggleSorted).unwrap();
    app.apply(Command::NextAlgorithm).unwrap();
    app.apply(Command::StartAnimation).unwrap();

    assert_eq!(app.page(), 0);
    assert!(!app.sorted_view());
    assert_eq!(app.kind(), SortKind::Bubble);
    assert!(app.is_animating());
}

#[test]
fn bubble_animation_sorts_the_page() {
    let mut app = app_with(&[&[3, 1, 4, 1, 5]]);
    run_animation(&mut app);

    assert!(!app.is_animating());
    // The sorted array landed in the chart's series.
    assert_eq!(app.charts()[0].values(), &[1, 1, 3, 4, 5]);
    assert_eq!(app.render_snapshot().unwrap(), vec![1, 1, 3, 4, 5]);
}

#[test]
fn every_kind_animates_to_completion() {
    for kind in SortKind::ALL {
        let mut app = app_with(&[&[9, 2, 7, 2, 0, 4]]);
        while app.kind() != kind {
            app.apply(Command::NextAlgorithm).unwrap();
        }
        run_animation(&mut app);
        assert_eq!(app.charts()[0].values(), &[0, 2, 2, 4, 7, 9], "{kind:?}");
    }
}

#[test]
fn snapshot_during_animation_is_the_live_array() {
    let mut app = app_with(&[&[3, 2, 1]]);
    app.apply(Command::StartAnimation).unwrap();
    app.apply(Command::Step).unwrap();
    // One bubble comparison has swapped the leading pair.
    assert_eq!(app.render_snapshot().unwrap(), vec![2, 3, 1]);
    assert!(app.is_animating());
    // The chart's own series is untouched until the animation lands.
    assert_eq!(app.charts()[0].values(), &[3, 2, 1]);
}

#[test]
fn quit_mid_animation_aborts_and_clears() {
    let mut app = app_with(&[&[4, 3, 2, 1]]);
    app.apply(Command::StartAnimation).unwrap();
    app.apply(Command::Step).unwrap();
    assert!(app.is_animating());

    app.apply(Command::Quit).unwrap();
    assert!(app.should_quit);
    assert!(!app.is_animating());

    // The partial array landed: same values, possibly reordered.
    let mut landed = app.charts()[0].values().to_vec();
    landed.sort_unstable();
    assert_eq!(landed, vec![1, 2, 3, 4]);
}

#[test]
fn stale_step_after_completion_is_ignored() {
    let mut app = app_with(&[&[2, 1]]);
    run_animation(&mut app);
    app.clear_dirty();

    app.apply(Command::Step).unwrap();
    assert!(!app.is_animating());
    assert!(!app.dirty);
    assert_eq!(app.charts()[0].values(), &[1, 2]);
}

#[test]
fn already_sorted_page_still_animates_briefly() {
    // The driver issues one step before the first sorted check.
    let mut app = app_with(&[&[1, 2, 3]]);
    run_animation(&mut app);
    assert_eq!(app.charts()[0].values(), &[1, 2, 3]);
}

#[test]
fn commands_mark_the_display_dirty() {
    let mut app = app_with(&[&[1], &[2]]);
    app.clear_dirty();
    app.apply(Command::NextPage).unwrap();
    assert!(app.dirty);

    app.clear_dirty();
    app.apply(Command::ToggleSorted).unwrap();
    assert!(app.dirty);
}
