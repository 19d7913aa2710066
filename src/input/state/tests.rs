use super::*;
use crate::draw::color::{BLUE_IDX, ERASER_IDX, RED_IDX};
use crate::draw::damage::Redraw;
use crate::draw::page::MAX_PAGES;
use crate::input::events::ToolSelect;
use crate::input::tool::{ERASER_WIDTH, LINE_WIDTH};
use crate::util::Point;

fn drawing_board() -> BoardState {
    let mut state = BoardState::with_defaults(
        RED_IDX,
        3,
        Point::new(100, 100),
        Point::new(500, 400),
        false,
    );
    // Drop the initial paint hint so tests see only their own damage
    let _ = state.take_redraw();
    state
}

fn calibrating_board() -> BoardState {
    let mut state = BoardState::with_defaults(
        RED_IDX,
        3,
        Point::new(100, 100),
        Point::new(500, 400),
        true,
    );
    let _ = state.take_redraw();
    state
}

#[test]
fn drag_produces_a_finished_two_point_stroke() {
    let mut state = drawing_board();

    state.on_pointer_down(10, 10);
    state.on_pointer_move(10, 10); // duplicate, dropped
    state.on_pointer_move(20, 10);
    state.on_pointer_up(20, 10); // duplicate of the last point, dropped

    let strokes = &state.pages.active().strokes;
    assert_eq!(strokes.len(), 1);
    let stroke = &strokes[0];
    assert_eq!(stroke.points(), &[Point::new(10, 10), Point::new(20, 10)]);
    assert_eq!(stroke.color, RED_IDX);
    assert_eq!(stroke.width, 3);
    assert!(stroke.is_finished());
    assert!(!state.capturing());
}

#[test]
fn tap_produces_a_finished_single_point_stroke() {
    let mut state = drawing_board();

    state.on_pointer_down(40, 40);
    state.on_pointer_up(40, 40);

    let strokes = &state.pages.active().strokes;
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].len(), 1);
    assert!(strokes[0].is_finished());
}

#[test]
fn repeated_pointer_up_is_idempotent() {
    let mut state = drawing_board();

    state.on_pointer_down(10, 10);
    state.on_pointer_up(30, 30);
    assert_eq!(state.pages.active().strokes.len(), 1);

    state.on_pointer_up(30, 30);
    state.on_pointer_up(50, 50);
    assert_eq!(state.pages.active().strokes.len(), 1);
    assert!(!state.capturing());
}

#[test]
fn motion_is_ignored_while_idle() {
    let mut state = drawing_board();

    state.on_pointer_move(15, 15);
    state.on_pointer_move(25, 25);

    assert!(!state.capturing());
    assert_eq!(state.pages.active().strokes.len(), 0);
    assert_eq!(state.take_redraw(), None);
}

#[test]
fn motion_damage_is_one_segment_per_new_point() {
    let mut state = drawing_board();

    state.on_pointer_down(10, 10);
    assert_eq!(state.take_redraw(), None);

    state.on_pointer_move(20, 20);
    match state.take_redraw() {
        Some(Redraw::Segments(segs)) => {
            assert_eq!(segs.len(), 1);
            assert_eq!(segs[0].p0, Point::new(10, 10));
            assert_eq!(segs[0].p1, Point::new(20, 20));
            assert_eq!(segs[0].color, RED_IDX);
            assert_eq!(segs[0].width, 3);
        }
        other => panic!("expected one segment, got {other:?}"),
    }

    // A duplicate point leaves nothing to draw
    state.on_pointer_move(20, 20);
    assert_eq!(state.take_redraw(), None);

    state.on_pointer_up(30, 30);
    assert_eq!(state.take_redraw(), Some(Redraw::Full));
}

#[test]
fn stroke_start_while_capturing_files_the_unfinished_stroke() {
    let mut state = drawing_board();

    state.on_pointer_down(10, 10);
    state.on_pointer_move(20, 20);
    // Pen-up never arrived; the next pen-down must not lose the capture
    state.on_pointer_down(50, 50);

    let strokes = &state.pages.active().strokes;
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].len(), 2);
    assert!(!strokes[0].is_finished());

    assert!(state.capturing());
    assert_eq!(state.current_stroke().unwrap().points(), &[Point::new(50, 50)]);
}

#[test]
fn clear_empties_the_page_and_cancels_the_capture() {
    let mut state = drawing_board();

    state.on_pointer_down(10, 10);
    state.on_pointer_up(20, 20);
    state.on_pointer_down(30, 30);
    state.on_pointer_move(40, 40);
    let _ = state.take_redraw();

    state.on_tool_select(ToolSelect::Clear);

    assert_eq!(state.pages.active().strokes.len(), 0);
    assert!(!state.capturing());
    assert_eq!(state.tools.current_width, LINE_WIDTH);
    assert_eq!(state.take_redraw(), Some(Redraw::Full));
}

#[test]
fn calibration_clicks_commit_and_switch_to_drawing() {
    let mut state = calibrating_board();
    assert_eq!(state.mode, Mode::Calibrating);

    state.on_pointer_down(50, 50);
    assert_eq!(state.mode, Mode::Calibrating);
    state.on_pointer_down(250, 200);
    assert_eq!(state.mode, Mode::Drawing);

    assert_eq!(state.transform.x_slope, 2.0);
    assert_eq!(state.transform.y_slope, 2.0);
    assert_eq!(state.transform.x_intercept, 0.0);
    assert_eq!(state.transform.y_intercept, 0.0);

    // Raw pointer input now lands in logical coordinates
    state.on_pointer_down(60, 60);
    state.on_pointer_up(60, 60);
    let strokes = &state.pages.active().strokes;
    assert_eq!(strokes[0].points(), &[Point::new(120, 120)]);
}

#[test]
fn degenerate_calibration_click_is_retried() {
    let mut state = calibrating_board();

    state.on_pointer_down(50, 50);
    // Shares y with the first click; rejected, not counted
    state.on_pointer_down(200, 50);
    assert_eq!(state.mode, Mode::Calibrating);
    assert_eq!(state.calibration.clicks_recorded(), 1);

    state.on_pointer_down(250, 200);
    assert_eq!(state.mode, Mode::Drawing);
}

#[test]
fn pointer_up_and_move_are_inert_while_calibrating() {
    let mut state = calibrating_board();

    state.on_pointer_move(10, 10);
    state.on_pointer_up(10, 10);

    assert_eq!(state.calibration.clicks_recorded(), 0);
    assert!(!state.capturing());
    assert_eq!(state.pages.active().strokes.len(), 0);
}

#[test]
fn recalibrating_preserves_the_page_contents() {
    let mut state = drawing_board();

    state.on_pointer_down(10, 10);
    state.on_pointer_up(20, 20);

    state.on_tool_select(ToolSelect::Calibrate);
    assert_eq!(state.mode, Mode::Calibrating);
    assert_eq!(state.calibration.clicks_recorded(), 0);
    assert_eq!(state.pages.active().strokes.len(), 1);
}

#[test]
fn out_of_range_page_switch_is_a_noop() {
    let mut state = drawing_board();

    state.on_pointer_down(10, 10);
    state.on_pointer_up(20, 20);
    let _ = state.take_redraw();

    state.on_tool_select(ToolSelect::Page(MAX_PAGES));
    assert_eq!(state.pages.active_index(), 0);
    assert_eq!(state.pages.active().strokes.len(), 1);
    assert_eq!(state.take_redraw(), None);
}

#[test]
fn page_switch_discards_the_capture_in_progress() {
    let mut state = drawing_board();

    state.on_pointer_down(10, 10);
    state.on_pointer_move(20, 20);
    state.on_tool_select(ToolSelect::Page(2));

    assert_eq!(state.pages.active_index(), 2);
    assert!(!state.capturing());
    // The half-drawn stroke went nowhere
    assert_eq!(state.pages.active().strokes.len(), 0);
    state.on_tool_select(ToolSelect::Page(0));
    assert_eq!(state.pages.active().strokes.len(), 0);
}

#[test]
fn pen_changes_only_affect_the_next_stroke() {
    let mut state = drawing_board();

    state.on_pointer_down(10, 10);
    state.on_tool_select(ToolSelect::Color(BLUE_IDX));
    state.on_pointer_move(20, 20);
    state.on_pointer_up(30, 30);

    let strokes = &state.pages.active().strokes;
    assert_eq!(strokes[0].color, RED_IDX);

    state.on_pointer_down(40, 40);
    state.on_pointer_up(50, 50);
    assert_eq!(state.pages.active().strokes[1].color, BLUE_IDX);
}

#[test]
fn eraser_strokes_use_the_background_pen() {
    let mut state = drawing_board();

    state.on_tool_select(ToolSelect::Eraser);
    state.on_pointer_down(10, 10);
    state.on_pointer_move(60, 60);
    state.on_pointer_up(60, 60);

    let stroke = &state.pages.active().strokes[0];
    assert_eq!(stroke.color, ERASER_IDX);
    assert_eq!(stroke.width, ERASER_WIDTH);
}

#[test]
fn resize_forces_a_full_redraw() {
    let mut state = drawing_board();

    state.on_resize(800, 600);
    assert_eq!(state.surface_width, 800);
    assert_eq!(state.surface_height, 600);
    assert_eq!(state.take_redraw(), Some(Redraw::Full));

    // Same size again changes nothing
    state.on_resize(800, 600);
    assert_eq!(state.take_redraw(), None);
}

#[test]
fn quit_selection_requests_exit() {
    let mut state = drawing_board();
    assert!(!state.should_exit);
    state.on_tool_select(ToolSelect::Quit);
    assert!(state.should_exit);
}
