use super::*;
use crate::draw::color::{BLUE, RED};
use crate::draw::{FontDescriptor, Shape};
use crate::input::{Key, MouseButton, ShapeKind, Tool};

fn test_state() -> InputState {
    InputState::with_defaults(Tool::Pen, RED, 3, FontDescriptor::default())
}

fn draw_stroke(state: &mut InputState, from: (i32, i32), to: (i32, i32)) {
    state.on_pointer_down(MouseButton::Left, from.0, from.1);
    state.on_pointer_move(to.0, to.1);
    state.on_pointer_up(MouseButton::Left);
}

#[test]
fn pen_stroke_end_to_end_with_undo_and_redo() {
    let mut state = test_state();

    state.on_pointer_down(MouseButton::Left, 0, 0);
    state.on_pointer_move(25, 25);
    state.on_pointer_move(50, 50);
    state.on_pointer_move(75, 75);
    state.on_pointer_move(100, 100);
    state.on_pointer_up(MouseButton::Left);

    assert_eq!(state.history.len(), 1);
    assert!(state.can_undo());
    assert!(!state.can_redo());

    let committed = state.history.active_snapshot().to_vec();
    assert_eq!(committed.len(), 1);
    match &committed[0] {
        Shape::Pen { points, .. } => {
            assert_eq!(
                points,
                &vec![(0, 0), (25, 25), (50, 50), (75, 75), (100, 100)]
            );
        }
        other => panic!("expected a pen stroke, got {other:?}"),
    }

    state.undo();
    assert!(state.history.active_snapshot().is_empty());
    assert!(state.working.shapes.is_empty());
    assert!(!state.can_undo());
    assert!(state.can_redo());

    state.redo();
    assert_eq!(state.history.active_snapshot(), committed.as_slice());
    assert_eq!(state.working.shapes, committed);
    assert!(state.can_undo());
    assert!(!state.can_redo());
}

#[test]
fn shape_drag_keeps_negative_extents_until_render_time() {
    let mut state = test_state();
    state.set_tool(Tool::Shape(ShapeKind::Rect));

    state.on_pointer_down(MouseButton::Left, 10, 10);
    state.on_pointer_move(5, 5);

    match state.working.shapes.last() {
        Some(Shape::Rect {
            x,
            y,
            width,
            height,
            fill_color,
            ..
        }) => {
            assert_eq!((*x, *y, *width, *height), (10, 10, -5, -5));
            assert!(fill_color.is_none());
        }
        other => panic!("expected an in-progress rectangle, got {other:?}"),
    }

    state.on_pointer_up(MouseButton::Left);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn each_shape_tool_creates_its_variant() {
    let mut state = test_state();

    state.set_tool(Tool::Shape(ShapeKind::Rect));
    draw_stroke(&mut state, (0, 0), (10, 10));
    state.set_tool(Tool::Shape(ShapeKind::Circle));
    draw_stroke(&mut state, (20, 0), (30, 10));
    state.set_tool(Tool::Shape(ShapeKind::Arrow));
    draw_stroke(&mut state, (40, 0), (50, 10));

    let shapes = state.history.active_snapshot();
    assert_eq!(shapes.len(), 3);
    assert!(matches!(shapes[0], Shape::Rect { .. }));
    assert!(matches!(shapes[1], Shape::Circle { .. }));
    assert!(matches!(shapes[2], Shape::Arrow { .. }));
    assert_eq!(state.history.len(), 3);
}

#[test]
fn text_entry_commits_on_return() {
    let mut state = test_state();
    state.set_stroke_width(5);
    state.set_color(BLUE);
    state.set_tool(Tool::Text);

    state.on_pointer_down(MouseButton::Left, 40, 60);
    assert!(matches!(state.state, DrawingState::TextInput { .. }));

    for c in "hi!".chars() {
        state.on_key_press(Key::Char(c));
    }
    state.on_key_press(Key::Backspace);
    state.on_key_press(Key::Return);

    assert!(matches!(state.state, DrawingState::Idle));
    assert_eq!(state.history.len(), 1);
    match state.history.active_snapshot() {
        [Shape::Text {
            text,
            x,
            y,
            color,
            font_size,
            ..
        }] => {
            assert_eq!(text, "hi");
            assert_eq!((*x, *y), (40, 60));
            assert_eq!(*color, BLUE);
            // Font size follows stroke width: 5 * 4 + 8.
            assert_eq!(*font_size, 28.0);
        }
        other => panic!("expected a single text shape, got {other:?}"),
    }
}

#[test]
fn whitespace_only_text_leaves_no_trace() {
    let mut state = test_state();
    state.set_tool(Tool::Text);

    state.on_pointer_down(MouseButton::Left, 10, 10);
    state.on_key_press(Key::Space);
    state.on_key_press(Key::Space);
    state.on_key_press(Key::Space);
    state.on_key_press(Key::Return);

    assert!(matches!(state.state, DrawingState::Idle));
    assert!(state.working.shapes.is_empty());
    assert!(state.history.is_empty());
    assert!(!state.can_undo());
}

#[test]
fn escape_discards_text_entry() {
    let mut state = test_state();
    state.set_tool(Tool::Text);

    state.on_pointer_down(MouseButton::Left, 10, 10);
    for c in "draft".chars() {
        state.on_key_press(Key::Char(c));
    }
    state.on_key_press(Key::Escape);

    assert!(matches!(state.state, DrawingState::Idle));
    assert!(state.working.shapes.is_empty());
    assert!(state.history.is_empty());
}

#[test]
fn clicking_again_repositions_text_entry_and_resets_the_buffer() {
    let mut state = test_state();
    state.set_tool(Tool::Text);

    state.on_pointer_down(MouseButton::Left, 10, 10);
    state.on_key_press(Key::Char('a'));
    state.on_pointer_down(MouseButton::Left, 90, 90);

    match &state.state {
        DrawingState::TextInput { x, y, buffer } => {
            assert_eq!((*x, *y), (90, 90));
            assert!(buffer.is_empty());
        }
        other => panic!("expected text entry, got {other:?}"),
    }
}

#[test]
fn keys_are_ignored_outside_text_entry() {
    let mut state = test_state();
    state.on_key_press(Key::Char('x'));
    state.on_key_press(Key::Return);
    assert!(matches!(state.state, DrawingState::Idle));
    assert!(state.working.shapes.is_empty());
    assert!(state.history.is_empty());
}

#[test]
fn eraser_removes_only_the_hit_stroke() {
    let mut state = test_state();
    draw_stroke(&mut state, (0, 0), (20, 0));
    draw_stroke(&mut state, (200, 200), (220, 200));
    assert_eq!(state.history.len(), 2);

    state.set_tool(Tool::Eraser);
    // Within stroke_width + 10 = 13px of the first stroke's start point.
    state.on_pointer_down(MouseButton::Left, 3, 3);
    state.on_pointer_up(MouseButton::Left);

    assert_eq!(state.working.shapes.len(), 1);
    match &state.working.shapes[0] {
        Shape::Pen { points, .. } => assert_eq!(points[0], (200, 200)),
        other => panic!("expected the far stroke to survive, got {other:?}"),
    }
    // The removal itself was committed; the trailing release added nothing.
    assert_eq!(state.history.len(), 3);
}

#[test]
fn erasing_the_last_shape_is_undoable() {
    let mut state = test_state();
    draw_stroke(&mut state, (0, 0), (20, 0));

    state.set_tool(Tool::Eraser);
    state.on_pointer_down(MouseButton::Left, 0, 0);
    state.on_pointer_up(MouseButton::Left);

    assert!(state.working.shapes.is_empty());
    assert_eq!(state.history.len(), 2);
    assert!(state.can_undo());

    state.undo();
    assert_eq!(state.working.shapes.len(), 1);
}

#[test]
fn eraser_miss_is_a_complete_noop() {
    let mut state = test_state();
    draw_stroke(&mut state, (0, 0), (20, 0));
    state.undo();
    assert!(state.can_redo());

    state.set_tool(Tool::Eraser);
    state.on_pointer_down(MouseButton::Left, 300, 300);
    state.on_pointer_up(MouseButton::Left);

    // Nothing was removed, nothing committed, the redo tail survives.
    assert_eq!(state.history.len(), 1);
    assert!(state.can_redo());
}

#[test]
fn pointer_leave_commits_like_a_release() {
    let mut state = test_state();
    state.on_pointer_down(MouseButton::Left, 0, 0);
    state.on_pointer_move(10, 10);
    state.on_pointer_leave();

    assert!(matches!(state.state, DrawingState::Idle));
    assert_eq!(state.history.len(), 1);

    // The release that may still arrive afterwards adds nothing.
    state.on_pointer_up(MouseButton::Left);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn commit_after_undo_discards_the_redo_tail() {
    let mut state = test_state();
    draw_stroke(&mut state, (0, 0), (10, 0));
    draw_stroke(&mut state, (0, 20), (10, 20));
    draw_stroke(&mut state, (0, 40), (10, 40));

    state.undo();
    state.undo();
    assert!(state.can_redo());

    draw_stroke(&mut state, (0, 60), (10, 60));
    assert!(!state.can_redo());
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history.active_snapshot().len(), 2);
}

#[test]
fn shape_ids_are_unique_and_ordered_by_creation() {
    let mut state = test_state();
    draw_stroke(&mut state, (0, 0), (10, 0));
    state.set_tool(Tool::Shape(ShapeKind::Circle));
    draw_stroke(&mut state, (20, 20), (40, 40));
    state.set_tool(Tool::Pen);
    draw_stroke(&mut state, (50, 50), (60, 60));

    let ids: Vec<_> = state
        .working
        .shapes
        .iter()
        .map(|shape| shape.id())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(ids, sorted);
}

#[test]
fn mismatched_gesture_tail_is_silently_ignored() {
    let mut state = test_state();
    state.set_tool(Tool::Shape(ShapeKind::Rect));
    state.on_pointer_down(MouseButton::Left, 0, 0);

    // Force a sequencing anomaly: the gesture claims to be a pen stroke
    // while the working frame's tail is a rectangle.
    state.state = DrawingState::Drawing { tool: Tool::Pen };
    state.on_pointer_move(50, 50);

    match state.working.shapes.last() {
        Some(Shape::Rect { width, height, .. }) => {
            assert_eq!((*width, *height), (0, 0));
        }
        other => panic!("expected the rectangle to be untouched, got {other:?}"),
    }
}

#[test]
fn tool_change_mid_gesture_abandons_the_shape() {
    let mut state = test_state();
    state.on_pointer_down(MouseButton::Left, 0, 0);
    state.on_pointer_move(10, 10);

    state.set_tool(Tool::Eraser);
    assert!(matches!(state.state, DrawingState::Idle));
    assert!(state.working.shapes.is_empty());
    assert!(state.history.is_empty());
}

#[test]
fn stroke_width_is_clamped_to_range() {
    let mut state = test_state();
    state.set_stroke_width(0);
    assert_eq!(state.current_stroke_width, MIN_STROKE_WIDTH);
    state.set_stroke_width(99);
    assert_eq!(state.current_stroke_width, MAX_STROKE_WIDTH);
    state.set_stroke_width(7);
    assert_eq!(state.current_stroke_width, 7);
}

#[test]
fn undo_and_redo_are_noops_at_the_ends() {
    let mut state = test_state();
    state.undo();
    state.redo();
    assert!(state.working.shapes.is_empty());
    assert!(!state.can_undo());
    assert!(!state.can_redo());

    draw_stroke(&mut state, (0, 0), (10, 10));
    state.redo();
    assert_eq!(state.history.active_snapshot().len(), 1);
}

#[test]
fn non_left_buttons_do_nothing() {
    let mut state = test_state();
    state.on_pointer_down(MouseButton::Right, 0, 0);
    assert!(matches!(state.state, DrawingState::Idle));
    assert!(state.working.shapes.is_empty());

    state.on_pointer_down(MouseButton::Left, 0, 0);
    state.on_pointer_up(MouseButton::Middle);
    // Middle-button release does not end the gesture.
    assert!(matches!(state.state, DrawingState::Drawing { .. }));
}
