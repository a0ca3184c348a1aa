//! Session integration tests.
//!
//! These tests replay UI event sequences (drops, drags, button presses)
//! against a `BoardSession` and check the committed timeline.

use solo_board::core::{BoardConfig, ExportLayout, ImageRef, StepId, Zone};
use solo_board::export::{ExportPlan, ExportRenderer, StepColumn};
use solo_board::session::BoardSession;
use solo_board::zones::{DragState, ZoneSlot};

fn img(url: &str) -> ImageRef {
    ImageRef::new(url)
}

fn urls(session: &BoardSession, step: u32, zone: Zone) -> Vec<String> {
    session
        .step(StepId::new(step))
        .expect("step exists")
        .zone(zone)
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn slot(step: u32, zone: Zone) -> ZoneSlot {
    ZoneSlot::new(StepId::new(step), zone)
}

fn seeded() -> BoardSession {
    BoardSession::new(BoardConfig::new().seed(11))
}

// =============================================================================
// Drag relocation
// =============================================================================

/// Drag from hand, leave the hand area, drop on field.
#[test]
fn test_move_between_zones() {
    let mut session = seeded();
    session.add_images(StepId::new(1), Zone::Hand, [img("a"), img("b")]);

    let dragged = session.begin_drag(slot(1, Zone::Hand), 0);
    assert_eq!(dragged, Some(img("a")));

    let carried = session.drag_leave(slot(1, Zone::Hand));
    assert_eq!(urls(&session, 1, Zone::Hand), ["b"]);
    assert_eq!(*session.drag_state(), DragState::Idle);

    session.drop_image(slot(1, Zone::Field), carried);
    assert_eq!(urls(&session, 1, Zone::Field), ["a"]);
}

/// Drag into another step's zone.
#[test]
fn test_move_between_steps() {
    let mut session = seeded();
    session.add_images(StepId::new(1), Zone::Field, [img("m")]);
    let second = session.add_step().unwrap();

    session.begin_drag(slot(1, Zone::Field), 0).unwrap();
    session.drop_image(ZoneSlot::new(second, Zone::Banished), None);

    assert!(urls(&session, 1, Zone::Field).is_empty());
    assert_eq!(urls(&session, second.raw(), Zone::Banished), ["m"]);
}

/// A second drag replaces the first before anything is dropped.
#[test]
fn test_last_drag_wins() {
    let mut session = seeded();
    session.add_images(StepId::new(1), Zone::Hand, [img("a"), img("b")]);

    session.begin_drag(slot(1, Zone::Hand), 0);
    session.begin_drag(slot(1, Zone::Hand), 1);
    let carried = session.drag_leave(slot(1, Zone::Hand));

    assert_eq!(carried, Some(img("b")));
    assert_eq!(urls(&session, 1, Zone::Hand), ["a"]);
}

/// Leaving a zone that is not the origin keeps the drag alive.
#[test]
fn test_leave_unrelated_zone() {
    let mut session = seeded();
    session.add_images(StepId::new(1), Zone::Hand, [img("a")]);
    session.begin_drag(slot(1, Zone::Hand), 0);

    assert_eq!(session.drag_leave(slot(1, Zone::Graveyard)), None);
    assert!(matches!(session.drag_state(), DragState::Dragging { .. }));
    assert_eq!(urls(&session, 1, Zone::Hand), ["a"]);
}

/// Releasing outside every drop target: the origin's leave handler clears
/// the drag and no drop ever arrives.
#[test]
fn test_release_outside_targets() {
    let mut session = seeded();
    session.add_images(StepId::new(1), Zone::Extra, [img("x")]);
    session.begin_drag(slot(1, Zone::Extra), 0);

    let carried = session.drag_leave(slot(1, Zone::Extra));

    assert_eq!(carried, Some(img("x")));
    assert_eq!(*session.drag_state(), DragState::Idle);
    assert!(urls(&session, 1, Zone::Extra).is_empty());
}

/// Dropping onto a step that no longer exists leaves the origin intact.
#[test]
fn test_drop_on_removed_step_keeps_image() {
    let mut session = seeded();
    session.add_images(StepId::new(1), Zone::Hand, [img("a")]);
    let doomed = session.add_step().unwrap();
    session.remove_step(doomed);

    session.begin_drag(slot(1, Zone::Hand), 0).unwrap();
    session.drop_image(ZoneSlot::new(doomed, Zone::Field), None);
    assert_eq!(urls(&session, 1, Zone::Hand), ["a"]);

    session.begin_drag(slot(1, Zone::Hand), 0).unwrap();
    session.drop_image(slot(99, Zone::Field), None);
    assert_eq!(urls(&session, 1, Zone::Hand), ["a"]);
    assert_eq!(*session.drag_state(), DragState::Idle);
}

/// Moving one of two identical cards leaves the other behind.
#[test]
fn test_move_one_of_duplicates() {
    let mut session = seeded();
    session.add_images(StepId::new(1), Zone::Hand, [img("a"), img("a")]);

    session.begin_drag(slot(1, Zone::Hand), 1).unwrap();
    session.drop_image(slot(1, Zone::Field), None);

    assert_eq!(urls(&session, 1, Zone::Hand), ["a"]);
    assert_eq!(urls(&session, 1, Zone::Field), ["a"]);
}

/// Moving an image in one step does not disturb a copy of that step.
#[test]
fn test_move_does_not_leak_into_copies() {
    let mut session = seeded();
    session.add_images(StepId::new(1), Zone::Hand, [img("a")]);
    let copy = session.add_step_from(0).unwrap();

    session.begin_drag(ZoneSlot::new(copy, Zone::Hand), 0);
    session.drop_image(ZoneSlot::new(copy, Zone::Field), None);

    assert_eq!(urls(&session, 1, Zone::Hand), ["a"]);
    assert!(urls(&session, 1, Zone::Field).is_empty());
    assert_eq!(urls(&session, copy.raw(), Zone::Field), ["a"]);
}

// =============================================================================
// Buttons
// =============================================================================

/// Reset always yields a full set of empty zones under a fresh id.
#[test]
fn test_reset_produces_every_zone() {
    let mut session = seeded();
    for zone in Zone::ALL {
        session.add_images(StepId::new(1), zone, [img("c")]);
    }

    let id = session.reset();

    assert_eq!(id, StepId::new(2));
    let step = session.step(id).unwrap();
    for zone in Zone::ALL {
        assert!(step.zone(zone).is_empty(), "{zone} should be empty");
    }
}

/// Copying from an index past the end fails without side effects.
#[test]
fn test_add_step_from_invalid_index() {
    let mut session = seeded();
    assert!(session.add_step_from(3).is_err());
    assert_eq!(session.timeline().len(), 1);
    assert_eq!(session.store().next_id(), StepId::new(2));
}

// =============================================================================
// Export
// =============================================================================

struct Capture {
    plan: Option<ExportPlan>,
    labels: Vec<String>,
}

impl ExportRenderer for Capture {
    type Error = String;

    fn render(&mut self, plan: &ExportPlan, columns: &[StepColumn]) -> Result<Vec<u8>, String> {
        self.plan = Some(plan.clone());
        self.labels = columns.iter().map(|c| c.label.clone()).collect();
        Ok(b"png".to_vec())
    }
}

/// Save sizes the image from the step count and labels steps by position.
#[test]
fn test_save_layout() {
    let config = BoardConfig::new()
        .seed(11)
        .layout(ExportLayout::default().with_control_width(48).fixed_height(720));
    let mut session = BoardSession::new(config);
    session.add_step().unwrap();
    session.add_step().unwrap();
    session.remove_step(StepId::new(2));

    let mut renderer = Capture { plan: None, labels: Vec::new() };
    let artifact = session.save(&mut renderer, 300).unwrap();

    assert_eq!(artifact.plan.width, (370 + 16) * 2 + 48);
    assert_eq!(artifact.plan.height, 720);
    assert_eq!(renderer.plan, Some(artifact.plan));
    assert_eq!(renderer.labels, ["Step #1", "Step #2"]);
}

/// Same seed, same file names.
#[test]
fn test_seeded_names_repeat() {
    let mut a = seeded();
    let mut b = seeded();
    assert_eq!(a.plan_export(10).file_name, b.plan_export(10).file_name);
}
