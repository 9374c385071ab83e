use crate::app::modes::ModeKind;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::vector_literal::VECTOR_COMPONENT_WARNING;
use crate::core::{ClickKind, Point2D, WeightKind};

use super::map_intent_to_commands;

#[test]
fn primary_click_maps_to_add_or_replace() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            position: Point2D::new(3.0, 4.0),
            kind: ClickKind::Primary,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::AddOrReplacePoint {
            position: Point2D::new(3.0, 4.0)
        }]
    );
}

#[test]
fn secondary_and_auxiliary_clicks_map_to_remove_last() {
    let state = AppState::new();

    for kind in [ClickKind::Secondary, ClickKind::Auxiliary] {
        let commands = map_intent_to_commands(
            &state,
            AppIntent::CanvasClicked {
                position: Point2D::ZERO,
                kind,
            },
        );
        assert_eq!(commands, vec![AppCommand::RemoveLastPoint]);
    }
}

#[test]
fn weight_edit_in_edge_mode_maps_to_nothing() {
    let mut state = AppState::new();
    state.mode = crate::app::modes::InteractionMode::new(ModeKind::Edges, Default::default());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::WeightEdited {
            weight: WeightKind::Alpha,
            value: 0.5,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn valid_point_literal_clears_status_and_adds_point() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointEntered {
            literal: "10,20,0".to_string(),
        },
    );

    assert_eq!(
        commands,
        vec![
            AppCommand::SetStatusMessage { message: None },
            AppCommand::AddOrReplacePoint {
                position: Point2D::new(10.0, 20.0)
            },
        ]
    );
}

#[test]
fn short_point_literal_warns_but_applies_best_effort_point() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointEntered {
            literal: "10,20".to_string(),
        },
    );

    assert_eq!(commands.len(), 2);
    assert_eq!(
        commands[0],
        AppCommand::SetStatusMessage {
            message: Some(VECTOR_COMPONENT_WARNING.to_string())
        }
    );
    assert!(matches!(commands[1], AppCommand::AddOrReplacePoint { .. }));
}

#[test]
fn unusable_point_literal_only_sets_warning() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointEntered {
            literal: "x".to_string(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SetStatusMessage { message: Some(_) }
    ));
}

#[test]
fn mode_switch_maps_to_two_commands_in_order() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ModeSwitchRequested {
            mode: ModeKind::Edges,
        },
    );

    assert_eq!(
        commands,
        vec![
            AppCommand::SwitchMode {
                mode: ModeKind::Edges
            },
            AppCommand::SetStatusMessage { message: None },
        ]
    );
}
