pub(crate) use super::*;
use crate::synthetic::Cluster;

const EPS: f32 = 1e-5;

fn sample(x1: f32, x2: f32, truth: &LinearModel) -> DataPoint {
    let y_head = truth.predict(x1, x2);
    DataPoint {
        x1,
        x2,
        y_head,
        cluster: Cluster::from_y_head(y_head),
    }
}

#[test]
fn test_no_selection_yields_no_readout() {
    let model = LinearModel::new(1.0, 2.0, -1.0);
    let frame = Frame::compute(&model, 5.0, None);
    assert!(frame.selection.is_none());
    assert!(frame.boundary.is_some());
}

#[test]
fn test_degenerate_model_has_no_boundary() {
    let model = LinearModel::new(0.0, 0.0, 3.0);
    let frame = Frame::compute(&model, 5.0, None);
    assert!(frame.boundary.is_none());
    assert!(frame.segment.is_degenerate());
}

#[test]
fn test_selection_readout_hand_computed() {
    let truth = LinearModel::new(1.0, 1.0, -10.0);
    let model = LinearModel::new(1.0, 1.0, -10.0);
    let point = sample(3.0, 4.0, &truth);

    let frame = Frame::compute(&model, 5.0, Some(&point));
    let readout = frame.selection.expect("a point is selected");

    // weighted sum 3 + 4 = 7, prediction 7 - 10 = -3, truth matches model
    assert!((readout.weighted_sum - 7.0).abs() < EPS);
    assert!((readout.prediction + 3.0).abs() < EPS);
    assert!(readout.loss.abs() < EPS);
}

#[test]
fn test_loss_against_stored_ground_truth() {
    let truth = LinearModel::new(2.0, 0.5, -1.0);
    let model = LinearModel::new(1.0, 1.0, -10.0);
    let point = sample(3.0, 4.0, &truth);

    let frame = Frame::compute(&model, 5.0, Some(&point));
    let readout = frame.selection.expect("a point is selected");

    // model: -3, truth: 6 + 2 - 1 = 7, loss |−3 − 7| = 10
    assert!((readout.loss - 10.0).abs() < EPS);
}

#[test]
fn test_frame_is_pure_function_of_inputs() {
    let model = LinearModel::new(0.5, -0.5, 2.0);
    let truth = LinearModel::new(1.0, 1.0, -10.0);
    let point = sample(5.0, 5.0, &truth);

    let a = Frame::compute(&model, 3.0, Some(&point));
    let b = Frame::compute(&model, 3.0, Some(&point));
    assert_eq!(a, b);
}

#[test]
fn test_segment_tracks_model_changes() {
    let truth = LinearModel::new(1.0, 1.0, -10.0);
    let point = sample(2.0, 2.0, &truth);

    let before = Frame::compute(&LinearModel::new(1.0, 0.0, 0.0), 3.0, Some(&point));
    let after = Frame::compute(&LinearModel::new(0.0, 1.0, 0.0), 3.0, Some(&point));
    assert_ne!(before.segment, after.segment);
}
