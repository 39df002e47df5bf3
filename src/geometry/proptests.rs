pub(crate) use super::*;
use proptest::prelude::*;

// Keep magnitudes moderate so f32 round-off stays well under the tolerances.
fn param() -> impl Strategy<Value = f32> {
    -100.0_f32..100.0
}

proptest! {
    /// The segment's start point always lies on the decision boundary.
    #[test]
    fn prop_start_on_boundary(w1 in param(), w2 in param(), bias in param()) {
        // Vanishing norms blow up the bias offset past f32 round-off.
        prop_assume!(w1.hypot(w2) > 0.1);

        let seg = weight_segment(w1, w2, bias);
        let residual = predict(seg.start.x, seg.start.y, w1, w2, bias);
        prop_assert!(residual.abs() < 1e-2, "residual {residual}");
    }

    /// The segment's length always equals the weight vector's magnitude.
    #[test]
    fn prop_length_is_weight_norm(w1 in param(), w2 in param(), bias in param()) {
        prop_assume!(w1.hypot(w2) > 0.1);

        let seg = weight_segment(w1, w2, bias);
        let expected = w1.hypot(w2);
        prop_assert!((seg.length() - expected).abs() < 1e-2);
    }

    /// Zero weights collapse to the origin for any bias.
    #[test]
    fn prop_zero_weights_degenerate(bias in param()) {
        let seg = weight_segment(0.0, 0.0, bias);
        prop_assert!(seg.is_degenerate());
        prop_assert_eq!(seg.start, crate::primitives::Point2::origin());
    }

    /// The boundary indicator is orthogonal, centered, and 2*half_length long.
    #[test]
    fn prop_perpendicular_contract(
        w1 in param(),
        w2 in param(),
        bias in param(),
        half in 0.1_f32..50.0
    ) {
        prop_assume!(w1.hypot(w2) > 0.1);

        let seg = weight_segment(w1, w2, bias);
        let perp = perpendicular(&seg, half).expect("non-degenerate segment");

        let cos = perp.direction().dot(seg.direction())
            / (perp.length() * seg.length());
        prop_assert!(cos.abs() < 1e-3);
        prop_assert!((perp.length() - 2.0 * half).abs() < 1e-2);

        let mid = perp.start.add(perp.end).scale(0.5);
        prop_assert!(mid.sub(seg.start).norm() < 1e-2);
    }

    /// Loss is symmetric, non-negative, and zero on the diagonal.
    #[test]
    fn prop_loss_contract(a in param(), b in param()) {
        prop_assert!((loss(a, b) - loss(b, a)).abs() < 1e-4);
        prop_assert!(loss(a, b) >= 0.0);
        prop_assert!(loss(a, a).abs() < 1e-6);
    }
}
