mod tests {
    use ark_lights::curve::MAX_CURVE_STEPS;
    use ark_lights::{BrightnessCurve, CurveError, CurveShape, Rgb};

    const DRONE_RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    #[test]
    fn test_linear_ends_on_target() {
        let color = Rgb::new(200, 17, 255);
        for steps in [1, 2, 7, 100, MAX_CURVE_STEPS] {
            let curve = BrightnessCurve::linear(color, steps).unwrap();
            assert_eq!(curve.len(), steps);
            assert_eq!(curve[steps - 1], color);
            assert_eq!(curve.peak(), Some(color));
        }
    }

    #[test]
    fn test_linear_first_step_is_smallest() {
        let curve = BrightnessCurve::linear(DRONE_RED, 100).unwrap();
        assert_eq!(curve[0], Rgb::new(3, 0, 0));
        assert!(curve.iter().all(|level| level.r >= curve[0].r));
        assert!(curve.iter().all(|level| level.g == 0 && level.b == 0));
    }

    #[test]
    fn test_linear_is_non_decreasing() {
        let curve = BrightnessCurve::linear(Rgb::new(90, 255, 3), 37).unwrap();
        for pair in curve.as_slice().windows(2) {
            assert!(pair[0].r <= pair[1].r);
            assert!(pair[0].g <= pair[1].g);
            assert!(pair[0].b <= pair[1].b);
        }
    }

    #[test]
    fn test_quadratic_factor_strictly_increasing() {
        for steps in 1..=300 {
            let mut previous = 0.0;
            for step in 1..=steps {
                let factor = CurveShape::Quadratic.factor(step, steps);
                assert!(factor > previous, "steps {steps}, step {step}");
                assert!(factor <= 1.0);
                previous = factor;
            }
            assert_eq!(previous, 1.0);
        }
    }

    #[test]
    fn test_linear_factor_strictly_increasing() {
        let steps = 100;
        let factors: Vec<f32> = (1..=steps)
            .map(|step| CurveShape::Linear.factor(step, steps))
            .collect();
        assert!(factors.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(factors[0] > 0.0);
        assert_eq!(factors[steps - 1], 1.0);
    }

    #[test]
    fn test_exponential_factor_bounds() {
        let steps = 16;
        let mut previous = 0.0;
        for step in 1..=steps {
            let factor = CurveShape::Exponential.factor(step, steps);
            assert!(factor > previous);
            previous = factor;
        }
        assert!((previous - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_drone_curve() {
        let curve = BrightnessCurve::quadratic(DRONE_RED, 100).unwrap();
        assert_eq!(curve.len(), 100);
        assert_eq!(curve[0], Rgb::new(0, 0, 0));
        // (50 / 100)^2 * 255 = 63.75
        assert_eq!(curve[49], Rgb::new(64, 0, 0));
        assert_eq!(curve[99], DRONE_RED);
    }

    #[test]
    fn test_quadratic_between() {
        let min = Rgb::new(10, 200, 0);
        let max = Rgb::new(110, 100, 0);
        let curve = BrightnessCurve::quadratic_between(min, max, 4).unwrap();
        assert_eq!(curve[1], Rgb::new(35, 175, 0));
        assert_eq!(curve[3], max);
    }

    #[test]
    fn test_exponential_powers_of_two() {
        let curve = BrightnessCurve::exponential(Rgb::new(16, 0, 0), 4).unwrap();
        let reds: Vec<u8> = curve.iter().map(|level| level.r).collect();
        assert_eq!(reds, [2, 4, 8, 16]);
    }

    #[test]
    fn test_exponential_zero_and_one_channels() {
        let color = Rgb::new(255, 0, 1);
        let curve = BrightnessCurve::exponential(color, 8).unwrap();
        assert_eq!(curve[7], color);
        // sqrt(255) = 15.97
        assert_eq!(curve[3].r, 15);
        assert!(curve.iter().all(|level| level.g == 0));
        assert!(curve.iter().all(|level| level.b == 1));
        for pair in curve.as_slice().windows(2) {
            assert!(pair[0].r <= pair[1].r);
        }
    }

    #[test]
    fn test_exponential_between() {
        let low = Rgb::new(100, 7, 0);
        let high = Rgb::new(116, 7, 0);

        let rising = BrightnessCurve::exponential_between(low, high, 4).unwrap();
        let reds: Vec<u8> = rising.iter().map(|level| level.r).collect();
        assert_eq!(reds, [102, 104, 108, 116]);
        assert!(rising.iter().all(|level| level.g == 7));

        let falling = BrightnessCurve::exponential_between(high, low, 4).unwrap();
        let reds: Vec<u8> = falling.iter().map(|level| level.r).collect();
        assert_eq!(reds, [114, 112, 108, 100]);
    }

    #[test]
    fn test_full_scale_exponential_reaches_target() {
        let white = Rgb::new(255, 255, 255);
        for steps in [1, 3, 100, 255] {
            let curve = BrightnessCurve::exponential(white, steps).unwrap();
            assert_eq!(curve.peak(), Some(white));
        }
    }

    #[test]
    fn test_generate_matches_constructors() {
        let color = Rgb::new(12, 140, 230);
        assert_eq!(
            BrightnessCurve::generate(CurveShape::Linear, color, 20),
            BrightnessCurve::linear(color, 20)
        );
        assert_eq!(
            BrightnessCurve::generate(CurveShape::Quadratic, color, 20),
            BrightnessCurve::quadratic(color, 20)
        );
        assert_eq!(
            BrightnessCurve::generate(CurveShape::Exponential, color, 20),
            BrightnessCurve::exponential(color, 20)
        );
    }

    #[test]
    fn test_step_count_limits() {
        assert_eq!(
            BrightnessCurve::linear(DRONE_RED, 0),
            Err(CurveError::NoSteps)
        );
        assert_eq!(
            BrightnessCurve::quadratic(DRONE_RED, MAX_CURVE_STEPS + 1),
            Err(CurveError::CapacityExceeded {
                requested: MAX_CURVE_STEPS + 1,
                capacity: MAX_CURVE_STEPS,
            })
        );
        assert!(BrightnessCurve::exponential(DRONE_RED, MAX_CURVE_STEPS).is_ok());
    }
}
