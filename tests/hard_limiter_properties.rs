use hardlimit_core::core::parameter::THRESHOLD;
use hardlimit_core::core::units::db_to_linear;
use hardlimit_core::effects::dynamics::hard_limiter::HardLimiter;
use hardlimit_core::{FrameProcessor, ProcessError};
use proptest::prelude::*;

fn threshold() -> impl Strategy<Value = f32> {
    0.0f32..=4.0
}

fn block() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-8.0f32..=8.0, 1..512)
}

proptest! {
    #[test]
    fn samples_within_threshold_are_untouched(t in threshold(), input in block()) {
        let mut limiter = HardLimiter::with_threshold(t);
        let mut output = input.clone();
        limiter.process_block(&mut output).unwrap();

        for (&x, &y) in input.iter().zip(output.iter()) {
            if x.abs() <= t {
                prop_assert_eq!(x.to_bits(), y.to_bits());
            }
        }
    }

    #[test]
    fn samples_over_threshold_clamp_with_sign(t in threshold(), input in block()) {
        let mut limiter = HardLimiter::with_threshold(t);
        let mut output = input.clone();
        limiter.process_block(&mut output).unwrap();

        for (&x, &y) in input.iter().zip(output.iter()) {
            if x.abs() > t {
                let expected = if x > 0.0 { t } else { -t };
                prop_assert_eq!(y.to_bits(), expected.to_bits());
            }
        }
    }

    #[test]
    fn limiting_is_idempotent(t in threshold(), input in block()) {
        let mut limiter = HardLimiter::with_threshold(t);
        let mut once = input.clone();
        limiter.process_block(&mut once).unwrap();
        let mut twice = once.clone();
        limiter.process_block(&mut twice).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn set_parameter_matches_fresh_instance(t in threshold(), input in block()) {
        let mut configured: Box<dyn FrameProcessor> = Box::new(HardLimiter::with_threshold(1.0));
        configured.set_parameter(THRESHOLD, t).unwrap();
        let mut fresh = HardLimiter::with_threshold(t);

        let mut a = input.clone();
        let mut b = input;
        configured.process_block(&mut a).unwrap();
        fresh.process_block(&mut b).unwrap();

        prop_assert_eq!(a, b);
    }

    #[test]
    fn unknown_parameter_is_rejected(
        id in any::<i32>().prop_filter("not threshold", |id| *id != THRESHOLD),
        value in any::<f32>()
    ) {
        let mut limiter = HardLimiter::with_threshold(0.5);

        prop_assert_eq!(limiter.set_parameter(id, value), Err(ProcessError::UnknownParameter(id)));
        prop_assert_eq!(limiter.threshold(), Some(0.5));
    }

    #[test]
    fn unconfigured_limiter_leaves_buffer_alone(input in block()) {
        let mut limiter = HardLimiter::new();
        let mut output = input.clone();

        prop_assert_eq!(limiter.process_block(&mut output), Err(ProcessError::Unconfigured));
        prop_assert_eq!(output, input);
    }

    #[test]
    fn output_never_exceeds_threshold(db in -60.0f32..=12.0, input in block()) {
        let t = db_to_linear(db);
        let mut limiter = HardLimiter::with_threshold_db(db);
        let mut output = input;
        limiter.process_block(&mut output).unwrap();

        prop_assert!(output.iter().all(|s| s.abs() <= t));
    }
}
