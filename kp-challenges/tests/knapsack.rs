use kp_challenges::knapsack::*;
use test_case::test_case;

fn instance() -> Instance {
    Instance::new(11, vec![8, 10, 15, 4], vec![4, 5, 8, 3]).unwrap()
}

#[test]
fn test_new_instance() {
    let instance = instance();
    assert_eq!(instance.num_items(), 4);
    assert_eq!(instance.capacity(), 11);
    assert_eq!(instance.value(2), 15);
    assert_eq!(instance.weight(3), 3);
    assert_eq!(instance.values(), &[8, 10, 15, 4]);
    assert_eq!(instance.weights(), &[4, 5, 8, 3]);
}

#[test]
fn test_new_instance_without_items() {
    let instance = Instance::new(5, vec![], vec![]).unwrap();
    assert_eq!(instance.num_items(), 0);
    assert_eq!(instance.capacity(), 5);
}

#[test_case(10, vec![1, 2], vec![1], InstanceError::LengthMismatch { values: 2, weights: 1 }; "length mismatch")]
#[test_case(0, vec![1], vec![1], InstanceError::InvalidCapacity(0); "zero capacity")]
#[test_case(-3, vec![1], vec![1], InstanceError::InvalidCapacity(-3); "negative capacity")]
#[test_case(10, vec![1, 0], vec![1, 1], InstanceError::InvalidValue { index: 1, value: 0 }; "zero value")]
#[test_case(10, vec![-4, 1], vec![1, 1], InstanceError::InvalidValue { index: 0, value: -4 }; "negative value")]
#[test_case(10, vec![1, 1], vec![1, 0], InstanceError::InvalidWeight { index: 1, weight: 0 }; "zero weight")]
#[test_case(10, vec![1, 1, 1], vec![1, 1, -2], InstanceError::InvalidWeight { index: 2, weight: -2 }; "negative weight")]
fn test_invalid_instance(capacity: i64, values: Vec<i64>, weights: Vec<i64>, expected: InstanceError) {
    assert_eq!(Instance::new(capacity, values, weights), Err(expected));
}

#[test]
fn test_total_overflow() {
    assert_eq!(
        Instance::new(3, vec![i64::MAX; 3], vec![1, 1, 1]),
        Err(InstanceError::ValueOverflow { index: 2 })
    );
    assert_eq!(
        Instance::new(3, vec![1, 1, 1], vec![i64::MAX; 3]),
        Err(InstanceError::WeightOverflow { index: 2 })
    );
    // an invalid value is reported before a later overflow
    assert_eq!(
        Instance::new(3, vec![i64::MAX, 0, i64::MAX, i64::MAX], vec![1; 4]),
        Err(InstanceError::InvalidValue { index: 1, value: 0 })
    );
    // values overflow before weights are looked at
    assert_eq!(
        Instance::new(3, vec![i64::MAX; 3], vec![0; 3]),
        Err(InstanceError::ValueOverflow { index: 2 })
    );

    let instance = Instance::new(3, vec![i64::MAX, i64::MAX, 1], vec![1, 1, 1]).unwrap();
    assert_eq!(total_value(&instance, &[true; 3]), u64::MAX);
    let err = serde_json::from_str::<Instance>(&format!(
        r#"{{"capacity": 3, "values": [{m}, {m}, {m}], "weights": [1, 1, 1]}}"#,
        m = i64::MAX
    ))
    .unwrap_err();
    assert!(err.to_string().contains("total value overflows at item 2"));
}

#[test]
fn test_validation_priority() {
    // every constraint is violated, the length mismatch is reported first
    assert_eq!(
        Instance::new(0, vec![0, -1], vec![0]),
        Err(InstanceError::LengthMismatch { values: 2, weights: 1 })
    );
    assert_eq!(
        Instance::new(0, vec![0], vec![0]),
        Err(InstanceError::InvalidCapacity(0))
    );
    assert_eq!(
        Instance::new(1, vec![1, 0], vec![0, 1]),
        Err(InstanceError::InvalidValue { index: 1, value: 0 })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        InstanceError::LengthMismatch { values: 2, weights: 1 }.to_string(),
        "inconsistent number of items: 2 values and 1 weights"
    );
    assert_eq!(
        InstanceError::InvalidCapacity(-1).to_string(),
        "invalid (-1) capacity"
    );
    assert_eq!(
        InstanceError::InvalidWeight { index: 3, weight: 0 }.to_string(),
        "item 3 has invalid weight 0"
    );
}

#[test]
fn test_deserialize_validates() {
    let instance: Instance =
        serde_json::from_str(r#"{"capacity": 11, "values": [8, 10, 15, 4], "weights": [4, 5, 8, 3]}"#)
            .unwrap();
    assert_eq!(instance, self::instance());

    let err = serde_json::from_str::<Instance>(r#"{"capacity": 11, "values": [8, -1], "weights": [4, 5]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("item 1 has invalid value -1"));
}

#[test]
fn test_serialize() {
    let json = serde_json::to_value(instance()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"capacity": 11, "values": [8, 10, 15, 4], "weights": [4, 5, 8, 3]})
    );
    let back: Instance = serde_json::from_value(json).unwrap();
    assert_eq!(back, instance());
}

#[test]
fn test_evaluate_total_value() {
    let instance = instance();
    assert_eq!(instance.evaluate_total_value(&[false, false, true, true]).unwrap(), 19);
    assert_eq!(instance.evaluate_total_value(&[false; 4]).unwrap(), 0);
    assert_eq!(total_weight(&instance, &[true, true, false, false]), 9);
    assert_eq!(total_value(&instance, &[true, true, false, false]), 18);
    assert_eq!(selected_items(&[true, false, false, true]), vec![0, 3]);

    let err = instance
        .evaluate_total_value(&[true, true, true, false])
        .unwrap_err();
    assert_eq!(err.to_string(), "Total weight (17) exceeded capacity (11)");

    let err = instance.evaluate_total_value(&[true, false]).unwrap_err();
    assert_eq!(err.to_string(), "Selection has 2 items instead of 4");
}

#[test]
fn test_generate_instance() {
    let _ = env_logger::builder().is_test(true).try_init();
    let track = Track {
        num_items: 40,
        budget: 25,
    };
    let seed = [7u8; 32];
    let a = Instance::generate_instance(&seed, &track).unwrap();
    let b = Instance::generate_instance(&seed, &track).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.num_items(), 40);
    assert!(a.weights().iter().all(|&w| (1..=50).contains(&w)));
    assert!(a.values().iter().all(|&v| (1..=100).contains(&v)));
    let total: usize = a.weights().iter().sum();
    assert_eq!(a.capacity(), total * 25 / 100);

    let c = Instance::generate_instance(&[8u8; 32], &track).unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_generate_instance_rejects_empty_track() {
    let seed = [0u8; 32];
    assert!(Instance::generate_instance(&seed, &Track { num_items: 0, budget: 50 }).is_err());
    assert!(Instance::generate_instance(&seed, &Track { num_items: 5, budget: 0 }).is_err());
}

#[test]
fn test_density_order() {
    // densities: 2, 2, 1.875, 1.333
    let instance = Instance::new(11, vec![8, 10, 15, 4], vec![4, 5, 8, 3]).unwrap();
    let order = DensityOrder::of(&instance);
    assert_eq!(order.order(), &[0, 1, 2, 3]);
    assert!(order.is_identity());

    let reversed = Instance::new(11, vec![4, 15, 10, 8], vec![3, 8, 5, 4]).unwrap();
    let order = DensityOrder::of(&reversed);
    // ties keep their original relative order
    assert_eq!(order.order(), &[2, 3, 1, 0]);
    assert!(!order.is_identity());

    let sorted = order.apply(&reversed);
    assert_eq!(sorted.values(), &[10, 8, 15, 4]);
    assert_eq!(sorted.weights(), &[5, 4, 8, 3]);
    assert_eq!(sorted.capacity(), 11);

    // items 15 and 4 sit at positions 2 and 3 of the sorted copy
    assert_eq!(
        order.restore(&[false, false, true, true]),
        vec![true, true, false, false]
    );
}
