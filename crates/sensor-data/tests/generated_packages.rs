//! Property checks of the workout formulas over seeded generated packages.

use rand::{SeedableRng, rngs::StdRng};
use sensor_data::prelude::*;
use workouts::{build_report, read_package, render};

const EPS: f64 = 1e-9;

fn batch(kind: ActivityKind, seed: u64) -> Vec<SensorPackage> {
    let config = GeneratorConfig {
        packages: 200,
        seed,
        mix: ActivityMix::only(kind),
    };
    PackageGenerator::default()
        .generate_batch(&config, &mut StdRng::seed_from_u64(config.seed))
        .unwrap()
}

fn value(package: &SensorPackage, pos: usize) -> f64 {
    package.data[pos].as_f64().unwrap()
}

#[test]
fn test_running_distance_is_steps_times_step_length() {
    for package in batch(ActivityKind::Running, 11) {
        let workout = read_package(&package).unwrap();
        let expected = value(&package, 0) * 0.65 / 1000.0;
        assert!((workout.distance() - expected).abs() < EPS);
        assert!((workout.mean_speed().unwrap() - expected / value(&package, 1)).abs() < EPS);
    }
}

#[test]
fn test_swimming_speed_comes_from_pool() {
    for package in batch(ActivityKind::Swimming, 12) {
        let workout = read_package(&package).unwrap();
        let expected = value(&package, 3) * value(&package, 4) / 1000.0 / value(&package, 1);
        assert!((workout.mean_speed().unwrap() - expected).abs() < EPS);
    }
}

#[test]
fn test_walking_calories_are_positive() {
    for package in batch(ActivityKind::Walking, 13) {
        let workout = read_package(&package).unwrap();
        assert!(workout.spent_calories().unwrap() > 0.0);
    }
}

#[test]
fn test_rendered_fields_have_three_decimals() {
    let config = GeneratorConfig {
        packages: 100,
        ..Default::default()
    };
    let packages = PackageGenerator::default()
        .generate_batch(&config, &mut StdRng::seed_from_u64(config.seed))
        .unwrap();

    for package in packages {
        let report = build_report(&read_package(&package).unwrap()).unwrap();
        let line = render(&report);
        let line = line.strip_suffix('.').unwrap();

        let fields: Vec<&str> = line.split("; ").collect();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0], format!("Тип тренировки: {}", report.kind.label()));
        for field in &fields[1..] {
            let number = field
                .split(' ')
                .find(|token| token.contains('.') && token.starts_with(|c: char| c.is_ascii_digit()))
                .unwrap();
            let number = number.trim_end_matches('.');
            let (_, decimals) = number.split_once('.').unwrap();
            assert_eq!(decimals.len(), 3, "field {field:?}");
        }
    }
}
