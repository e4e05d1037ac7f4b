//! Property tests for preference degrees, net flows and clustering partitions.

use proptest::prelude::*;

use promethee_cluster::adapters::RandomSampleSeeder;
use promethee_cluster::domain::clustering::{ClusterError, PrometheeCluster};
use promethee_cluster::domain::criteria::{
    CriteriaSet, Criterion, Direction, GeneralizedCriterion,
};
use promethee_cluster::domain::flows::{NetFlowCalculator, OutrankingFlows};
use promethee_cluster::domain::preference::{PerformanceTable, PreferenceCalculator};

fn function_strategy() -> impl Strategy<Value = GeneralizedCriterion> {
    prop_oneof![
        Just(GeneralizedCriterion::Usual),
        (0.0..5.0f64).prop_map(|q| GeneralizedCriterion::u_shape(q).unwrap()),
        (0.5..20.0f64).prop_map(|p| GeneralizedCriterion::v_shape(p).unwrap()),
        (0.0..5.0f64, 0.0..10.0f64)
            .prop_map(|(q, extra)| GeneralizedCriterion::level(q + extra, q).unwrap()),
        (0.0..5.0f64, 0.5..10.0f64).prop_map(|(q, extra)| {
            GeneralizedCriterion::v_shape_indifference(q + extra, q).unwrap()
        }),
        (0.5..10.0f64).prop_map(|s| GeneralizedCriterion::gaussian(s).unwrap()),
    ]
}

fn criterion_strategy() -> impl Strategy<Value = (f64, GeneralizedCriterion, bool)> {
    (0.1..5.0f64, function_strategy(), any::<bool>())
}

/// Criteria and a table of `rows` alternatives over them.
fn problem_strategy(rows: std::ops::Range<usize>) -> impl Strategy<Value = (CriteriaSet, PerformanceTable)> {
    (prop::collection::vec(criterion_strategy(), 1..4), rows).prop_flat_map(|(specs, n)| {
        let m = specs.len();
        prop::collection::vec(prop::collection::vec(-100.0..100.0f64, m), n).prop_map(
            move |values| {
                let criteria = CriteriaSet::new(
                    specs
                        .iter()
                        .enumerate()
                        .map(|(c, (weight, function, maximise))| {
                            let direction = if *maximise { Direction::Max } else { Direction::Min };
                            Criterion::new(format!("g{c}"), *weight, *function, direction).unwrap()
                        })
                        .collect(),
                )
                .unwrap();
                let table = PerformanceTable::new(
                    (0..values.len()).map(|i| format!("a{i}")).collect(),
                    (0..m).map(|c| format!("g{c}")).collect(),
                    values,
                )
                .unwrap();
                (criteria, table)
            },
        )
    })
}

proptest! {
    #[test]
    fn partial_degrees_lie_in_unit_interval((criteria, table) in problem_strategy(2..8)) {
        let prefs = PreferenceCalculator::compute(&criteria, &table);
        for value in prefs.partial.values() {
            prop_assert!((0.0..=1.0).contains(value));
        }
        for i in 0..table.row_count() {
            for j in 0..table.row_count() {
                prop_assert!((0.0..=1.0).contains(&prefs.aggregated.get(i, j)));
            }
        }
    }

    #[test]
    fn aggregate_net_flows_sum_to_zero((criteria, table) in problem_strategy(2..8)) {
        let prefs = PreferenceCalculator::compute(&criteria, &table);
        let net = NetFlowCalculator::aggregate_net_flows(
            &NetFlowCalculator::criteria_net_flows(&prefs.partial),
            &criteria,
        );
        prop_assert!(net.sum().abs() < 1e-9);

        let promethee_ii = OutrankingFlows::promethee_ii(&prefs.aggregated).net();
        for (a, b) in net.values().iter().zip(promethee_ii.values()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn clustering_partitions_alternatives(
        (criteria, table) in problem_strategy(3..9),
        k_seed in 1usize..8,
        seed in any::<u64>(),
    ) {
        let k = 1 + k_seed % (table.row_count() - 1);
        let mut seeder = RandomSampleSeeder::from_seed(seed);

        match PrometheeCluster::default().run(&table, &criteria, k, &mut seeder) {
            Ok(result) => {
                let mut members: Vec<String> = result
                    .groups()
                    .iter()
                    .flat_map(|g| g.members.iter().cloned())
                    .collect();
                members.sort();
                let mut all = table.row_ids().to_vec();
                all.sort();
                prop_assert_eq!(members, all);
                prop_assert!(result.groups().len() <= k);
                prop_assert!(result.iterations() <= PrometheeCluster::DEFAULT_MAX_ITERATIONS);
            }
            Err(ClusterError::NonConvergence { last_assignment, .. }) => {
                prop_assert_eq!(last_assignment.len(), table.row_count());
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
