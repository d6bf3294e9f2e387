use c45::prelude::*;
use proptest::prelude::*;


/// Records over a tiny alphabet so that values and labels collide often.
fn records() -> impl Strategy<Value = Vec<Vec<String>>> {
    (0usize..4, 1usize..24).prop_flat_map(|(n_features, n_records)| {
        let value = prop::sample::select(vec!["a", "b", "c"]);
        let label = prop::sample::select(vec!["x", "y", "z"]);
        let record = (prop::collection::vec(value, n_features), label)
            .prop_map(|(features, label)| {
                features.into_iter()
                    .chain(std::iter::once(label))
                    .map(String::from)
                    .collect::<Vec<_>>()
            });
        prop::collection::vec(record, n_records)
    })
}


fn feature_labels(dataset: &Dataset) -> Vec<String> {
    (0..dataset.n_features()).map(|i| format!("f{i}")).collect()
}


proptest! {
    #[test]
    fn entropy_is_bounded(records in records()) {
        let dataset = Dataset::new(records).unwrap();
        let h = entropy(&dataset);
        prop_assert!(h >= 0.0);
        // At most three labels.
        prop_assert!(h <= 3f64.log2() + 1e-12);
        prop_assert_eq!(h == 0.0, dataset.is_pure());
    }


    #[test]
    fn partition_filters_and_projects(records in records()) {
        let dataset = Dataset::new(records).unwrap();
        for index in 0..dataset.n_features() {
            for value in dataset.distinct_values(index, ValueOrder::FirstSeen).unwrap() {
                let subset = dataset.partition(index, value).unwrap();
                prop_assert!(subset.len() <= dataset.len());
                prop_assert_eq!(subset.n_features() + 1, dataset.n_features());

                let expected = dataset.records()
                    .iter()
                    .filter(|record| record[index] == value)
                    .map(|record| {
                        let mut record = record.clone();
                        record.remove(index);
                        record
                    })
                    .collect::<Vec<_>>();
                prop_assert_eq!(subset.records(), &expected[..]);
            }
        }
    }


    #[test]
    fn chosen_feature_has_the_largest_ratio(records in records()) {
        let dataset = Dataset::new(records).unwrap();
        let scores = feature_scores(&dataset).unwrap();
        match choose_best_feature(&dataset).unwrap() {
            Some(best) => {
                let ratio = scores[best].gain_ratio;
                prop_assert!(ratio > 0.0);
                for score in scores.iter() {
                    prop_assert!(ratio >= score.gain_ratio);
                }
                // Ties keep the leftmost feature.
                for score in scores[..best].iter() {
                    prop_assert!(score.gain_ratio < ratio);
                }
            },
            None => {
                prop_assert!(scores.iter().all(|score| score.gain_ratio <= 0.0));
            },
        }
    }


    #[test]
    fn tree_is_deterministic(records in records()) {
        let dataset = Dataset::new(records).unwrap();
        let labels = feature_labels(&dataset);
        let learner = DecisionTreeBuilder::new().build();

        let first = learner.build_tree(&dataset.clone(), &labels.clone()).unwrap();
        let second = learner.build_tree(&dataset, &labels).unwrap();
        prop_assert_eq!(first, second);
    }


    #[test]
    fn value_order_only_changes_child_order(records in records()) {
        let dataset = Dataset::new(records).unwrap();
        let labels = feature_labels(&dataset);

        let first_seen = DecisionTreeBuilder::new()
            .build()
            .fit(&dataset, &labels)
            .unwrap();
        let sorted = DecisionTreeBuilder::new()
            .value_order(ValueOrder::Sorted)
            .build()
            .fit(&dataset, &labels)
            .unwrap();

        prop_assert_eq!(first_seen.tree().n_leaves(), sorted.tree().n_leaves());
        prop_assert_eq!(first_seen.tree().depth(), sorted.tree().depth());
        for record in dataset.records() {
            let features = &record[..record.len() - 1];
            prop_assert_eq!(
                first_seen.predict(features).unwrap(),
                sorted.predict(features).unwrap()
            );
        }
    }


    #[test]
    fn every_training_record_reaches_a_leaf(records in records()) {
        let dataset = Dataset::new(records).unwrap();
        let labels = feature_labels(&dataset);
        let f = DecisionTreeBuilder::new()
            .build()
            .fit(&dataset, &labels)
            .unwrap();

        prop_assert!(f.tree().depth() <= dataset.n_features());
        for record in dataset.records() {
            let features = &record[..record.len() - 1];
            prop_assert!(f.predict(features).unwrap().is_some());
        }
    }


    #[test]
    fn pure_records_give_a_bare_leaf(
        records in records(),
        label in prop::sample::select(vec!["x", "y", "z"]),
    ) {
        let records = records.into_iter()
            .map(|mut record| {
                let last = record.len() - 1;
                record[last] = label.to_string();
                record
            })
            .collect::<Vec<_>>();
        let dataset = Dataset::new(records).unwrap();
        let labels = feature_labels(&dataset);

        let tree = DecisionTreeBuilder::new()
            .build()
            .build_tree(&dataset, &labels)
            .unwrap();
        prop_assert_eq!(tree, Tree::leaf(label));
    }
}
