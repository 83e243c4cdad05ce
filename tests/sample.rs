use minicart::prelude::*;
use polars::prelude::*;


#[test]
fn from_dataframe_keeps_columns_and_labels() {
    let s1 = Series::new("x", &[10.0, 14.0, 15.0, 5.0, 3.0, 8.0, 12.0]);
    let s2 = Series::new("y", &[5.0, 8.0, 3.0, 1.0, 9.0, 13.0, 11.0]);
    let target = Series::new("class", &[1_i64, 1, 1, -1, -1, -1, -1]);

    let df = DataFrame::new(vec![s1, s2]).unwrap();
    let sample = Sample::from_dataframe(df, target).unwrap();

    assert_eq!(sample.shape(), (7, 2));
    assert_eq!(sample["x"].values[0], 10.0);
    assert_eq!(sample.target(), &[1, 1, 1, -1, -1, -1, -1]);

    let mut tree = DecisionTree::new(Criterion::Gini);
    tree.fit(&sample);
    assert_eq!(zero_one_loss(&sample, &tree), 0.0);
}


#[test]
fn rows_round_trip_through_at() {
    let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let sample = Sample::from_rows(rows, vec![5, 6]);

    assert_eq!(sample.at(0), (vec![1.0, 2.0], 5));
    assert_eq!(sample.at(1), (vec![3.0, 4.0], 6));
}


#[test]
fn take_builds_the_requested_subsample() {
    let rows = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
    let sample = Sample::from_rows(rows, vec![0, 0, 1, 1]);

    let sub = sample.take(&[3, 1]);
    assert_eq!(sub.shape(), (2, 1));
    assert_eq!(sub.at(0), (vec![4.0], 1));
    assert_eq!(sub.at(1), (vec![2.0], 0));
}


#[test]
#[should_panic]
fn non_integer_target_column_panics() {
    let mut path = std::env::temp_dir();
    path.push("minicart_bad_target.csv");
    {
        use std::io::Write;
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "x,class").unwrap();
        writeln!(file, "1.0,0.5").unwrap();
    }

    let sample = Sample::from_csv(&path, true).unwrap();
    let _ = std::fs::remove_file(&path);

    // The `class` column holds a non-integer value.
    sample.set_target("class");
}
