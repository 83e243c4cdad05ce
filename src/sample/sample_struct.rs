use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;
use rayon::prelude::*;

use crate::common::checker;
use super::feature_struct::*;


/// Struct `Sample` holds a batch sample:
/// a set of named feature columns of type `f64` and
/// a target column of integer labels.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<i64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from row-major data:
    /// `rows[i]` is the feature vector of the `i`-th example and
    /// `target[i]` is its label.
    ///
    /// This method panics when `rows.len() != target.len()` or
    /// when the rows do not have a common number of features.
    pub fn from_rows(rows: Vec<Vec<f64>>, target: Vec<i64>) -> Self {
        checker::check_rows(&rows[..], &target[..]);

        let n_sample = rows.len();
        let n_feature = rows.first().map(Vec::len).unwrap_or(0);

        let mut features = (1..=n_feature).map(|i| {
                let name = format!("Feat. [{i}]");
                Feature::new(name)
            })
            .collect::<Vec<_>>();

        for row in rows {
            for (feat, x) in features.iter_mut().zip(row) {
                feat.append(x);
            }
        }

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Self { name_to_index, features, target, n_sample, n_feature, }
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> io::Result<Self>
    {
        let (n_sample, n_feature) = data.shape();
        let target = target.i64()
            .expect("The target is not a dtype i64")
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .expect("The target contains a null value");

        let features = data.get_columns()
            .into_par_iter()
            .map(Feature::from_series)
            .collect::<Vec<_>>();

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let sample = Self {
            name_to_index, features, target, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Read a CSV format file to `Sample` type.
    /// The target column is empty until
    /// [`Sample::set_target`] is called.
    pub fn from_csv<P>(file: P, mut has_header: bool) -> io::Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let mut features = Vec::new();
        if has_header {
            let line = lines.next().unwrap();
            features = line?.split(',')
                .map(Feature::new)
                .collect::<Vec<_>>();
        }
        let mut n_sample = 0_usize;

        // For each line of the file
        for line in lines {
            let line = line?;

            // If the header does not exist,
            // construct a dummy header from the first line.
            if !has_header {
                let xs = line.split(',')
                    .map(|x| x.trim().parse::<f64>().unwrap())
                    .collect::<Vec<_>>();

                let n_feature = xs.len();
                features = (1..=n_feature).map(|i| {
                        let name = format!("Feat. [{i}]");
                        Feature::new(name)
                    })
                    .collect::<Vec<_>>();

                for (feat, x) in features.iter_mut().zip(xs) {
                    feat.append(x);
                }

                has_header = true;
                n_sample += 1;
                continue;
            }

            line.split(',')
                .map(|x| x.trim().parse::<f64>().unwrap())
                .enumerate()
                .for_each(|(i, x)| {
                    features[i].append(x);
                });

            n_sample += 1;
        }

        let n_feature = features.len();
        let target = Vec::with_capacity(0);

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let sample = Self {
            name_to_index, features, target, n_sample, n_feature,
        };

        Ok(sample)
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    /// This method panics when the column values are not integers.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Self {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .expect("The target class does not exist");


        let target = self.features.remove(pos).into_target();
        self.target = target;
        self.n_feature -= 1;


        self.name_to_index = self.features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        self
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the target labels.
    pub fn target(&self) -> &[i64] {
        &self.target[..]
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, i64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target[idx];

        (x, y)
    }


    /// Returns the sub-sample consisting of the given row indices.
    pub fn take(&self, indices: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| {
                let values = indices.iter()
                    .map(|&i| feat[i])
                    .collect::<Vec<_>>();
                Feature { name: feat.name().to_string(), values, }
            })
            .collect::<Vec<_>>();

        let target = indices.iter()
            .map(|&i| self.target[i])
            .collect::<Vec<_>>();

        let n_sample = indices.len();

        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            target,
            n_sample,
            n_feature: self.n_feature,
        }
    }


    /// Split `self` into a training/test pair.
    /// The rows `ix[start..end]` form the test sample and
    /// the remaining rows form the training sample.
    pub(crate) fn split(&self, ix: &[usize], start: usize, end: usize)
        -> (Self, Self)
    {
        let test_ix = &ix[start..end];
        let train_ix = ix[..start].iter()
            .chain(ix[end..].iter())
            .copied()
            .collect::<Vec<_>>();

        (self.take(&train_ix[..]), self.take(test_ix))
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name).unwrap();
        &self.features[k]
    }
}
