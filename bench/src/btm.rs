use crate::utils::{self, Rand};
use std::{
    collections::BTreeMap,
    hash::Hash,
    time::{Duration, Instant},
};

fn bench_put<T: Ord + Clone>(data: &[T]) -> (BTreeMap<T, T>, Duration) {
    let begin = Instant::now();
    let mut m = BTreeMap::new();
    for k in data {
        m.insert(k.clone(), k.clone());
    }
    (m, begin.elapsed())
}

fn bench_get<T: Ord>(m: &BTreeMap<T, T>, data: &[T]) -> Duration {
    let begin = Instant::now();
    for k in data {
        m.get(k).unwrap();
    }
    begin.elapsed()
}

fn bench_iter<T: Ord>(m: &BTreeMap<T, T>) -> Duration {
    let begin = Instant::now();
    assert_eq!(m.iter().count(), m.len());
    begin.elapsed()
}

fn bench_remove<T: Ord + Clone>(m: &BTreeMap<T, T>, data: &[T]) -> Duration {
    let mut m = m.clone();
    let begin = Instant::now();
    for k in data {
        m.remove(k).unwrap();
    }
    begin.elapsed()
}

pub(crate) fn run<T>(size: usize)
where
    T: Ord + Clone + Hash + Rand + Send + 'static,
{
    let data = utils::randvec::<T>(num_cpus::get(), size);
    let (m, put) = bench_put(&data);
    let get = bench_get(&m, &data);
    let iter = bench_iter(&m);
    let rm = bench_remove(&m, &data);
    println!(
        "{},{:.0},{:.0},{:.0},{:.0}",
        size,
        utils::to_ns_per(put, size),
        utils::to_ns_per(get, size),
        utils::to_ns_per(iter, size),
        utils::to_ns_per(rm, size),
    );
}
