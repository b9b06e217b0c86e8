use crate::utils::{self, Rand};
use immutable_bst::map::Map;
use std::{
    cmp::min,
    hash::Hash,
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

fn bench_put<T>(data: &[T]) -> (Map<T, T>, Duration)
where
    T: Ord + Clone,
{
    let begin = Instant::now();
    let mut m = Map::new();
    for k in data {
        m = m.put(k.clone(), k.clone())
    }
    (m, begin.elapsed())
}

// every reader thread shares the same version, no locks
fn bench_get<T>(m: &Arc<Map<T, T>>, data: &Arc<Vec<T>>) -> Duration
where
    T: Ord + Clone + Send + Sync + 'static,
{
    let n = num_cpus::get();
    let chunk = data.len() / n + 1;
    let begin = Instant::now();
    let threads = (0..n)
        .map(|i| {
            let (m, data) = (Arc::clone(m), Arc::clone(data));
            thread::spawn(move || {
                let p = min(i * chunk, data.len());
                for k in &data[p..min(data.len(), p + chunk)] {
                    m.get(k).unwrap();
                }
            })
        })
        .collect::<Vec<_>>();
    for th in threads {
        th.join().unwrap()
    }
    begin.elapsed()
}

fn bench_iter<T: Ord>(m: &Map<T, T>) -> Duration {
    let begin = Instant::now();
    assert_eq!(m.iter().count(), m.len());
    begin.elapsed()
}

fn bench_remove<T: Ord + Clone>(m: &Map<T, T>, data: &[T]) -> Duration {
    let begin = Instant::now();
    let mut m = m.clone();
    for k in data {
        m = m.remove(k).0
    }
    begin.elapsed()
}

pub(crate) fn run<T>(size: usize)
where
    T: Ord + Clone + Hash + Rand + Send + Sync + 'static,
{
    let data = Arc::new(utils::randvec::<T>(num_cpus::get(), size));
    let (m, put) = bench_put(&data);
    let m = Arc::new(m);
    let get = bench_get(&m, &data);
    let iter = bench_iter(&m);
    let rm = bench_remove(&m, &data);
    println!(
        "{},{:.0},{:.0},{:.0},{:.0},{}",
        size,
        utils::to_ns_per(put, size),
        utils::to_ns_per(get, size),
        utils::to_ns_per(iter, size),
        utils::to_ns_per(rm, size),
        m.tree().height(),
    );
}
