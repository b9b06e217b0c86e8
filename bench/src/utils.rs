use rand::Rng;
use std::{
    collections::HashSet,
    hash::Hash,
    iter::FromIterator,
    mem,
    sync::mpsc::channel,
    thread,
    time::Duration,
};

pub(crate) const STRSIZE: usize = 32;

pub(crate) trait Rand: Sized {
    fn rand<R: Rng>(r: &mut R) -> Self;
}

impl Rand for String {
    fn rand<R: Rng>(r: &mut R) -> Self {
        let mut s = String::new();
        for _ in 0..STRSIZE {
            s.push(r.gen())
        }
        s
    }
}

impl Rand for i64 {
    fn rand<R: Rng>(r: &mut R) -> Self {
        r.gen()
    }
}

pub(crate) fn random<T: Rand>() -> T {
    let mut rng = rand::thread_rng();
    T::rand(&mut rng)
}

/// generate len distinct random values using n threads
pub(crate) fn randvec<T>(n: usize, len: usize) -> Vec<T>
where
    T: Ord + Clone + Hash + Rand + Send + 'static,
{
    let csize = len / n;
    let (tx, rx) = channel();
    for _ in 0..n - 1 {
        let tx = tx.clone();
        thread::spawn(move || {
            let mut v: HashSet<T> = HashSet::with_capacity(csize);
            while v.len() < csize {
                v.insert(random());
            }
            tx.send(v).unwrap()
        });
    }
    mem::drop(tx);
    let mut v: HashSet<T> = HashSet::with_capacity(len);
    while v.len() < csize {
        v.insert(random());
    }
    while let Ok(c) = rx.recv() {
        v.extend(c.into_iter())
    }
    while v.len() < len {
        v.insert(random());
    }
    Vec::from_iter(v.into_iter())
}

pub(crate) fn to_ns(t: Duration) -> u64 {
    t.as_secs() * 1000000000 + (t.subsec_nanos() as u64)
}

pub(crate) fn to_ns_per(t: Duration, n: usize) -> f64 {
    (to_ns(t) as f64) / (n as f64)
}
