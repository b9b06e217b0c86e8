use std::env;
mod bst;
mod btm;
mod utils;

fn usage() {
    println!("usage: <bst|btm> <i64|str> <size>")
}

fn main() {
    let args = env::args().collect::<Vec<_>>();
    if args.len() != 4 {
        return usage();
    }
    let size = match args[3].parse::<usize>() {
        Ok(size) => size,
        Err(_) => return usage(),
    };
    println!("size,put,get,iter,remove(ns/op){}", if args[1] == "bst" { ",height" } else { "" });
    match (args[1].as_ref(), args[2].as_ref()) {
        ("bst", "i64") => bst::run::<i64>(size),
        ("bst", "str") => bst::run::<String>(size),
        ("btm", "i64") => btm::run::<i64>(size),
        ("btm", "str") => btm::run::<String>(size),
        _ => usage(),
    }
}
