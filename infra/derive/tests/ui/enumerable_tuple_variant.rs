#![allow(dead_code)]

use ordo_derive::Enumerable;

#[derive(Enumerable)]
enum Mixed {
    Unit,
    Payload(u32),
}

fn main() {}
