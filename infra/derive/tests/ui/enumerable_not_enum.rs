#![allow(dead_code)]

use ordo_derive::Enumerable;

#[derive(Enumerable)]
struct NotAnEnum {
    field: u32,
}

fn main() {}
