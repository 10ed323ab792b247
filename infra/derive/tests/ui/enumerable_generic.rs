#![allow(dead_code)]

use ordo_derive::Enumerable;

#[derive(Enumerable)]
enum Wrapper<T> {
    Unit,
    Marker(std::marker::PhantomData<T>),
}

fn main() {}
