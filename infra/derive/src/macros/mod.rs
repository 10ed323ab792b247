pub mod enumerable;
