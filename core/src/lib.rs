pub mod base64;
pub mod fib;
pub mod harness;
pub mod matmul;

#[cfg(test)]
mod base64_test;
