pub mod fib;
pub mod hello;
pub mod run;
