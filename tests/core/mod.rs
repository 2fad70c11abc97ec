// tests/core/mod.rs

#[cfg(test)]
mod concurrency;
#[cfg(test)]
mod key;
