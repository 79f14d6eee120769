pub mod reqwest;

#[cfg(test)]
pub mod testing;
