//! Host-based integration tests for the Morse transmission engine


#[cfg(test)]
mod send_tests;
