pub use self::optional::Optional;
mod optional;

#[cfg(test)]
mod tests;
