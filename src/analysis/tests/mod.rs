pub mod common;

#[cfg(test)]
mod test_effectiveness;

#[cfg(test)]
mod test_comparator;
