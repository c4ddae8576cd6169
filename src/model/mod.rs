pub mod gold;
pub mod legislator;
pub mod party;
pub mod riding;
pub mod terms;
