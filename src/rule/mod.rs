pub(crate) mod basic;
pub(crate) mod contract;
