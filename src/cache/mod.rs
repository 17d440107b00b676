pub(crate) mod builder;
pub(crate) mod params;
pub(crate) mod snapshot;
