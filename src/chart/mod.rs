pub(crate) mod heights;
pub(crate) mod network;
pub(crate) mod svg;
