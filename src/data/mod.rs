pub(crate) mod graph;
pub(crate) mod growth;
pub(crate) mod heights;
pub(crate) mod layout;
pub(crate) mod network;
pub(crate) mod normalize;
pub(crate) mod table;
